use anyhow::Result;
use clap::{Parser, Subcommand};
use deskkit_tools::parse_length;

mod config;
mod contacts_cmd;
mod prompt;
mod state;
mod todo_cmd;
mod todo_tui;
mod tools_cmd;

#[derive(Parser, Debug)]
#[command(
    name = "deskkit",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("DESKKIT_BUILD_SHA"), ")"),
    about = "Small desktop utilities: to-do list, contact book, calculator, password generator, RPS"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Menu-driven to-do list (todo.json in the current directory)
    Todo,

    /// Full-screen to-do list (todo_gui.json in the current directory)
    TodoTui,

    /// Menu-driven contact book (contacts.json in the current directory)
    Contacts,

    /// Four-function calculator: deskkit calc 7 / 2
    Calc {
        #[arg(allow_negative_numbers = true)]
        lhs: String,

        /// + - * / (or add, subtract, multiply, divide)
        op: String,

        #[arg(allow_negative_numbers = true)]
        rhs: String,
    },

    /// Generate random passwords from letters, digits and punctuation
    Password {
        /// Password length (default: config [password].default_length)
        #[arg(long, short = 'l', allow_negative_numbers = true)]
        length: Option<String>,

        /// How many passwords to print
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Play Rock-Paper-Scissors against the computer
    Rps,

    /// Settings in ~/.deskkit/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config file if none exists
    Init,

    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Todo => {
            let cfg = config::load_config_or_default();
            todo_cmd::run(&cfg)?;
        }

        Command::TodoTui => {
            todo_tui::run()?;
        }

        Command::Contacts => {
            let cfg = config::load_config_or_default();
            contacts_cmd::run(&cfg)?;
        }

        Command::Calc { lhs, op, rhs } => {
            tools_cmd::calc(&lhs, &op, &rhs)?;
        }

        Command::Password { length, count } => {
            let length = match length {
                Some(raw) => parse_length(&raw)?,
                None => config::load_config_or_default().password.default_length,
            };
            tools_cmd::password(length, count)?;
        }

        Command::Rps => {
            tools_cmd::rps()?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn calc_accepts_negative_operands() {
        let cli = Cli::try_parse_from(["deskkit", "calc", "-3", "*", "2"]).unwrap();
        match cli.command {
            Command::Calc { lhs, op, rhs } => {
                assert_eq!((lhs.as_str(), op.as_str(), rhs.as_str()), ("-3", "*", "2"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn password_length_is_optional() {
        let cli = Cli::try_parse_from(["deskkit", "password"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Password { length: None, count: 1 }
        ));
    }
}
