use anyhow::Result;
use deskkit_tools::{Move, Operation, Scoreboard, calculate, generate_password};

use crate::prompt::prompt;

pub fn calc(lhs: &str, op: &str, rhs: &str) -> Result<()> {
    let op: Operation = op.parse()?;
    let c = calculate(lhs, op, rhs)?;
    println!("{}", c.formatted_result());
    log::debug!("{c}");
    Ok(())
}

pub fn password(length: usize, count: usize) -> Result<()> {
    let mut rng = rand::rng();
    for _ in 0..count {
        println!("{}", generate_password(length, &mut rng)?);
    }
    Ok(())
}

pub fn rps() -> Result<()> {
    let mut rng = rand::rng();
    let mut board = Scoreboard::new();

    println!("Rock-Paper-Scissors");
    println!("Type rock, paper or scissors. 'reset' starts over, 'quit' exits.\n");

    loop {
        let input = prompt("Choose your move")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "reset" | "again" => {
                board.reset();
                println!("Scores reset.\n");
                continue;
            }
            _ => {}
        }

        let user: Move = match input.parse() {
            Ok(m) => m,
            Err(e) => {
                println!("{e}\n");
                continue;
            }
        };

        let round = board.play(user, &mut rng);
        println!("Your choice: {}   Computer's choice: {}", round.user, round.computer);
        println!("Result: {}", round.outcome.message());
        println!(
            "Your Score: {}   Computer Score: {}\n",
            board.user, board.computer
        );
    }

    println!(
        "Final score: you {} - computer {}",
        board.user, board.computer
    );
    Ok(())
}
