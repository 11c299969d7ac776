//! deskkit-tools: the stateless utilities (calculator, password generator, RPS)

pub mod calculator;
pub mod error;
pub mod password;
pub mod rps;

pub use calculator::{Calculation, Operation, calculate, parse_operand};
pub use error::ToolError;
pub use password::{DEFAULT_LENGTH, PASSWORD_ALPHABET, generate_password, parse_length};
pub use rps::{Move, Outcome, Round, Scoreboard};
