use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("Please enter valid numbers in both fields.")]
    InvalidNumber(String),

    #[error("Cannot divide by zero!")]
    DivideByZero,

    #[error("unknown operation '{0}' (use + - * / or add, subtract, multiply, divide)")]
    UnknownOperation(String),

    #[error("Please enter a valid integer for the password length.")]
    LengthNotInteger(String),

    #[error("Password length must be a positive integer.")]
    InvalidLength(i64),

    #[error("unknown move '{0}' (use rock, paper or scissors)")]
    UnknownMove(String),
}
