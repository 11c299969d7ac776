//! Four-function calculator.

use std::fmt;
use std::str::FromStr;

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ToolError> {
        match self {
            Operation::Add => Ok(lhs + rhs),
            Operation::Subtract => Ok(lhs - rhs),
            Operation::Multiply => Ok(lhs * rhs),
            Operation::Divide if rhs == 0.0 => Err(ToolError::DivideByZero),
            Operation::Divide => Ok(lhs / rhs),
        }
    }
}

impl FromStr for Operation {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" | "plus" => Ok(Operation::Add),
            "-" | "subtract" | "minus" => Ok(Operation::Subtract),
            "*" | "x" | "multiply" | "times" => Ok(Operation::Multiply),
            "/" | "divide" => Ok(Operation::Divide),
            other => Err(ToolError::UnknownOperation(other.to_string())),
        }
    }
}

/// A finished calculation. Displays as `lhs op rhs = result` with the result
/// rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub lhs: f64,
    pub op: Operation,
    pub rhs: f64,
    pub result: f64,
}

impl Calculation {
    pub fn formatted_result(&self) -> String {
        format!("{:.2}", self.result)
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {:.2}",
            self.lhs,
            self.op.symbol(),
            self.rhs,
            self.result
        )
    }
}

pub fn parse_operand(raw: &str) -> Result<f64, ToolError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ToolError::InvalidNumber(raw.to_string()))
}

/// Parse both operands from text and apply `op`.
pub fn calculate(lhs: &str, op: Operation, rhs: &str) -> Result<Calculation, ToolError> {
    let lhs = parse_operand(lhs)?;
    let rhs = parse_operand(rhs)?;
    let result = op.apply(lhs, rhs)?;
    Ok(Calculation {
        lhs,
        op,
        rhs,
        result,
    })
}
