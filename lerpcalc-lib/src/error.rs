use std::fmt;

use crate::fields::Field;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LerpError {
    /// One or more fields are blank or do not hold a finite number.
    MissingOrNonNumeric,
    /// x1 equals x2, so the line through the points is vertical.
    DegenerateXs,
    /// A request reached `compute` with a non-finite value.
    InvalidInput { field: Field, value: f64 },
    /// A request reached `compute` with x1 equal to x2.
    DivisionByZero { x: f64 },
}

pub type Result<T> = std::result::Result<T, LerpError>;

impl fmt::Display for LerpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOrNonNumeric => write!(f, "Please fill in all fields with valid numbers."),
            Self::DegenerateXs => write!(
                f,
                "x1 and x2 must be different values to avoid division by zero."
            ),
            Self::InvalidInput { field, value } => {
                write!(f, "invalid input: {field} must be a finite number, got {value}")
            }
            Self::DivisionByZero { x } => {
                write!(f, "division by zero: x1 and x2 are both {x}")
            }
        }
    }
}

impl std::error::Error for LerpError {}
