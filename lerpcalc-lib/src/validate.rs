use lerpcalc_data::{InterpolationRequest, Point};

use crate::error::{LerpError, Result};
use crate::fields::{Field, RawFields, parse_field};

/// Why a set of raw fields cannot be calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    MissingOrNonNumeric,
    DegenerateXs,
}

impl From<InvalidReason> for LerpError {
    fn from(reason: InvalidReason) -> Self {
        match reason {
            InvalidReason::MissingOrNonNumeric => LerpError::MissingOrNonNumeric,
            InvalidReason::DegenerateXs => LerpError::DegenerateXs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationOutcome {
    /// All fields parsed and x1 differs from x2.
    Valid(InterpolationRequest),
    Invalid { reason: InvalidReason },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    /// Whether the calculate action should be enabled.
    pub fn can_calculate(&self) -> bool {
        self.is_valid()
    }

    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            ValidationOutcome::Valid(_) => None,
            ValidationOutcome::Invalid { reason } => Some(*reason),
        }
    }

    /// Message to show while the user is still typing.
    ///
    /// Incomplete input is not an error yet, so only `DegenerateXs` is reported.
    pub fn inline_message(&self) -> Option<String> {
        match self.reason() {
            Some(InvalidReason::DegenerateXs) => Some(LerpError::DegenerateXs.to_string()),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<InterpolationRequest> {
        match self {
            ValidationOutcome::Valid(request) => Ok(request),
            ValidationOutcome::Invalid { reason } => Err(reason.into()),
        }
    }
}

/// Check the five raw fields and build a request from them.
///
/// Never fails: the outcome says whether calculation may proceed.
pub fn validate(fields: &RawFields<'_>) -> ValidationOutcome {
    let parsed = Field::ALL.map(|field| parse_field(fields.get(field)));
    let [Some(x1), Some(y1), Some(x2), Some(y2), Some(x_target)] = parsed else {
        return ValidationOutcome::Invalid {
            reason: InvalidReason::MissingOrNonNumeric,
        };
    };

    if x1 == x2 {
        return ValidationOutcome::Invalid {
            reason: InvalidReason::DegenerateXs,
        };
    }

    ValidationOutcome::Valid(InterpolationRequest::new(
        Point::new(x1, y1),
        Point::new(x2, y2),
        x_target,
    ))
}
