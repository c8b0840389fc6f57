use lerpcalc_data::{InterpolationRequest, InterpolationResult};

use crate::error::Result;
use crate::fields::RawFields;
use crate::format::NumberFormat;
use crate::interp;
use crate::validate::{self, ValidationOutcome};

/// The main interface to the interpolation calculator.
///
/// Holds no state beyond its display settings, so it is cheap to create and
/// safe to share between callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Calculator {
    format: NumberFormat,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: NumberFormat) -> Self {
        Calculator { format }
    }

    pub fn number_format(&self) -> NumberFormat {
        self.format
    }

    pub fn validate(&self, fields: &RawFields<'_>) -> ValidationOutcome {
        validate::validate(fields)
    }

    pub fn compute(&self, request: &InterpolationRequest) -> Result<InterpolationResult> {
        interp::compute(request)
    }

    /// Validate the raw fields and, if they pass, compute the result.
    pub fn calculate(&self, fields: &RawFields<'_>) -> Result<InterpolationResult> {
        let request = self.validate(fields).into_result()?;
        self.compute(&request)
    }
}
