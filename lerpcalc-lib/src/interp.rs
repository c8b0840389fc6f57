use lerpcalc_data::{ExplanationStep, InterpolationRequest, InterpolationResult, Point};

use crate::constants::STEP_COUNT;
use crate::error::{LerpError, Result};
use crate::fields::Field;

/// Two-point linear interpolation.
///
/// Evaluates the line through `p1` and `p2` at `x`. Values of `x` outside
/// the segment extrapolate along the same line.
pub fn lerp(p1: Point, p2: Point, x: f64) -> f64 {
    p1.y + (x - p1.x) * (p2.y - p1.y) / (p2.x - p1.x)
}

/// Slope of the line through `p1` and `p2`.
pub fn slope(p1: Point, p2: Point) -> f64 {
    (p2.y - p1.y) / (p2.x - p1.x)
}

/// Interpolate a validated request and derive its worked solution.
///
/// Guards its own precondition: a non-finite value gives
/// [`LerpError::InvalidInput`] and equal x-coordinates give
/// [`LerpError::DivisionByZero`].
pub fn compute(request: &InterpolationRequest) -> Result<InterpolationResult> {
    for (field, value) in Field::ALL.into_iter().zip(request.values()) {
        if !value.is_finite() {
            return Err(LerpError::InvalidInput { field, value });
        }
    }

    let InterpolationRequest { p1, p2, x_target } = *request;
    if p1.x == p2.x {
        return Err(LerpError::DivisionByZero { x: p1.x });
    }

    let value = lerp(p1, p2, x_target);
    let slope = slope(p1, p2);

    Ok(InterpolationResult {
        value,
        slope,
        steps: steps(request, value, slope),
    })
}

fn steps(request: &InterpolationRequest, value: f64, slope: f64) -> Vec<ExplanationStep> {
    let InterpolationRequest { p1, p2, x_target } = *request;
    let x_diff = x_target - p1.x;
    let y_diff = p2.y - p1.y;
    let x_span = p2.x - p1.x;

    let steps: [ExplanationStep; STEP_COUNT] = [
        ExplanationStep::Given { p1, p2, x_target },
        ExplanationStep::Formula,
        ExplanationStep::Substitution { p1, p2, x_target },
        ExplanationStep::Differences {
            p1,
            p2,
            x_target,
            x_diff,
            y_diff,
            x_span,
        },
        ExplanationStep::Slope {
            y_diff,
            x_span,
            slope,
        },
        ExplanationStep::Apply {
            y1: p1.y,
            x_diff,
            slope,
            increment: x_diff * slope,
        },
        ExplanationStep::FinalResult { value },
        ExplanationStep::Verification {
            point: Point::new(x_target, value),
            p1,
            p2,
        },
    ];
    steps.into()
}
