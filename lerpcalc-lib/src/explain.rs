//! Plain-text rendering of worked solutions.
//!
//! Steps stay tagged records until here; this module turns them into titled
//! lines of text and leaves markup to the caller. Numbers go through
//! [`NumberFormat`] only at this point, never before.

use lerpcalc_data::{ExplanationStep, InterpolationRequest, InterpolationResult, Point};
use serde::Serialize;

use crate::calc::Calculator;
use crate::format::NumberFormat;

pub const FORMULA: &str = "y = y₁ + (x - x₁) × (y₂ - y₁) / (x₂ - x₁)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedStep {
    pub title: String,
    pub lines: Vec<String>,
}

/// Everything the page shows after a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub value: f64,
    pub slope: f64,
    /// `y = <value>`
    pub headline: String,
    /// `At point (<x>, <value>)`
    pub coordinates: String,
    pub steps: Vec<RenderedStep>,
}

pub fn title(step: &ExplanationStep) -> &'static str {
    match step {
        ExplanationStep::Given { .. } => "Given Information",
        ExplanationStep::Formula => "Linear Interpolation Formula",
        ExplanationStep::Substitution { .. } => "Substitute the values",
        ExplanationStep::Differences { .. } => "Calculate the differences",
        ExplanationStep::Slope { .. } => "Calculate the slope",
        ExplanationStep::Apply { .. } => "Apply the formula",
        ExplanationStep::FinalResult { .. } => "Final Result",
        ExplanationStep::Verification { .. } => "Verification",
    }
}

pub fn render_step(step: &ExplanationStep, fmt: &NumberFormat) -> RenderedStep {
    let n = |v: f64| fmt.format(v);
    let pt = |p: Point| format!("({}, {})", n(p.x), n(p.y));

    let lines = match *step {
        ExplanationStep::Given { p1, p2, x_target } => vec![
            format!("Point 1: {}", pt(p1)),
            format!("Point 2: {}", pt(p2)),
            format!("Target x-value: {}", n(x_target)),
        ],
        ExplanationStep::Formula => vec![FORMULA.to_string()],
        ExplanationStep::Substitution { p1, p2, x_target } => vec![format!(
            "y = {} + ({} - {}) × ({} - {}) / ({} - {})",
            n(p1.y),
            n(x_target),
            n(p1.x),
            n(p2.y),
            n(p1.y),
            n(p2.x),
            n(p1.x)
        )],
        ExplanationStep::Differences {
            p1,
            p2,
            x_target,
            x_diff,
            y_diff,
            x_span,
        } => vec![
            format!("x - x₁ = {} - {} = {}", n(x_target), n(p1.x), n(x_diff)),
            format!("y₂ - y₁ = {} - {} = {}", n(p2.y), n(p1.y), n(y_diff)),
            format!("x₂ - x₁ = {} - {} = {}", n(p2.x), n(p1.x), n(x_span)),
        ],
        ExplanationStep::Slope {
            y_diff,
            x_span,
            slope,
        } => vec![format!(
            "Slope = (y₂ - y₁) / (x₂ - x₁) = {} / {} = {}",
            n(y_diff),
            n(x_span),
            n(slope)
        )],
        ExplanationStep::Apply {
            y1,
            x_diff,
            slope,
            increment,
        } => vec![
            format!("y = {} + {} × {}", n(y1), n(x_diff), n(slope)),
            format!("y = {} + {}", n(y1), n(increment)),
        ],
        ExplanationStep::FinalResult { value } => vec![format!("y = {}", n(value))],
        ExplanationStep::Verification { point, p1, p2 } => vec![format!(
            "The interpolated point {} lies on the line between {} and {}.",
            pt(point),
            pt(p1),
            pt(p2)
        )],
    };

    RenderedStep {
        title: title(step).to_string(),
        lines,
    }
}

impl Calculator {
    /// Render every step of a result, in order.
    pub fn explain(&self, result: &InterpolationResult) -> Vec<RenderedStep> {
        let fmt = self.number_format();
        result.steps.iter().map(|s| render_step(s, &fmt)).collect()
    }

    pub fn report(&self, request: &InterpolationRequest, result: &InterpolationResult) -> Report {
        let value = self.format_number(result.value);
        Report {
            value: result.value,
            slope: result.slope,
            headline: format!("y = {value}"),
            coordinates: format!(
                "At point ({}, {value})",
                self.format_number(request.x_target)
            ),
            steps: self.explain(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::compute;

    fn lines(step: &ExplanationStep) -> Vec<String> {
        render_step(step, &NumberFormat::default()).lines
    }

    #[test]
    fn test_given_lines() {
        let step = ExplanationStep::Given {
            p1: Point::new(0.0, 0.0),
            p2: Point::new(10.0, 100.0),
            x_target: 5.0,
        };
        assert_eq!(
            lines(&step),
            ["Point 1: (0, 0)", "Point 2: (10, 100)", "Target x-value: 5"]
        );
    }

    #[test]
    fn test_formula_is_symbolic() {
        assert_eq!(lines(&ExplanationStep::Formula), [FORMULA]);
    }

    #[test]
    fn test_apply_lines_round_for_display_only() {
        let step = ExplanationStep::Apply {
            y1: 1.0,
            x_diff: 2.0,
            slope: 1.0 / 3.0,
            increment: 2.0 / 3.0,
        };
        assert_eq!(
            lines(&step),
            ["y = 1 + 2 × 0.333333", "y = 1 + 0.666667"]
        );
    }

    #[test]
    fn test_report_summary() {
        let request = InterpolationRequest::new(Point::new(0.0, 0.0), Point::new(10.0, 100.0), 5.0);
        let result = compute(&request).unwrap();
        let report = Calculator::new().report(&request, &result);
        assert_eq!(report.headline, "y = 50");
        assert_eq!(report.coordinates, "At point (5, 50)");
        assert_eq!(report.steps.len(), 8);
        assert_eq!(report.steps[7].title, "Verification");
    }
}
