#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A point on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Two reference points and the x-coordinate to evaluate the line at.
///
/// `p1.x` must differ from `p2.x`; a request built from validated input
/// always satisfies this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterpolationRequest {
    pub p1: Point,
    pub p2: Point,
    pub x_target: f64,
}

impl InterpolationRequest {
    pub const fn new(p1: Point, p2: Point, x_target: f64) -> Self {
        InterpolationRequest { p1, p2, x_target }
    }

    /// The five inputs in field order: x1, y1, x2, y2, xTarget.
    pub const fn values(&self) -> [f64; 5] {
        [self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.x_target]
    }
}

/// One stage of the worked solution, in the order it is presented.
///
/// Each variant carries the full-precision values it shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExplanationStep {
    Given {
        p1: Point,
        p2: Point,
        x_target: f64,
    },
    Formula,
    Substitution {
        p1: Point,
        p2: Point,
        x_target: f64,
    },
    Differences {
        p1: Point,
        p2: Point,
        x_target: f64,
        x_diff: f64,
        y_diff: f64,
        x_span: f64,
    },
    Slope {
        y_diff: f64,
        x_span: f64,
        slope: f64,
    },
    Apply {
        y1: f64,
        x_diff: f64,
        slope: f64,
        /// `x_diff * slope`, from unrounded operands.
        increment: f64,
    },
    FinalResult {
        value: f64,
    },
    Verification {
        point: Point,
        p1: Point,
        p2: Point,
    },
}

/// Outcome of a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolationResult {
    pub value: f64,
    pub slope: f64,
    pub steps: Vec<ExplanationStep>,
}
