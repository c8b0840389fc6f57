pub mod calc;
pub mod constants;
pub mod error;
pub mod explain;
pub mod fields;
pub mod format;
pub mod interp;
pub mod validate;

pub use calc::Calculator;
pub use error::{LerpError, Result};
pub use explain::{RenderedStep, Report};
pub use fields::{Field, FieldState, RawFields, check_field};
pub use format::{NumberFormat, format_number};
pub use interp::compute;
pub use lerpcalc_data;
pub use lerpcalc_data::{ExplanationStep, InterpolationRequest, InterpolationResult, Point};
pub use validate::{InvalidReason, ValidationOutcome, validate};
