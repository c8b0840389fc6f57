/// Decimal places shown for non-integer values.
pub const DEFAULT_DECIMALS: usize = 6;

/// Number of stages in a worked solution.
pub const STEP_COUNT: usize = 8;

/// Fraction digits needed to print any f64 exactly.
pub const EXACT_FRACTION_DIGITS: usize = 1074;

/// Integers at or above this magnitude print in exponent form.
pub const EXPONENT_THRESHOLD: f64 = 1e21;
