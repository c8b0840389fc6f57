use crate::calc::Calculator;
use crate::constants::{DEFAULT_DECIMALS, EXACT_FRACTION_DIGITS, EXPONENT_THRESHOLD};

/// Display rounding for every number shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimals: usize,
}

impl NumberFormat {
    pub const fn new(decimals: usize) -> Self {
        NumberFormat { decimals }
    }

    /// Render `n` for display.
    ///
    /// Integers print without a decimal point, switching to `1e+21` style
    /// from 1e21 up. Anything else is rounded to `decimals` places, ties away
    /// from zero, with trailing zeros stripped, so `0.500000` becomes `0.5`.
    /// Negative zero prints as `0`.
    pub fn format(&self, n: f64) -> String {
        if n.is_nan() {
            return "NaN".to_string();
        }
        if n.is_infinite() {
            return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
        }
        if n == 0.0 {
            return "0".to_string();
        }
        if n.fract() == 0.0 {
            return format_integer(n);
        }

        let fixed = self.round_half_away(n);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Fixed-point text for `n` with exact ties rounded away from zero.
    ///
    /// The formatter breaks ties to even, so an exact tie is nudged one ulp
    /// outward first. Nothing lies between that ulp and the next tie.
    fn round_half_away(&self, n: f64) -> String {
        let magnitude = n.abs();
        if !is_tie(magnitude, self.decimals) {
            return format!("{:.*}", self.decimals, n);
        }
        let outward = f64::from_bits(magnitude.to_bits() + 1).copysign(n);
        format!("{:.*}", self.decimals, outward)
    }
}

/// Whether `magnitude` sits exactly halfway between two `decimals`-place values.
fn is_tie(magnitude: f64, decimals: usize) -> bool {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
    let Some(dot) = exact.find('.') else {
        return false;
    };
    match exact.get(dot + 1 + decimals..) {
        Some(tail) => tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0'),
        None => false,
    }
}

fn format_integer(n: f64) -> String {
    if n.abs() < EXPONENT_THRESHOLD {
        return format!("{n}");
    }
    let sci = format!("{n:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::new(DEFAULT_DECIMALS)
    }
}

/// Format with the default six-decimal rounding.
pub fn format_number(n: f64) -> String {
    NumberFormat::default().format(n)
}

impl Calculator {
    /// Format a value with this calculator's rounding.
    pub fn format_number(&self, n: f64) -> String {
        self.number_format().format(n)
    }
}
