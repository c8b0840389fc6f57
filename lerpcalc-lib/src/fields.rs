use std::fmt;

/// One of the five calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    X1,
    Y1,
    X2,
    Y2,
    XTarget,
}

impl Field {
    /// All fields in input order.
    pub const ALL: [Field; 5] = [Field::X1, Field::Y1, Field::X2, Field::Y2, Field::XTarget];

    pub fn name(self) -> &'static str {
        match self {
            Field::X1 => "x1",
            Field::Y1 => "y1",
            Field::X2 => "x2",
            Field::Y2 => "y2",
            Field::XTarget => "xTarget",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five inputs exactly as the user typed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawFields<'a> {
    pub x1: &'a str,
    pub y1: &'a str,
    pub x2: &'a str,
    pub y2: &'a str,
    pub x_target: &'a str,
}

impl<'a> RawFields<'a> {
    pub fn new(x1: &'a str, y1: &'a str, x2: &'a str, y2: &'a str, x_target: &'a str) -> Self {
        RawFields {
            x1,
            y1,
            x2,
            y2,
            x_target,
        }
    }

    pub fn get(&self, field: Field) -> &'a str {
        match field {
            Field::X1 => self.x1,
            Field::Y1 => self.y1,
            Field::X2 => self.x2,
            Field::Y2 => self.y2,
            Field::XTarget => self.x_target,
        }
    }
}

/// Keystroke-time state of a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldState {
    Empty,
    Number(f64),
    Invalid,
}

impl FieldState {
    /// Whether the field should be highlighted as erroneous.
    pub fn is_invalid(self) -> bool {
        matches!(self, FieldState::Invalid)
    }
}

/// Parse a field as a finite number.
///
/// Surrounding whitespace is ignored. The remainder must be a complete
/// decimal literal; `inf`, `NaN` and overflowing literals are rejected.
pub fn parse_field(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Classify a field for inline highlighting. Blank fields are neutral.
pub fn check_field(raw: &str) -> FieldState {
    if raw.trim().is_empty() {
        return FieldState::Empty;
    }
    match parse_field(raw) {
        Some(v) => FieldState::Number(v),
        None => FieldState::Invalid,
    }
}
