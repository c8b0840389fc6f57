use lerpcalc::{
    Calculator, Field, FieldState, InvalidReason, RawFields, ValidationOutcome, check_field,
    validate,
};

const VALID: [&str; 5] = ["0", "0", "10", "100", "5"];

fn with_field(field: Field, raw: &'static str) -> RawFields<'static> {
    let mut values = VALID;
    let idx = Field::ALL.iter().position(|&f| f == field).unwrap();
    values[idx] = raw;
    let [x1, y1, x2, y2, x] = values;
    RawFields::new(x1, y1, x2, y2, x)
}

#[test]
fn test_valid_input() {
    let [x1, y1, x2, y2, x] = VALID;
    let outcome = validate(&RawFields::new(x1, y1, x2, y2, x));
    assert!(outcome.is_valid());
    assert!(outcome.can_calculate());
    assert_eq!(outcome.reason(), None);
    assert_eq!(outcome.inline_message(), None);
}

#[test]
fn test_any_single_bad_field_is_rejected() {
    for field in Field::ALL {
        for raw in ["", "   ", "abc", "1.2.3", "5px", "NaN", "Infinity", "-inf", "1e400"] {
            let outcome = validate(&with_field(field, raw));
            assert_eq!(
                outcome.reason(),
                Some(InvalidReason::MissingOrNonNumeric),
                "{field} = {raw:?}"
            );
        }
    }
}

#[test]
fn test_degenerate_regardless_of_other_values() {
    for (y1, y2, x) in [("5", "10", "3"), ("0", "0", "0"), ("-7.5", "1e6", "-1")] {
        let outcome = validate(&RawFields::new("1", y1, "1", y2, x));
        assert_eq!(outcome.reason(), Some(InvalidReason::DegenerateXs));
        assert!(!outcome.can_calculate());
    }

    // same value, different spelling
    let outcome = validate(&RawFields::new("2", "0", "2.000", "1", "1"));
    assert_eq!(outcome.reason(), Some(InvalidReason::DegenerateXs));
}

#[test]
fn test_degenerate_scenario_never_computes() {
    let calc = Calculator::new();
    let outcome = calc.validate(&RawFields::new("1", "5", "1", "10", "42"));
    match outcome {
        ValidationOutcome::Invalid { reason } => assert_eq!(reason, InvalidReason::DegenerateXs),
        ValidationOutcome::Valid(_) => panic!("degenerate input must not validate"),
    }
}

#[test]
fn test_messages() {
    let missing = validate(&with_field(Field::Y2, ""));
    assert_eq!(
        missing.into_result().unwrap_err().to_string(),
        "Please fill in all fields with valid numbers."
    );

    let degenerate = validate(&RawFields::new("3", "1", "3", "2", "0"));
    assert_eq!(
        degenerate.into_result().unwrap_err().to_string(),
        "x1 and x2 must be different values to avoid division by zero."
    );
}

#[test]
fn test_whitespace_is_trimmed() {
    let outcome = validate(&RawFields::new(" 0", "0 ", "\t10", "100\n", " 5 "));
    assert!(outcome.is_valid());
}

#[test]
fn test_field_states() {
    assert_eq!(check_field(""), FieldState::Empty);
    assert_eq!(check_field("-0.25"), FieldState::Number(-0.25));
    assert_eq!(check_field("1e2"), FieldState::Number(100.0));
    assert_eq!(check_field("12abc"), FieldState::Invalid);
    assert_eq!(check_field("inf"), FieldState::Invalid);
}
