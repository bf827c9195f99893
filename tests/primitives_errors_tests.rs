#![cfg(feature = "dev")]

use snip_rs::internals::primitives::errors::SnipError;

#[test]
fn test_snip_error_display() {
    // EmptyInput
    let err = SnipError::EmptyInput;
    assert_eq!(format!("{}", err), "Input array is empty");

    // TooFewPoints
    let err = SnipError::TooFewPoints { got: 1, min: 2 };
    assert_eq!(format!("{}", err), "Too few points: got 1, need at least 2");

    // InvalidDdof
    let err = SnipError::InvalidDdof { ddof: 3, len: 3 };
    assert_eq!(
        format!("{}", err),
        "Invalid ddof: 3 (must be less than array length 3)"
    );

    // InvalidOrder
    let err = SnipError::InvalidOrder(0);
    assert_eq!(format!("{}", err), "Invalid window order: 0 (must be >= 1)");

    // EmptyOrderSequence
    let err = SnipError::EmptyOrderSequence;
    assert_eq!(format!("{}", err), "Order sequence is empty");

    // InvalidIterations
    let err = SnipError::InvalidIterations(0);
    assert_eq!(
        format!("{}", err),
        "Invalid iterations: 0 (must be in [1, 10000])"
    );

    // InvalidNumericValue
    let err = SnipError::InvalidNumericValue("y[3]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: y[3]=NaN");

    // DuplicateParameter
    let err = SnipError::DuplicateParameter {
        parameter: "iterations",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'iterations' was set multiple times"
    );
}

#[test]
fn test_snip_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&SnipError::EmptyInput);

    let boxed: Box<dyn std::error::Error> = Box::new(SnipError::EmptyOrderSequence);
    assert_eq!(boxed.to_string(), "Order sequence is empty");
}
