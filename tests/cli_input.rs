use hybrid_fleet_optimizer::ui_cli::{format_currency, parse_decimal};

#[test]
fn comma_and_dot_are_both_decimal_separators() {
    assert_eq!(parse_decimal("3.14"), Some(3.14));
    assert_eq!(parse_decimal("3,14"), Some(3.14));
    assert_eq!(parse_decimal("  42 \n"), Some(42.0));
    assert_eq!(parse_decimal("-5,5"), Some(-5.5));
}

#[test]
fn non_numeric_input_is_rejected() {
    assert_eq!(parse_decimal("abc"), None);
    assert_eq!(parse_decimal(""), None);
    assert_eq!(parse_decimal("1,2,3"), None);
}

#[test]
fn currency_is_formatted_with_two_decimals() {
    assert_eq!(format_currency("₩", 1234.5), "₩ 1234.50");
    assert_eq!(format_currency("R$", 44290.752), "R$ 44290.75");
}
