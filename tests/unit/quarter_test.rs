// Quarter resolution properties:
// - every valid quarter expands to exactly 3 strictly increasing months
//   matching 3q-2, 3q-1, 3q
// - everything outside 1-4 (including non-numeric input) is rejected
//   before any month is produced

use facturador::core::AppError;
use facturador::quarters::Quarter;
use proptest::prelude::*;

#[test]
fn resolves_all_quarters_to_formula_months() {
    for q in 1..=4u32 {
        let quarter = Quarter::new(q as i64).unwrap();
        assert_eq!(quarter.month_numbers(), [3 * q - 2, 3 * q - 1, 3 * q]);
    }
}

#[test]
fn month_numbers_are_strictly_increasing() {
    for q in 1..=4 {
        let [a, b, c] = Quarter::new(q).unwrap().month_numbers();
        assert!(a < b && b < c);
    }
}

#[test]
fn first_quarter_names() {
    let quarter = Quarter::new(1).unwrap();
    assert_eq!(quarter.month_names(), ["Enero", "Febrero", "Marzo"]);
    assert_eq!(quarter.month_numbers(), [1, 2, 3]);
}

#[test]
fn fourth_quarter_names() {
    let quarter = Quarter::new(4).unwrap();
    assert_eq!(
        quarter.month_names(),
        ["Octubre", "Noviembre", "Diciembre"]
    );
    assert_eq!(quarter.month_numbers(), [10, 11, 12]);
}

#[test]
fn months_zips_names_with_numbers() {
    let months = Quarter::new(3).unwrap().months();
    assert_eq!(
        months,
        [("Julio", 7), ("Agosto", 8), ("Septiembre", 9)]
    );
}

#[test]
fn rejects_zero_five_and_negative() {
    for value in [0i64, 5, -1, -4, 42] {
        assert!(
            matches!(Quarter::new(value), Err(AppError::InvalidQuarter(_))),
            "quarter {} should be rejected",
            value
        );
    }
}

#[test]
fn rejects_non_numeric_input() {
    for input in ["", "  ", "abc", "1.5", "two"] {
        assert!(
            matches!(Quarter::parse(input), Err(AppError::InvalidQuarter(_))),
            "input {:?} should be rejected",
            input
        );
    }
}

#[test]
fn parses_valid_input_with_whitespace() {
    assert_eq!(Quarter::parse("2\n").unwrap().number(), 2);
    assert_eq!(Quarter::parse(" 4 ").unwrap().number(), 4);
}

proptest! {
    #[test]
    fn any_integer_outside_range_is_rejected(
        value in prop_oneof![i64::MIN..=0i64, 5i64..=i64::MAX]
    ) {
        prop_assert!(matches!(
            Quarter::new(value),
            Err(AppError::InvalidQuarter(_))
        ));
    }

    #[test]
    fn any_integer_in_range_is_accepted(value in 1i64..=4) {
        let quarter = Quarter::new(value).unwrap();
        prop_assert_eq!(quarter.number() as i64, value);
        prop_assert_eq!(quarter.month_numbers().len(), 3);
    }
}
