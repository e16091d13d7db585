// Invoice figure properties:
// - the rounding cascade reproduces the documented worked example exactly
// - line_items.len() == quantity, every element == unit_net_price
// - tax_base + tax_amount reconstructs gross_total to the cent
// - identical inputs yield identical figures (no nondeterminism)

use facturador::core::AppError;
use facturador::invoices::services::InvoiceCalculator;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn worked_example_three_units_at_500_with_21_percent() {
    let calculator = InvoiceCalculator::new(dec!(21));
    let figures = calculator.compute(dec!(3), dec!(500.00)).unwrap();

    assert_eq!(figures.gross_total, dec!(1500.00));
    assert_eq!(figures.tax_base, dec!(1239.67));
    assert_eq!(figures.tax_amount, dec!(260.33));
    assert_eq!(figures.unit_net_price, dec!(413.22));
    assert_eq!(figures.line_items, vec![dec!(413.22); 3]);

    // The documented one-cent artifact: independently rounded unit
    // prices sum to one cent below the tax base
    let sum: Decimal = figures.line_items.iter().copied().sum();
    assert_eq!(sum, dec!(1239.66));
    assert_eq!(figures.tax_base - sum, dec!(0.01));
}

#[test]
fn single_unit_has_no_artifact() {
    let calculator = InvoiceCalculator::new(dec!(21));
    let figures = calculator.compute(dec!(1), dec!(1250.50)).unwrap();

    assert_eq!(figures.gross_total, dec!(1250.50));
    assert_eq!(figures.tax_base + figures.tax_amount, figures.gross_total);
    assert_eq!(figures.line_items, vec![figures.tax_base]);
}

#[test]
fn zero_tax_rate_keeps_base_equal_to_gross() {
    let calculator = InvoiceCalculator::new(Decimal::ZERO);
    let figures = calculator.compute(dec!(2), dec!(300)).unwrap();

    assert_eq!(figures.gross_total, dec!(600.00));
    assert_eq!(figures.tax_base, dec!(600.00));
    assert_eq!(figures.tax_amount, Decimal::ZERO);
    assert_eq!(figures.unit_net_price, dec!(300.00));
}

#[test]
fn zero_price_is_accepted() {
    let calculator = InvoiceCalculator::new(dec!(21));
    let figures = calculator.compute(dec!(4), Decimal::ZERO).unwrap();

    assert_eq!(figures.gross_total, Decimal::ZERO);
    assert_eq!(figures.line_items, vec![Decimal::ZERO; 4]);
}

#[test]
fn rejects_invalid_quantities() {
    let calculator = InvoiceCalculator::new(dec!(21));

    for quantity in [dec!(0), dec!(-1), dec!(2.5), dec!(0.999)] {
        assert!(
            matches!(
                calculator.compute(quantity, dec!(100)),
                Err(AppError::InvalidQuantity(_))
            ),
            "quantity {} should be rejected",
            quantity
        );
    }
}

#[test]
fn rejects_negative_price() {
    let calculator = InvoiceCalculator::new(dec!(21));
    assert!(matches!(
        calculator.compute(dec!(1), dec!(-100)),
        Err(AppError::InvalidPrice(_))
    ));
}

proptest! {
    #[test]
    fn line_items_match_quantity_and_unit_price(
        quantity in 1u32..200,
        price_cents in 0i64..1_000_000,
        rate_percent in 0u8..=100u8
    ) {
        let calculator = InvoiceCalculator::new(Decimal::from(rate_percent));
        let figures = calculator
            .compute(Decimal::from(quantity), Decimal::new(price_cents, 2))
            .unwrap();

        prop_assert_eq!(figures.line_items.len(), quantity as usize);
        for item in &figures.line_items {
            prop_assert_eq!(*item, figures.unit_net_price);
        }
    }

    #[test]
    fn tax_components_reconstruct_gross_total(
        quantity in 1u32..200,
        price_cents in 0i64..1_000_000,
        rate_percent in 0u8..=100u8
    ) {
        let calculator = InvoiceCalculator::new(Decimal::from(rate_percent));
        let figures = calculator
            .compute(Decimal::from(quantity), Decimal::new(price_cents, 2))
            .unwrap();

        prop_assert_eq!(
            figures.tax_base + figures.tax_amount,
            figures.gross_total
        );
    }

    #[test]
    fn computation_is_deterministic(
        quantity in 1u32..200,
        price_cents in 0i64..1_000_000,
        rate_percent in 0u8..=100u8
    ) {
        let calculator = InvoiceCalculator::new(Decimal::from(rate_percent));
        let quantity = Decimal::from(quantity);
        let price = Decimal::new(price_cents, 2);

        let first = calculator.compute(quantity, price).unwrap();
        let second = calculator.compute(quantity, price).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn line_item_sum_is_within_one_cent_of_tax_base(
        quantity in 1u32..200,
        price_cents in 0i64..1_000_000,
        rate_percent in 0u8..=100u8
    ) {
        let calculator = InvoiceCalculator::new(Decimal::from(rate_percent));
        let figures = calculator
            .compute(Decimal::from(quantity), Decimal::new(price_cents, 2))
            .unwrap();

        let sum: Decimal = figures.line_items.iter().copied().sum();
        let drift = (figures.tax_base - sum).abs();
        // one cent per unit of independent rounding, bounded by quantity/2
        prop_assert!(
            drift <= Decimal::new(quantity as i64, 2),
            "drift {} too large for quantity {}",
            drift,
            quantity
        );
    }
}
