use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::core::{round2, AppError, Result};
use crate::modules::invoices::models::InvoiceFigures;

/// Computes the financial figures of a single invoice.
///
/// The tax rate is fixed at construction and shared by every invoice of a
/// run. Each intermediate result is rounded to two decimals (half-up)
/// before it feeds the next step; the order of the cascade is part of the
/// contract:
///
/// 1. `gross_total   = round2(quantity × unit_gross_price)`
/// 2. `tax_base      = round2(gross_total / (1 + rate/100))`
/// 3. `tax_amount    = round2(gross_total - tax_base)`
/// 4. `unit_net_price = round2(tax_base / quantity)`
/// 5. `line_items    = quantity copies of unit_net_price`
pub struct InvoiceCalculator {
    tax_rate_percent: Decimal,
}

impl InvoiceCalculator {
    pub fn new(tax_rate_percent: Decimal) -> Self {
        Self { tax_rate_percent }
    }

    /// Compute the figures for one tenant and one month
    ///
    /// # Arguments
    /// * `quantity` - Must be a positive whole number
    /// * `unit_gross_price` - Gross price per unit, must not be negative
    pub fn compute(
        &self,
        quantity: Decimal,
        unit_gross_price: Decimal,
    ) -> Result<InvoiceFigures> {
        Self::validate_quantity(quantity)?;
        Self::validate_price(unit_gross_price)?;

        let gross_total = round2(quantity * unit_gross_price);

        let divisor = Decimal::ONE + self.tax_rate_percent / Decimal::ONE_HUNDRED;
        let tax_base = round2(gross_total / divisor);

        // Subtracting two already-rounded values keeps
        // tax_base + tax_amount == gross_total exact to the cent
        let tax_amount = round2(gross_total - tax_base);

        let unit_net_price = round2(tax_base / quantity);

        let count = quantity
            .to_u64()
            .ok_or(AppError::InvalidQuantity(quantity))? as usize;

        Ok(InvoiceFigures {
            gross_total,
            tax_base,
            tax_amount,
            unit_net_price,
            line_items: vec![unit_net_price; count],
        })
    }

    /// Quantity drives the line-item expansion and a division, so it must
    /// be a whole number greater than zero
    fn validate_quantity(quantity: Decimal) -> Result<()> {
        if quantity <= Decimal::ZERO || !quantity.fract().is_zero() {
            return Err(AppError::InvalidQuantity(quantity));
        }

        Ok(())
    }

    /// Zero is accepted; only negative prices are rejected
    fn validate_price(unit_gross_price: Decimal) -> Result<()> {
        if unit_gross_price < Decimal::ZERO {
            return Err(AppError::InvalidPrice(unit_gross_price));
        }

        Ok(())
    }
}
