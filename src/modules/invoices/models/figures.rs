use rust_decimal::Decimal;
use serde::Serialize;

/// Financial figures for one (tenant, month) invoice
///
/// Ephemeral: computed, poured into a template view, then dropped. Never
/// persisted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceFigures {
    /// quantity × unit gross price
    pub gross_total: Decimal,

    /// gross total with the tax stripped out
    pub tax_base: Decimal,

    /// gross total minus tax base; the two always reconstruct the gross
    /// total exactly because both are rounded before the subtraction
    pub tax_amount: Decimal,

    /// tax base divided by quantity
    pub unit_net_price: Decimal,

    /// exactly `quantity` entries, each equal to `unit_net_price`.
    /// Their sum may undershoot `tax_base` by up to one cent; the
    /// per-unit rounding artifact is preserved on purpose.
    pub line_items: Vec<Decimal>,
}
