// View objects handed to the four leaf templates. All of them are plain
// `Serialize` structs; minijinja escapes their scalar fields because the
// templates carry an `.html` name.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::modules::invoices::models::{InvoiceFigures, Landlord, Property, Tenant};

/// View for the landlord block
#[derive(Serialize)]
pub struct LandlordView<'a> {
    pub landlord: &'a Landlord,
}

/// View for the date block: full invoice date and the short day/month
/// form used as the invoice-number stem
#[derive(Serialize)]
pub struct DateView {
    pub invoice_date: String,
    pub invoice_number_date: String,
}

impl DateView {
    /// Dates for an invoice issued on the first day of the given month
    pub fn for_month(year: i32, month: u32) -> Self {
        Self {
            invoice_date: format!("01/{:02}/{}", month, year),
            invoice_number_date: format!("01/{:02}", month),
        }
    }
}

/// View for the tenant block; financial fields are stripped, only the
/// display name and the opaque attributes are forwarded
#[derive(Serialize)]
pub struct TenantView<'a> {
    pub tenant: TenantProfile<'a>,
}

#[derive(Serialize)]
pub struct TenantProfile<'a> {
    pub name: &'a str,

    #[serde(flatten)]
    pub extra: &'a serde_json::Map<String, Value>,
}

impl<'a> TenantView<'a> {
    pub fn new(tenant: &'a Tenant) -> Self {
        Self {
            tenant: TenantProfile {
                name: &tenant.name,
                extra: &tenant.extra,
            },
        }
    }
}

/// View for the concepts (line items) block
#[derive(Serialize)]
pub struct ConceptsView<'a> {
    pub property: &'a Property,
    pub tax_rate_percent: Decimal,
    pub month: &'a str,
    pub gross_total: Decimal,
    pub tax_base: Decimal,
    pub tax_amount: Decimal,
    pub unit_net_price: Decimal,
    pub line_items: &'a [Decimal],
}

impl<'a> ConceptsView<'a> {
    pub fn new(
        property: &'a Property,
        tax_rate_percent: Decimal,
        month: &'a str,
        figures: &'a InvoiceFigures,
    ) -> Self {
        Self {
            property,
            tax_rate_percent,
            month,
            gross_total: figures.gross_total,
            tax_base: figures.tax_base,
            tax_amount: figures.tax_amount,
            unit_net_price: figures.unit_net_price,
            line_items: &figures.line_items,
        }
    }
}

/// View for the base layout; `body` is already-rendered trusted HTML and
/// the template must embed it through `|safe`
#[derive(Serialize)]
pub struct BaseView {
    pub body: String,
}
