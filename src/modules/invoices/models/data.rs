// Static run configuration: one landlord, one property, one tax rate and a
// list of tenants, loaded once from a JSON file and shared read-only by
// every invoice generated in the run.
//
// The computation only reads `quantity` and `unit_price` (and `name` for
// output paths); everything else is an opaque attribute bag forwarded to
// the templates, so unknown JSON keys are preserved via flattened maps.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::core::{AppError, Result};

/// Landlord shared by every invoice in a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Landlord {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Template-only fields, forwarded verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The rented unit, forwarded verbatim to the concepts block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One tenant: a display name, the two financial fields the computation
/// reads, and an opaque bag for the tenant-block template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub name: String,

    /// Kept as `Decimal` so a fractional or non-positive value fails that
    /// tenant's invoices at computation time instead of the whole file load
    pub quantity: Decimal,

    /// Gross price per unit
    pub unit_price: Decimal,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Everything the run needs, immutable after load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceData {
    pub landlord: Landlord,
    pub property: Property,
    pub tax_rate_percent: Decimal,
    pub tenants: Vec<Tenant>,
}

impl InvoiceData {
    /// Load and parse the data file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::configuration(format!(
                "Cannot read data file {}: {}",
                path.display(),
                e
            ))
        })?;
        let data: InvoiceData = serde_json::from_str(&raw)?;
        Ok(data)
    }

    /// Validate run-level invariants
    ///
    /// Per-tenant financial fields are deliberately not checked here; they
    /// fail the affected invoice during computation.
    pub fn validate(&self) -> Result<()> {
        if self.tax_rate_percent < Decimal::ZERO {
            return Err(AppError::configuration(
                "tax_rate_percent must not be negative",
            ));
        }

        if self.tenants.iter().any(|t| t.name.trim().is_empty()) {
            return Err(AppError::configuration(
                "every tenant needs a non-empty name",
            ));
        }

        Ok(())
    }
}
