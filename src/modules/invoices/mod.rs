//! Invoice data model and financial computation

pub mod models;
pub mod services;

pub use models::{InvoiceData, InvoiceFigures, Landlord, Property, Tenant};
pub use services::InvoiceCalculator;
