pub mod data;
pub mod figures;

pub use data::{InvoiceData, Landlord, Property, Tenant};
pub use figures::InvoiceFigures;
