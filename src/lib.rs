//! Quarterly rent invoice generator
//!
//! Expands a selected calendar quarter into three months and writes one
//! PDF invoice per tenant per month, computed from a static JSON data
//! file and rendered through HTML templates.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::generation;
pub use modules::invoices;
pub use modules::output;
pub use modules::pdf;
pub use modules::quarters;
pub use modules::rendering;
