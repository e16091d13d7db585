pub mod generation;
pub mod invoices;
pub mod output;
pub mod pdf;
pub mod quarters;
pub mod rendering;
