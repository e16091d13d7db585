//! Quarter resolution: expands a calendar quarter (1-4) into its three
//! months, both as localized Spanish names and as 1-based month numbers.

use crate::core::{AppError, Result};

/// Spanish month names, indexed by month number minus one
pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// A validated calendar quarter
///
/// Construction is the only validation point: once a `Quarter` exists it
/// can be expanded into months without further error paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quarter(u8);

impl Quarter {
    /// Create a quarter, rejecting anything outside 1-4
    pub fn new(value: i64) -> Result<Self> {
        if !(1..=4).contains(&value) {
            return Err(AppError::InvalidQuarter(value.to_string()));
        }
        Ok(Quarter(value as u8))
    }

    /// Parse a quarter from raw user input
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| AppError::InvalidQuarter(trimmed.to_string()))?;
        Self::new(value)
    }

    /// The quarter number, 1-4
    pub fn number(self) -> u8 {
        self.0
    }

    /// 1-based month-of-year numbers for this quarter: `3q-2, 3q-1, 3q`
    pub fn month_numbers(self) -> [u32; 3] {
        let q = self.0 as u32;
        [3 * q - 2, 3 * q - 1, 3 * q]
    }

    /// Spanish names of the three months of this quarter
    pub fn month_names(self) -> [&'static str; 3] {
        self.month_numbers()
            .map(|month| MONTH_NAMES[(month - 1) as usize])
    }

    /// Month names zipped with their month numbers, in calendar order
    pub fn months(self) -> [(&'static str, u32); 3] {
        let names = self.month_names();
        let numbers = self.month_numbers();
        [
            (names[0], numbers[0]),
            (names[1], numbers[1]),
            (names[2], numbers[2]),
        ]
    }
}
