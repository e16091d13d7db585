use rust_decimal::Decimal;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Quarter selection outside 1-4; fatal to the whole run
    #[error("Invalid quarter '{0}': expected an integer between 1 and 4")]
    InvalidQuarter(String),

    /// Tenant quantity is not a positive integer; fatal to that invoice only
    #[error("Invalid quantity {0}: must be a positive whole number")]
    InvalidQuantity(Decimal),

    /// Tenant unit price is negative; fatal to that invoice only
    #[error("Invalid price {0}: must not be negative")]
    InvalidPrice(Decimal),

    /// Template loading or rendering errors
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// PDF rendering backend errors
    #[error("Rendering failed: {0}")]
    Rendering(String),

    /// PDF rendering exceeded the configured deadline
    #[error("Rendering timed out after {0}s")]
    RenderTimeout(u64),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit status for errors that abort the run.
    ///
    /// Per-invoice errors (quantity, price, template, rendering) are
    /// recovered at the point of use and normally never reach the exit
    /// path; they map to the generic failure code if they do.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidQuarter(_) => 2,
            _ => 1,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn rendering(msg: impl Into<String>) -> Self {
        AppError::Rendering(msg.into())
    }
}
