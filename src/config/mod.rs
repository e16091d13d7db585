use crate::core::{AppError, Result};
use std::env;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: PathsConfig,
    pub rendering: RenderingConfig,
}

/// Input and output locations
#[derive(Debug, Clone)]
pub struct PathsConfig {
    /// JSON file with landlord, property, tax rate and tenant data
    pub data_path: PathBuf,
    /// Directory holding the five HTML templates
    pub templates_dir: PathBuf,
    /// Root directory for generated PDFs
    pub output_dir: PathBuf,
}

/// PDF rendering settings
#[derive(Debug, Clone)]
pub struct RenderingConfig {
    /// Maximum tenant generations in flight within one month
    pub max_concurrent: usize,
    /// Deadline for a single PDF render, in seconds
    pub pdf_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            paths: PathsConfig {
                data_path: env::var("DATA_PATH")
                    .unwrap_or_else(|_| "data.json".to_string())
                    .into(),
                templates_dir: env::var("TEMPLATES_DIR")
                    .unwrap_or_else(|_| "templates".to_string())
                    .into(),
                output_dir: env::var("OUTPUT_DIR")
                    .unwrap_or_else(|_| "dist".to_string())
                    .into(),
            },
            rendering: RenderingConfig {
                max_concurrent: env::var("MAX_CONCURRENT_RENDERS")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::configuration("Invalid MAX_CONCURRENT_RENDERS")
                    })?,
                pdf_timeout_secs: env::var("PDF_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()
                    .map_err(|_| AppError::configuration("Invalid PDF_TIMEOUT_SECS"))?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.rendering.max_concurrent == 0 {
            return Err(AppError::configuration(
                "MAX_CONCURRENT_RENDERS must be greater than 0",
            ));
        }

        if self.rendering.pdf_timeout_secs == 0 {
            return Err(AppError::configuration(
                "PDF_TIMEOUT_SECS must be greater than 0",
            ));
        }

        Ok(())
    }
}
