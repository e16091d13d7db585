//! Output path resolution: one directory per tenant, one file per month.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{AppError, Result};

/// Derives `<root>/<tenant>/<month>.pdf` destinations, creating the
/// tenant directory on demand
#[derive(Debug, Clone)]
pub struct OutputPathResolver {
    root: PathBuf,
}

impl OutputPathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the destination for one (tenant, month) pair.
    ///
    /// Tenant display names are sanitized before they become a directory
    /// component, so a hostile name cannot escape the output root.
    /// Directory creation is idempotent.
    pub fn resolve(&self, tenant_name: &str, month_number: u32) -> Result<PathBuf> {
        let dir_name = sanitize_filename::sanitize(tenant_name);
        if dir_name.is_empty() {
            return Err(AppError::configuration(format!(
                "tenant name {:?} leaves nothing usable as a directory name",
                tenant_name
            )));
        }

        let dir = self.root.join(dir_name);
        fs::create_dir_all(&dir)?;

        Ok(dir.join(format!("{}.pdf", month_number)))
    }
}
