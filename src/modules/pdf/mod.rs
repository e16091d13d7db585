//! PDF emission behind a trait seam.
//!
//! The production backend drives a headless Chromium; a browser launch
//! per call is expensive and can fail transiently, so callers must treat
//! one failed render as recoverable and never let it abort siblings.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use std::path::Path;

use crate::core::{AppError, Result};

/// Converts a complete HTML document into a PDF file at the given path
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Render `html` and persist the PDF bytes at `output`. Must be
    /// awaited to completion before the backing resource is released.
    async fn render_pdf(&self, html: &str, output: &Path) -> Result<()>;
}

/// Headless-Chromium backend: A4 pages, background graphics on
pub struct ChromiumPdfRenderer;

impl ChromiumPdfRenderer {
    pub fn new() -> Self {
        Self
    }

    /// The whole browser round trip is blocking, so it runs on the
    /// blocking pool. The browser is dropped (and its process reaped)
    /// before this returns.
    fn print_blocking(html: &str, output: &Path) -> anyhow::Result<()> {
        let browser = Browser::new(LaunchOptions::default())?;
        let tab = browser.new_tab()?;

        let url = format!("data:text/html;base64,{}", STANDARD.encode(html));
        tab.navigate_to(&url)?.wait_until_navigated()?;

        let bytes = tab.print_to_pdf(Some(a4_options()))?;
        std::fs::write(output, bytes)?;

        Ok(())
    }
}

impl Default for ChromiumPdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PdfRenderer for ChromiumPdfRenderer {
    async fn render_pdf(&self, html: &str, output: &Path) -> Result<()> {
        let html = html.to_owned();
        let output = output.to_owned();

        tokio::task::spawn_blocking(move || Self::print_blocking(&html, &output))
            .await
            .map_err(|e| AppError::rendering(format!("render task failed: {}", e)))?
            .map_err(|e| AppError::rendering(e.to_string()))
    }
}

fn a4_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(true),
        // A4 in inches
        paper_width: Some(8.27),
        paper_height: Some(11.69),
        ..Default::default()
    }
}
