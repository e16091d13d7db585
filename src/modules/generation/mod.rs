//! Run orchestration: three sequential months, bounded-concurrency
//! tenant generation within each month, everything awaited before the
//! run reports completion.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Local};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{error, info};

use crate::core::{AppError, Result};
use crate::modules::invoices::models::InvoiceData;
use crate::modules::invoices::services::InvoiceCalculator;
use crate::modules::output::OutputPathResolver;
use crate::modules::pdf::PdfRenderer;
use crate::modules::quarters::Quarter;
use crate::modules::rendering::composer::compose;
use crate::modules::rendering::views::{ConceptsView, DateView, LandlordView, TenantView};
use crate::modules::rendering::FragmentRenderer;

/// Outcome of a full quarter run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub generated: usize,
    pub failed: usize,
}

/// Service driving invoice generation for a whole quarter
pub struct GenerationService {
    data: Arc<InvoiceData>,
    fragments: Arc<FragmentRenderer>,
    renderer: Arc<dyn PdfRenderer>,
    output: Arc<OutputPathResolver>,
    max_concurrent: usize,
    pdf_timeout: Duration,
}

impl GenerationService {
    pub fn new(
        data: Arc<InvoiceData>,
        fragments: Arc<FragmentRenderer>,
        renderer: Arc<dyn PdfRenderer>,
        output: Arc<OutputPathResolver>,
        max_concurrent: usize,
        pdf_timeout: Duration,
    ) -> Self {
        Self {
            data,
            fragments,
            renderer,
            output,
            max_concurrent,
            pdf_timeout,
        }
    }

    /// Generate one invoice per tenant per month of the quarter.
    ///
    /// Months run sequentially; tenants within a month run concurrently
    /// up to the configured limit and are all awaited before the next
    /// month starts. Per-invoice failures are logged and counted, never
    /// propagated past their (tenant, month) unit of work.
    pub async fn run(&self, quarter: Quarter) -> RunReport {
        let year = Local::now().year();
        let mut report = RunReport::default();

        for (month_name, month_number) in quarter.months() {
            info!(month = month_name, "Generating invoices");

            let month_report = self.run_month(month_name, month_number, year).await;
            report.generated += month_report.generated;
            report.failed += month_report.failed;
        }

        info!(
            quarter = quarter.number(),
            generated = report.generated,
            failed = report.failed,
            "Quarter run finished"
        );

        report
    }

    /// One month: a bounded task set with exactly one task per tenant,
    /// joined to completion
    async fn run_month(
        &self,
        month_name: &'static str,
        month_number: u32,
        year: i32,
    ) -> RunReport {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks: JoinSet<(String, Result<()>)> = JoinSet::new();

        for tenant_index in 0..self.data.tenants.len() {
            let data = Arc::clone(&self.data);
            let fragments = Arc::clone(&self.fragments);
            let renderer = Arc::clone(&self.renderer);
            let output = Arc::clone(&self.output);
            let semaphore = Arc::clone(&semaphore);
            let pdf_timeout = self.pdf_timeout;

            tasks.spawn(async move {
                let tenant_name = data.tenants[tenant_index].name.clone();

                let result = match semaphore.acquire_owned().await {
                    Ok(_permit) => {
                        generate_one(
                            data,
                            tenant_index,
                            month_name,
                            month_number,
                            year,
                            fragments,
                            renderer,
                            output,
                            pdf_timeout,
                        )
                        .await
                    }
                    Err(_) => Err(AppError::rendering("render slot unavailable")),
                };

                (tenant_name, result)
            });
        }

        let mut report = RunReport::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((tenant, Ok(()))) => {
                    info!(tenant = %tenant, month = month_number, "Invoice written");
                    report.generated += 1;
                }
                Ok((tenant, Err(e))) => {
                    error!(
                        tenant = %tenant,
                        month = month_number,
                        error = %e,
                        "Invoice generation failed"
                    );
                    report.failed += 1;
                }
                Err(e) => {
                    error!(month = month_number, error = %e, "Invoice task aborted");
                    report.failed += 1;
                }
            }
        }

        report
    }
}

/// The full pipeline for a single (tenant, month) pair: figures,
/// fragments, composition, destination, PDF
#[allow(clippy::too_many_arguments)]
async fn generate_one(
    data: Arc<InvoiceData>,
    tenant_index: usize,
    month_name: &'static str,
    month_number: u32,
    year: i32,
    fragments: Arc<FragmentRenderer>,
    renderer: Arc<dyn PdfRenderer>,
    output: Arc<OutputPathResolver>,
    pdf_timeout: Duration,
) -> Result<()> {
    let tenant = &data.tenants[tenant_index];

    let calculator = InvoiceCalculator::new(data.tax_rate_percent);
    let figures = calculator.compute(tenant.quantity, tenant.unit_price)?;

    // Fixed fragment order: landlord, dates, tenant, concepts
    let rendered = [
        fragments.render_landlord(&LandlordView {
            landlord: &data.landlord,
        })?,
        fragments.render_dates(&DateView::for_month(year, month_number))?,
        fragments.render_tenant(&TenantView::new(tenant))?,
        fragments.render_concepts(&ConceptsView::new(
            &data.property,
            data.tax_rate_percent,
            month_name,
            &figures,
        ))?,
    ];

    let document = compose(&fragments, &rendered)?;
    let destination = output.resolve(&tenant.name, month_number)?;

    match timeout(pdf_timeout, renderer.render_pdf(&document, &destination)).await {
        Ok(result) => result,
        Err(_) => Err(AppError::RenderTimeout(pdf_timeout.as_secs())),
    }
}
