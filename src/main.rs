use std::env;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use facturador::config::Config;
use facturador::core::Result;
use facturador::generation::GenerationService;
use facturador::invoices::models::InvoiceData;
use facturador::output::OutputPathResolver;
use facturador::pdf::ChromiumPdfRenderer;
use facturador::quarters::Quarter;
use facturador::rendering::FragmentRenderer;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "facturador=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Run aborted");
        std::process::exit(e.exit_code());
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    let data = InvoiceData::load(&config.paths.data_path)?;
    data.validate()?;

    tracing::info!(
        tenants = data.tenants.len(),
        tax_rate = %data.tax_rate_percent,
        "Invoice data loaded"
    );

    let quarter = read_quarter()?;
    tracing::info!(
        quarter = quarter.number(),
        months = ?quarter.month_names(),
        "Quarter selected"
    );

    // A broken or missing template aborts here, before any PDF work
    let fragments = FragmentRenderer::from_dir(&config.paths.templates_dir);
    fragments.verify()?;

    let service = GenerationService::new(
        Arc::new(data),
        Arc::new(fragments),
        Arc::new(ChromiumPdfRenderer::new()),
        Arc::new(OutputPathResolver::new(&config.paths.output_dir)),
        config.rendering.max_concurrent,
        Duration::from_secs(config.rendering.pdf_timeout_secs),
    );

    let report = service.run(quarter).await;
    tracing::info!(
        generated = report.generated,
        failed = report.failed,
        output = %config.paths.output_dir.display(),
        "Done"
    );

    Ok(())
}

/// Read the quarter once at startup: first CLI argument if present,
/// interactive prompt otherwise
fn read_quarter() -> Result<Quarter> {
    if let Some(arg) = env::args().nth(1) {
        return Quarter::parse(&arg);
    }

    print!("Trimestre (1-4): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Quarter::parse(&line)
}
