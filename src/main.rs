use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use resource_planning_report::ingestion::{IngestionOptions, TracingObserver};
use resource_planning_report::report::{self, ReportPlan};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let plan = ReportPlan::resource_planning();
    let options = IngestionOptions {
        observer: Some(Arc::new(TracingObserver)),
        ..Default::default()
    };
    info!(files = plan.files.len(), "starting report");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::generate(&plan, &options, &mut out).context("resource planning report failed")?;

    info!("report complete");
    Ok(())
}
