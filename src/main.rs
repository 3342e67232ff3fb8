mod cli;
mod config;
mod error;
mod export;
mod model;
mod providers;
mod util;

use std::env;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("AZURE_EXPORT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("azure_export=info,warn"));

    let format = env::var("AZURE_EXPORT_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());
    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = cli::parse_export_args(&args)?;
    if args.help {
        cli::print_help();
        return Ok(());
    }

    init_tracing();

    let config = config::load_config(&args)?;
    let provider = providers::create_provider(&config);

    let summary = match export::run_export(provider.as_ref(), &config.items, &config.output).await
    {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!(item_id = ?e.item_id(), error = %e, "export aborted");
            return Err(e.into());
        }
    };
    println!(
        "Exported {} work items ({} with parent) to {}",
        summary.exported,
        summary.with_parent,
        summary.path.display()
    );

    Ok(())
}
