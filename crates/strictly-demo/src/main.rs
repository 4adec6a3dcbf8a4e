//! strictly demo entry point.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p strictly-demo
//! ```

use anyhow::{Context, Result};
use strictly_kernel::{Checker, CheckerConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let checker = Checker::new(CheckerConfig::default());
    let output = strictly_demo::run(&checker)?;

    for line in &output.lines {
        println!("{line}");
    }
    let report =
        serde_json::to_string_pretty(&output.report).context("rendering verdict report")?;
    println!("{report}");

    Ok(())
}
