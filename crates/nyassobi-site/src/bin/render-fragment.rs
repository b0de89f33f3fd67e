//! Compile a CMS HTML fragment and print its UI tree as JSON
//!
//! Usage: `render-fragment [FILE]` (reads stdin without a file)

use anyhow::{Context, Result};
use nyassobi_site::{FragmentCompiler, site_registry};
use std::io::Read;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let html = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let compiler = FragmentCompiler::new(site_registry());
    let compilation = compiler.compile_with_diagnostics(Some(&html));
    for diagnostic in &compilation.diagnostics {
        tracing::info!("{}", diagnostic);
    }

    let json = serde_json::to_string_pretty(&compilation.nodes).context("Failed to serialize UI tree")?;
    println!("{}", json);
    Ok(())
}
