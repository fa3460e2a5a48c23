use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use archscope_analysis::analyze_codebase;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut json_output = false;
    let mut root = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json_output = true;
        } else {
            root = Some(arg);
        }
    }
    let root = root.context("usage: archscope [--json] <root-path>")?;

    let result = analyze_codebase(&root)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Analyzed {} in {} ms", root, result.duration_ms);
    println!(
        "Files: {}   Dependencies: {}   Circular: {}",
        result.stats.total_files,
        result.stats.total_dependencies,
        result.stats.circular_dependencies
    );
    println!(
        "Health: {} healthy / {} monitor / {} refactor",
        result.stats.healthy_components,
        result.stats.monitor_components,
        result.stats.refactor_components
    );
    for level in &result.levels {
        println!(
            "Level {:>2} ({}): {} vertices, quality {:.0}",
            level.level,
            level.title,
            level.vertices.len(),
            level.stats.quality_score
        );
    }
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    Ok(())
}
