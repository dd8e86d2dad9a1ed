pub mod args;
pub mod commands;
pub mod validate;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use crate::export::ExportFile;
use crate::model::RouteSummary;
use crate::ui;

pub fn run() -> Result<()> {
    let cli = args::Cli::parse();
    println!();

    match &cli.cmd {
        args::Commands::Plan {
            via,
            mode,
            route,
            export,
            out,
        } => commands::plan::run(
            &cli.service_url,
            via,
            *mode,
            *route,
            *export,
            out.as_deref(),
        ),

        args::Commands::Session { mode } => commands::session::run(&cli.service_url, *mode),

        args::Commands::Modes => commands::modes::run(),
    }
}

/// The CLI's download trigger: write the rendered export where asked.
pub(crate) fn save_export(file: &ExportFile, out_dir: Option<&Path>) -> Result<()> {
    let path = match out_dir {
        Some(dir) => dir.join(&file.filename),
        None => Path::new(&file.filename).to_path_buf(),
    };

    fs::write(&path, &file.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    ui::success(format!(
        "Saved {} ({} bytes, {})",
        path.display(),
        file.bytes.len(),
        file.mime
    ));
    Ok(())
}

pub(crate) fn print_summary(summary: &RouteSummary) {
    ui::info("Route summary");
    println!();
    ui::print_kv_block(&[
        ("Distance", summary.distance_text()),
        ("Time", summary.duration_text.clone()),
        ("Average speed", summary.speed_text()),
        ("Mode", summary.mode.to_string()),
        ("Steps", summary.steps.len().to_string()),
    ]);
}

pub(crate) fn print_instructions(summary: &RouteSummary) {
    println!();
    ui::info("Instructions");
    for (i, step) in summary.steps.iter().enumerate() {
        let dist = step
            .distance_m
            .map(|m| format!("  ({:.2} km)", m / 1000.0))
            .unwrap_or_default();
        println!("{:>3}. {} {}{}", i + 1, step.glyph, step.text, dist);
    }
}
