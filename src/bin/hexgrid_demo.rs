use hex_grid_detector::config::analyze::{self, AnalyzeToolConfig, OutputFormat};
use hex_grid_detector::diagnostics::{AnalysisReport, DirectorySink, NullSink};
use hex_grid_detector::image::io::{load_edge_raster, write_json_file};
use hex_grid_detector::HexGridAnalyzer;
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "hexgrid_demo".to_string());
    let config = analyze::parse_cli(&program)?;

    let edges = load_edge_raster(&config.input_path)?;
    let analyzer = HexGridAnalyzer::new(config.analyzer.clone());
    let mut report = match &config.output.debug_dir {
        Some(dir) => {
            let mut sink = DirectorySink::new(dir);
            let report = analyzer.analyze_with_sink(&edges, &mut sink);
            if !sink.failures().is_empty() {
                eprintln!(
                    "{} debug artifact(s) could not be written to {}",
                    sink.failures().len(),
                    dir.display()
                );
            }
            report
        }
        None => analyzer.analyze_with_sink(&edges, &mut NullSink),
    }
    .map_err(|e| format!("Analysis of {} failed: {e}", config.input_path.display()))?;

    if !config.overrides.is_empty() {
        report.grid = report.grid.clone().with_overrides(&config.overrides);
    }

    if config.output.format.includes_text() {
        print_text_summary(&config, &report);
    }

    if config.output.format.includes_json() {
        if let Some(path) = &config.output.json_out {
            write_json_file(path, &report)?;
            println!("JSON report written to {}", path.display());
        } else {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            if config.output.format == OutputFormat::Both {
                println!("\nJSON report:\n{json}");
            } else {
                println!("{json}");
            }
        }
    }

    if let Some(path) = &config.output.cells_out {
        let cells = report.grid.cell_centers(edges.w, edges.h);
        write_json_file(path, &cells)?;
        println!("{} cell centers written to {}", cells.len(), path.display());
    }

    Ok(())
}

fn print_text_summary(config: &AnalyzeToolConfig, report: &AnalysisReport) {
    println!("Hex grid analysis of {}", config.input_path.display());
    for line in report.summary().lines() {
        println!("  {line}");
    }
    if !config.overrides.is_empty() {
        println!("  overrides applied: {:?}", config.overrides);
    }
    for stage in &report.trace.timings.stages {
        println!("  {:<12} {:>8.3} ms", stage.label, stage.elapsed_ms);
    }
}
