use crate::detector::AnalyzerParams;
use crate::types::GridOverrides;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Full analysis report as JSON.
    pub json_out: Option<PathBuf>,
    /// Directory receiving projection PNGs and stage JSON records.
    pub debug_dir: Option<PathBuf>,
    /// Also write one JSON line per cell center.
    pub cells_out: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Configuration of the `hexgrid_demo` tool.
#[derive(Clone, Debug, Deserialize)]
pub struct AnalyzeToolConfig {
    /// Edge raster (PNG/JPEG, nonzero = edge).
    pub input_path: PathBuf,
    #[serde(default)]
    pub analyzer: AnalyzerParams,
    /// Manual corrections applied after analysis.
    #[serde(default)]
    pub overrides: GridOverrides,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn parse_config(contents: &str) -> Result<AnalyzeToolConfig, String> {
    serde_json::from_str(contents).map_err(|e| e.to_string())
}

pub fn load_config(path: &Path) -> Result<AnalyzeToolConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} <config.json>")
}

/// Read the single `<config.json>` argument and load it.
pub fn parse_cli(program: &str) -> Result<AnalyzeToolConfig, String> {
    let mut args = std::env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(path), None) if path != "-h" && path != "--help" => load_config(Path::new(&path)),
        _ => Err(usage(program)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(r#"{ "input_path": "map_edges.png" }"#).unwrap();
        assert_eq!(cfg.input_path, PathBuf::from("map_edges.png"));
        assert_eq!(cfg.analyzer, AnalyzerParams::default());
        assert!(cfg.overrides.is_empty());
        assert!(cfg.output.format.includes_text());
        assert!(!cfg.output.format.includes_json());
    }

    #[test]
    fn nested_overrides_are_partial() {
        let cfg = parse_config(
            r#"{
                "input_path": "edges.png",
                "analyzer": {
                    "height_factor": 1.15,
                    "segments": { "gap_tolerance": 8 },
                    "expected_tile_count": 48
                },
                "overrides": { "rows": 9 },
                "output": { "format": "both", "json_out": "out/report.json" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.analyzer.height_factor, 1.15);
        assert_eq!(cfg.analyzer.segments.gap_tolerance, 8);
        assert_eq!(cfg.analyzer.segments.x_tolerance, 3);
        assert_eq!(cfg.analyzer.expected_tile_count, Some(48));
        assert_eq!(cfg.overrides.rows, Some(9));
        assert!(cfg.output.format.includes_json());
        assert_eq!(cfg.output.json_out, Some(PathBuf::from("out/report.json")));
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = load_config(Path::new("/nonexistent/hexgrid.json")).unwrap_err();
        assert!(err.contains("/nonexistent/hexgrid.json"), "{err}");
    }
}
