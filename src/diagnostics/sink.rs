//! Write-only observers for intermediate analysis artifacts.
//!
//! A sink never feeds anything back into the analysis; results are identical
//! with any sink attached.
use crate::image::io::{save_binary_png, write_json_file};
use crate::image::BinaryImage;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub trait DebugSink {
    /// When false the analyzer skips building artifacts altogether.
    fn enabled(&self) -> bool {
        true
    }

    fn raster(&mut self, label: &str, raster: &BinaryImage);

    fn record(&mut self, label: &str, value: &Value);
}

/// Serialize `value` and hand it to `sink`; serialization failures are
/// logged and dropped.
pub fn emit_record<T: Serialize>(sink: &mut dyn DebugSink, label: &str, value: &T) {
    match serde_json::to_value(value) {
        Ok(v) => sink.record(label, &v),
        Err(e) => log::warn!("debug record {label} not serializable: {e}"),
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DebugSink for NullSink {
    fn enabled(&self) -> bool {
        false
    }

    fn raster(&mut self, _label: &str, _raster: &BinaryImage) {}

    fn record(&mut self, _label: &str, _value: &Value) {}
}

/// Keeps raster foreground counts and JSON records in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub rasters: Vec<(String, usize)>,
    pub records: Vec<(String, Value)>,
}

impl RecordingSink {
    pub fn raster_labels(&self) -> Vec<&str> {
        self.rasters.iter().map(|(l, _)| l.as_str()).collect()
    }

    pub fn find_record(&self, label: &str) -> Option<&Value> {
        self.records
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }
}

impl DebugSink for RecordingSink {
    fn raster(&mut self, label: &str, raster: &BinaryImage) {
        self.rasters.push((label.to_string(), raster.count_set()));
    }

    fn record(&mut self, label: &str, value: &Value) {
        self.records.push((label.to_string(), value.clone()));
    }
}

/// Writes `<dir>/<label>.png` for rasters and `<dir>/<label>.json` for
/// records. Write failures are logged and collected, never propagated.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    failures: Vec<String>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            failures: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    fn note(&mut self, result: Result<(), String>) {
        if let Err(e) = result {
            log::warn!("DirectorySink: {e}");
            self.failures.push(e);
        }
    }
}

impl DebugSink for DirectorySink {
    fn raster(&mut self, label: &str, raster: &BinaryImage) {
        let path = self.dir.join(format!("{label}.png"));
        let result = save_binary_png(raster, &path);
        self.note(result);
    }

    fn record(&mut self, label: &str, value: &Value) {
        let path = self.dir.join(format!("{label}.json"));
        let result = write_json_file(&path, value);
        self.note(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_sink_writes_png_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("debug"));
        let mut img = BinaryImage::new(8, 4);
        img.set(2, 1, true);
        sink.raster("boundary", &img);
        emit_record(&mut sink, "pairs", &vec![1, 2, 3]);
        assert!(sink.failures().is_empty(), "{:?}", sink.failures());

        let png = image::open(sink.dir().join("boundary.png")).unwrap().into_luma8();
        assert_eq!(png.dimensions(), (8, 4));
        assert_eq!(png.get_pixel(2, 1).0[0], 255);
        assert_eq!(png.get_pixel(0, 0).0[0], 0);

        let json = std::fs::read_to_string(sink.dir().join("pairs.json")).unwrap();
        let v: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v, serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn recording_sink_keeps_labels_in_order() {
        let mut sink = RecordingSink::default();
        sink.raster("a", &BinaryImage::new(2, 2));
        emit_record(&mut sink, "b", &"x");
        assert_eq!(sink.raster_labels(), vec!["a"]);
        assert_eq!(sink.find_record("b"), Some(&Value::from("x")));
        assert!(!NullSink.enabled());
    }
}
