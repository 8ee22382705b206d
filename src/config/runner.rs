use crate::detector::LaneParams;
use crate::runner::FrameErrorPolicy;
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
    /// Directory receiving one `<stream>.json` report per input. Reports go
    /// to stdout when unset.
    pub json_out_dir: Option<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RunnerConfig {
    /// Recorded segment streams, processed independently.
    pub inputs: Vec<PathBuf>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: LaneParams,
    #[serde(default)]
    pub on_error: FrameErrorPolicy,
}

impl RunnerConfig {
    /// Resolve relative input paths against the directory holding the config.
    pub fn resolve_inputs(&self, base: &Path) -> Vec<PathBuf> {
        self.inputs
            .iter()
            .map(|p| if p.is_absolute() { p.clone() } else { base.join(p) })
            .collect()
    }
}

pub fn load_config(path: &Path) -> Result<RunnerConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<RunnerConfig, String> {
    let config: RunnerConfig = serde_json::from_str(contents).map_err(|e| e.to_string())?;
    if config.inputs.is_empty() {
        return Err("no input streams listed".to_string());
    }
    Ok(config)
}
