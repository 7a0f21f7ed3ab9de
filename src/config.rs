use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use cubeshell_io::TablePaths;
use serde::Deserialize;

/// Output mesh encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MeshFormat {
    #[default]
    Off,
    Stl,
    StlAscii,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    pub input: TablePaths,
    /// Elements must exceed this density (plus a small margin) to be kept.
    pub threshold: f64,
    pub output: PathBuf,
    pub format: MeshFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            input: TablePaths::default(),
            threshold: 0.3,
            output: PathBuf::from("model.off"),
            format: MeshFormat::Off,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub nodes: Option<PathBuf>,
    pub connectivity: Option<PathBuf>,
    pub density: Option<PathBuf>,
    pub threshold: Option<f64>,
    pub output: Option<PathBuf>,
    pub format: Option<MeshFormat>,
}

impl ShellConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn apply(&mut self, o: Overrides) {
        if let Some(p) = o.nodes {
            self.input.nodes = p;
        }
        if let Some(p) = o.connectivity {
            self.input.connectivity = p;
        }
        if let Some(p) = o.density {
            self.input.density = p;
        }
        if let Some(t) = o.threshold {
            self.threshold = t;
        }
        if let Some(p) = o.output {
            self.output = p;
        }
        if let Some(f) = o.format {
            self.format = f;
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ShellConfig> {
    let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg = ShellConfig::from_toml_str(&s).with_context(|| format!("parsing {}", path.display()))?;
    log::info!("loaded config from {}", path.display());
    Ok(cfg)
}
