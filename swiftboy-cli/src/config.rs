use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HostConfig {
    #[serde(default = "default_frames")]
    pub frames: u32,

    #[serde(default)]
    pub inputs: u8,

    #[serde(default)]
    pub buttons: Vec<String>,
}

fn default_frames() -> u32 {
    60
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            inputs: u8::default(),
            buttons: Vec::default(),
        }
    }
}

impl HostConfig {
    pub fn from_toml_file<P>(path: P) -> Result<Self, anyhow::Error>
    where
        P: AsRef<Path> + std::fmt::Debug,
    {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("error reading TOML config file from '{path:?}'"))?;
        let config: Self = toml::from_str(&config_str)
            .with_context(|| format!("error parsing host config from TOML file at '{path:?}'"))?;

        Ok(config)
    }
}
