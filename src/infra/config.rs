use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs};

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Default rendering settings for classification output
    pub output: OutputConfig,

    /// Default ranking settings
    pub rank: RankConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig
{
    /// "table" or "json"
    pub format: String,
    /// Include the per-signal reason lines in table output
    pub show_reasons: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig
{
    /// Show the computed score column next to ranked tickets
    pub show_scores: bool,
    /// Batch size above which a progress bar is drawn
    pub progress_threshold: usize,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self { output: OutputConfig::default(), rank: RankConfig::default() }
    }
}

impl Default for OutputConfig
{
    fn default() -> Self
    {
        Self { format: "table".to_string(), show_reasons: true }
    }
}

impl Default for RankConfig
{
    fn default() -> Self
    {
        Self { show_scores: true, progress_threshold: 500 }
    }
}

pub fn load_config() -> Result<Config>
{
    let mut builder = config::Config::builder();

    // Load from config files in priority order
    let config_paths = ["triage.toml", "triage.yaml", "triage.json", ".triage.toml"];

    for path in &config_paths
    {
        if Path::new(path).exists()
        {
            builder = builder.add_source(config::File::with_name(path));
            break;
        }
    }

    // Add environment variables with TRIAGE_ prefix
    builder = builder.add_source(config::Environment::with_prefix("TRIAGE").separator("_"));

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config_path = args
        .path
        .join("triage.toml");

    if config_path.exists() && !args.force
    {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet
    {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}
