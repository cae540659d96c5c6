use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Complete configuration that merges CLI args, env vars, config files, and defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScribeConfig {
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Markdown input path, `-` for stdin
    pub source: String,
    /// HTML output path, `-` for stdout
    pub output: String,
    /// Configuration file path
    pub config: String,
    /// Strip the root container from the output
    pub fragment: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            source: "-".to_string(),
            output: "-".to_string(),
            config: "./scribe.toml".to_string(),
            fragment: false,
        }
    }
}

impl ScribeConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (SCRIBE_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let config_file = args
            .try_get_one::<String>("config")
            .unwrap_or(None)
            .cloned()
            .unwrap_or_else(|| RenderConfig::default().config);

        let mut builder = ConfigBuilder::builder();

        builder = builder.add_source(ConfigBuilder::try_from(&Self::default())?);

        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::from(Path::new(&config_file)));
        }

        builder = builder.add_source(
            Environment::with_prefix("SCRIBE")
                .prefix_separator("_")
                .separator("__"),
        );

        // Only override with CLI args that are actually defined for this command
        let mut cli_overrides = HashMap::new();
        for key in ["source", "output", "config"] {
            if let Some(value) = args.try_get_one::<String>(key).unwrap_or(None) {
                cli_overrides.insert(format!("render.{key}"), value.clone());
            }
        }
        if args.try_get_one::<bool>("fragment").unwrap_or(None) == Some(&true) {
            cli_overrides.insert("render.fragment".to_string(), "true".to_string());
        }

        if !cli_overrides.is_empty() {
            builder = builder.add_source(ConfigBuilder::try_from(&cli_overrides)?);
        }

        let config: ScribeConfig = builder.build()?.try_deserialize()?;
        log::debug!("Loaded configuration: {config:?}");

        Ok(config)
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, ArgAction, Command};

    fn command() -> Command {
        Command::new("test")
            .arg(Arg::new("source").long("source").value_name("FILE"))
            .arg(Arg::new("output").long("output").value_name("FILE"))
            .arg(Arg::new("config").long("config").value_name("FILE"))
            .arg(Arg::new("fragment").long("fragment").action(ArgAction::SetTrue))
    }

    #[test]
    fn test_default_config() {
        let config = ScribeConfig::default();
        assert_eq!(config.render.source, "-");
        assert_eq!(config.render.output, "-");
        assert_eq!(config.render.config, "./scribe.toml");
        assert!(!config.render.fragment);
    }

    #[test]
    fn test_cli_args_override() {
        let matches = command()
            .try_get_matches_from(vec![
                "test",
                "--source", "/custom/README.md",
                "--output", "/custom/index.html",
                "--config", "/does/not/exist.toml",
                "--fragment",
            ])
            .unwrap();

        let config = ScribeConfig::load(&matches).unwrap();
        assert_eq!(config.render.source, "/custom/README.md");
        assert_eq!(config.render.output, "/custom/index.html");
        assert!(config.render.fragment);
    }

    #[test]
    fn test_missing_args_fall_back_to_defaults() {
        let matches = command()
            .try_get_matches_from(vec!["test", "--config", "/does/not/exist.toml"])
            .unwrap();

        let config = ScribeConfig::load(&matches).unwrap();
        assert_eq!(config.render.output, "-");
        assert!(!config.render.fragment);
    }
}
