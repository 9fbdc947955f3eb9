use anyhow::{Context, Result};
use clap::Args;
use mongo_dao_gen::{Config, Style};
use std::path::PathBuf;

/// Generation settings given on the command line.
///
/// Flags that are set override the values read from `--config`; the rest
/// keep the file value, or the default when no file is given.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// TOML file to read settings from
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the model declarations
    #[arg(long, value_name = "DIR")]
    pub model_dir: Option<PathBuf>,

    /// Comma separated names of the models to generate
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub model_names: Vec<String>,

    /// Module path of the models
    #[arg(long, value_name = "PATH")]
    pub model_pkg_path: Option<String>,

    /// Alias used for the model module in generated code
    #[arg(long, value_name = "ALIAS")]
    pub model_pkg_alias: Option<String>,

    /// Output directory of the generated code
    #[arg(long, value_name = "DIR")]
    pub dao_dir: Option<PathBuf>,

    /// Module path of the output directory
    #[arg(long, value_name = "PATH")]
    pub dao_pkg_path: Option<String>,

    /// Give every DAO its own module directory
    #[arg(long)]
    pub sub_pkg_enable: bool,

    /// Naming style of the module directories
    #[arg(long, value_name = "STYLE")]
    pub sub_pkg_style: Option<Style>,

    /// Naming style of the generated files
    #[arg(long, value_name = "STYLE")]
    pub file_name_style: Option<Style>,

    /// Name of the sequence counter model
    #[arg(long, value_name = "NAME")]
    pub counter_name: Option<String>,

    /// Read declarations from a TOML manifest instead of source files
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}

impl ConfigArgs {
    /// Loads `--config` when given and applies the flags on top.
    pub fn resolve(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => Config::new(),
        };

        Ok(self.apply(config))
    }

    fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.model_dir {
            config = config.model_dir(dir);
        }

        if !self.model_names.is_empty() {
            config = config.model_names(&self.model_names);
        }

        if let Some(path) = &self.model_pkg_path {
            config = config.model_pkg_path(path);
        }

        if let Some(alias) = &self.model_pkg_alias {
            config = config.model_pkg_alias(alias);
        }

        if let Some(dir) = &self.dao_dir {
            config = config.dao_dir(dir);
        }

        if let Some(path) = &self.dao_pkg_path {
            config = config.dao_pkg_path(path);
        }

        if self.sub_pkg_enable {
            config = config.sub_pkg_enable(true);
        }

        if let Some(style) = self.sub_pkg_style {
            config = config.sub_pkg_style(style);
        }

        if let Some(style) = self.file_name_style {
            config = config.file_name_style(style);
        }

        if let Some(name) = &self.counter_name {
            config = config.counter_name(name);
        }

        if let Some(path) = &self.manifest {
            config = config.manifest(path);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flags_keep_file_values() {
        let file = Config::new()
            .model_names(["User"])
            .dao_dir("src/dao")
            .sub_pkg_enable(true)
            .counter_name("Seq");

        let config = ConfigArgs::default().apply(file.clone());

        assert_eq!(config, file);
    }

    #[test]
    fn set_flags_win() {
        let args = ConfigArgs {
            model_names: vec!["Mail".to_string()],
            file_name_style: Some(Style::Kebab),
            ..ConfigArgs::default()
        };

        let config = args.apply(Config::new().model_names(["User"]));

        assert_eq!(config.model_names, ["Mail"]);
        assert_eq!(config.file_name_style, Style::Kebab);
    }
}
