use crate::{Error, Result, Style};

use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

/// Configuration for a generation run.
///
/// Every field can be set from a TOML file (kebab-case keys) or through the
/// builder methods.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Directory scanned for model declarations
    pub model_dir: PathBuf,

    /// Names of the models to generate DAOs for
    pub model_names: Vec<String>,

    /// Module path of the models, overriding the one derived from their files
    pub model_pkg_path: Option<String>,

    /// Local name the generated code uses for the model module
    pub model_pkg_alias: Option<String>,

    /// Root directory of the generated code
    pub dao_dir: PathBuf,

    /// Module path of `dao_dir`, overriding the one derived from its location
    pub dao_pkg_path: Option<String>,

    /// Give every DAO its own sub-directory
    pub sub_pkg_enable: bool,

    /// Naming style of the sub-directories
    pub sub_pkg_style: Style,

    /// Naming style of generated file names
    pub file_name_style: Style,

    /// Name of the shared sequence counter model
    pub counter_name: String,

    /// Load declarations from this TOML manifest instead of scanning sources
    pub manifest: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("."),
            model_names: vec![],
            model_pkg_path: None,
            model_pkg_alias: None,
            dao_dir: PathBuf::from("dao"),
            dao_pkg_path: None,
            sub_pkg_enable: false,
            sub_pkg_style: Style::Kebab,
            file_name_style: Style::Underscore,
            counter_name: "Counter".to_string(),
            manifest: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a configuration file. Keys missing from the file keep their
    /// default value.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;

        toml::from_str(&contents).map_err(|source| Error::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn model_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.model_dir = dir.into();
        self
    }

    pub fn model_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.model_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn model_pkg_path(mut self, path: impl Into<String>) -> Self {
        self.model_pkg_path = Some(path.into());
        self
    }

    pub fn model_pkg_alias(mut self, alias: impl Into<String>) -> Self {
        self.model_pkg_alias = Some(alias.into());
        self
    }

    pub fn dao_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dao_dir = dir.into();
        self
    }

    pub fn dao_pkg_path(mut self, path: impl Into<String>) -> Self {
        self.dao_pkg_path = Some(path.into());
        self
    }

    pub fn sub_pkg_enable(mut self, enable: bool) -> Self {
        self.sub_pkg_enable = enable;
        self
    }

    pub fn sub_pkg_style(mut self, style: Style) -> Self {
        self.sub_pkg_style = style;
        self
    }

    pub fn file_name_style(mut self, style: Style) -> Self {
        self.file_name_style = style;
        self
    }

    pub fn counter_name(mut self, name: impl Into<String>) -> Self {
        self.counter_name = name.into();
        self
    }

    pub fn manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest = Some(path.into());
        self
    }

    /// Model names with surrounding whitespace and empty entries removed.
    pub(crate) fn requested_names(&self) -> Vec<String> {
        self.model_names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect()
    }

    /// The configured model alias, if it is not blank.
    pub(crate) fn alias(&self) -> Option<&str> {
        self.model_pkg_alias
            .as_deref()
            .map(str::trim)
            .filter(|alias| !alias.is_empty())
    }

    /// Counter model name in pascal case, `Counter` when left blank.
    pub(crate) fn counter_model_name(&self) -> String {
        let name = Style::Pascal.convert(&self.counter_name);

        if name.is_empty() {
            "Counter".to_string()
        } else {
            name
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.manifest.is_none() && self.requested_names().is_empty() {
            return Err(Error::InvalidConfig(
                "no model names given; pass at least one name to generate".to_string(),
            ));
        }

        for path in [&self.model_pkg_path, &self.dao_pkg_path].into_iter().flatten() {
            if syn::parse_str::<syn::Path>(path).is_err() {
                return Err(Error::InvalidConfig(format!(
                    "`{path}` is not a module path"
                )));
            }
        }

        if let Some(alias) = self.alias() {
            if syn::parse_str::<syn::Ident>(alias).is_err() {
                return Err(Error::InvalidConfig(format!(
                    "`{alias}` cannot be used as a module alias"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std_util::prelude::*;

    #[test]
    fn defaults() {
        let config = Config::new();

        assert_eq!(config.model_dir, PathBuf::from("."));
        assert_eq!(config.dao_dir, PathBuf::from("dao"));
        assert_eq!(config.sub_pkg_style, Style::Kebab);
        assert_eq!(config.file_name_style, Style::Underscore);
        assert_eq!(config.counter_model_name(), "Counter");
        assert!(!config.sub_pkg_enable);
    }

    #[test]
    fn parse_toml() {
        let config: Config = toml::from_str(
            r#"
            model-dir = "src/model"
            model-names = ["User", "Order"]
            dao-dir = "src/dao"
            sub-pkg-enable = true
            sub-pkg-style = "underscore"
            counter-name = "id_counter"
            "#,
        )
        .unwrap();

        assert_eq!(config.model_names, ["User", "Order"]);
        assert_eq!(config.sub_pkg_style, Style::Underscore);
        assert_eq!(config.file_name_style, Style::Underscore);
        assert_eq!(config.counter_model_name(), "IdCounter");
        assert!(config.sub_pkg_enable);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(toml::from_str::<Config>("modeldir = \"x\"").is_err());
    }

    #[test]
    fn blank_counter_name_falls_back() {
        assert_eq!(Config::new().counter_name(" ").counter_model_name(), "Counter");
    }

    #[test]
    fn validate() {
        assert_err!(Config::new().validate());
        assert_err!(Config::new().model_names([" ", ""]).validate());
        assert_ok!(Config::new().model_names(["User"]).validate());
        assert_ok!(Config::new().manifest("models.toml").validate());

        assert_err!(Config::new()
            .model_names(["User"])
            .dao_pkg_path("crate::")
            .validate());
        assert_err!(Config::new()
            .model_names(["User"])
            .model_pkg_alias("my-models")
            .validate());
    }
}
