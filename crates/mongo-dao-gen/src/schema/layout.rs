use super::{module_path, Name, Package, Style};
use crate::{Config, Result};

use std::path::PathBuf;

/// Where generated DAOs go and how their files and modules are named.
///
/// Shared by the model and counter descriptors so both derive their
/// locations the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Root directory of the generated code
    pub dao_dir: PathBuf,

    /// Module path of `dao_dir`
    pub dao_path: String,

    pub sub_pkg_enable: bool,
    pub sub_pkg_style: Style,
    pub file_name_style: Style,
}

impl Layout {
    pub fn resolve(config: &Config) -> Result<Self> {
        let dao_path = match &config.dao_pkg_path {
            Some(path) => path.clone(),
            None => module_path::of_dir(&config.dao_dir)?,
        };

        Ok(Self {
            dao_dir: config.dao_dir.clone(),
            dao_path,
            sub_pkg_enable: config.sub_pkg_enable,
            sub_pkg_style: config.sub_pkg_style,
            file_name_style: config.file_name_style,
        })
    }

    pub(crate) fn output_dir(&self, name: &Name) -> PathBuf {
        if self.sub_pkg_enable {
            self.dao_dir.join(name.to(self.sub_pkg_style))
        } else {
            self.dao_dir.clone()
        }
    }

    pub(crate) fn file_name(&self, name: &Name) -> String {
        format!("{}.rs", name.to(self.file_name_style))
    }

    /// In sub-package mode every DAO gets its own module, `crate::dao::user`;
    /// otherwise all of them share the root module.
    pub(crate) fn dao_package(&self, name: &Name) -> Package {
        if self.sub_pkg_enable {
            Package::new(format!("{}::{}", self.dao_path, name.to(Style::Lower)))
        } else {
            let package = Package::new(self.dao_path.clone());
            let local = Style::Lower.convert(&package.name);

            Package {
                name: local,
                ..package
            }
        }
    }

    /// Flat layouts share one module, so generated type names carry the model
    /// name as a prefix.
    pub(crate) fn prefix_name(&self, name: &Name) -> String {
        if self.sub_pkg_enable {
            String::new()
        } else {
            name.class.clone()
        }
    }

    /// Module path of the generated counter module in the flat layout.
    pub(crate) fn flat_module(&self, name: &Name) -> String {
        format!("{}::{}", self.dao_path, name.to(Style::Underscore))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(sub_pkg_enable: bool) -> Layout {
        Layout {
            dao_dir: PathBuf::from("src/dao"),
            dao_path: "crate::dao".to_string(),
            sub_pkg_enable,
            sub_pkg_style: Style::Kebab,
            file_name_style: Style::Underscore,
        }
    }

    #[test]
    fn flat() {
        let layout = layout(false);
        let name = Name::new("UserProfile");

        assert_eq!(layout.output_dir(&name), PathBuf::from("src/dao"));
        assert_eq!(layout.file_name(&name), "user_profile.rs");
        assert_eq!(layout.dao_package(&name).path, "crate::dao");
        assert_eq!(layout.dao_package(&name).name, "dao");
        assert_eq!(layout.prefix_name(&name), "UserProfile");
        assert_eq!(layout.flat_module(&name), "crate::dao::user_profile");
    }

    #[test]
    fn sub_packages() {
        let layout = layout(true);
        let name = Name::new("UserProfile");

        assert_eq!(layout.output_dir(&name), PathBuf::from("src/dao/user-profile"));
        assert_eq!(layout.dao_package(&name).path, "crate::dao::userprofile");
        assert_eq!(layout.dao_package(&name).name, "userprofile");
        assert_eq!(layout.prefix_name(&name), "");
    }

    #[test]
    fn configured_dao_path() {
        let config = Config::new()
            .dao_dir("/nowhere/dao")
            .dao_pkg_path("crate::storage");

        let layout = Layout::resolve(&config).unwrap();
        assert_eq!(layout.dao_path, "crate::storage");
    }
}
