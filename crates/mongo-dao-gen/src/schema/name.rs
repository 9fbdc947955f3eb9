use serde::Deserialize;
use std::{fmt, str::FromStr};
use std_util::str;

/// Naming convention used to derive file, directory and type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Style {
    /// `user-profile`
    Kebab,
    /// `user_profile`
    Underscore,
    /// `userProfile`
    Camel,
    /// `UserProfile`
    Pascal,
    /// `userprofile`
    Lower,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown naming style `{0}`; expected one of kebab, underscore, camel, pascal, lower")]
pub struct ParseStyleError(String);

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Kebab,
        Style::Underscore,
        Style::Camel,
        Style::Pascal,
        Style::Lower,
    ];

    pub fn convert(self, src: &str) -> String {
        match self {
            Style::Kebab => str::kebab_case(src),
            Style::Underscore => str::snake_case(src),
            Style::Camel => str::camel_case(src),
            Style::Pascal => str::pascal_case(src),
            Style::Lower => str::lower_case(src),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Kebab => "kebab",
            Style::Underscore => "underscore",
            Style::Camel => "camel",
            Style::Pascal => "pascal",
            Style::Lower => "lower",
        }
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == src)
            .ok_or_else(|| ParseStyleError(src.to_string()))
    }
}

impl TryFrom<String> for Style {
    type Error = ParseStyleError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared model name together with the forms derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    /// Name as declared
    pub raw: String,

    /// Type names: `UserProfile`
    pub class: String,

    /// Local bindings: `userProfile`
    pub variable: String,

    /// Storage collection: `user_profile`
    pub collection: String,
}

impl Name {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();

        Self {
            class: Style::Pascal.convert(&raw),
            variable: Style::Camel.convert(&raw),
            collection: Style::Underscore.convert(&raw),
            raw,
        }
    }

    pub fn to(&self, style: Style) -> String {
        style.convert(&self.raw)
    }
}
