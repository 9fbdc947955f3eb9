use super::{Annotation, FieldDecl};

/// A serde `rename_all` rule, applied to field names the way serde applies
/// it when serializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `lowercase`
    Lower,
    /// `UPPERCASE`
    Upper,
    /// `PascalCase`
    Pascal,
    /// `camelCase`
    Camel,
    /// `snake_case`
    Snake,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnake,
    /// `kebab-case`
    Kebab,
    /// `SCREAMING-KEBAB-CASE`
    ScreamingKebab,
}

impl RenameRule {
    /// Parses a serde case name. Unknown names return `None`.
    pub fn from_serde(case: &str) -> Option<Self> {
        Some(match case {
            "lowercase" => Self::Lower,
            "UPPERCASE" => Self::Upper,
            "PascalCase" => Self::Pascal,
            "camelCase" => Self::Camel,
            "snake_case" => Self::Snake,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnake,
            "kebab-case" => Self::Kebab,
            "SCREAMING-KEBAB-CASE" => Self::ScreamingKebab,
            _ => return None,
        })
    }

    /// Renames a snake_case field name.
    pub fn apply(self, field: &str) -> String {
        match self {
            Self::Lower | Self::Snake => field.to_ascii_lowercase(),
            Self::Upper | Self::ScreamingSnake => field.to_ascii_uppercase(),
            Self::Pascal => pascal(field),
            Self::Camel => {
                let pascal = pascal(field);
                let mut chars = pascal.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
                    None => pascal,
                }
            }
            Self::Kebab => field.replace('_', "-"),
            Self::ScreamingKebab => field.to_ascii_uppercase().replace('_', "-"),
        }
    }
}

/// Drops underscores and capitalizes the character following each one.
fn pascal(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut capitalize = true;

    for ch in field.chars() {
        if ch == '_' {
            capitalize = true;
        } else if capitalize {
            out.push(ch.to_ascii_uppercase());
            capitalize = false;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Resolves the storage column of a field.
///
/// The first `column` or `serde.rename` annotation decides. Without one, or
/// when its value is empty, the field name is used, renamed with the model's
/// `rename_all` rule if it has one.
pub(super) fn storage_name(field: &FieldDecl, rename_all: Option<RenameRule>) -> String {
    let explicit = field
        .annotations
        .iter()
        .find(|annotation| {
            annotation.key == Annotation::COLUMN || annotation.key == Annotation::SERDE_RENAME
        })
        .map(|annotation| annotation.value.trim())
        .filter(|value| !value.is_empty());

    match (explicit, rename_all) {
        (Some(column), _) => column.to_string(),
        (None, Some(rule)) => rule.apply(field.unraw_name()),
        (None, None) => field.unraw_name().to_string(),
    }
}
