use super::{FieldType, IntWidth, TypeClass};

/// How a field is filled in before a document is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoStrategy {
    /// Mint a new object id when the field holds the zero id
    ObjectId,

    /// Stamp the current time when the field holds the epoch
    DateTime,

    /// Take the next value of the counter sequence stored under `key`
    Increment { key: String, width: IntWidth },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive<'a> {
    /// `autoFill`; a value is accepted and ignored
    AutoFill,

    /// `autoIncr:<key>`
    AutoIncr(&'a str),

    Unknown(&'a str),
}

/// Splits a `;`-separated directive list into `key[:value]` directives.
fn directives(src: &str) -> impl Iterator<Item = Directive<'_>> {
    src.split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let (key, value) = match token.split_once(':') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (token, ""),
            };

            match key {
                "autoFill" => Directive::AutoFill,
                "autoIncr" => Directive::AutoIncr(value),
                _ => Directive::Unknown(key),
            }
        })
}

impl AutoStrategy {
    /// Resolves the strategy a directive list selects for a field of type
    /// `ty`.
    ///
    /// Directives that do not apply to the type are ignored. When several
    /// apply, the last one wins.
    pub(crate) fn resolve(src: &str, ty: &FieldType) -> Option<Self> {
        let mut strategy = None;

        for directive in directives(src) {
            let applied = match directive {
                Directive::AutoFill => match ty.class {
                    TypeClass::ObjectId => Some(Self::ObjectId),
                    TypeClass::DateTime => Some(Self::DateTime),
                    _ => None,
                },
                Directive::AutoIncr(key) if !key.is_empty() => match ty.class {
                    TypeClass::Int(width) => Some(Self::Increment {
                        key: key.to_string(),
                        width,
                    }),
                    _ => None,
                },
                Directive::AutoIncr(_) => None,
                Directive::Unknown(key) => {
                    log::debug!("ignoring unknown directive `{key}`");
                    None
                }
            };

            if applied.is_some() {
                strategy = applied;
            }
        }

        strategy
    }

    pub fn is_increment(&self) -> bool {
        matches!(self, Self::Increment { .. })
    }
}
