use std::collections::BTreeMap;

pub(crate) const ANYHOW_BAIL: &str = "anyhow::bail";
pub(crate) const ANYHOW_RESULT: &str = "anyhow::Result";
pub(crate) const BSON: &str = "mongodb::bson";
pub(crate) const BSON_DATE_TIME: &str = "mongodb::bson::DateTime";
pub(crate) const BSON_DOC: &str = "mongodb::bson::doc";
pub(crate) const BSON_DOCUMENT: &str = "mongodb::bson::Document";
pub(crate) const COLLECTION: &str = "mongodb::Collection";
pub(crate) const DATABASE: &str = "mongodb::Database";
pub(crate) const OPTIONS: &str = "mongodb::options";
pub(crate) const RESULTS: &str = "mongodb::results";
pub(crate) const RETURN_DOCUMENT: &str = "mongodb::options::ReturnDocument";
pub(crate) const SERDE_DESERIALIZE: &str = "serde::Deserialize";
pub(crate) const SERDE_SERIALIZE: &str = "serde::Serialize";
pub(crate) const TRY_STREAM_EXT: &str = "futures::TryStreamExt";

/// The `use` declarations of a generated file, keyed and rendered by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    entries: BTreeMap<String, Option<String>>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>) {
        self.entries.insert(path.into(), None);
    }

    pub fn insert_aliased(&mut self, path: impl Into<String>, alias: impl Into<String>) {
        self.entries.insert(path.into(), Some(alias.into()));
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(path, alias)| (path.as_str(), alias.as_deref()))
    }

    /// One `use` line per path, in lexicographic order.
    pub fn render(&self) -> String {
        self.iter()
            .map(|(path, alias)| match alias {
                Some(alias) => format!("use {path} as {alias};"),
                None => format!("use {path};"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_sorted() {
        let mut imports = ImportSet::new();
        imports.insert(RESULTS);
        imports.insert(ANYHOW_RESULT);
        imports.insert_aliased("crate::model", "modelpkg");
        imports.insert(BSON_DOC);
        imports.insert(ANYHOW_RESULT);

        assert_eq!(imports.len(), 4);
        assert_eq!(
            imports.render(),
            "use anyhow::Result;\n\
             use crate::model as modelpkg;\n\
             use mongodb::bson::doc;\n\
             use mongodb::results;"
        );
    }

    #[test]
    fn render_empty() {
        assert!(ImportSet::new().is_empty());
        assert_eq!(ImportSet::new().render(), "");
    }
}
