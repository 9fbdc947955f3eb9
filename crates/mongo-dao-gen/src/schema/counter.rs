use super::{imports, ImportSet, Layout, Name, Package};
use crate::Config;

use std::path::PathBuf;

/// The shared sequence counter DAO. Built only when some model has an
/// `autoIncr` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub name: String,
    pub class_name: String,
    pub variable_name: String,
    pub collection_name: String,
    pub file_name: String,
    pub output_dir: PathBuf,
    pub dao_package: Package,
    pub prefix_name: String,

    /// Type of the stored `{_id, value}` documents
    pub model_name: String,

    pub imports: ImportSet,
}

impl Counter {
    pub fn build(config: &Config, layout: &Layout) -> Self {
        let name = Name::new(config.counter_model_name());
        let prefix_name = layout.prefix_name(&name);

        let mut imports = ImportSet::new();
        for path in [
            imports::ANYHOW_BAIL,
            imports::ANYHOW_RESULT,
            imports::COLLECTION,
            imports::DATABASE,
            imports::BSON_DOC,
            imports::RETURN_DOCUMENT,
            imports::SERDE_DESERIALIZE,
            imports::SERDE_SERIALIZE,
        ] {
            imports.insert(path);
        }

        let counter = Self {
            class_name: name.class.clone(),
            variable_name: name.variable.clone(),
            collection_name: name.collection.clone(),
            file_name: layout.file_name(&name),
            output_dir: layout.output_dir(&name),
            dao_package: layout.dao_package(&name),
            model_name: format!("{prefix_name}Model"),
            prefix_name,
            imports,
            name: name.raw,
        };

        log::debug!(
            "counter `{}` in `{}`",
            counter.class_name,
            counter.dao_package.path
        );

        counter
    }
}
