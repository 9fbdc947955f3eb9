use super::{
    imports, Annotation, AutoStrategy, Declaration, Field, ImportSet, Layout, Name, Package,
    RenameRule, TypeClass,
};
use crate::{Config, Error, Result};

use std::path::PathBuf;

/// Module names that would clash with the bindings of a generated file.
const RESERVED_PACKAGE_NAMES: &[&str] = &["model", "bson", "doc", "options", "results", "internal"];

/// Alias given to a model module whose name is reserved.
const MODEL_PACKAGE_ALIAS: &str = "modelpkg";

/// Everything needed to generate the DAO of one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Type name as declared; the generated code refers to the model by it
    pub name: String,

    /// Module the model is declared in
    pub package: Package,

    /// Fields in declaration order
    pub fields: Vec<Field>,

    pub class_name: String,
    pub variable_name: String,
    pub collection_name: String,
    pub file_name: String,
    pub output_dir: PathBuf,

    /// Module the generated DAO lives in
    pub dao_package: Package,

    /// Prefix of generated type names, empty with sub-packages
    pub prefix_name: String,

    /// True when some field takes its value from the counter
    pub requires_counter: bool,

    /// Path the generated code names the counter DAO type by
    pub counter_type: Option<String>,

    pub imports: ImportSet,
}

impl Model {
    pub fn build(decl: &Declaration, config: &Config, layout: &Layout) -> Result<Self> {
        if decl.name.trim().is_empty() {
            return Err(Error::UnsupportedModel {
                name: decl.name.clone(),
                reason: "model name is empty".to_string(),
            });
        }

        let rename_all = decl.annotation(Annotation::SERDE_RENAME_ALL).and_then(|case| {
            let rule = RenameRule::from_serde(case);
            if rule.is_none() {
                log::warn!(
                    "model `{}`: rename_all = \"{case}\" is not supported, using field names",
                    decl.name
                );
            }
            rule
        });

        let fields: Vec<_> = decl
            .fields
            .iter()
            .map(|field| Field::classify(field, rename_all))
            .collect();

        let name = Name::new(&decl.name);
        let package = model_package(&decl.package, config.alias());
        let requires_counter = fields
            .iter()
            .any(|field| field.auto.as_ref().is_some_and(AutoStrategy::is_increment));

        let counter_type = requires_counter.then(|| {
            let counter = Name::new(config.counter_model_name());

            let module = if layout.sub_pkg_enable {
                layout.dao_package(&counter).name
            } else {
                layout.flat_module(&counter)
            };

            format!("{module}::{}", counter.class)
        });

        let mut model = Self {
            name: decl.name.clone(),
            class_name: name.class.clone(),
            variable_name: name.variable.clone(),
            collection_name: name.collection.clone(),
            file_name: layout.file_name(&name),
            output_dir: layout.output_dir(&name),
            dao_package: layout.dao_package(&name),
            prefix_name: layout.prefix_name(&name),
            package,
            fields,
            requires_counter,
            counter_type,
            imports: ImportSet::new(),
        };

        model.imports = model.collect_imports(config, layout);

        log::debug!(
            "model `{}` from `{}`: {} field(s), counter={}",
            model.name,
            model.package.path,
            model.fields.len(),
            model.requires_counter
        );

        Ok(model)
    }

    fn has_field(&self, class: TypeClass) -> bool {
        self.fields.iter().any(|field| field.ty.class == class && field.auto.is_some())
    }

    fn collect_imports(&self, config: &Config, layout: &Layout) -> ImportSet {
        let mut set = ImportSet::new();

        for path in [
            imports::ANYHOW_BAIL,
            imports::ANYHOW_RESULT,
            imports::TRY_STREAM_EXT,
            imports::COLLECTION,
            imports::DATABASE,
            imports::BSON_DOCUMENT,
            imports::BSON_DOC,
            imports::OPTIONS,
            imports::RESULTS,
        ] {
            set.insert(path);
        }

        if !self.package.is_crate_root() {
            match &self.package.alias {
                Some(alias) => set.insert_aliased(&self.package.path, alias),
                None => set.insert(&self.package.path),
            }
        }

        if self.has_field(TypeClass::ObjectId) || self.has_field(TypeClass::DateTime) {
            set.insert(imports::BSON);
        }

        if self.has_field(TypeClass::DateTime) {
            set.insert(imports::BSON_DATE_TIME);
        }

        if self.requires_counter && layout.sub_pkg_enable {
            let counter = Name::new(config.counter_model_name());
            set.insert(layout.dao_package(&counter).path);
        }

        set
    }
}

fn model_package(declared: &Package, alias: Option<&str>) -> Package {
    let mut package = declared.clone();

    if let Some(alias) = alias {
        package.alias = Some(alias.to_string());
    }

    if RESERVED_PACKAGE_NAMES.contains(&package.local_name()) {
        package.alias = Some(MODEL_PACKAGE_ALIAS.to_string());
    }

    if package.alias.as_deref() == Some(package.name.as_str()) {
        package.alias = None;
    }

    package
}
