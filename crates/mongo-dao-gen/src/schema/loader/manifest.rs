use super::{select, DeclarationLoader};
use crate::schema::{Annotation, Declaration, FieldDecl, Package};
use crate::{Error, Result};

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Loads declarations from a TOML manifest.
///
/// ```toml
/// [[model]]
/// name = "User"
/// package = "crate::model"
///
/// [[model.field]]
/// name = "id"
/// ty = "ObjectId"
/// column = "_id"
/// dao = "autoFill"
/// ```
#[derive(Debug, Clone)]
pub struct ManifestLoader {
    path: PathBuf,
    package_path: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default, rename = "model")]
    models: Vec<ManifestModel>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct ManifestModel {
    name: String,
    package: Option<String>,
    rename_all: Option<String>,
    #[serde(default, rename = "field")]
    fields: Vec<ManifestField>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestField {
    name: String,
    ty: String,
    column: Option<String>,
    dao: Option<String>,
    #[serde(default)]
    doc: Vec<String>,
    comment: Option<String>,
}

impl ManifestLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            package_path: None,
        }
    }

    /// Module path of every model, overriding the manifest's `package`
    /// entries.
    pub fn package_path(mut self, path: impl Into<String>) -> Self {
        self.package_path = Some(path.into());
        self
    }

    fn read(&self) -> Result<Manifest> {
        let contents = fs::read_to_string(&self.path).map_err(|err| Error::io(&self.path, err))?;

        toml::from_str(&contents).map_err(|source| Error::Toml {
            path: self.path.clone(),
            source,
        })
    }

    fn declaration(&self, model: ManifestModel) -> Result<Declaration> {
        let package = match (&self.package_path, model.package) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => path,
            (None, None) => {
                return Err(Error::InvalidConfig(format!(
                    "manifest model `{}` names no package and no model package path is configured",
                    model.name
                )))
            }
        };

        let mut decl = Declaration::new(model.name, Package::new(package));
        decl.source = Some(self.path.clone());

        if let Some(case) = model.rename_all {
            decl = decl.annotate(Annotation::SERDE_RENAME_ALL, case);
        }

        for field in model.fields {
            let mut field_decl = FieldDecl::new(field.name, field.ty);

            if let Some(column) = field.column {
                field_decl = field_decl.annotate(Annotation::COLUMN, column);
            }

            if let Some(dao) = field.dao {
                field_decl = field_decl.annotate(Annotation::DAO, dao);
            }

            field_decl.docs = field.doc;
            field_decl.comment = field.comment;

            decl = decl.field(field_decl);
        }

        Ok(decl)
    }
}

impl DeclarationLoader for ManifestLoader {
    fn load(&self, names: &[String]) -> Result<Vec<Declaration>> {
        let manifest = self.read()?;

        let found = manifest
            .models
            .into_iter()
            .map(|model| self.declaration(model))
            .collect::<Result<Vec<_>>>()?;

        select(found, names, &self.path)
    }
}
