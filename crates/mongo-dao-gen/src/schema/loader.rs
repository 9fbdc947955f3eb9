//! Sources of model declarations.

mod manifest;
pub use manifest::ManifestLoader;

mod source;
pub use source::SourceLoader;

use super::Declaration;
use crate::{Error, Result};

use std::path::{Path, PathBuf};

/// Produces the declarations of the requested models.
///
/// Implementations share one contract:
///
/// * declarations come back in the order the names were requested;
/// * a requested name that is not declared is logged and skipped, but if
///   none is found the load fails with [`Error::DeclarationNotFound`];
/// * a name declared in more than one module fails with
///   [`Error::AmbiguousModule`].
///
/// Loaders that accept an empty name list return every declaration they
/// know about.
pub trait DeclarationLoader {
    fn load(&self, names: &[String]) -> Result<Vec<Declaration>>;
}

/// Declarations handed over in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticLoader {
    declarations: Vec<Declaration>,
}

impl StaticLoader {
    pub fn new(declarations: impl IntoIterator<Item = Declaration>) -> Self {
        Self {
            declarations: declarations.into_iter().collect(),
        }
    }
}

impl DeclarationLoader for StaticLoader {
    fn load(&self, names: &[String]) -> Result<Vec<Declaration>> {
        select(self.declarations.clone(), names, Path::new("<memory>"))
    }
}

/// Applies the loader contract to everything a loader found.
pub(crate) fn select(found: Vec<Declaration>, names: &[String], origin: &Path) -> Result<Vec<Declaration>> {
    if names.is_empty() {
        if found.is_empty() {
            return Err(not_found(names, origin));
        }

        for decl in &found {
            if let Some(ambiguous) = ambiguity(&found, &decl.name) {
                return Err(ambiguous);
            }
        }

        return Ok(found);
    }

    let mut selected = vec![];
    let mut missing = vec![];

    for name in names {
        if selected.iter().any(|decl: &Declaration| decl.name == *name) {
            continue;
        }

        if let Some(ambiguous) = ambiguity(&found, name) {
            return Err(ambiguous);
        }

        match found.iter().find(|decl| decl.name == *name) {
            Some(decl) => {
                log::debug!("loaded `{}` from `{}`", decl.name, decl.package.path);
                selected.push(decl.clone());
            }
            None => missing.push(name.clone()),
        }
    }

    if selected.is_empty() {
        return Err(not_found(names, origin));
    }

    for name in &missing {
        log::warn!(
            "model `{name}` is not declared under `{}`; skipping",
            origin.display()
        );
    }

    Ok(selected)
}

fn ambiguity(found: &[Declaration], name: &str) -> Option<Error> {
    let candidates: Vec<_> = found.iter().filter(|decl| decl.name == name).collect();

    if candidates.len() < 2 {
        return None;
    }

    Some(Error::AmbiguousModule {
        name: name.to_string(),
        candidates: candidates
            .into_iter()
            .map(|decl| match &decl.source {
                Some(source) => format!("{} ({})", decl.package.path, source.display()),
                None => decl.package.path.clone(),
            })
            .collect(),
    })
}

fn not_found(names: &[String], origin: &Path) -> Error {
    Error::DeclarationNotFound {
        names: names.to_vec(),
        dir: PathBuf::from(origin),
    }
}
