use crate::expand::{self, Substitutions, TemplateKind};
use crate::schema::{Counter, Model};
use crate::{Error, Outcome, Result, Writer};

use std::collections::HashSet;
use std::path::PathBuf;

/// What to do when a target file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    Always,
    SkipIfExists,
}

/// One file to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTarget {
    pub kind: TemplateKind,
    pub substitutions: Substitutions,
    pub path: PathBuf,
    pub policy: OverwritePolicy,
}

impl GenerationTarget {
    pub fn render(&self) -> String {
        self.kind.template().expand(&self.substitutions)
    }

    pub fn execute(&self, writer: &mut dyn Writer) -> Result<Outcome> {
        if self.policy == OverwritePolicy::SkipIfExists
            && writer
                .exists(&self.path)
                .map_err(|err| Error::io(&self.path, err))?
        {
            log::info!("skipped {} (exists)", self.path.display());
            return Ok(Outcome::Skipped);
        }

        writer
            .write(&self.path, &self.render())
            .map_err(|err| Error::io(&self.path, err))?;

        log::info!("wrote {}", self.path.display());
        Ok(Outcome::Written)
    }
}

/// Every target of a run, model targets first in model order, then the
/// counter targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub targets: Vec<GenerationTarget>,
}

impl Plan {
    /// Fails when two targets would write the same file.
    pub fn new(models: &[Model], counter: Option<&Counter>) -> Result<Self> {
        let mut targets: Vec<_> = models.iter().flat_map(expand::model_targets).collect();

        if let Some(counter) = counter {
            targets.extend(expand::counter_targets(counter));
        }

        let mut paths = HashSet::new();
        for target in &targets {
            if !paths.insert(&target.path) {
                return Err(Error::InvalidConfig(format!(
                    "more than one file would be generated at `{}`; rename a model or the counter",
                    target.path.display()
                )));
            }
        }

        Ok(Self { targets })
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
