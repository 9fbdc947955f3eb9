use crate::expand::TemplateKind;
use crate::schema::loader::{ManifestLoader, SourceLoader};
use crate::schema::{Counter, Declaration, DeclarationLoader, Layout, Model};
use crate::{Config, Outcome, Plan, Result, Writer};

use std::path::PathBuf;

/// Drives a generation run: load, describe, plan, write.
#[derive(Debug, Clone)]
pub struct Generator {
    config: Config,
}

/// Outcome of every target of a run, in plan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub path: PathBuf,
    pub kind: TemplateKind,
    pub outcome: Outcome,
}

impl Report {
    pub fn written(&self) -> usize {
        self.count(Outcome::Written)
    }

    pub fn skipped(&self) -> usize {
        self.count(Outcome::Skipped)
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome == outcome)
            .count()
    }
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The loader the configuration asks for: the manifest when one is set,
    /// the model directory otherwise.
    pub fn loader(&self) -> Box<dyn DeclarationLoader> {
        match &self.config.manifest {
            Some(path) => {
                let mut loader = ManifestLoader::new(path);
                if let Some(package) = &self.config.model_pkg_path {
                    loader = loader.package_path(package);
                }
                Box::new(loader)
            }
            None => {
                let mut loader = SourceLoader::new(&self.config.model_dir);
                if let Some(package) = &self.config.model_pkg_path {
                    loader = loader.package_path(package);
                }
                Box::new(loader)
            }
        }
    }

    /// Builds the descriptors of `declarations` and the resulting plan.
    pub fn plan(&self, declarations: &[Declaration]) -> Result<Plan> {
        let layout = Layout::resolve(&self.config)?;

        let models = declarations
            .iter()
            .map(|decl| Model::build(decl, &self.config, &layout))
            .collect::<Result<Vec<_>>>()?;

        let mut counter = None;
        for model in models.iter().filter(|model| model.requires_counter) {
            log::debug!("`{}` needs the counter", model.name);
            counter.get_or_insert_with(|| Counter::build(&self.config, &layout));
        }

        Plan::new(&models, counter.as_ref())
    }

    /// Runs with the configured loader.
    pub fn run(&self, writer: &mut dyn Writer) -> Result<Report> {
        self.run_with(self.loader().as_ref(), writer)
    }

    /// Stops at the first failing target; files written before it stay.
    pub fn run_with(&self, loader: &dyn DeclarationLoader, writer: &mut dyn Writer) -> Result<Report> {
        self.config.validate()?;

        let declarations = loader.load(&self.config.requested_names())?;
        let plan = self.plan(&declarations)?;

        let mut report = Report::default();
        for target in &plan.targets {
            let outcome = target.execute(writer)?;

            report.entries.push(ReportEntry {
                path: target.path.clone(),
                kind: target.kind,
                outcome,
            });
        }

        Ok(report)
    }
}
