use std::io;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error that aborts a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration cannot drive a run (for example no model names).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// None of the requested models is declared under the model directory.
    #[error(
        "no exported record type named {} found under `{}`",
        .names.join(", "),
        .dir.display()
    )]
    DeclarationNotFound { names: Vec<String>, dir: PathBuf },

    /// A requested model is declared in more than one module.
    #[error(
        "model `{name}` is declared in more than one module: {}",
        .candidates.join(", ")
    )]
    AmbiguousModule {
        name: String,
        candidates: Vec<String>,
    },

    /// No module path could be derived for a file or directory.
    #[error(
        "cannot derive a module path for `{}`; it is not under a crate `src` directory, \
         set the package path explicitly",
        .path.display()
    )]
    UnresolvedModule { path: PathBuf },

    /// The declaration exists but cannot be turned into a DAO.
    #[error("model `{name}` is not supported: {reason}")]
    UnsupportedModel { name: String, reason: String },

    /// A TOML configuration file or declaration manifest is malformed.
    #[error("failed to parse `{}`", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Reading declarations or writing generated files failed.
    #[error("I/O error on `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
