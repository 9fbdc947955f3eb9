//! Generates a two-layer MongoDB data access object (DAO) for every model
//! declaration it is pointed at.
//!
//! A run loads declarations, classifies their fields, builds one descriptor
//! per model (plus a shared counter descriptor when a model asks for
//! sequence-generated ids), turns the descriptors into a [`Plan`] of
//! generation targets and hands every target to a [`Writer`].
//!
//! ```no_run
//! use mongo_dao_gen::{Config, FsWriter, Generator};
//!
//! let config = Config::new()
//!     .model_dir("src/model")
//!     .model_names(["User"])
//!     .dao_dir("src/dao");
//!
//! let report = Generator::new(config).run(&mut FsWriter)?;
//! println!("{} file(s) written", report.written());
//! # Ok::<(), mongo_dao_gen::Error>(())
//! ```

mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

pub mod expand;

mod generator;
pub use generator::{Generator, Report, ReportEntry};

mod plan;
pub use plan::{GenerationTarget, OverwritePolicy, Plan};

pub mod schema;
pub use schema::loader::{ManifestLoader, SourceLoader, StaticLoader};
pub use schema::{Declaration, DeclarationLoader, Style};

mod writer;
pub use writer::{DryRunWriter, FsWriter, Outcome, Writer};

use proc_macro2::TokenStream;

/// Validates the `#[dao(..)]` and `#[column(..)]` annotations of a model
/// declaration. Used by `#[derive(Dao)]`, which emits no code of its own.
pub fn check(input: TokenStream) -> syn::Result<()> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    schema::attr::check_item(&item)
}
