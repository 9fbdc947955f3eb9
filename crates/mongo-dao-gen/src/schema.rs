pub(crate) mod attr;

mod auto;
pub use auto::AutoStrategy;

mod column;
pub use column::RenameRule;

mod counter;
pub use counter::Counter;

mod declaration;
pub use declaration::{Annotation, Declaration, FieldDecl, Package};

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub use field::Field;

mod imports;
pub use imports::ImportSet;

mod layout;
pub use layout::Layout;

pub mod loader;
pub use loader::DeclarationLoader;

mod model;
pub use model::Model;

mod module_path;

mod name;
pub use name::{Name, ParseStyleError, Style};

mod ty;
pub use ty::{FieldType, IntWidth, TypeClass};
