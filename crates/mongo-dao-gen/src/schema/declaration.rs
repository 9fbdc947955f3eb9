use std::path::PathBuf;

/// A `key = value` annotation attached to a declared field or model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub key: String,
    pub value: String,
}

impl Annotation {
    /// `#[column("name")]`
    pub const COLUMN: &'static str = "column";

    /// `#[serde(rename = "name")]`
    pub const SERDE_RENAME: &'static str = "serde.rename";

    /// `#[serde(skip)]`
    pub const SERDE_SKIP: &'static str = "serde.skip";

    /// `#[serde(rename_all = "camelCase")]` on the model
    pub const SERDE_RENAME_ALL: &'static str = "serde.rename_all";

    /// `#[dao("autoFill;autoIncr:uid")]`
    pub const DAO: &'static str = "dao";

    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The module a model is declared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Last segment of `path`
    pub name: String,

    /// Module path, `crate::model`
    pub path: String,

    /// Name the generated code binds the module to, when it differs from
    /// `name`
    pub alias: Option<String>,
}

impl Package {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit("::").next().unwrap_or(&path).to_string();

        Self {
            name,
            path,
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The name generated code uses to refer to the module.
    pub fn local_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// True for the crate root, which needs no `use`.
    pub fn is_crate_root(&self) -> bool {
        self.path == "crate"
    }
}

/// A field as declared, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,

    /// Declared type as source text, `Option<ObjectId>`
    pub ty: String,

    pub annotations: Vec<Annotation>,

    /// Doc comment lines
    pub docs: Vec<String>,

    /// Trailing `//` comment on the field's line
    pub comment: Option<String>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotations: vec![],
            docs: vec![],
            comment: None,
        }
    }

    pub fn annotate(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.push(Annotation::new(key, value));
        self
    }

    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.docs.push(line.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Values of every annotation with the given key, in declaration order.
    pub fn annotations<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.annotations
            .iter()
            .filter(move |annotation| annotation.key == key)
            .map(|annotation| annotation.value.as_str())
    }

    /// Field name without a raw identifier prefix.
    pub fn unraw_name(&self) -> &str {
        self.name.strip_prefix("r#").unwrap_or(&self.name)
    }
}

/// A model declaration as produced by a loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub package: Package,
    pub fields: Vec<FieldDecl>,
    pub annotations: Vec<Annotation>,

    /// File the declaration was read from, if any
    pub source: Option<PathBuf>,
}

impl Declaration {
    pub fn new(name: impl Into<String>, package: Package) -> Self {
        Self {
            name: name.into(),
            package,
            fields: vec![],
            annotations: vec![],
            source: None,
        }
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn annotate(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.push(Annotation::new(key, value));
        self
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations
            .iter()
            .find(|annotation| annotation.key == key)
            .map(|annotation| annotation.value.as_str())
    }
}
