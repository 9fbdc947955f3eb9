use std::fmt;

/// A `${Name}` slot in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Imports,
    ModelPackageName,
    ModelClassName,
    DaoClassName,
    DaoPrefixName,
    CollectionName,
    ColumnsStatic,
    ColumnsDefine,
    ColumnsInstance,
    AutofillCode,
    InternalFile,
    CounterModelName,
}

impl Placeholder {
    pub const ALL: [Placeholder; 12] = [
        Placeholder::Imports,
        Placeholder::ModelPackageName,
        Placeholder::ModelClassName,
        Placeholder::DaoClassName,
        Placeholder::DaoPrefixName,
        Placeholder::CollectionName,
        Placeholder::ColumnsStatic,
        Placeholder::ColumnsDefine,
        Placeholder::ColumnsInstance,
        Placeholder::AutofillCode,
        Placeholder::InternalFile,
        Placeholder::CounterModelName,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Imports => "Imports",
            Placeholder::ModelPackageName => "ModelPackageName",
            Placeholder::ModelClassName => "ModelClassName",
            Placeholder::DaoClassName => "DaoClassName",
            Placeholder::DaoPrefixName => "DaoPrefixName",
            Placeholder::CollectionName => "CollectionName",
            Placeholder::ColumnsStatic => "ColumnsStatic",
            Placeholder::ColumnsDefine => "ColumnsDefine",
            Placeholder::ColumnsInstance => "ColumnsInstance",
            Placeholder::AutofillCode => "AutofillCode",
            Placeholder::InternalFile => "InternalFile",
            Placeholder::CounterModelName => "CounterModelName",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Placeholder::ALL.into_iter().find(|placeholder| placeholder.name() == name)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${{{}}}", self.name())
    }
}

/// Values for every placeholder. Fields a template does not use stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    pub imports: String,
    pub model_package_name: String,
    pub model_class_name: String,
    pub dao_class_name: String,
    pub dao_prefix_name: String,
    pub collection_name: String,
    pub columns_static: String,
    pub columns_define: String,
    pub columns_instance: String,
    pub autofill_code: String,
    pub internal_file: String,
    pub counter_model_name: String,
}

impl Substitutions {
    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Imports => &self.imports,
            Placeholder::ModelPackageName => &self.model_package_name,
            Placeholder::ModelClassName => &self.model_class_name,
            Placeholder::DaoClassName => &self.dao_class_name,
            Placeholder::DaoPrefixName => &self.dao_prefix_name,
            Placeholder::CollectionName => &self.collection_name,
            Placeholder::ColumnsStatic => &self.columns_static,
            Placeholder::ColumnsDefine => &self.columns_define,
            Placeholder::ColumnsInstance => &self.columns_instance,
            Placeholder::AutofillCode => &self.autofill_code,
            Placeholder::InternalFile => &self.internal_file,
            Placeholder::CounterModelName => &self.counter_model_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),

    /// `${Name}` naming no placeholder; expands to nothing
    Unknown(String),
}

/// A template split into literal text and placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses template text. One leading newline is dropped so template
    /// files can start on the line after their opening.
    pub fn parse(src: &str) -> Self {
        let mut rest = src.strip_prefix('\n').unwrap_or(src);
        let mut segments = vec![];
        let mut literal = String::new();

        while let Some(start) = rest.find("${") {
            let Some(len) = rest[start + 2..].find('}') else {
                break;
            };

            literal.push_str(&rest[..start]);

            let name = &rest[start + 2..start + 2 + len];
            let segment = match Placeholder::from_name(name) {
                Some(placeholder) => Segment::Placeholder(placeholder),
                None => {
                    log::warn!("template placeholder `${{{name}}}` is unknown and expands to nothing");
                    Segment::Unknown(name.to_string())
                }
            };

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(segment);

            rest = &rest[start + 2 + len + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    pub fn expand(&self, substitutions: &Substitutions) -> String {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(placeholder) => out.push_str(substitutions.get(*placeholder)),
                Segment::Unknown(_) => {}
            }
        }

        out
    }

    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(*placeholder),
            _ => None,
        })
    }

    pub fn unknown_placeholders(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Unknown(name) => Some(name.as_str()),
            _ => None,
        })
    }
}
