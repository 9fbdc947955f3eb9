use super::{column, Annotation, AutoStrategy, FieldDecl, FieldType, RenameRule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name as declared, including any `r#` prefix
    pub name: String,

    /// Name of the stored document field
    pub column: String,

    pub ty: FieldType,

    /// Value injected before insert, if any
    pub auto: Option<AutoStrategy>,

    pub docs: Vec<String>,
    pub comment: Option<String>,
}

impl Field {
    pub fn classify(decl: &FieldDecl, rename_all: Option<RenameRule>) -> Self {
        let ty = FieldType::parse(&decl.ty);
        let directives = decl.annotations(Annotation::DAO).collect::<Vec<_>>().join(";");
        let auto = AutoStrategy::resolve(&directives, &ty);

        let field = Self {
            name: decl.name.clone(),
            column: column::storage_name(decl, rename_all),
            ty,
            auto,
            docs: decl.docs.clone(),
            comment: decl.comment.clone(),
        };

        log::debug!(
            "field `{}`: column=`{}` auto={:?}",
            field.name,
            field.column,
            field.auto
        );

        field
    }

    /// Text for the generated trailing comment: the inline comment, or else
    /// the first doc line. Block docs and manifest values can span lines;
    /// only their first non-blank line is used.
    pub fn description(&self) -> Option<&str> {
        self.comment
            .as_deref()
            .or_else(|| self.docs.first().map(String::as_str))
            .and_then(|text| {
                text.split(['\n', '\r'])
                    .map(str::trim)
                    .find(|line| !line.is_empty())
            })
    }
}
