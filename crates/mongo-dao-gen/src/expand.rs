//! Turns descriptors into generated source text.

mod autofill;
mod columns;

mod template;
pub use template::{Placeholder, Substitutions, Template};

use crate::plan::{GenerationTarget, OverwritePolicy};
use crate::schema::{Counter, Model};

use std::sync::OnceLock;

/// The bundled templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Regenerated on every run
    ModelInternal,

    /// Written once, then owned by the user
    ModelExternal,

    CounterInternal,
    CounterExternal,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::ModelInternal,
        TemplateKind::ModelExternal,
        TemplateKind::CounterInternal,
        TemplateKind::CounterExternal,
    ];

    pub fn template(self) -> &'static Template {
        static MODEL_INTERNAL: OnceLock<Template> = OnceLock::new();
        static MODEL_EXTERNAL: OnceLock<Template> = OnceLock::new();
        static COUNTER_INTERNAL: OnceLock<Template> = OnceLock::new();
        static COUNTER_EXTERNAL: OnceLock<Template> = OnceLock::new();

        let cell = match self {
            TemplateKind::ModelInternal => &MODEL_INTERNAL,
            TemplateKind::ModelExternal => &MODEL_EXTERNAL,
            TemplateKind::CounterInternal => &COUNTER_INTERNAL,
            TemplateKind::CounterExternal => &COUNTER_EXTERNAL,
        };

        cell.get_or_init(|| Template::parse(self.source()))
    }

    fn source(self) -> &'static str {
        match self {
            TemplateKind::ModelInternal => include_str!("../templates/model_internal.rs.tpl"),
            TemplateKind::ModelExternal => include_str!("../templates/model_external.rs.tpl"),
            TemplateKind::CounterInternal => include_str!("../templates/counter_internal.rs.tpl"),
            TemplateKind::CounterExternal => include_str!("../templates/counter_external.rs.tpl"),
        }
    }

    pub fn is_internal(self) -> bool {
        matches!(self, TemplateKind::ModelInternal | TemplateKind::CounterInternal)
    }

    pub fn description(self) -> &'static str {
        match self {
            TemplateKind::ModelInternal => "model internal",
            TemplateKind::ModelExternal => "model external",
            TemplateKind::CounterInternal => "counter internal",
            TemplateKind::CounterExternal => "counter external",
        }
    }
}

pub fn model_substitutions(model: &Model) -> Substitutions {
    Substitutions {
        imports: model.imports.render(),
        model_package_name: model.package.local_name().to_string(),
        model_class_name: model.name.clone(),
        dao_class_name: model.class_name.clone(),
        dao_prefix_name: model.prefix_name.clone(),
        collection_name: model.collection_name.clone(),
        columns_static: format!("{}_COLUMNS", model.collection_name.to_uppercase()),
        columns_define: columns::define(&model.fields),
        columns_instance: columns::instance(&model.fields),
        autofill_code: autofill::body(model),
        internal_file: model.file_name.clone(),
        counter_model_name: String::new(),
    }
}

pub fn counter_substitutions(counter: &Counter) -> Substitutions {
    Substitutions {
        imports: counter.imports.render(),
        dao_class_name: counter.class_name.clone(),
        dao_prefix_name: counter.prefix_name.clone(),
        collection_name: counter.collection_name.clone(),
        internal_file: counter.file_name.clone(),
        counter_model_name: counter.model_name.clone(),
        ..Substitutions::default()
    }
}

/// The internal and external file of a model.
pub fn model_targets(model: &Model) -> [GenerationTarget; 2] {
    let substitutions = model_substitutions(model);
    let internal = model.output_dir.join("internal").join(&model.file_name);
    let external = model.output_dir.join(&model.file_name);

    [
        GenerationTarget {
            kind: TemplateKind::ModelInternal,
            substitutions: substitutions.clone(),
            path: internal,
            policy: OverwritePolicy::Always,
        },
        GenerationTarget {
            kind: TemplateKind::ModelExternal,
            substitutions,
            path: external,
            policy: OverwritePolicy::SkipIfExists,
        },
    ]
}

/// The internal and external file of the counter.
pub fn counter_targets(counter: &Counter) -> [GenerationTarget; 2] {
    let substitutions = counter_substitutions(counter);
    let internal = counter.output_dir.join("internal").join(&counter.file_name);
    let external = counter.output_dir.join(&counter.file_name);

    [
        GenerationTarget {
            kind: TemplateKind::CounterInternal,
            substitutions: substitutions.clone(),
            path: internal,
            policy: OverwritePolicy::Always,
        },
        GenerationTarget {
            kind: TemplateKind::CounterExternal,
            substitutions,
            path: external,
            policy: OverwritePolicy::SkipIfExists,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Declaration, FieldDecl, Layout, Package};
    use crate::{Config, Style};
    use std::path::PathBuf;

    fn layout() -> Layout {
        Layout {
            dao_dir: PathBuf::from("src/dao"),
            dao_path: "crate::dao".to_string(),
            sub_pkg_enable: false,
            sub_pkg_style: Style::Kebab,
            file_name_style: Style::Underscore,
        }
    }

    #[test]
    fn model_type_keeps_declared_name() {
        let decl = Declaration::new("Order_Item", Package::new("crate::model::order_item"))
            .field(FieldDecl::new("no", "i32"));
        let model = Model::build(&decl, &Config::new(), &layout()).unwrap();
        let substitutions = model_substitutions(&model);

        assert_eq!(substitutions.model_class_name, "Order_Item");
        assert_eq!(substitutions.dao_class_name, "OrderItem");

        let text = TemplateKind::ModelInternal.template().expand(&substitutions);
        assert!(text.contains("Collection<order_item::Order_Item>"), "{text}");
    }

    #[test]
    fn bundled_templates_have_no_unknown_placeholders() {
        for kind in TemplateKind::ALL {
            let unknown: Vec<_> = kind.template().unknown_placeholders().collect();
            assert!(unknown.is_empty(), "{}: {unknown:?}", kind.description());
        }
    }

    #[test]
    fn bundled_templates_start_with_content() {
        for kind in TemplateKind::ALL {
            let text = kind.template().expand(&Substitutions::default());
            assert!(!text.starts_with('\n'), "{}", kind.description());
        }
    }

    #[test]
    fn model_templates_use_model_placeholders() {
        let used: Vec<_> = TemplateKind::ModelInternal.template().placeholders().collect();

        for placeholder in [
            Placeholder::Imports,
            Placeholder::ColumnsDefine,
            Placeholder::ColumnsInstance,
            Placeholder::AutofillCode,
        ] {
            assert!(used.contains(&placeholder), "{placeholder} unused");
        }

        assert!(!used.contains(&Placeholder::CounterModelName));
    }
}
