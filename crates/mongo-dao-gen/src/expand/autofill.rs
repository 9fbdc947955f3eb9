use crate::schema::{AutoStrategy, Field, IntWidth, Model};

/// Indentation of the `autofill` body in the model template.
const INDENT: &str = "        ";

/// Body of the generated `autofill` method: one zero-value guard per
/// generated field, in declaration order.
pub(super) fn body(model: &Model) -> String {
    let mut blocks = vec![];

    for field in &model.fields {
        let Some(auto) = &field.auto else { continue };

        let block = match auto {
            AutoStrategy::ObjectId => guard(field, "bson::oid::ObjectId::new()", |field| {
                format!("model.{}.bytes() == [0; 12]", field.name)
            }),
            AutoStrategy::DateTime => guard(field, "DateTime::now()", |field| {
                format!("model.{}.timestamp_millis() == 0", field.name)
            }),
            AutoStrategy::Increment { key, width } => {
                let counter = model.counter_type.as_deref().unwrap_or_default();
                increment(field, counter, key, *width)
            }
        };

        blocks.push(block);
    }

    blocks.push(vec!["Ok(())".to_string()]);

    let body = blocks
        .into_iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");

    indent(&body)
}

/// `if <zero> { model.<field> = <value>; }`, with `Option` fields checked
/// for `None` instead.
fn guard(field: &Field, value: &str, is_zero: impl Fn(&Field) -> String) -> Vec<String> {
    let (condition, value) = if field.ty.nullable {
        (format!("model.{}.is_none()", field.name), format!("Some({value})"))
    } else {
        (is_zero(field), value.to_string())
    };

    vec![
        format!("if {condition} {{"),
        format!("    model.{} = {value};", field.name),
        "}".to_string(),
    ]
}

fn increment(field: &Field, counter: &str, key: &str, width: IntWidth) -> Vec<String> {
    let value = match width {
        IntWidth::I64 => "value".to_string(),
        width => format!("value as {}", width.as_str()),
    };

    let (condition, value) = if field.ty.nullable {
        (format!("model.{}.is_none()", field.name), format!("Some({value})"))
    } else {
        (format!("model.{} == 0", field.name), value)
    };

    vec![
        format!("if {condition} {{"),
        format!("    let value = {counter}::new(&self.database).incr({key:?}).await?;"),
        format!("    model.{} = {value};", field.name),
        "}".to_string(),
    ]
}

/// Indents every line but the first, which follows the slot's own
/// indentation in the template.
fn indent(body: &str) -> String {
    body.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.is_empty() {
                line.to_string()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Declaration, FieldDecl, Layout, Package};
    use crate::{Config, Style};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn model(fields: Vec<FieldDecl>) -> Model {
        let layout = Layout {
            dao_dir: PathBuf::from("src/dao"),
            dao_path: "crate::dao".to_string(),
            sub_pkg_enable: false,
            sub_pkg_style: Style::Kebab,
            file_name_style: Style::Underscore,
        };

        let mut decl = Declaration::new("User", Package::new("crate::entity"));
        decl.fields = fields;

        Model::build(&decl, &Config::new(), &layout).unwrap()
    }

    #[test]
    fn nothing_to_fill() {
        let model = model(vec![FieldDecl::new("name", "String").annotate("dao", "autoFill")]);
        assert_eq!(body(&model), "Ok(())");
    }

    #[test]
    fn guards_in_declaration_order() {
        let model = model(vec![
            FieldDecl::new("id", "ObjectId").annotate("dao", "autoFill"),
            FieldDecl::new("uid", "i32").annotate("dao", "autoIncr:uid"),
            FieldDecl::new("created_at", "Option<DateTime>").annotate("dao", "autoFill"),
        ]);

        assert_eq!(
            body(&model),
            [
                "if model.id.bytes() == [0; 12] {",
                "            model.id = bson::oid::ObjectId::new();",
                "        }",
                "",
                "        if model.uid == 0 {",
                "            let value = crate::dao::counter::Counter::new(&self.database).incr(\"uid\").await?;",
                "            model.uid = value as i32;",
                "        }",
                "",
                "        if model.created_at.is_none() {",
                "            model.created_at = Some(DateTime::now());",
                "        }",
                "",
                "        Ok(())",
            ]
            .join("\n")
        );
    }

    #[test]
    fn sequence_widths() {
        let model = model(vec![
            FieldDecl::new("seq", "i64").annotate("dao", "autoIncr:seq"),
            FieldDecl::new("no", "Option<u16>").annotate("dao", "autoIncr:no"),
        ]);
        let body = body(&model);

        assert!(body.contains("model.seq = value;"));
        assert!(body.contains("if model.no.is_none() {"));
        assert!(body.contains("model.no = Some(value as u16);"));
    }
}
