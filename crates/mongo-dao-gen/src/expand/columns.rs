use crate::schema::Field;

const INDENT: &str = "    ";

/// Body of the `<Prefix>Columns` struct: one `&'static str` field per model
/// field, types aligned.
pub(super) fn define(fields: &[Field]) -> String {
    let width = fields.iter().map(|field| width(&field.name)).max().unwrap_or(0);

    let lines = fields.iter().map(|field| {
        let pad = " ".repeat(width - self::width(&field.name) + 1);
        let line = format!("pub {}:{pad}&'static str,", field.name);

        with_comment(line, field)
    });

    join(lines)
}

/// Body of the static columns instance: one `name: "column",` line per
/// field, column values and trailing comments aligned.
pub(super) fn instance(fields: &[Field]) -> String {
    let width = fields.iter().map(|field| width(&field.name)).max().unwrap_or(0);

    let entries: Vec<_> = fields
        .iter()
        .map(|field| {
            let pad = " ".repeat(width - self::width(&field.name) + 1);
            format!("{}:{pad}{:?},", field.name, field.column)
        })
        .collect();

    let entry_width = entries.iter().map(|entry| self::width(entry)).max().unwrap_or(0);

    let lines = entries.into_iter().zip(fields).map(|(entry, field)| {
        match field.description() {
            Some(text) => {
                let pad = " ".repeat(entry_width - self::width(&entry) + 1);
                format!("{entry}{pad}// {text}")
            }
            None => entry,
        }
    });

    join(lines)
}

fn with_comment(line: String, field: &Field) -> String {
    match field.description() {
        Some(text) => format!("{line} // {text}"),
        None => line,
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

/// Joins lines for a slot that is already indented in the template.
fn join(lines: impl Iterator<Item = String>) -> String {
    lines.collect::<Vec<_>>().join(&format!("\n{INDENT}"))
}
