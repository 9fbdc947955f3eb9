use super::{select, DeclarationLoader};
use crate::schema::{attr, module_path, Annotation, Declaration, FieldDecl, Package};
use crate::{Error, Result};

use quote::ToTokens;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Loads declarations by scanning Rust source files.
///
/// Every `.rs` file under the directory is parsed; `target` and hidden
/// directories are skipped. A record is a `pub` struct with named fields.
#[derive(Debug, Clone)]
pub struct SourceLoader {
    dir: PathBuf,
    package_path: Option<String>,
}

/// A requested struct found in a file, with the inline modules around it.
struct Found<'a> {
    nesting: Vec<String>,
    item: &'a syn::ItemStruct,
}

impl SourceLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            package_path: None,
        }
    }

    /// Uses `path` as the module of every declaration instead of deriving it
    /// from file locations.
    pub fn package_path(mut self, path: impl Into<String>) -> Self {
        self.package_path = Some(path.into());
        self
    }

    fn files(&self) -> Result<Vec<PathBuf>> {
        let mut files = vec![];

        let walker = WalkDir::new(&self.dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

        for entry in walker {
            let entry = entry.map_err(|err| {
                let path = err.path().map_or_else(|| self.dir.clone(), Path::to_path_buf);
                Error::io(path, err.into())
            })?;

            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "rs")
            {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn scan_file(&self, path: &Path, names: &HashSet<&str>, out: &mut Vec<Declaration>) -> Result<()> {
        let src = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;

        let file = match syn::parse_file(&src) {
            Ok(file) => file,
            Err(err) => {
                log::warn!("skipping `{}`: {err}", path.display());
                return Ok(());
            }
        };

        let mut found = vec![];
        collect(&file.items, &mut vec![], names, &mut found);

        if found.is_empty() {
            return Ok(());
        }

        let module = match &self.package_path {
            Some(path) => path.clone(),
            None => module_path::of_file(path)?,
        };

        let lines: Vec<&str> = src.lines().collect();

        for Found { nesting, item } in found {
            let package = match &self.package_path {
                Some(_) => Package::new(module.clone()),
                None => Package::new(
                    std::iter::once(module.as_str())
                        .chain(nesting.iter().map(String::as_str))
                        .collect::<Vec<_>>()
                        .join("::"),
                ),
            };

            if let Some(decl) = declaration(item, package, path, &lines)? {
                out.push(decl);
            }
        }

        Ok(())
    }
}

impl DeclarationLoader for SourceLoader {
    fn load(&self, names: &[String]) -> Result<Vec<Declaration>> {
        if names.is_empty() {
            return Err(Error::InvalidConfig(
                "scanning sources requires at least one model name".to_string(),
            ));
        }

        let requested: HashSet<&str> = names.iter().map(String::as_str).collect();
        let mut found = vec![];

        for file in self.files()? {
            self.scan_file(&file, &requested, &mut found)?;
        }

        select(found, names, &self.dir)
    }
}

fn is_skipped_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name == "target" || name.starts_with('.'))
}

fn collect<'a>(
    items: &'a [syn::Item],
    nesting: &mut Vec<String>,
    names: &HashSet<&str>,
    out: &mut Vec<Found<'a>>,
) {
    for item in items {
        match item {
            syn::Item::Struct(item) if names.contains(item.ident.to_string().as_str()) => {
                if is_exported(&item.vis) {
                    out.push(Found {
                        nesting: nesting.clone(),
                        item,
                    });
                } else {
                    log::debug!("ignoring private struct `{}`", item.ident);
                }
            }
            syn::Item::Mod(module) if !attr::is_cfg_test(&module.attrs) => {
                if let Some((_, items)) = &module.content {
                    nesting.push(module.ident.to_string());
                    collect(items, nesting, names, out);
                    nesting.pop();
                }
            }
            _ => {}
        }
    }
}

fn is_exported(vis: &syn::Visibility) -> bool {
    !matches!(vis, syn::Visibility::Inherited)
}

fn declaration(
    item: &syn::ItemStruct,
    package: Package,
    path: &Path,
    lines: &[&str],
) -> Result<Option<Declaration>> {
    let name = item.ident.to_string();

    let syn::Fields::Named(fields) = &item.fields else {
        log::debug!("ignoring `{name}` in `{}`: not a record", path.display());
        return Ok(None);
    };

    if !item.generics.params.is_empty() {
        return Err(Error::UnsupportedModel {
            name,
            reason: "generic models are not supported".to_string(),
        });
    }

    let mut decl = Declaration::new(&name, package);
    decl.source = Some(path.to_path_buf());
    decl.annotations = annotations(&item.attrs, &name, path);

    for field in &fields.named {
        let Some(ident) = &field.ident else { continue };

        if !is_exported(&field.vis) {
            log::debug!("`{name}.{ident}` is private; leaving it out");
            continue;
        }

        let annotations = annotations(&field.attrs, &name, path);
        if annotations.iter().any(|annotation| annotation.key == Annotation::SERDE_SKIP) {
            continue;
        }

        let mut field_decl = FieldDecl::new(ident.to_string(), signature(&field.ty));
        field_decl.annotations = annotations;
        field_decl.docs = attr::docs(&field.attrs);
        field_decl.comment = trailing_comment(&field.ty, lines);

        decl.fields.push(field_decl);
    }

    log::debug!(
        "found `{name}` in `{}` ({} field(s))",
        path.display(),
        decl.fields.len()
    );

    Ok(Some(decl))
}

fn annotations(attrs: &[syn::Attribute], model: &str, path: &Path) -> Vec<Annotation> {
    let (annotations, errs) = attr::annotations(attrs);

    if let Err(err) = errs.into_result() {
        log::warn!(
            "`{model}` in `{}`: ignoring malformed annotation: {err}",
            path.display()
        );
    }

    annotations
}

/// Type signature as compact source text, `Option<ObjectId>`.
fn signature(ty: &syn::Type) -> String {
    let spaced = ty.to_token_stream().to_string();
    let chars: Vec<char> = spaced.chars().collect();
    let mut out = String::with_capacity(spaced.len());

    for (i, &ch) in chars.iter().enumerate() {
        if ch == ' ' {
            let prev = i.checked_sub(1).map(|i| chars[i]);
            let next = chars.get(i + 1).copied();

            if !(prev.is_some_and(is_word_char) && next.is_some_and(is_word_char)) {
                continue;
            }
        }

        out.push(ch);
    }

    out
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '\''
}

/// The `// ...` comment following a field on the line its type ends on.
fn trailing_comment(ty: &syn::Type, lines: &[&str]) -> Option<String> {
    let end = ty.to_token_stream().into_iter().last()?.span().end();
    let line = lines.get(end.line.checked_sub(1)?)?;
    let rest: String = line.chars().skip(end.column).collect();

    let rest = rest.trim_start();
    let rest = rest.strip_prefix(',').unwrap_or(rest).trim_start();
    let text = rest.strip_prefix("//")?;

    if text.starts_with('/') || text.starts_with('!') {
        return None;
    }

    Some(text.trim().to_string()).filter(|text| !text.is_empty())
}
