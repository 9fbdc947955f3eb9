use crate::{Error, Result};

use std::path::{Component, Path, PathBuf};

/// Module path of a source file, `crate::model::user` for
/// `<crate>/src/model/user.rs`.
pub(crate) fn of_file(file: &Path) -> Result<String> {
    let (src, absolute) = locate(file)?;
    let relative = absolute
        .strip_prefix(&src)
        .map_err(|_| unresolved(file))?;

    let mut segments = segments(relative.parent().unwrap_or(Path::new("")), file)?;

    match relative.file_stem().and_then(|stem| stem.to_str()) {
        Some("mod") => {}
        Some("lib" | "main") if segments.is_empty() => {}
        Some(stem) => segments.push(ident(stem, file)?),
        None => return Err(unresolved(file)),
    }

    Ok(join(&segments))
}

/// Module path of the module backed by a directory, `crate::dao` for
/// `<crate>/src/dao`. The directory does not need to exist yet.
pub(crate) fn of_dir(dir: &Path) -> Result<String> {
    let (src, absolute) = locate(dir)?;
    let relative = absolute.strip_prefix(&src).map_err(|_| unresolved(dir))?;

    Ok(join(&segments(relative, dir)?))
}

/// Finds the `src` directory of the crate enclosing `path`.
fn locate(path: &Path) -> Result<(PathBuf, PathBuf)> {
    let absolute = std::path::absolute(path)
        .map(|absolute| normalize(&absolute))
        .map_err(|err| Error::io(path, err))?;

    let root = absolute
        .ancestors()
        .find(|ancestor| ancestor.join("Cargo.toml").is_file())
        .ok_or_else(|| unresolved(path))?;

    Ok((root.join("src"), absolute))
}

/// Resolves `.` and `..` lexically.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }

    out
}

fn segments(relative: &Path, origin: &Path) -> Result<Vec<String>> {
    relative
        .components()
        .map(|component| match component {
            Component::Normal(segment) => segment
                .to_str()
                .ok_or_else(|| unresolved(origin))
                .and_then(|segment| ident(segment, origin)),
            _ => Err(unresolved(origin)),
        })
        .collect()
}

fn ident(segment: &str, origin: &Path) -> Result<String> {
    if syn::parse_str::<syn::Ident>(segment).is_ok() {
        Ok(segment.to_string())
    } else {
        Err(unresolved(origin))
    }
}

fn join(segments: &[String]) -> String {
    std::iter::once("crate")
        .chain(segments.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("::")
}

fn unresolved(path: &Path) -> Error {
    Error::UnresolvedModule {
        path: path.to_path_buf(),
    }
}
