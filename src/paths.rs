use crate::errors::ResolveError;
use std::path::{Component, Path, PathBuf};

/// Expand and absolutize a user-supplied path against `base`.
///
/// - An empty `raw` yields `base` unchanged.
/// - A leading `~` component is replaced with `home`; `~user` is left alone.
/// - Relative results are joined onto `base`, then `.` and `..` are
///   collapsed lexically.
///
/// The filesystem is never consulted, so symlinks are not followed and the
/// path does not need to exist.
pub fn normalize(raw: &Path, home: Option<&Path>, base: &Path) -> Result<PathBuf, ResolveError> {
    if raw.as_os_str().is_empty() {
        return Ok(base.to_path_buf());
    }

    let expanded = expand_home(raw, home)?;
    let joined = if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    };
    Ok(clean(&joined))
}

/// Substitute the home directory for a leading `~` component.
pub fn expand_home(raw: &Path, home: Option<&Path>) -> Result<PathBuf, ResolveError> {
    let mut components = raw.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = home.ok_or(ResolveError::HomeDirUnavailable)?;
            Ok(home.join(components.as_path()))
        }
        _ => Ok(raw.to_path_buf()),
    }
}

/// Lexically collapse `.` and `..` segments.
///
/// `..` directly under the root stays at the root. Leading `..` segments of
/// a relative path are kept since there is nothing to cancel them against.
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}
