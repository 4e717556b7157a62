//! Subpath replacement.

use crate::error::{Error, Result};
use crate::fold;
use crate::path::Separator;

fn require_non_blank(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::blank(name));
    }
    Ok(())
}

/// Replaces `old_subpath` with `new_subpath` inside `path`.
///
/// All three inputs are first rewritten to the separator style of
/// `new_subpath` (see [`Separator::infer_from`]), and both subpaths are given
/// a trailing separator so only whole directory segments match. Matching is
/// case-insensitive and every occurrence is replaced.
///
/// Returns `Ok(None)` when `old_subpath` does not occur in `path`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if any input is empty or whitespace.
///
/// # Examples
///
/// ```
/// use pathtag::path::try_replace_subpath;
///
/// let moved = try_replace_subpath(r"C:\Media\Shows\X", r"c:\media\shows", r"D:\tv").unwrap();
/// assert_eq!(moved.as_deref(), Some(r"D:\tv\X"));
///
/// // `show` is not a whole segment of `shows`
/// let moved = try_replace_subpath(r"C:\media\shows\X", r"C:\media\show", r"D:\tv").unwrap();
/// assert_eq!(moved, None);
/// ```
pub fn try_replace_subpath(
    path: &str,
    old_subpath: &str,
    new_subpath: &str,
) -> Result<Option<String>> {
    require_non_blank("path", path)?;
    require_non_blank("old_subpath", old_subpath)?;
    require_non_blank("new_subpath", new_subpath)?;

    let sep = Separator::infer_from(new_subpath);
    let path = sep.normalize(path);
    let old_subpath = sep.normalize_dir(old_subpath);
    let new_subpath = sep.normalize_dir(new_subpath);

    if !fold::contains_ignore_case(&path, &old_subpath) {
        log::trace!("{old_subpath:?} not found in {path:?}");
        return Ok(None);
    }

    let replaced = fold::replace_ignore_case(&path, &old_subpath, &new_subpath);
    log::debug!("relocated {path:?} to {replaced:?}");
    Ok(Some(replaced))
}
