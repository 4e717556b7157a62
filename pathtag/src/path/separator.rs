//! Directory separator styles.

use std::fmt;

/// One of the two interchangeable directory separators.
///
/// # Examples
///
/// ```
/// use pathtag::path::Separator;
///
/// assert_eq!(Separator::infer_from("/data/tv"), Separator::Slash);
/// assert_eq!(Separator::infer_from(r"D:\tv"), Separator::Backslash);
/// assert_eq!(Separator::Slash.normalize(r"C:\media/x"), "C:/media/x");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `/`, the Unix style.
    Slash,
    /// `\`, the Windows style.
    Backslash,
}

impl Separator {
    /// Chooses the canonical separator for a replacement subpath.
    ///
    /// Any `/` selects [`Separator::Slash`]; everything else, including a
    /// subpath with no separator at all, selects [`Separator::Backslash`].
    #[must_use]
    pub fn infer_from(new_subpath: &str) -> Self {
        if new_subpath.contains('/') {
            Self::Slash
        } else {
            Self::Backslash
        }
    }

    /// The separator character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Slash => '/',
            Self::Backslash => '\\',
        }
    }

    /// The separator this one replaces.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Slash => Self::Backslash,
            Self::Backslash => Self::Slash,
        }
    }

    /// Rewrites every occurrence of the other separator to this one.
    #[must_use]
    pub fn normalize(self, s: &str) -> String {
        s.replace(self.other().as_char(), &self.to_string())
    }

    /// Normalizes `s` and appends this separator unless it already ends
    /// with one.
    #[must_use]
    pub fn normalize_dir(self, s: &str) -> String {
        let mut dir = self.normalize(s);
        if !dir.ends_with(self.as_char()) {
            dir.push(self.as_char());
        }
        dir
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
