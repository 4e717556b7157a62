//! Bracketed attribute tags embedded in file names.
//!
//! Media file names often carry metadata in the informal `[name=value]`
//! form, for example `Movie Title (2010) [imdbid=tt1234567].mkv`. This
//! module reads those tags back out.
//!
//! # Examples
//!
//! ```
//! use pathtag::extract_attribute;
//!
//! let value = extract_attribute("Movie (2010) [imdbid=tt1234567].mkv", "imdbid").unwrap();
//! assert_eq!(value.as_deref(), Some("tt1234567"));
//!
//! // IMDb ids are also recognized without the bracket decoration
//! let value = extract_attribute("Movie.tt1234567.mkv", "imdbid").unwrap();
//! assert_eq!(value.as_deref(), Some("tt1234567"));
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fold;

/// Attribute name for IMDb identifiers.
pub const IMDB_ID: &str = "imdbid";

/// Attribute name for TheMovieDb identifiers.
pub const TMDB_ID: &str = "tmdbid";

/// Attribute name for TheTVDB identifiers.
pub const TVDB_ID: &str = "tvdbid";

static IMDB_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)tt[0-9]{7,8}").expect("imdb id pattern is valid"));

/// Extracts the value of the `[attribute_name=value]` tag from `subject`.
///
/// The tag name is matched case-insensitively and only its first occurrence
/// is considered. The value runs up to the next `]`, so `[year=]` yields an
/// empty string, which is distinct from `None`.
///
/// When no tag is present and `attribute_name` is `imdbid` (in any case),
/// the first `tt` followed by 7 or 8 digits anywhere in `subject` is
/// returned instead.
///
/// A tag that is opened but never closed is treated as no match.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `subject` or `attribute_name` is
/// empty.
///
/// # Examples
///
/// ```
/// use pathtag::extract_attribute;
///
/// assert_eq!(extract_attribute("X [year=]", "year").unwrap(), Some(String::new()));
/// assert_eq!(extract_attribute("[GENRE=Action]", "genre").unwrap().as_deref(), Some("Action"));
/// assert_eq!(extract_attribute("no tags here", "genre").unwrap(), None);
/// assert!(extract_attribute("", "genre").is_err());
/// ```
pub fn extract_attribute(subject: &str, attribute_name: &str) -> Result<Option<String>> {
    if subject.is_empty() {
        return Err(Error::empty("subject"));
    }
    if attribute_name.is_empty() {
        return Err(Error::empty("attribute_name"));
    }

    let token = format!("[{attribute_name}=");
    if let Some(found) = fold::find_ignore_case(subject, &token) {
        let rest = &subject[found.end..];
        return Ok(match rest.find(']') {
            Some(end) => Some(rest[..end].to_string()),
            None => {
                log::debug!("unterminated '{token}' tag in {subject:?}");
                None
            }
        });
    }

    if fold::eq_ignore_case(attribute_name, IMDB_ID) {
        let found = IMDB_ID_PATTERN.find(subject).map(|m| m.as_str().to_string());
        if let Some(ref id) = found {
            log::trace!("matched bare imdb id {id} in {subject:?}");
        }
        return Ok(found);
    }

    Ok(None)
}

/// Provider identifiers read from a file name.
///
/// # Examples
///
/// ```
/// use pathtag::extract_provider_ids;
///
/// let ids = extract_provider_ids("Show [tvdbid=81189] [tmdbid=1396]").unwrap();
/// assert_eq!(ids.tvdb.as_deref(), Some("81189"));
/// assert_eq!(ids.tmdb.as_deref(), Some("1396"));
/// assert!(ids.imdb.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderIds {
    /// IMDb identifier (`tt` followed by digits).
    pub imdb: Option<String>,
    /// TheMovieDb identifier.
    pub tmdb: Option<String>,
    /// TheTVDB identifier.
    pub tvdb: Option<String>,
}

impl ProviderIds {
    /// Returns true if no identifier was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.imdb.is_none() && self.tmdb.is_none() && self.tvdb.is_none()
    }
}

/// Reads the `imdbid`, `tmdbid` and `tvdbid` tags from `subject`.
///
/// Each id follows the rules of [`extract_attribute`], so a bare IMDb id is
/// picked up even without brackets.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `subject` is empty.
pub fn extract_provider_ids(subject: &str) -> Result<ProviderIds> {
    Ok(ProviderIds {
        imdb: extract_attribute(subject, IMDB_ID)?,
        tmdb: extract_attribute(subject, TMDB_ID)?,
        tvdb: extract_attribute(subject, TVDB_ID)?,
    })
}
