//! Relocating paths whose ancestor directory has moved.
//!
//! # Key Concepts
//!
//! ## Canonical separator
//!
//! Paths reach the library in whatever style the reporting system used, so
//! `/` and `\` are treated as interchangeable. Each call picks one canonical
//! separator from the *replacement* subpath, the caller's signal of the
//! target convention, and rewrites every input to it.
//!
//! ## Segment-aligned matching
//!
//! Subpaths are always matched as if they ended with a separator, so
//! `/media/show` never matches inside `/media/shows/...`.
//!
//! # Examples
//!
//! ```
//! use pathtag::path::try_replace_subpath;
//!
//! let moved = try_replace_subpath("/media/shows/X/ep1.mkv", "/media/shows", "/data/tv").unwrap();
//! assert_eq!(moved.as_deref(), Some("/data/tv/X/ep1.mkv"));
//!
//! // Mixed styles are normalized to the replacement's separator
//! let moved = try_replace_subpath(r"C:\media\shows\X", "C:/media/shows", "D:/tv").unwrap();
//! assert_eq!(moved.as_deref(), Some("D:/tv/X"));
//! ```
//!
//! # Substitution rules
//!
//! [`PathSubstitutions`] applies an ordered list of configured rules:
//!
//! ```
//! use pathtag::path::{PathSubstitution, PathSubstitutions};
//!
//! let rules = PathSubstitutions::new(vec![
//!     PathSubstitution::new("/mnt/old", "/mnt/new"),
//!     PathSubstitution::new(r"\\nas\media", r"M:\media"),
//! ]);
//! assert_eq!(rules.apply("/mnt/old/a.mkv").unwrap(), "/mnt/new/a.mkv");
//! assert_eq!(rules.apply("/srv/other.mkv").unwrap(), "/srv/other.mkv");
//! ```

pub mod relocate;
pub mod separator;
pub mod substitution;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use relocate::try_replace_subpath;
pub use separator::Separator;
pub use substitution::{PathSubstitution, PathSubstitutions};
