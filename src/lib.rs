//! A small, zero-copy deep link route matcher.
//!
//! `beckon` resolves custom-scheme URLs (`app://profile:jack`) against a
//! collection of registered route templates and hands back the matched
//! template together with the arguments embedded in the URL, so applications
//! dispatch deep links without hand-written string parsing at every call
//! site.
//!
//! ```rust
//! # fn main() -> Result<(), beckon::InsertError> {
//! let mut router = beckon::Router::new("app");
//! router.set_routes([
//!     "login",
//!     "profile:{user}",
//!     "user:list:{userId}:{kind}",
//! ])?;
//!
//! let location = router.resolve("app://user:list:12:admin").unwrap();
//! assert_eq!(location.path, "user:list:{userId}:{kind}");
//! assert_eq!(location.arguments.get("userId"), Some("12"));
//! assert_eq!(location.arguments.get("kind"), Some("admin"));
//! # Ok(())
//! # }
//! ```
//!
//! # Templates
//!
//! A template is a `:`-separated sequence of segments. A segment wrapped in
//! braces is a placeholder and binds any single path segment; every other
//! segment is a literal, compared exactly. A URL only matches a template
//! with exactly the same number of segments.
//!
//! When several templates could match the same URL, the one with the fewest
//! placeholders wins (`profile:admin` beats `profile:{user}`); among equally
//! specific templates the earliest registered wins.
//!
//! # Trailing parameters
//!
//! `key=value` pairs after a `#` (or, failing that, a `?`) are parsed into
//! the arguments as well. The fragment form is checked first since OAuth
//! style redirects deliver tokens there. Values are taken verbatim, without
//! percent-decoding, and a pair never overrides a placeholder binding with
//! the same name.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod error;
mod fragments;
mod params;
mod route;
mod router;
mod url;

pub use error::InsertError;
pub use fragments::{FragmentValue, Fragments};
pub use params::{Params, ParamsIter};
pub use router::{Location, Router};
