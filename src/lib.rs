#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Breadcrumb trail resolution for parameterized route patterns.
//!
//! A [`RouteTable`] is built once, at application startup, from declarative
//! [`Route`]s: a path pattern with `:name` placeholders, a label, and an
//! optional parent pattern. Resolving a concrete path finds the first
//! registered pattern that matches it, captures its parameters, walks the
//! parent chain substituting those parameters into each ancestor, and
//! returns the trail root-to-leaf with the current page unlinked.
//!
//! ```rust
//! use crumbtrail::{Route, RouteTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = RouteTable::new([
//!     Route::new("/dashboard", "Dashboard"),
//!     Route::with_parent("/properties", "Properties", "/dashboard"),
//!     Route::with_parent("/properties/:propertyId", "Property", "/properties"),
//!     Route::with_parent("/properties/:propertyId/leases", "Leases", "/properties/:propertyId"),
//! ])?;
//!
//! let trail = table.resolve("/properties/42/leases");
//!
//! let labels: Vec<_> = trail.iter().map(|crumb| crumb.label.as_str()).collect();
//! assert_eq!(labels, ["Dashboard", "Properties", "Property", "Leases"]);
//!
//! assert_eq!(trail[2].href.as_deref(), Some("/properties/42"));
//! // the current page is never a link
//! assert_eq!(trail[3].href, None);
//!
//! // unmapped paths degrade to an empty trail
//! assert!(table.resolve("/settings").is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! Patterns are tried in declaration order and the first structural match
//! wins, so a literal route that a parameterized sibling could shadow must
//! be declared before it. Configuration defects (duplicate patterns,
//! dangling or cyclic parent references, parameters an ancestor could never
//! substitute) are rejected when the table is built.

mod error;
mod params;
mod path;
mod pattern;
mod table;
mod trail;

pub use error::{InsertError, ResolveError};
pub use params::{Params, ParamsIter};
pub use path::normalize;
pub use table::{Route, RouteTable};
pub use trail::{Crumb, Match};
