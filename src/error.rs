use std::fmt;

/// Represents errors that can occur when building a route table.
///
/// All of these indicate a defect in the static route configuration and are
/// reported once, at construction time, rather than during resolution.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum InsertError {
    /// Attempted to register a pattern that conflicts with an existing route.
    Conflict {
        /// The existing route that the insertion is conflicting with.
        with: String,
    },
    /// Route patterns must begin with `/` and contain no empty segments.
    InvalidPath,
    /// Parameters must be registered with a name.
    UnnamedParam,
    /// The same parameter name appeared twice in a single pattern.
    DuplicateParam {
        /// The offending parameter name.
        name: String,
    },
    /// A route declared a parent pattern that is not in the table.
    DanglingParent {
        /// The pattern of the route with the bad reference.
        pattern: String,
        /// The parent pattern it referenced.
        parent: String,
    },
    /// Parent references loop back on themselves.
    ParentCycle {
        /// The patterns along the cycle, in walk order.
        chain: Vec<String>,
    },
    /// A parent pattern uses a parameter its child never captures, so the
    /// ancestor path could never be substituted during a walk.
    UncoveredParam {
        /// The parent pattern that references the parameter.
        pattern: String,
        /// The parameter name in question.
        name: String,
    },
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict { with } => {
                write!(
                    f,
                    "insertion failed due to conflict with previously registered route: {}",
                    with
                )
            }
            Self::InvalidPath => write!(
                f,
                "route patterns must begin with '/' and contain no empty segments"
            ),
            Self::UnnamedParam => write!(f, "parameters must be registered with a name"),
            Self::DuplicateParam { name } => {
                write!(f, "parameter ':{}' appears twice in a single pattern", name)
            }
            Self::DanglingParent { pattern, parent } => {
                write!(f, "pattern '{}' declares unknown parent '{}'", pattern, parent)
            }
            Self::ParentCycle { chain } => {
                write!(f, "parent references form a cycle: {}", chain.join(" -> "))
            }
            Self::UncoveredParam { pattern, name } => {
                write!(
                    f,
                    "parent pattern '{}' uses parameter ':{}' that its child cannot capture",
                    pattern, name
                )
            }
        }
    }
}

impl std::error::Error for InsertError {}

/// A configuration defect encountered while resolving a breadcrumb trail.
///
/// A path that simply matches no route is *not* an error; [`resolve`] returns
/// an empty trail for it. These variants only surface through
/// [`try_resolve`], and for tables built through [`RouteTable::new`] they are
/// unreachable, since construction validates the whole table up front.
///
/// [`resolve`]: crate::RouteTable::resolve
/// [`try_resolve`]: crate::RouteTable::try_resolve
/// [`RouteTable::new`]: crate::RouteTable::new
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ResolveError {
    /// An ancestor pattern referenced a parameter that was never captured
    /// for the current path.
    UnknownParam {
        /// The parameter name that had no captured value.
        name: String,
    },
    /// The same parameter name was captured with two different values in
    /// one resolution.
    ParamConflict {
        /// The offending parameter name.
        name: String,
    },
    /// The ancestor walk revisited a pattern it had already expanded.
    ParentCycle {
        /// The pattern at which the cycle closed.
        at: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownParam { name } => {
                write!(f, "no captured value for parameter ':{}'", name)
            }
            Self::ParamConflict { name } => {
                write!(f, "parameter ':{}' captured with two different values", name)
            }
            Self::ParentCycle { at } => {
                write!(f, "parent walk revisited pattern '{}'", at)
            }
        }
    }
}

impl std::error::Error for ResolveError {}
