use crate::error::InsertError;
use crate::pattern::CompiledPattern;

use std::collections::HashMap;

/// A single route declaration: a path pattern, the breadcrumb label shown
/// for it, and optionally the pattern of its parent route.
///
/// With the `serde` feature enabled, route declarations can be deserialized
/// from a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pattern: String,
    label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    parent: Option<String>,
}

impl Route {
    /// Declares a root route, one with no parent.
    pub fn new(pattern: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            label: label.into(),
            parent: None,
        }
    }

    /// Declares a route whose breadcrumb trail continues at `parent`.
    ///
    /// `parent` must exactly equal the pattern string of another route in
    /// the same table.
    pub fn with_parent(
        pattern: impl Into<String>,
        label: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            label: label.into(),
            parent: Some(parent.into()),
        }
    }

    /// The path pattern of this route.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The breadcrumb label of this route.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The parent pattern of this route, if any.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}

// A validated table entry with its parent reference resolved to an index.
#[derive(Debug, Clone)]
pub(crate) struct RouteEntry {
    pub(crate) pattern: String,
    pub(crate) label: String,
    pub(crate) parent: Option<usize>,
    pub(crate) compiled: CompiledPattern,
}

/// An immutable, validated table of route patterns.
///
/// The table is built once at application startup and then only read;
/// resolution takes `&self` and keeps all per-call state local, so a table
/// can be shared freely across threads.
///
/// Declaration order is part of the matching contract: patterns are tried
/// in the order they were registered and the first structural match wins.
/// When a literal pattern and a parameterized pattern could both match the
/// same path, the more specific one must be declared first.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    pub(crate) entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Compiles and validates a route configuration.
    ///
    /// The whole table is checked up front so that configuration defects
    /// surface at startup rather than mid-navigation: duplicate patterns,
    /// parent references that name no registered pattern, cyclic parent
    /// chains, and parent patterns using parameters their child can never
    /// capture are all rejected here.
    ///
    /// ```rust
    /// use crumbtrail::{Route, RouteTable};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let table = RouteTable::new([
    ///     Route::new("/dashboard", "Dashboard"),
    ///     Route::with_parent("/properties", "Properties", "/dashboard"),
    /// ])?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Result<Self, InsertError> {
        let routes: Vec<Route> = routes.into_iter().collect();

        let mut index = HashMap::with_capacity(routes.len());
        let mut entries = Vec::with_capacity(routes.len());

        for (i, route) in routes.iter().enumerate() {
            if index.insert(route.pattern.clone(), i).is_some() {
                return Err(InsertError::Conflict {
                    with: route.pattern.clone(),
                });
            }

            entries.push(RouteEntry {
                pattern: route.pattern.clone(),
                label: route.label.clone(),
                parent: None,
                compiled: CompiledPattern::compile(&route.pattern)?,
            });
        }

        for (i, route) in routes.iter().enumerate() {
            let Some(parent) = &route.parent else {
                continue;
            };

            let &p = index
                .get(parent.as_str())
                .ok_or_else(|| InsertError::DanglingParent {
                    pattern: route.pattern.clone(),
                    parent: parent.clone(),
                })?;

            // An ancestor is expanded from the parameters captured for the
            // current path, so everything the parent mentions must be
            // capturable by its child. The check is per-edge; it holds for
            // whole chains by transitivity.
            if let Some(name) = entries[p]
                .compiled
                .param_names()
                .iter()
                .find(|&name| !entries[i].compiled.param_names().contains(name))
            {
                return Err(InsertError::UncoveredParam {
                    pattern: entries[p].pattern.clone(),
                    name: name.clone(),
                });
            }

            entries[i].parent = Some(p);
        }

        for start in 0..entries.len() {
            let mut seen = vec![start];
            let mut current = entries[start].parent;
            while let Some(i) = current {
                if seen.contains(&i) {
                    seen.push(i);
                    return Err(InsertError::ParentCycle {
                        chain: seen
                            .into_iter()
                            .map(|j| entries[j].pattern.clone())
                            .collect(),
                    });
                }
                seen.push(i);
                current = entries[i].parent;
            }
        }

        Ok(RouteTable { entries })
    }

    /// Returns the number of routes in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table contains no routes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
