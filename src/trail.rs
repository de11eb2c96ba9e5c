use crate::error::ResolveError;
use crate::params::Params;
use crate::path::normalize;
use crate::table::RouteTable;

use log::error;

/// One segment of a finalized breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crumb {
    /// Human-readable breadcrumb text.
    pub label: String,
    /// The fully substituted, navigable path, or `None` for the current
    /// page, which renderers should not turn into a link.
    pub href: Option<String>,
}

/// A successful match of a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'k, 'v> {
    /// The pattern that matched.
    pub pattern: &'k str,
    /// The breadcrumb label of the matched route.
    pub label: &'k str,
    /// The parameters captured from the path.
    pub params: Params<'k, 'v>,
}

impl RouteTable {
    /// Matches a path against the table, returning the first registered
    /// pattern that structurally accepts it along with its captures.
    ///
    /// The path is expected to be in canonical form (see [`normalize`]);
    /// no match yields `None`.
    ///
    /// [`normalize`]: crate::normalize
    pub fn at<'k, 'v>(&'k self, path: &'v str) -> Option<Match<'k, 'v>> {
        let mut params = Params::new();
        let i = self.first_match(path, &mut params).ok()??;
        let entry = &self.entries[i];

        Some(Match {
            pattern: &entry.pattern,
            label: &entry.label,
            params,
        })
    }

    /// Resolves the breadcrumb trail for a path.
    ///
    /// The returned trail is ordered root-to-leaf; the final crumb is the
    /// current page and carries no `href`. A path matching no registered
    /// pattern yields an empty trail. The input is normalized first, so
    /// trailing slashes, duplicate slashes and query strings do not affect
    /// the result.
    ///
    /// Resolution is a pure function of the path and the table: no state
    /// survives a call, and concurrent calls cannot interfere. If a
    /// navigation supersedes an in-flight resolution, applying the latest
    /// result last is the caller's responsibility.
    ///
    /// A configuration defect encountered mid-walk is logged and the trail
    /// built up to that point is returned; end-user navigation is never
    /// interrupted by a bad table. Tables built through [`RouteTable::new`]
    /// cannot hit this case. Use [`try_resolve`] to observe such defects.
    ///
    /// ```rust
    /// use crumbtrail::{Crumb, Route, RouteTable};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let table = RouteTable::new([
    ///     Route::new("/area/:sectionId/list", "List"),
    ///     Route::with_parent("/area/:sectionId/detail", "Detail", "/area/:sectionId/list"),
    /// ])?;
    ///
    /// assert_eq!(
    ///     table.resolve("/area/42/detail"),
    ///     vec![
    ///         Crumb { label: "List".into(), href: Some("/area/42/list".into()) },
    ///         Crumb { label: "Detail".into(), href: None },
    ///     ],
    /// );
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`try_resolve`]: RouteTable::try_resolve
    pub fn resolve(&self, path: &str) -> Vec<Crumb> {
        let path = normalize(path);
        let (chain, err) = self.build_chain(&path);

        if let Some(err) = err {
            error!("breadcrumbs for {:?}: route table error: {}", path, err);
        }

        finalize(chain)
    }

    /// Resolves the breadcrumb trail for a path, surfacing configuration
    /// defects instead of degrading to a partial trail.
    ///
    /// A path matching no registered pattern is still `Ok` with an empty
    /// trail; only table defects (an unresolvable parameter, a conflicting
    /// capture, a cyclic parent chain) are errors.
    pub fn try_resolve(&self, path: &str) -> Result<Vec<Crumb>, ResolveError> {
        let path = normalize(path);
        match self.build_chain(&path) {
            (_, Some(err)) => Err(err),
            (chain, None) => Ok(finalize(chain)),
        }
    }

    fn first_match<'k, 'v>(
        &'k self,
        path: &'v str,
        cache: &mut Params<'k, 'v>,
    ) -> Result<Option<usize>, ResolveError> {
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.compiled.match_path(path, cache)? {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }

    // Builds the ancestor chain in leaf-to-root order. On a configuration
    // defect the chain built so far is returned alongside the error.
    fn build_chain(&self, path: &str) -> (Vec<Crumb>, Option<ResolveError>) {
        let mut chain = Vec::new();
        let mut cache = Params::new();

        let matched = match self.first_match(path, &mut cache) {
            Ok(Some(i)) => i,
            Ok(None) => return (chain, None),
            Err(err) => return (chain, Some(err)),
        };

        // The walk is bounded by a visited set so it terminates even for a
        // table whose parent links form a cycle.
        let mut visited = vec![false; self.entries.len()];
        let mut current = Some(matched);

        while let Some(i) = current {
            let entry = &self.entries[i];

            if visited[i] {
                let err = ResolveError::ParentCycle {
                    at: entry.pattern.clone(),
                };
                return (chain, Some(err));
            }
            visited[i] = true;

            match entry.compiled.expand(&cache) {
                Ok(href) => chain.push(Crumb {
                    label: entry.label.clone(),
                    href: Some(href),
                }),
                Err(err) => return (chain, Some(err)),
            }

            current = entry.parent;
        }

        (chain, None)
    }
}

// Reverses a leaf-to-root chain into display order and strips the link from
// the current page.
fn finalize(mut chain: Vec<Crumb>) -> Vec<Crumb> {
    chain.reverse();
    if let Some(current) = chain.last_mut() {
        current.href = None;
    }
    chain
}
