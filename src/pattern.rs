use crate::error::{InsertError, ResolveError};
use crate::params::Params;

/// One typed piece of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// A fixed path segment, matched by string equality.
    Literal(String),
    /// A named capture (`:name`), matching exactly one path segment.
    Param(String),
}

/// A route pattern split into typed segments, done once when the table is
/// built so that matching and substitution never re-parse the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompiledPattern {
    segments: Vec<Segment>,
    names: Vec<String>,
}

impl CompiledPattern {
    /// Compiles a pattern string such as `/area/:sectionId/detail`.
    ///
    /// A segment with a leading colon becomes a named capture; everything
    /// else matches literally. A pattern with no placeholders compiles to a
    /// plain exact-string matcher.
    pub(crate) fn compile(pattern: &str) -> Result<Self, InsertError> {
        if !pattern.starts_with('/') {
            return Err(InsertError::InvalidPath);
        }

        let mut segments = Vec::new();
        let mut names: Vec<String> = Vec::new();

        if pattern != "/" {
            for part in pattern[1..].split('/') {
                if part.is_empty() {
                    return Err(InsertError::InvalidPath);
                }

                match part.strip_prefix(':') {
                    Some("") => return Err(InsertError::UnnamedParam),
                    Some(name) => {
                        if names.iter().any(|n| n == name) {
                            return Err(InsertError::DuplicateParam { name: name.into() });
                        }
                        names.push(name.to_owned());
                        segments.push(Segment::Param(name.to_owned()));
                    }
                    None => segments.push(Segment::Literal(part.to_owned())),
                }
            }
        }

        Ok(CompiledPattern { segments, names })
    }

    /// The parameter names of this pattern, in capture order.
    pub(crate) fn param_names(&self) -> &[String] {
        &self.names
    }

    /// Matches a concrete path against this pattern, merging captures into
    /// the cache on success.
    ///
    /// Matching is anchored: the path must have exactly as many segments as
    /// the pattern, so a prefix match is not a match. On failure the cache is
    /// rolled back to its previous state.
    pub(crate) fn match_path<'k, 'v>(
        &'k self,
        path: &'v str,
        cache: &mut Params<'k, 'v>,
    ) -> Result<bool, ResolveError> {
        let checkpoint = cache.len();
        let mut parts = segments(path);

        for segment in &self.segments {
            let part = match parts.next() {
                Some(part) => part,
                None => {
                    cache.truncate(checkpoint);
                    return Ok(false);
                }
            };

            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => {
                    cache.truncate(checkpoint);
                    return Ok(false);
                }
                Segment::Param(name) => cache.insert(name, part)?,
            }
        }

        if parts.next().is_some() {
            cache.truncate(checkpoint);
            return Ok(false);
        }

        Ok(true)
    }

    /// Substitutes every placeholder from the cache, producing the concrete
    /// path for this pattern.
    pub(crate) fn expand(&self, cache: &Params<'_, '_>) -> Result<String, ResolveError> {
        if self.segments.is_empty() {
            return Ok("/".to_owned());
        }

        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(name) => match cache.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(ResolveError::UnknownParam { name: name.clone() });
                    }
                },
            }
        }

        Ok(out)
    }
}

// Splits a normalized path into its segments. The root path has none.
fn segments(path: &str) -> impl Iterator<Item = &str> + '_ {
    path.strip_prefix('/')
        .unwrap_or(path)
        .split('/')
        .filter(|part| !part.is_empty())
}
