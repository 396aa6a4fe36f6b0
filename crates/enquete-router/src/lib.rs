//! enquete-router: Zero-dependency declarative route matcher
//!
//! Single Source of Truth (SSOT) matcher used by the enquete-nav
//! navigation layer. A route table is an ordered list of path patterns;
//! matching scans the list in declaration order and the first pattern
//! that accepts the path wins.
//!
//! ## Path Syntax
//! - `/targeted` - Static segments
//! - `:name` - Named parameter (captures one segment)
//! - `*` or `*name` - Wildcard (captures the remaining path, last segment only)
//! - `*` alone - Catch-all pattern, matches every path
//!
//! ## Matching
//! Declaration order, first match wins. A catch-all entry declared last
//! acts as a fallback and makes lookup total over all input strings.
//!
//! ## Example
//! ```
//! use enquete_router::{Pattern, RouteList};
//!
//! let mut routes = RouteList::new();
//! routes.push(Pattern::parse("/targeted").unwrap(), 0);
//! routes.push(Pattern::parse("/questionnaires/:id").unwrap(), 1);
//! routes.push(Pattern::parse("*").unwrap(), 2);
//!
//! let m = routes.find("/questionnaires/42").unwrap();
//! assert_eq!(*m.value, 1);
//! assert_eq!(m.params, vec![("id".to_string(), "42".to_string())]);
//!
//! let m = routes.find("/no/such/page").unwrap();
//! assert_eq!(*m.value, 2);
//! ```

use std::collections::HashMap;
use std::fmt;

/// One parsed segment of a path pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Literal segment, matched verbatim
    Static(String),
    /// `:name` - captures exactly one path segment
    Param(String),
    /// `*` or `*name` - captures the remaining path
    Wildcard(String),
}

/// Error produced when parsing a malformed pattern.
///
/// Malformed patterns are configuration defects, not runtime input errors,
/// so these surface at table construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// `:` with no name following it
    EmptyParamName { pattern: String },
    /// Wildcard segment in a non-final position
    WildcardNotLast { pattern: String },
    /// Two captures with the same name in one pattern
    DuplicateParamName { pattern: String, name: String },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::EmptyParamName { pattern } => {
                write!(f, "empty parameter name in pattern {pattern:?}")
            }
            PatternError::WildcardNotLast { pattern } => {
                write!(f, "wildcard must be the last segment in pattern {pattern:?}")
            }
            PatternError::DuplicateParamName { pattern, name } => {
                write!(f, "duplicate parameter {name:?} in pattern {pattern:?}")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Error produced when rendering a concrete path from a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No value supplied for a named parameter
    MissingParam { name: String },
    /// Wildcard patterns have no unique concrete form
    NotRenderable { pattern: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingParam { name } => {
                write!(f, "missing value for parameter {name:?}")
            }
            RenderError::NotRenderable { pattern } => {
                write!(f, "pattern {pattern:?} contains a wildcard and cannot be rendered")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// A parsed path pattern
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse a pattern string
    ///
    /// # Example
    /// ```
    /// use enquete_router::Pattern;
    ///
    /// let p = Pattern::parse("/questionnaires/:id").unwrap();
    /// assert_eq!(p.param_names(), vec!["id"]);
    /// assert!(Pattern::parse("/questionnaires/:").is_err());
    /// ```
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let parts: Vec<&str> = split_path(pattern);
        let mut segments = Vec::with_capacity(parts.len());
        let mut seen: Vec<&str> = Vec::new();

        for (idx, part) in parts.iter().enumerate() {
            let segment = if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName {
                        pattern: pattern.to_string(),
                    });
                }
                if seen.contains(&name) {
                    return Err(PatternError::DuplicateParamName {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                seen.push(name);
                Segment::Param(name.to_string())
            } else if let Some(name) = part.strip_prefix('*') {
                if idx != parts.len() - 1 {
                    return Err(PatternError::WildcardNotLast {
                        pattern: pattern.to_string(),
                    });
                }
                let name = if name.is_empty() { "*" } else { name };
                if seen.contains(&name) {
                    return Err(PatternError::DuplicateParamName {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                Segment::Wildcard(name.to_string())
            } else {
                Segment::Static((*part).to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern string as written
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether this pattern is a bare catch-all (`*` or `/*`)
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Wildcard(_)])
    }

    /// Names of the captures this pattern declares, in order
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) | Segment::Wildcard(name) => Some(name.as_str()),
                Segment::Static(_) => None,
            })
            .collect()
    }

    /// Match a concrete path against this pattern
    ///
    /// Returns captured parameters as (name, value) pairs, or `None` if the
    /// path does not match. Static and parameter patterns require an exact
    /// segment count; a trailing wildcard absorbs the rest of the path.
    pub fn matches(&self, path: &str) -> Option<Vec<(String, String)>> {
        let parts = split_path(path);
        let mut params = Vec::new();

        for (idx, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(lit) => {
                    if parts.get(idx).copied() != Some(lit.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(idx)?;
                    params.push((name.clone(), (*value).to_string()));
                }
                Segment::Wildcard(name) => {
                    // Absorbs the remainder, which may be empty
                    let rest = parts[idx.min(parts.len())..].join("/");
                    params.push((name.clone(), rest));
                    return Some(params);
                }
            }
        }

        if parts.len() == self.segments.len() {
            Some(params)
        } else {
            None
        }
    }

    /// Render a concrete path by substituting parameter values
    ///
    /// Used for reverse routing (navigate-by-name). Wildcard patterns are
    /// not renderable.
    pub fn render(&self, params: &[(&str, &str)]) -> Result<String, RenderError> {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Static(lit) => out.push_str(lit),
                Segment::Param(name) => {
                    let value = params
                        .iter()
                        .find(|(n, _)| n == name)
                        .map(|(_, v)| *v)
                        .ok_or_else(|| RenderError::MissingParam {
                            name: name.clone(),
                        })?;
                    out.push_str(value);
                }
                Segment::Wildcard(_) => {
                    return Err(RenderError::NotRenderable {
                        pattern: self.raw.clone(),
                    });
                }
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }
}

/// Route match result
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a, T> {
    /// Value attached to the matched entry
    pub value: &'a T,
    /// Position of the matched entry in the list
    pub index: usize,
    /// Captured path parameters as (name, value) pairs
    pub params: Vec<(String, String)>,
}

impl<T> Match<'_, T> {
    /// Get params as HashMap for convenient access
    pub fn params_map(&self) -> HashMap<String, String> {
        self.params.iter().cloned().collect()
    }
}

/// Ordered list of (pattern, value) entries, first match wins
#[derive(Debug, Default)]
pub struct RouteList<T> {
    entries: Vec<(Pattern, T)>,
}

impl<T> RouteList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry; later entries only match what earlier ones reject
    pub fn push(&mut self, pattern: Pattern, value: T) {
        self.entries.push((pattern, value));
    }

    /// Find the first matching entry in declaration order
    pub fn find(&self, path: &str) -> Option<Match<'_, T>> {
        for (index, (pattern, value)) in self.entries.iter().enumerate() {
            if let Some(params) = pattern.matches(path) {
                return Some(Match {
                    value,
                    index,
                    params,
                });
            }
        }
        None
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, &T)> {
        self.entries.iter().map(|(p, v)| (p, v))
    }
}

/// Split a path into non-empty segments; trailing and doubled slashes vanish
fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
