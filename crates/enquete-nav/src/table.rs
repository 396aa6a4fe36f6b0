//! Route table: built once at startup, immutable afterwards
//!
//! Construction validates the table invariants (unique names, catch-all
//! fallback declared last, acyclic redirects), so `resolve` is a total
//! function: every path string yields exactly one view.

use crate::error::{Error, Result};
use crate::params::Params;
use crate::route::{RouteEntry, StaticProps, Target};
use enquete_router::{Pattern, RouteList};
use tracing::debug;

/// Outcome of resolving a concrete path
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<V> {
    /// The view to activate
    pub view: V,
    /// Name of the matched entry
    pub name: String,
    /// The concrete path that matched, after any redirects
    pub path: String,
    /// Parameters captured from the path
    pub params: Params,
    /// Fixed props declared on the entry
    pub props: StaticProps,
}

/// Ordered, validated route table
///
/// Constructed through [`RouteTable::builder`]; immutable afterwards and
/// read on every navigation event.
#[derive(Debug)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
    list: RouteList<usize>,
}

impl<V> RouteTable<V> {
    /// Start building a table
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder { routes: Vec::new() }
    }

    /// Entries in declaration order
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry<V>> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A route table always carries at least its fallback entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by name
    pub fn route(&self, name: &str) -> Option<&RouteEntry<V>> {
        self.entries.iter().find(|e| e.name() == Some(name))
    }

    /// Build a concrete path for a named route (reverse routing)
    ///
    /// # Example
    /// ```
    /// use enquete_nav::survey;
    ///
    /// let table = survey::route_table().unwrap();
    /// let path = table.path_for("Results", &[("id", "7")]).unwrap();
    /// assert_eq!(path, "/results/7");
    /// ```
    pub fn path_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let entry = self
            .route(name)
            .ok_or_else(|| Error::UnknownRoute(name.to_string()))?;
        entry.pattern().render(params).map_err(|source| Error::Render {
            name: name.to_string(),
            source,
        })
    }
}

impl<V: Clone> RouteTable<V> {
    /// Resolve a path to a view, following redirects
    ///
    /// Total over all input strings: the catch-all entry guarantees a match,
    /// and build-time validation guarantees redirect chains terminate.
    pub fn resolve(&self, path: &str) -> Resolution<V> {
        let mut current = path.to_string();
        loop {
            let Some(m) = self.list.find(&current) else {
                unreachable!("catch-all entry guarantees every path matches")
            };
            let entry = &self.entries[*m.value];
            match &entry.target {
                Target::Redirect(to) => {
                    debug!(from = %current, to = %to, "following redirect");
                    current = to.clone();
                }
                Target::View(view) => {
                    let name = entry.name.clone().unwrap_or_default();
                    if entry.pattern.is_catch_all() {
                        debug!(path = %current, route = %name, "no specific route, using fallback");
                    } else {
                        debug!(path = %current, route = %name, "resolved");
                    }
                    return Resolution {
                        view: view.clone(),
                        name,
                        path: current,
                        params: Params::from(m.params),
                        props: entry.static_props.clone(),
                    };
                }
            }
        }
    }
}

struct PendingRoute<V> {
    name: Option<String>,
    path: String,
    target: Target<V>,
    props: StaticProps,
}

/// Builder enforcing the table invariants at construction time
pub struct RouteTableBuilder<V> {
    routes: Vec<PendingRoute<V>>,
}

impl<V> RouteTableBuilder<V> {
    /// Bind a path pattern to a view
    pub fn route(self, name: impl Into<String>, path: impl Into<String>, view: V) -> Self {
        self.route_with_props(name, path, view, StaticProps::new())
    }

    /// Bind a path pattern to a view with fixed props
    pub fn route_with_props(
        mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        view: V,
        props: StaticProps,
    ) -> Self {
        self.routes.push(PendingRoute {
            name: Some(name.into()),
            path: path.into(),
            target: Target::View(view),
            props,
        });
        self
    }

    /// Redirect a path to another path instead of rendering
    pub fn redirect(mut self, path: impl Into<String>, to: impl Into<String>) -> Self {
        self.routes.push(PendingRoute {
            name: None,
            path: path.into(),
            target: Target::Redirect(to.into()),
            props: StaticProps::new(),
        });
        self
    }

    /// Catch-all fallback entry; must be the final call before `build`
    pub fn fallback(self, name: impl Into<String>, view: V) -> Self {
        self.route(name, "*", view)
    }

    /// Validate and freeze the table
    pub fn build(self) -> Result<RouteTable<V>> {
        let mut entries = Vec::with_capacity(self.routes.len());
        for pending in self.routes {
            entries.push(RouteEntry {
                pattern: Pattern::parse(&pending.path)?,
                name: pending.name,
                target: pending.target,
                static_props: pending.props,
            });
        }

        check_unique_names(&entries)?;
        check_fallback(&entries)?;

        let mut list = RouteList::new();
        for (index, entry) in entries.iter().enumerate() {
            list.push(entry.pattern.clone(), index);
        }

        check_redirects(&entries, &list)?;

        Ok(RouteTable { entries, list })
    }
}

fn check_unique_names<V>(entries: &[RouteEntry<V>]) -> Result<()> {
    for (idx, entry) in entries.iter().enumerate() {
        let Some(name) = entry.name() else { continue };
        if entries[..idx].iter().any(|e| e.name() == Some(name)) {
            return Err(Error::DuplicateName(name.to_string()));
        }
    }
    Ok(())
}

fn check_fallback<V>(entries: &[RouteEntry<V>]) -> Result<()> {
    let last_is_fallback = entries
        .last()
        .is_some_and(|e| e.pattern.is_catch_all() && e.view().is_some());
    for entry in entries.iter().take(entries.len().saturating_sub(1)) {
        if entry.pattern.is_catch_all() {
            let label = entry
                .name()
                .unwrap_or_else(|| entry.pattern.raw())
                .to_string();
            return Err(Error::FallbackNotLast(label));
        }
    }
    if !last_is_fallback {
        return Err(Error::MissingFallback);
    }
    Ok(())
}

/// Every redirect chain must reach a view entry without revisiting an entry
fn check_redirects<V>(entries: &[RouteEntry<V>], list: &RouteList<usize>) -> Result<()> {
    for (start, entry) in entries.iter().enumerate() {
        let Some(mut target) = entry.redirect_to() else {
            continue;
        };
        let mut visited = vec![start];
        loop {
            let Some(m) = list.find(target) else {
                // cannot happen once the fallback check passed
                return Err(Error::MissingFallback);
            };
            if visited.contains(m.value) {
                let label = entries[start].pattern.raw().to_string();
                return Err(Error::RedirectCycle(label));
            }
            visited.push(*m.value);
            match entries[*m.value].redirect_to() {
                Some(next) => target = next,
                None => break,
            }
        }
    }
    Ok(())
}
