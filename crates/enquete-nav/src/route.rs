//! Route entries and static props

use enquete_router::Pattern;
use serde_json::{Map, Value};

/// Fixed props handed to a view on every activation of its route,
/// independent of the matched path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticProps {
    values: Map<String, Value>,
}

impl StaticProps {
    /// Empty prop set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    ///
    /// # Example
    /// ```
    /// use enquete_nav::StaticProps;
    ///
    /// let props = StaticProps::new().with("traqId", "");
    /// assert_eq!(props.get("traqId"), Some(&serde_json::json!("")));
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Get a prop value by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether any props are declared
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate (name, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// What a matched entry does: render a view or hand off to another path
#[derive(Debug, Clone)]
pub(crate) enum Target<V> {
    View(V),
    Redirect(String),
}

/// One binding in the route table
#[derive(Debug, Clone)]
pub struct RouteEntry<V> {
    pub(crate) name: Option<String>,
    pub(crate) pattern: Pattern,
    pub(crate) target: Target<V>,
    pub(crate) static_props: StaticProps,
}

impl<V> RouteEntry<V> {
    /// Symbolic name for programmatic navigation; redirect entries may be anonymous
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The path pattern this entry matches
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The view rendered when this entry matches, if it is not a redirect
    pub fn view(&self) -> Option<&V> {
        match &self.target {
            Target::View(view) => Some(view),
            Target::Redirect(_) => None,
        }
    }

    /// The redirect target, if this entry is a redirect
    pub fn redirect_to(&self) -> Option<&str> {
        match &self.target {
            Target::Redirect(to) => Some(to.as_str()),
            Target::View(_) => None,
        }
    }

    /// Props injected on every activation of this entry
    pub fn static_props(&self) -> &StaticProps {
        &self.static_props
    }
}
