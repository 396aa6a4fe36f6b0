//! Navigation dispatcher
//!
//! Sits between the host runtime's navigation events (initial load, link
//! clicks, programmatic calls, back/forward) and the route table. Events
//! arrive serially; each one is resolved synchronously before the next is
//! processed, so there is no overlapping resolution and the newest
//! navigation always wins.

use crate::error::Result;
use crate::table::{Resolution, RouteTable};
use tracing::debug;

/// Dispatcher configuration
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Prefix stripped from incoming paths before resolution
    /// (the app may be served under a sub-path)
    pub base_path: String,
    /// Path resolved when the dispatcher starts
    pub initial_path: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            initial_path: "/".to_string(),
        }
    }
}

/// Activation listener, invoked after every resolution
pub type Subscriber<V> = Box<dyn Fn(&Resolution<V>)>;

/// Serial navigation dispatcher with browser-style history
///
/// Owns the immutable route table and a history stack with a cursor.
/// `navigate` pushes, truncating any forward entries; `back` and `forward`
/// move the cursor without growing the stack.
pub struct Dispatcher<V: Clone> {
    table: RouteTable<V>,
    config: DispatcherConfig,
    history: Vec<Resolution<V>>,
    cursor: usize,
    subscribers: Vec<Subscriber<V>>,
}

impl<V: Clone> Dispatcher<V> {
    /// Start dispatching with default configuration
    pub fn new(table: RouteTable<V>) -> Self {
        Self::with_config(table, DispatcherConfig::default())
    }

    /// Start dispatching; resolves the configured initial path immediately
    pub fn with_config(table: RouteTable<V>, config: DispatcherConfig) -> Self {
        let initial = config.initial_path.clone();
        let mut dispatcher = Self {
            table,
            config,
            history: Vec::new(),
            cursor: 0,
            subscribers: Vec::new(),
        };
        dispatcher.navigate(&initial);
        dispatcher
    }

    /// The route table in use
    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// The active resolution
    pub fn current(&self) -> &Resolution<V> {
        &self.history[self.cursor]
    }

    /// Resolve a path and activate its view
    ///
    /// Any forward history is discarded, as a browser does on navigation
    /// after going back.
    pub fn navigate(&mut self, path: &str) -> &Resolution<V> {
        let stripped = self.strip_base(path).to_string();
        debug!(path = %stripped, "navigate");
        let resolution = self.table.resolve(&stripped);
        self.history.truncate(self.cursor + 1);
        self.history.push(resolution);
        self.cursor = self.history.len() - 1;
        self.notify();
        self.current()
    }

    /// Navigate to a named route with parameter values
    pub fn navigate_to(&mut self, name: &str, params: &[(&str, &str)]) -> Result<&Resolution<V>> {
        let path = self.table.path_for(name, params)?;
        Ok(self.navigate(&path))
    }

    /// Step back in history, if possible
    pub fn back(&mut self) -> Option<&Resolution<V>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        debug!(path = %self.history[self.cursor].path, "history back");
        self.notify();
        Some(self.current())
    }

    /// Step forward in history, if possible
    pub fn forward(&mut self) -> Option<&Resolution<V>> {
        if self.cursor + 1 >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        debug!(path = %self.history[self.cursor].path, "history forward");
        self.notify();
        Some(self.current())
    }

    /// Whether `back` would move
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether `forward` would move
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Register an activation listener
    pub fn subscribe(&mut self, subscriber: impl Fn(&Resolution<V>) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&self) {
        let resolution = &self.history[self.cursor];
        for subscriber in &self.subscribers {
            subscriber(resolution);
        }
    }

    /// The base only counts as a prefix on a segment boundary:
    /// `/app/targeted` sits under `/app`, `/apptargeted` does not.
    fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        let base = self.config.base_path.as_str();
        if base.is_empty() {
            return path;
        }
        match path.strip_prefix(base) {
            Some("") => "/",
            Some(rest) if rest.starts_with('/') => rest,
            _ => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn table() -> RouteTable<&'static str> {
        RouteTable::builder()
            .redirect("/", "/home")
            .route("Home", "/home", "home")
            .route("Item", "/items/:id", "item")
            .fallback("NotFound", "missing")
            .build()
            .unwrap()
    }

    #[test]
    fn test_initial_navigation() {
        let dispatcher = Dispatcher::new(table());
        // "/" redirects to "/home" before the first activation
        assert_eq!(dispatcher.current().view, "home");
        assert!(!dispatcher.can_go_back());
        assert!(!dispatcher.can_go_forward());
    }

    #[test]
    fn test_navigate_and_history() {
        let mut d = Dispatcher::new(table());
        d.navigate("/items/1");
        d.navigate("/items/2");
        assert_eq!(d.current().params.get("id"), Some("2"));

        assert_eq!(d.back().unwrap().params.get("id"), Some("1"));
        assert_eq!(d.back().unwrap().view, "home");
        assert!(d.back().is_none());

        assert_eq!(d.forward().unwrap().params.get("id"), Some("1"));
        assert_eq!(d.forward().unwrap().params.get("id"), Some("2"));
        assert!(d.forward().is_none());
    }

    #[test]
    fn test_navigate_truncates_forward_history() {
        let mut d = Dispatcher::new(table());
        d.navigate("/items/1");
        d.navigate("/items/2");
        d.back();
        // A fresh navigation discards the "/items/2" forward entry
        d.navigate("/home");
        assert!(!d.can_go_forward());
        assert_eq!(d.back().unwrap().params.get("id"), Some("1"));
    }

    #[test]
    fn test_navigate_to_named_route() {
        let mut d = Dispatcher::new(table());
        let r = d.navigate_to("Item", &[("id", "9")]).unwrap();
        assert_eq!(r.view, "item");
        assert_eq!(r.params.get("id"), Some("9"));
        assert!(d.navigate_to("Ghost", &[]).is_err());
    }

    #[test]
    fn test_subscribers_see_every_activation() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let mut d = Dispatcher::new(table());
        let sink = Rc::clone(&seen);
        d.subscribe(move |r| sink.borrow_mut().push(r.path.clone()));

        d.navigate("/items/1");
        d.back();
        assert_eq!(
            seen.borrow().as_slice(),
            ["/items/1".to_string(), "/home".to_string()]
        );
    }

    #[test]
    fn test_base_path_stripped() {
        let config = DispatcherConfig {
            base_path: "/app".to_string(),
            initial_path: "/app".to_string(),
        };
        let mut d = Dispatcher::with_config(table(), config);
        assert_eq!(d.current().view, "home");

        let r = d.navigate("/app/items/3");
        assert_eq!(r.params.get("id"), Some("3"));
    }

    #[test]
    fn test_base_path_requires_segment_boundary() {
        let config = DispatcherConfig {
            base_path: "/app".to_string(),
            initial_path: "/app".to_string(),
        };
        let mut d = Dispatcher::with_config(table(), config);
        // "/apphome" does not sit under "/app"; nothing is stripped
        assert_eq!(d.navigate("/apphome").view, "missing");
        assert_eq!(d.navigate("/app/home").view, "home");
    }

    #[test]
    fn test_unmatched_path_activates_fallback() {
        let mut d = Dispatcher::new(table());
        assert_eq!(d.navigate("/nonexistent/path").view, "missing");
    }
}
