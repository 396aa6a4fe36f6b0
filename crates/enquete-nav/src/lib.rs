//! enquete-nav: Client-side route table and navigation dispatch
//!
//! Declarative routing for the enquete questionnaire SPA. A route table
//! is an ordered list of path-pattern -> view bindings with a root
//! redirect and a catch-all not-found fallback; resolution is total,
//! synchronous, and free of side effects. The matching core lives in
//! `enquete-router`.
//!
//! ## Layers
//! - [`RouteTable`] - validated at build time, immutable afterwards
//! - [`Dispatcher`] - serial navigation events, history, subscribers
//! - [`survey`] - the concrete table for the questionnaire application
//!
//! ## Example
//! ```
//! use enquete_nav::{survey, Dispatcher};
//!
//! let table = survey::route_table().unwrap();
//! let mut nav = Dispatcher::new(table);
//! assert_eq!(nav.current().view, survey::View::Targeted);
//!
//! let r = nav.navigate("/questionnaires/42");
//! assert_eq!(r.view, survey::View::QuestionnaireDetails);
//! assert_eq!(r.params.get("id"), Some("42"));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod dispatcher;
pub mod error;
pub mod params;
pub mod route;
pub mod survey;
pub mod table;

// Re-exports
pub use dispatcher::{Dispatcher, DispatcherConfig, Subscriber};
pub use error::{Error, Result};
pub use params::Params;
pub use route::{RouteEntry, StaticProps};
pub use table::{Resolution, RouteTable, RouteTableBuilder};

// Matching core re-exports (SSOT in enquete-router)
pub use enquete_router::{Pattern, PatternError, RenderError};
