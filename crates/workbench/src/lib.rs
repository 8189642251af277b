//! # graphql-workbench
//!
//! Headless model of a GraphiQL workbench: the query and variables editors,
//! a schema explorer panel and a code exporter panel. Rendering belongs to
//! the host; this crate owns the state, the event handlers, and the decision
//! of which panels and toolbar buttons exist.
//!
//! ```rust
//! use graphql_workbench::{Workbench, WorkbenchOptions};
//!
//! let mut bench = Workbench::new(WorkbenchOptions::new("http://localhost:4000/graphql"));
//! bench.edit_query("query Foo { bar }");
//! assert!(bench.query().starts_with("query Foo"));
//! ```

mod error;
mod options;
mod panels;
mod workbench;

pub use error::InspectError;
pub use options::{EditHook, WorkbenchOptions};
pub use panels::{Panel, ToolbarAction, ToolbarButton};
pub use workbench::Workbench;
