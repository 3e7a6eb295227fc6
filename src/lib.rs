//! gridbook - tabular dataset editor engine
//!
//! This crate provides the data core and update logic for a grid-based
//! dataset editor: delimited import/export, synthetic data generation,
//! per-cell edits with change tracking, and the filter/sort/paginate
//! pipeline that derives each displayed page. It implements
//! the Elm Architecture pattern; a thin presentation layer (not part of
//! this crate) sends [`Msg`] values through [`update`] and renders the
//! model's derived views.

pub mod commands;
pub mod dataset;
pub mod delimited;
pub mod generate;
pub mod messages;
pub mod model;
pub mod query;
pub mod session;
pub mod tracker;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use dataset::{Dataset, Row, RowId, DISPLAY_COLUMNS};
pub use messages::{EditMsg, ImportMsg, Msg, QueryMsg};
pub use model::AppModel;
pub use query::{PageView, QueryState, SortDirection, SortSpec};
pub use session::EditSession;
pub use tracker::ChangeTracker;
pub use update::update;
