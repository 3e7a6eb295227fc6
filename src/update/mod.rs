//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod edit;
mod grid;
mod import;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use import::read_import_file;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Import(m) => import::update_import(model, m),
        Msg::Query(m) => grid::update_grid(model, m),
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::ResetAll => import::reset_all(model),
        Msg::ExportRequested => import::export(model),
    }
}
