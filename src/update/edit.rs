//! Cell editing handlers
//!
//! The session resolves cells by row id; the draft is handed to the
//! tracker on commit and applied only if it still differs from the
//! row's live value.

use crate::commands::Cmd;
use crate::dataset::RowId;
use crate::messages::EditMsg;
use crate::model::AppModel;

/// Handle edit session messages
pub fn update_edit(model: &mut AppModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::CellActivated { row, column } => cell_activated(model, row, column),
        EditMsg::DraftChanged(text) => {
            model.session.set_draft(text);
            Some(Cmd::Redraw)
        }
        EditMsg::Commit => commit(model),
        EditMsg::Cancel => {
            model.session.cancel();
            Some(Cmd::Redraw)
        }
    }
}

/// Open a cell for editing, discarding any previous draft (no
/// auto-save on switch)
fn cell_activated(model: &mut AppModel, row: RowId, column: String) -> Option<Cmd> {
    if !model.is_editable_column(&column) {
        tracing::warn!("ignoring activation of non-editable column {}", column);
        return None;
    }
    let current = model.working()?.value(row, &column)?.to_string();
    model.session.begin(row, column, current);
    Some(Cmd::Redraw)
}

/// Commit the open draft through the tracker
fn commit(model: &mut AppModel) -> Option<Cmd> {
    let edit = model.session.take()?;
    let tracker = model.tracker.as_mut()?;

    if tracker.commit_edit(edit.row, &edit.column, &edit.draft) {
        tracing::debug!("cell {}/{} updated", edit.row, edit.column);
    }
    Some(Cmd::Redraw)
}
