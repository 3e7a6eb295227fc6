//! Grid query handlers: filter, sort, pagination
//!
//! Filter and sort changes snap back to the first page; page
//! navigation past either boundary is a no-op (the buttons are
//! disabled there).

use crate::commands::Cmd;
use crate::messages::QueryMsg;
use crate::model::AppModel;

/// Handle filter/sort/pagination messages
pub fn update_grid(model: &mut AppModel, msg: QueryMsg) -> Option<Cmd> {
    match msg {
        QueryMsg::FilterChanged(text) => {
            model.query.set_filter(text);
            Some(Cmd::Redraw)
        }
        QueryMsg::SortColumnClicked(column) => {
            model.query.toggle_sort(&column);
            Some(Cmd::Redraw)
        }
        QueryMsg::NextPage => next_page(model),
        QueryMsg::PrevPage => prev_page(model),
        QueryMsg::PageSelected(index) => page_selected(model, index),
    }
}

/// Advance one page; a no-op on the last page
fn next_page(model: &mut AppModel) -> Option<Cmd> {
    let total_pages = model.page().total_pages;
    if model.query.page_index + 1 < total_pages {
        model.query.page_index += 1;
        Some(Cmd::Redraw)
    } else {
        None
    }
}

/// Go back one page; a no-op on the first page
fn prev_page(model: &mut AppModel) -> Option<Cmd> {
    if model.query.page_index > 0 {
        model.query.page_index -= 1;
        Some(Cmd::Redraw)
    } else {
        None
    }
}

/// Jump straight to a page, clamped into the valid range
fn page_selected(model: &mut AppModel, index: usize) -> Option<Cmd> {
    let total_pages = model.page().total_pages;
    let clamped = index.min(total_pages.saturating_sub(1));
    if clamped == model.query.page_index {
        return None;
    }
    model.query.page_index = clamped;
    Some(Cmd::Redraw)
}
