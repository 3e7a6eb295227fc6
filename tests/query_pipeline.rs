//! Integration tests for the filter/sort/paginate pipeline as
//! driven through the message loop: header clicks, search input, page
//! navigation.

mod common;

use gridbook::messages::{Msg, QueryMsg};
use gridbook::update::update;
use gridbook::{RowId, SortDirection};

use common::{edit_cell, model_with_generated, model_with_text};

fn page_ids(model: &gridbook::AppModel) -> Vec<u64> {
    model.page().rows.iter().map(|row| row.id.0).collect()
}

// ============================================================================
// Sort toggle scenario
// ============================================================================

#[test]
fn test_header_clicks_toggle_and_reset_direction() {
    let mut model = model_with_text(
        "Title,Author\n\
         Citrus,Adams\n\
         Apple,Brown\n\
         Banana,Adams",
    );

    // first click: ascending by Title
    update(
        &mut model,
        Msg::Query(QueryMsg::SortColumnClicked("Title".to_string())),
    );
    assert_eq!(page_ids(&model), [2, 3, 1]);
    assert_eq!(model.query.sort.direction, SortDirection::Ascending);

    // second click: descending by Title
    update(
        &mut model,
        Msg::Query(QueryMsg::SortColumnClicked("Title".to_string())),
    );
    assert_eq!(page_ids(&model), [1, 3, 2]);
    assert_eq!(model.query.sort.direction, SortDirection::Descending);

    // different column: back to ascending, ties keep input order
    update(
        &mut model,
        Msg::Query(QueryMsg::SortColumnClicked("Author".to_string())),
    );
    assert_eq!(page_ids(&model), [1, 3, 2]);
    assert_eq!(model.query.sort.column.as_deref(), Some("Author"));
    assert_eq!(model.query.sort.direction, SortDirection::Ascending);
}

#[test]
fn test_sorting_does_not_reorder_the_working_set() {
    let mut model = model_with_text("Title\nB\nA");
    update(
        &mut model,
        Msg::Query(QueryMsg::SortColumnClicked("Title".to_string())),
    );

    assert_eq!(page_ids(&model), [2, 1]);
    // display order only; storage order is untouched
    let stored: Vec<u64> = model.working().unwrap().rows().iter().map(|r| r.id.0).collect();
    assert_eq!(stored, [1, 2]);
}

// ============================================================================
// Filter + paginate scenario
// ============================================================================

#[test]
fn test_filter_collapses_pagination_to_matches() {
    let mut model = model_with_generated(120);
    assert_eq!(model.page().total_pages, 3);

    // plant a needle in three rows scattered across pages
    for id in [3, 57, 111] {
        edit_cell(&mut model, id, "Title", &format!("Nebula {}", id));
    }

    update(
        &mut model,
        Msg::Query(QueryMsg::FilterChanged("nebula".to_string())),
    );

    let view = model.page();
    assert_eq!(view.match_count, 3);
    assert_eq!(view.total_pages, 1);
    assert_eq!(page_ids(&model), [3, 57, 111]);
}

#[test]
fn test_filter_and_sort_reset_to_the_first_page() {
    let mut model = model_with_generated(120);
    update(&mut model, Msg::Query(QueryMsg::NextPage));
    assert_eq!(model.query.page_index, 1);

    update(
        &mut model,
        Msg::Query(QueryMsg::FilterChanged("the".to_string())),
    );
    assert_eq!(model.query.page_index, 0);

    update(&mut model, Msg::Query(QueryMsg::NextPage));
    update(
        &mut model,
        Msg::Query(QueryMsg::SortColumnClicked("Author".to_string())),
    );
    assert_eq!(model.query.page_index, 0);
}

#[test]
fn test_filtering_twice_matches_filtering_once() {
    let mut model = model_with_generated(120);

    update(
        &mut model,
        Msg::Query(QueryMsg::FilterChanged("the".to_string())),
    );
    let once = page_ids(&model);
    let count = model.page().match_count;

    update(
        &mut model,
        Msg::Query(QueryMsg::FilterChanged("the".to_string())),
    );
    assert_eq!(page_ids(&model), once);
    assert_eq!(model.page().match_count, count);
}

// ============================================================================
// Page navigation
// ============================================================================

#[test]
fn test_page_navigation_clamps_at_boundaries() {
    let mut model = model_with_generated(120);

    // backwards off the first page is a no-op
    assert_eq!(update(&mut model, Msg::Query(QueryMsg::PrevPage)), None);
    assert_eq!(model.query.page_index, 0);

    update(&mut model, Msg::Query(QueryMsg::NextPage));
    update(&mut model, Msg::Query(QueryMsg::NextPage));
    assert_eq!(model.query.page_index, 2);
    assert_eq!(model.page().rows.len(), 20);

    // forwards off the last page is a no-op
    assert_eq!(update(&mut model, Msg::Query(QueryMsg::NextPage)), None);
    assert_eq!(model.query.page_index, 2);
}

#[test]
fn test_page_sizes_split_fifty_fifty_twenty() {
    let mut model = model_with_generated(120);

    assert_eq!(model.page().rows.len(), 50);
    assert_eq!(model.page().offset(), 0);

    update(&mut model, Msg::Query(QueryMsg::PageSelected(1)));
    assert_eq!(model.page().rows.len(), 50);
    assert_eq!(model.page().offset(), 50);

    update(&mut model, Msg::Query(QueryMsg::PageSelected(2)));
    assert_eq!(model.page().rows.len(), 20);
}

#[test]
fn test_page_selection_is_clamped_into_range() {
    let mut model = model_with_generated(120);

    update(&mut model, Msg::Query(QueryMsg::PageSelected(99)));
    assert_eq!(model.query.page_index, 2);
}

#[test]
fn test_page_rows_carry_stable_ids_for_resolution() {
    let mut model = model_with_generated(120);
    update(
        &mut model,
        Msg::Query(QueryMsg::SortColumnClicked("Title".to_string())),
    );

    // whatever lands on the page, its id resolves to the same row in
    // the working set
    let view = model.page();
    let first = view.rows.first().unwrap();
    let resolved = model.working().unwrap().row(first.id).unwrap();
    assert_eq!(resolved.values, first.values);
    assert_ne!(first.id, RowId(0));
}
