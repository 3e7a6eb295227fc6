//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles
//! separately.

#![allow(dead_code)]

use gridbook::messages::{EditMsg, ImportMsg, Msg};
use gridbook::model::AppModel;
use gridbook::update::update;
use gridbook::{Cmd, RowId};

/// Two-row book dataset used across suites
pub const BOOKS_CSV: &str = "Title,Author\nFoo,Bar\nBaz,Qux";

/// Install the tracing subscriber once per test binary
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Create a model with the given delimited text already imported
pub fn model_with_text(text: &str) -> AppModel {
    init_logging();
    let mut model = AppModel::new();
    update(
        &mut model,
        Msg::Import(ImportMsg::TextLoaded {
            text: text.to_string(),
        }),
    );
    model
}

/// Create a model with `count` generated rows under a fixed seed
pub fn model_with_generated(count: usize) -> AppModel {
    init_logging();
    let mut model = AppModel::new();
    update(
        &mut model,
        Msg::Import(ImportMsg::GenerateRequested { count, seed: 42 }),
    );
    model
}

/// Working-set value of a cell, by row id and column name
pub fn cell(model: &AppModel, id: u64, column: &str) -> String {
    model
        .working()
        .expect("a dataset should be installed")
        .value(RowId(id), column)
        .expect("the cell should exist")
        .to_string()
}

/// Drive a full edit through the message loop: activate, type, commit
pub fn edit_cell(model: &mut AppModel, id: u64, column: &str, value: &str) {
    update(
        model,
        Msg::Edit(EditMsg::CellActivated {
            row: RowId(id),
            column: column.to_string(),
        }),
    );
    update(model, Msg::Edit(EditMsg::DraftChanged(value.to_string())));
    update(model, Msg::Edit(EditMsg::Commit));
}

/// Run an export and return the serialized contents
pub fn export_contents(model: &mut AppModel) -> String {
    match update(model, Msg::ExportRequested) {
        Some(Cmd::Export { contents, .. }) => contents,
        other => panic!("expected an export command, got {:?}", other),
    }
}
