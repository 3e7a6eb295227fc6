//! Import, generation, reset and export handlers
//!
//! Installing a dataset is all-or-nothing: a parse or read failure
//! leaves the previous dataset in place with the loading flag cleared.
//! When two imports race, each completion installs wholesale and the
//! later one silently wins; there is no cancellation of in-flight work.

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::commands::Cmd;
use crate::dataset::Dataset;
use crate::delimited;
use crate::generate;
use crate::messages::ImportMsg;
use crate::model::AppModel;
use crate::query::QueryState;
use crate::session::EditSession;
use crate::tracker::ChangeTracker;

/// Handle import and generation messages
pub fn update_import(model: &mut AppModel, msg: ImportMsg) -> Option<Cmd> {
    match msg {
        ImportMsg::FileRequested { path } => {
            model.loading = true;
            Some(Cmd::ReadFile { path })
        }
        ImportMsg::TextLoaded { text } => text_loaded(model, &text),
        ImportMsg::LoadFailed { error } => {
            tracing::error!("failed to read import file: {}", error);
            model.loading = false;
            Some(Cmd::Redraw)
        }
        ImportMsg::GenerateRequested { count, seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            install(model, generate::generate(&mut rng, count));
            Some(Cmd::Redraw)
        }
    }
}

/// Parse uploaded text; a failure keeps the existing dataset
fn text_loaded(model: &mut AppModel, text: &str) -> Option<Cmd> {
    match delimited::parse(text) {
        Ok(dataset) => {
            tracing::debug!("imported dataset with {} rows", dataset.len());
            install(model, dataset);
        }
        Err(e) => {
            tracing::error!("failed to parse dataset: {}", e);
            model.loading = false;
        }
    }
    Some(Cmd::Redraw)
}

/// Install a freshly imported or generated dataset wholesale: new
/// baseline, fresh query state, idle edit session.
fn install(model: &mut AppModel, dataset: Dataset) {
    model.tracker = Some(ChangeTracker::new(dataset));
    model.query = QueryState::default();
    model.session = EditSession::default();
    model.loading = false;
}

/// Restore the working set to the baseline snapshot. Filter and sort
/// are kept; any open draft is discarded.
pub fn reset_all(model: &mut AppModel) -> Option<Cmd> {
    let tracker = model.tracker.as_mut()?;
    tracker.reset();
    model.session.cancel();
    Some(Cmd::Redraw)
}

/// Serialize the working set for download. A no-op without rows to
/// export, matching the disabled download button.
pub fn export(model: &mut AppModel) -> Option<Cmd> {
    let Some(tracker) = model.tracker.as_ref() else {
        tracing::warn!("export requested with no dataset loaded");
        return None;
    };
    if tracker.working().is_empty() {
        tracing::warn!("export requested with an empty dataset");
        return None;
    }

    Some(Cmd::Export {
        filename: delimited::export_filename(Utc::now().date_naive()),
        contents: delimited::serialize(tracker.working()),
    })
}

/// Read an import file fully into memory, as the host-side handler of
/// [`Cmd::ReadFile`] would before feeding `ImportMsg::TextLoaded`.
pub fn read_import_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read import file {}", path.display()))
}
