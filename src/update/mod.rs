//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod grid;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::StoreSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use grid::update_grid;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Grid(m) => grid::update_grid(model, m),
        Msg::App(m) => app::update_app(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after store state and logs diffs for debugging.
/// Periodic ticks are not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::Tick));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = model.store().map(StoreSnapshot::from_store);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if let (Some(before), Some(store)) = (&before, model.store()) {
        let after = StoreSnapshot::from_store(store);
        if let Some(diff) = before.diff(&after) {
            debug!(target: "store", %diff, "state changed");
        }
        debug_assert!(
            store.rows().iter().all(|r| r.len() == store.column_count()),
            "row width diverged from headers after {}",
            msg_name
        );
    }

    result
}

/// Get a display name for a message
///
/// File contents are elided so loads do not flood the log.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::AppMsg;

    match msg {
        Msg::Grid(m) => format!("Grid::{:?}", m),
        Msg::App(AppMsg::FileLoaded {
            request,
            path,
            size,
            result,
        }) => format!(
            "App::FileLoaded {{ request: {}, path: {}, size: {}, ok: {} }}",
            request,
            path.display(),
            size,
            result.is_ok()
        ),
        Msg::App(AppMsg::ExportCompleted { path, result }) => format!(
            "App::ExportCompleted {{ path: {}, ok: {} }}",
            path.display(),
            result.is_ok()
        ),
        Msg::App(m) => format!("App::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
    }
}
