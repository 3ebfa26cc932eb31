//! Grid message handlers (selection, sort, delete, undo/redo, scroll)

use crate::commands::Cmd;
use crate::messages::GridMsg;
use crate::model::AppModel;

/// Handle grid messages; ignored while no document is loaded
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    let Some(store) = model.document.as_mut().map(|d| &mut d.store) else {
        if matches!(msg, GridMsg::DeleteSelectedRows | GridMsg::DeleteSelectedColumns) {
            model.notifications.warning("No data loaded");
            return Some(Cmd::Redraw);
        }
        return None;
    };

    match msg {
        GridMsg::ToggleRow {
            index,
            multi,
            range,
        } => store
            .toggle_row_at(index, multi, range)
            .then_some(Cmd::Redraw),

        GridMsg::ToggleColumn {
            index,
            multi,
            range,
        } => store
            .toggle_column(index, multi, range)
            .then_some(Cmd::Redraw),

        GridMsg::SelectAllRows => {
            store.select_all_rows();
            Some(Cmd::Redraw)
        }

        GridMsg::SelectAllColumns => {
            store.select_all_columns();
            Some(Cmd::Redraw)
        }

        GridMsg::ClearSelection => {
            store.clear_selection();
            Some(Cmd::Redraw)
        }

        GridMsg::SortBy(column) => {
            let sort = store.sort_by(column);
            tracing::debug!(?sort, "sort changed");
            Some(Cmd::Redraw)
        }

        GridMsg::ClearSort => {
            store.clear_sort();
            Some(Cmd::Redraw)
        }

        GridMsg::DeleteSelectedRows => {
            if store.selected_rows().is_empty() {
                model.notifications.warning("Please select rows to delete");
                return Some(Cmd::Redraw);
            }
            let removed = store.delete_selected_rows();
            model
                .notifications
                .success(format!("Deleted {} row(s)", removed));
            model.clamp_viewport();
            Some(Cmd::Redraw)
        }

        GridMsg::DeleteSelectedColumns => {
            if store.selected_columns().is_empty() {
                model
                    .notifications
                    .warning("Please select columns to delete");
                return Some(Cmd::Redraw);
            }
            let removed = store.delete_selected_columns();
            model
                .notifications
                .success(format!("Deleted {} column(s)", removed));
            model.clamp_viewport();
            Some(Cmd::Redraw)
        }

        GridMsg::Undo => {
            if !store.undo() {
                return None;
            }
            model.notifications.info("Undone");
            model.clamp_viewport();
            Some(Cmd::Redraw)
        }

        GridMsg::Redo => {
            if !store.redo() {
                return None;
            }
            model.notifications.info("Redone");
            model.clamp_viewport();
            Some(Cmd::Redraw)
        }

        GridMsg::Scroll { top, left } => {
            model.viewport.scroll_top = top;
            model.viewport.scroll_left = left;
            model.clamp_viewport();
            Some(Cmd::Redraw)
        }
    }
}
