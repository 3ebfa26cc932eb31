//! Application message handlers (loading, export, lifecycle)

use std::path::PathBuf;

use chrono::Utc;

use crate::commands::Cmd;
use crate::csv::{export_csv, process, processed_file_name};
use crate::messages::AppMsg;
use crate::model::{AppModel, LoadedFile};
use crate::util::{filename_for_display, validate_source, SourceInfo};

/// Handle application messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::LoadFile(path) => {
            let name = filename_for_display(&path);
            let checked = SourceInfo::from_path(&path).and_then(|info| validate_source(&info));
            if let Err(e) = checked {
                tracing::warn!(path = %path.display(), error = %e, "rejected source");
                model.notifications.error(e.user_message(&name));
                return Some(Cmd::Redraw);
            }

            let request = model.ui.begin_load();
            tracing::info!(request, path = %path.display(), "loading statement");
            Some(Cmd::LoadFile { request, path })
        }

        AppMsg::FileLoaded {
            request,
            path,
            size,
            result,
        } => {
            if !model.ui.finish_load(request) {
                tracing::debug!(request, "discarding stale load result");
                return None;
            }

            let name = filename_for_display(&path);
            let processed =
                result.and_then(|content| process(&content, &model.config.layout));

            match processed {
                Ok(processed) => {
                    tracing::info!(
                        file = %name,
                        rows = processed.table.row_count(),
                        warnings = processed.warnings.len(),
                        "statement loaded"
                    );
                    model.document = Some(LoadedFile::new(
                        path,
                        name.clone(),
                        size,
                        processed,
                        model.config.max_history_size,
                    ));
                    model.viewport.scroll_top = 0.0;
                    model.viewport.scroll_left = 0.0;
                    model
                        .notifications
                        .success(format!("Successfully processed {}", name));
                }
                Err(e) => {
                    // The previous document, if any, stays in place
                    tracing::warn!(file = %name, error = %e, "failed to process statement");
                    model.notifications.error(e.user_message(&name));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Export { path } => {
            let Some(doc) = model.document.as_ref() else {
                model.notifications.warning("No data to export");
                return Some(Cmd::Redraw);
            };

            let path = path.unwrap_or_else(|| default_export_path(&doc.path, &doc.file_name));
            let content = export_csv(doc.store.table(), Utc::now());
            tracing::info!(path = %path.display(), bytes = content.len(), "exporting");
            Some(Cmd::SaveFile { path, content })
        }

        AppMsg::ExportCompleted { path, result } => {
            match result {
                Ok(()) => {
                    model.notifications.success("CSV exported successfully");
                    model.ui.last_export = Some(path);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "export failed");
                    model
                        .notifications
                        .error(format!("Failed to export CSV: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Reset => {
            model.document = None;
            model.ui.pending_load = None;
            model.ui.is_loading = false;
            model.viewport.scroll_top = 0.0;
            model.viewport.scroll_left = 0.0;
            Some(Cmd::Redraw)
        }

        AppMsg::Resize { width, height } => {
            model.viewport.container_width = width.max(0.0);
            model.viewport.container_height = height.max(0.0);
            model.clamp_viewport();
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => {
            model.ui.should_quit = true;
            Some(Cmd::Quit)
        }
    }
}

fn default_export_path(source: &std::path::Path, file_name: &str) -> PathBuf {
    source.with_file_name(processed_file_name(file_name))
}
