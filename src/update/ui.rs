//! UI message handlers (notification lifetime)

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::DismissNotification(id) => model
            .notifications
            .dismiss(id)
            .then_some(Cmd::Redraw),

        UiMsg::Tick => {
            let expired = model.notifications.prune_expired(Instant::now());
            (expired > 0).then_some(Cmd::Redraw)
        }
    }
}
