//! Headless application driver
//!
//! Owns the model, feeds messages through `update`, and performs the
//! commands it returns. File reads and writes run on worker threads and
//! report back over a channel, the same way an interactive front end would
//! receive them between frames.

use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{anyhow, Result};

use statement_grid::commands::Cmd;
use statement_grid::config::GridConfig;
use statement_grid::csv::read_source;
use statement_grid::messages::{AppMsg, Msg};
use statement_grid::model::AppModel;
use statement_grid::update::update;

pub struct App {
    model: AppModel,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Worker threads whose result message has not arrived yet
    in_flight: usize,
}

impl App {
    pub fn new(config: GridConfig, width: f32, height: f32) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model: AppModel::new(config, width, height),
            msg_tx,
            msg_rx,
            in_flight: 0,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut AppModel {
        &mut self.model
    }

    /// Run one message through update and perform the resulting command
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::LoadFile { request, path } => {
                let tx = self.msg_tx.clone();
                self.in_flight += 1;
                std::thread::spawn(move || {
                    let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
                    let result = read_source(&path);
                    let _ = tx.send(Msg::App(AppMsg::FileLoaded {
                        request,
                        path,
                        size,
                        result,
                    }));
                });
            }
            Cmd::SaveFile { path, content } => {
                let tx = self.msg_tx.clone();
                self.in_flight += 1;
                std::thread::spawn(move || {
                    let result = std::fs::write(&path, content).map_err(|e| e.to_string());
                    let _ = tx.send(Msg::App(AppMsg::ExportCompleted { path, result }));
                });
            }
            Cmd::Quit => {
                self.model.ui.should_quit = true;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Block until every worker has reported back
    pub fn wait_idle(&mut self) -> Result<()> {
        while self.in_flight > 0 {
            let msg = self
                .msg_rx
                .recv()
                .map_err(|_| anyhow!("worker channel closed with {} pending", self.in_flight))?;
            self.in_flight -= 1;
            self.dispatch(msg);
        }
        Ok(())
    }

    /// Tear down the notification bus
    pub fn shutdown(&mut self) {
        self.model.notifications.dispose();
        tracing::debug!("runtime shut down");
    }
}
