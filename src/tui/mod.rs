// src/tui/mod.rs
//! Full-screen runtime for the wizard.
//!
//! The loop draws, polls the terminal for up to one tick, and drains events sent back
//! by background work. All state changes go through [`Wizard::update`]; this module only
//! carries out the returned effects.

mod clipboard;
mod keymap;
mod view;

use std::{
    io,
    sync::mpsc::{self, Receiver, Sender},
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use script_lines_usecase::ParsePipeline;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::wizard::{Effect, ParseSuccess, Timeouts, Wizard, WizardEvent};

const TICK: Duration = Duration::from_millis(100);

/// Owns the channel that background work reports into.
pub struct TuiRuntime {
    pipeline: ParsePipeline,
    handle: Handle,
    timeouts: Timeouts,
    tx: Sender<WizardEvent>,
    rx: Receiver<WizardEvent>,
}

impl TuiRuntime {
    pub fn new(pipeline: ParsePipeline, handle: Handle, timeouts: Timeouts) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { pipeline, handle, timeouts, tx, rx }
    }

    pub fn run(self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run_loop(&self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        let mut wizard = Wizard::new(self.timeouts);
        let mut tick: usize = 0;
        info!("wizard started");

        loop {
            terminal.draw(|f| view::draw(f, &wizard, tick))?;
            if wizard.is_quitting() {
                break;
            }

            if event::poll(TICK)? {
                let translated = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => keymap::translate(key, &wizard),
                    Event::Paste(text) => keymap::paste(text, &wizard),
                    _ => None,
                };
                if let Some(event) = translated {
                    wizard = self.dispatch(wizard, event);
                }
            }

            while let Ok(event) = self.rx.try_recv() {
                wizard = self.dispatch(wizard, event);
            }
            tick = tick.wrapping_add(1);
        }

        info!("wizard closed");
        Ok(())
    }

    fn dispatch(&self, wizard: Wizard, event: WizardEvent) -> Wizard {
        let (wizard, effects) = wizard.update(event);
        for effect in effects {
            self.execute(effect);
        }
        wizard
    }

    fn execute(&self, effect: Effect) {
        match effect {
            Effect::StartParse(request) => {
                let pipeline = self.pipeline.clone();
                let tx = self.tx.clone();
                self.handle.spawn(async move {
                    let outcome = match pipeline.run(request).await {
                        Ok(outcome) => Ok(ParseSuccess {
                            results: outcome.results,
                            elapsed: outcome.elapsed,
                            destination: outcome.destination,
                        }),
                        Err(err) => {
                            warn!(error = %err, kind = ?err.kind(), "parse failed");
                            Err(err.to_string())
                        }
                    };
                    let _ = tx.send(WizardEvent::ParseFinished(outcome));
                });
            }
            Effect::ClearErrorAfter { generation, after } => {
                self.send_after(after, WizardEvent::ClearError(generation));
            }
            Effect::ClearNotificationAfter { generation, after } => {
                self.send_after(after, WizardEvent::ClearNotification(generation));
            }
            Effect::CopyToClipboard(text) => {
                debug!(%text, "copying row");
                let _ = self.tx.send(WizardEvent::ClipboardFinished(clipboard::copy(&text)));
            }
            Effect::Quit => debug!("quit requested"),
        }
    }

    fn send_after(&self, after: Duration, event: WizardEvent) {
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            tokio::time::sleep(after).await;
            let _ = tx.send(event);
        });
    }
}
