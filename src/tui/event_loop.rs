use crate::debounce::Debouncer;
use crate::seo::schedule_emission;
use crate::tui::TuiApp;
use crate::tui::state::Focus;
use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc::unbounded_channel;
use tracing::debug;

/// What a keystroke did to the application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Ignored,
    /// The search field changed; schedule a debounced commit and echo it.
    Edited,
    /// Escape cleared the field; commit the empty query immediately.
    Cleared,
    /// Focus or layout changed, redraw only.
    Redraw,
    Quit,
}

impl TuiApp {
    /// Pure state transition for one key press. Escape is honored only while
    /// the search field has focus, and blurs it afterwards.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        if modifiers.contains(KeyModifiers::CONTROL)
            && matches!(code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            return KeyAction::Quit;
        }
        if code == KeyCode::Tab {
            self.focus = self.focus.toggled();
            return KeyAction::Redraw;
        }
        if self.focus != Focus::Search {
            return KeyAction::Ignored;
        }
        match code {
            KeyCode::Char(c) => {
                self.input.push(c);
                KeyAction::Edited
            }
            KeyCode::Backspace => match self.input.pop() {
                Some(_) => KeyAction::Edited,
                None => KeyAction::Ignored,
            },
            KeyCode::Esc => {
                self.input.clear();
                self.focus = Focus::Results;
                KeyAction::Cleared
            }
            _ => KeyAction::Ignored,
        }
    }

    pub(crate) async fn event_loop(&mut self) -> Result<()> {
        // Attach input handling: debounced commits flow over the channel,
        // keystrokes come from the terminal stream.
        let (tx, mut rx) = unbounded_channel();
        let mut debouncer = Debouncer::new(
            Duration::from_millis(self.config.debounce_delay_ms),
            tx,
        );
        let mut events = EventStream::new();

        // First render uses the restored (or empty) query.
        self.render()?;

        // Deferred so it never blocks the interactive frame above.
        schedule_emission(
            self.config.page.clone(),
            self.catalog.clone(),
            self.config.page_url.clone(),
        );

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    let Some(event) = maybe_event else { break };
                    let event = event.context("read terminal event")?;
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            match self.handle_key(key.code, key.modifiers) {
                                KeyAction::Quit => {
                                    debug!("quit requested");
                                    break;
                                }
                                KeyAction::Edited => {
                                    debouncer.call(self.input.clone());
                                    // Echo the keystroke now; results follow
                                    // once the burst quiesces.
                                    self.render()?;
                                }
                                KeyAction::Cleared => {
                                    debouncer.cancel();
                                    self.commit_query(String::new())?;
                                }
                                KeyAction::Redraw => self.render()?,
                                KeyAction::Ignored => {}
                            }
                        }
                        Event::Resize(_, _) => self.render()?,
                        _ => {}
                    }
                }
                Some(query) = rx.recv() => {
                    self.commit_query(query)?;
                }
            }
        }
        Ok(())
    }
}
