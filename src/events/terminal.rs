use crate::pages::Page;
use crate::state::{FormField, OverlayTarget, Route, State, SubmissionPhase};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)),
            Event::Tick => Ok(true),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('n') if ctrl => {
            state.next_route();
        }
        KeyCode::Char('p') if ctrl => {
            state.previous_route();
        }
        KeyCode::F(1) => {
            state.toggle_menu();
        }
        KeyCode::F(2) => {
            state.toggle_log();
        }
        KeyCode::PageDown => {
            state.scroll_down();
        }
        KeyCode::PageUp => {
            state.scroll_up();
        }
        _ if state.navigation().is_menu_open() => handle_menu_key(key, state),
        _ => handle_page_key(key, state),
    }
    true
}

/// Keys while the navigation menu is disclosed: digits pick a link.
///
fn handle_menu_key(key: KeyEvent, state: &mut State) {
    match key.code {
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            let route = Route::all()[index];
            state.navigate_from_menu(route);
        }
        KeyCode::Char('m') | KeyCode::Esc => {
            state.close_menu();
        }
        _ => {}
    }
}

fn handle_page_key(key: KeyEvent, state: &mut State) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let accepts_menu_key = match state.page() {
        Page::Static(_) => true,
        Page::Portfolio(page) | Page::Journal(page) => !page.selection().is_open(),
        Page::Contact(_) => false,
    };
    if accepts_menu_key && key.code == KeyCode::Char('m') {
        state.toggle_menu();
        return;
    }
    if let Page::Static(_) = state.page() {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.scroll_down();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.scroll_up();
            }
            _ => {}
        }
        return;
    }

    match state.page_mut() {
        Page::Portfolio(page) | Page::Journal(page) => match key.code {
            KeyCode::Esc => {
                page.on_overlay_gesture(OverlayTarget::Backdrop);
            }
            KeyCode::Char('x') if page.selection().is_open() => {
                page.on_overlay_gesture(OverlayTarget::CloseButton);
            }
            // Keys inside an open overlay are contained by its content
            _ if page.selection().is_open() => {
                page.on_overlay_gesture(OverlayTarget::Content);
            }
            KeyCode::Char('j') | KeyCode::Down => {
                page.next_item();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                page.previous_item();
            }
            KeyCode::Char('f') => {
                page.cycle_filter();
            }
            KeyCode::Enter => {
                page.open_current();
            }
            _ => {}
        },
        Page::Contact(page) => match key.code {
            KeyCode::Char('s') if ctrl => {
                if let Err(e) = page.submit() {
                    warn!("{}", e);
                }
            }
            KeyCode::Enter if page.form().phase() == SubmissionPhase::Submitted => {
                if let Err(e) = page.send_another() {
                    warn!("{}", e);
                }
            }
            KeyCode::Enter if page.focused_field() == FormField::Message => {
                page.type_char('\n');
            }
            KeyCode::Tab | KeyCode::Down => {
                page.focus_next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                page.focus_previous_field();
            }
            KeyCode::Left => {
                page.cycle_option(false);
            }
            KeyCode::Right => {
                page.cycle_option(true);
            }
            KeyCode::Backspace => {
                page.backspace();
            }
            KeyCode::Char(c) if !ctrl => {
                page.type_char(c);
            }
            _ => {}
        },
        Page::Static(_) => {}
    }
}
