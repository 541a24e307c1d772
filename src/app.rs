use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{CustomLogger, LogBuffer};
use crate::pages::PageContext;
use crate::state::State;
use crate::submission::{submitter_from_config, CompletionReceiver, SubmissionCompleted};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    completions: CompletionReceiver,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let log_buffer = LogBuffer::new();
        CustomLogger::new(LevelFilter::Debug, log_buffer.clone())
            .init()
            .map_err(|e| AppError::Logger(e.to_string()))?;

        info!("Starting application...");
        let submitter = submitter_from_config(&config)?;
        let (tx, rx) = std::sync::mpsc::channel::<SubmissionCompleted>();
        let context = PageContext::new(submitter, config.failure_policy, tx);
        let theme = Theme::by_name(&config.theme_name);

        let mut app = App {
            state: State::new(context, log_buffer, theme),
            completions: rx,
        };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|e| AppError::Terminal(e.to_string()))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal);

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            self.state.drain_completions(&self.completions);
            if let Ok(size) = terminal.size() {
                self.state.set_terminal_size(size);
            };
            terminal
                .draw(|frame| crate::ui::render(frame, &mut self.state))
                .map_err(|e| AppError::Terminal(e.to_string()))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
