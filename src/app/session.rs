//! Selection entry point and host loop.
//!
//! [`select`] owns the terminal for the duration of one interaction: it takes
//! raw mode + the alternate screen through [`TerminalSession`], drives
//! [`run_loop`], and gives the terminal back before returning.

use std::io::{self, stderr, Stderr};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::event::{translate, EventSource, TerminalEvents};
use super::handler::{handle_input, Directive};
use super::state::{Outcome, SelectorState};
use crate::config::AppConfig;
use crate::error::SelectResult;
use crate::ui::selector::SelectorWidget;

/// Something that can show the current selector view.
pub trait Screen {
    fn paint(&mut self, state: &SelectorState) -> io::Result<()>;

    /// Give the display back once the selector has stopped.
    fn close(self) -> io::Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Show `options` under `title` and block until the user picks one or quits.
pub fn select<I, S>(title: &str, options: I, config: &AppConfig) -> SelectResult<Outcome>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let state = SelectorState::new(title, options)?.with_help(config.help_line());
    tracing::debug!(title, options = state.options().len(), "starting selection");

    let finished = drive(state, config, &mut TerminalEvents, TerminalSession::new()?)?;

    let outcome = finished.outcome().unwrap_or(Outcome::Cancelled);
    match &outcome {
        Outcome::Selected { index, label } => tracing::info!(title, index, label, "option selected"),
        Outcome::Cancelled => tracing::info!(title, "selection cancelled"),
    }
    Ok(outcome)
}

/// Paint, then read → translate → transition → repaint until the selector
/// stops.  Returns the terminated state.
pub fn run_loop<E, S>(
    mut state: SelectorState,
    config: &AppConfig,
    events: &mut E,
    screen: &mut S,
) -> SelectResult<SelectorState>
where
    E: EventSource,
    S: Screen,
{
    screen.paint(&state)?;

    loop {
        let event = events.read()?;
        let input = translate(config, &event);
        tracing::trace!(?event, ?input, "input");

        match handle_input(&mut state, input) {
            Directive::Continue => screen.paint(&state)?,
            Directive::Stop => break,
        }
    }

    Ok(state)
}

/// [`run_loop`], then close the screen.  A failed close is reported like any
/// other terminal error; if the loop fails the screen is dropped instead.
pub fn drive<E, S>(
    state: SelectorState,
    config: &AppConfig,
    events: &mut E,
    mut screen: S,
) -> SelectResult<SelectorState>
where
    E: EventSource,
    S: Screen,
{
    let finished = run_loop(state, config, events, &mut screen)?;
    screen.close()?;
    Ok(finished)
}

// ───────────────────────────────────────── terminal ──────────

/// Raw mode + alternate screen on stderr.
///
/// [`Screen::close`] restores the terminal and reports failures; `Drop` is the
/// fallback for error and panic paths.  stdout stays untouched so command
/// output can be piped.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    restored: bool,
}

impl TerminalSession {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        if let Err(err) = execute!(stderr(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        let backend = CrosstermBackend::new(stderr());
        let mut terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                teardown_terminal();
                return Err(err);
            }
        };
        if let Err(err) = terminal.hide_cursor() {
            teardown_terminal();
            return Err(err);
        }

        Ok(Self {
            terminal,
            restored: false,
        })
    }
}

impl Screen for TerminalSession {
    fn paint(&mut self, state: &SelectorState) -> io::Result<()> {
        self.terminal
            .draw(|frame| frame.render_widget(SelectorWidget::new(state), frame.area()))?;
        Ok(())
    }

    fn close(mut self) -> io::Result<()> {
        self.restored = true;
        // Attempt every step; the first failure wins.
        let cursor = self.terminal.show_cursor();
        let raw = disable_raw_mode();
        let screen = execute!(stderr(), LeaveAlternateScreen);
        cursor.and(raw).and(screen)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stderr(), LeaveAlternateScreen);
}
