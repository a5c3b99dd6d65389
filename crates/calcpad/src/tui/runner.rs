//! Event loop shared by the CLI and the example binary

use std::io;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::debug;

use super::app::CalculatorApp;
use super::input::InputHandler;
use super::ui::render;

/// Applies one terminal event to the app.
///
/// `frame` is the area of the last drawn frame, used to locate the keypad
/// for mouse clicks.
pub fn handle_event(app: &mut CalculatorApp, handler: &InputHandler, event: &Event, frame: Rect) {
    match event {
        Event::Key(key) => app.handle_action(handler.handle_key(*key)),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            app.click(frame, *column, *row);
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..
        }) => app.release_keys(),
        _ => {}
    }
}

/// Draws and reads events until the user quits.
///
/// Terminal setup (raw mode, alternate screen, mouse capture) is the
/// caller's job.
pub fn run<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<CalculatorApp> {
    let mut app = CalculatorApp::new();
    let handler = InputHandler::new();

    while !app.should_quit() {
        let frame = terminal.draw(|f| render(&app, f))?.area;
        let event = event::read()?;
        handle_event(&mut app, &handler, &event, frame);
    }

    debug!(display = app.calculator().display(), "tui closed");
    Ok(app)
}

/// Runs the calculator on stdout in raw mode with the alternate screen and
/// mouse capture, restoring the terminal before returning.
pub fn run_in_terminal() -> io::Result<CalculatorApp> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal);

    // Restore even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
