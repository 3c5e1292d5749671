//! Tui command handler

use std::io;

use calcular::tui::{render, screen_areas, InputHandler, KeypadApp, PadAction};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use crate::commands::TuiArgs;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Open the interactive keypad calculator.
///
/// The terminal is restored even when the event loop errors, so a
/// failure never leaves the shell in raw mode.
pub fn execute_tui(_config: &CliConfig, args: &TuiArgs) -> CliResult<()> {
    let mouse = !args.no_mouse;
    tracing::debug!(mouse, "opening keypad");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    if mouse {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    result
}

/// Apply a single pad action to the app.
fn handle_action(app: &mut KeypadApp, action: PadAction) {
    match action {
        PadAction::Press(key) => app.press(key),
        PadAction::Quit => app.quit(),
        PadAction::Noop => {}
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> CliResult<()> {
    let mut app = KeypadApp::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) => {
                app.release_buttons();
                handle_action(&mut app, input_handler.handle_key(key));
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    app.release_buttons();
                    let size = terminal.size()?;
                    let areas = screen_areas(Rect::new(0, 0, size.width, size.height));
                    if let Some(index) =
                        app.keypad().hit_test(areas.keypad, mouse.column, mouse.row)
                    {
                        app.press_button(index);
                    }
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
