//! TUI rendering
//!
//! Calcular: Visual feedback - the display panel shows exactly the
//! session buffer, nothing derived.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::KeypadApp;
use super::keypad::KeypadWidget;

/// Renders the calculator screen to the frame.
pub fn render(app: &KeypadApp, frame: &mut Frame) {
    let area = frame.area();
    let screen = CalcScreen::new(app);
    frame.render_widget(screen, area);
}

/// The screen regions, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Display buffer panel.
    pub display: Rect,
    /// Advisory line under the display.
    pub advisory: Rect,
    /// Phase/status footer.
    pub status: Rect,
    /// Keypad grid (mouse hit-test target).
    pub keypad: Rect,
    /// Help sidebar.
    pub help: Rect,
}

/// Computes the screen regions for a terminal of the given size.
///
/// The mouse handler uses the same split as the renderer, so clicks and
/// drawn buttons always agree.
#[must_use]
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(35),    // Display column
            Constraint::Length(22), // Keypad
            Constraint::Length(22), // Help sidebar
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Length(3), // Advisory
            Constraint::Min(1),    // Status
        ])
        .split(columns[0]);

    ScreenAreas {
        display: main[0],
        advisory: main[1],
        status: main[2],
        keypad: columns[1],
        help: columns[2],
    }
}

/// Calculator screen widget.
#[derive(Debug)]
pub struct CalcScreen<'a> {
    app: &'a KeypadApp,
}

impl<'a> CalcScreen<'a> {
    /// Creates a new screen widget over the app state.
    #[must_use]
    pub fn new(app: &'a KeypadApp) -> Self {
        Self { app }
    }

    /// Renders the display panel (right-aligned, like a desk calculator).
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(Span::styled(
            self.app.display(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        paragraph.render(area, buf);
    }

    /// Renders the transient advisory line.
    fn render_advisory(&self, area: Rect, buf: &mut Buffer) {
        let text = self
            .app
            .notice()
            .map(|notice| notice.to_string())
            .unwrap_or_default();

        let paragraph = Paragraph::new(Span::styled(text, Style::default().fg(Color::Red)))
            .block(
                Block::default()
                    .title(" Advisory ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        paragraph.render(area, buf);
    }

    /// Renders the status footer with the session phase.
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("state: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.app.phase().label(),
                Style::default().fg(Color::Cyan),
            ),
        ]);

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        paragraph.render(area, buf);
    }

    /// Renders the help sidebar.
    fn render_help_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Shortcuts
                Constraint::Length(3), // Operators
                Constraint::Length(2), // Badge
            ])
            .split(area);

        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let shortcuts_list = List::new(shortcuts).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        shortcuts_list.render(chunks[0], buf);

        let ops = Paragraph::new(Span::styled(
            HELP_OPERATORS,
            Style::default().fg(Color::Cyan),
        ))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        ops.render(chunks[1], buf);

        let badge = Paragraph::new(Span::styled(
            APP_BADGE,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        badge.render(chunks[2], buf);
    }
}

impl Widget for CalcScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let areas = screen_areas(area);

        self.render_display(areas.display, buf);
        self.render_advisory(areas.advisory, buf);
        self.render_status(areas.status, buf);

        KeypadWidget::new(self.app.keypad()).render(areas.keypad, buf);

        self.render_help_sidebar(areas.help, buf);
    }
}

/// Title line of the calculator screen.
pub const APP_TITLE: &str = " Calcular - Keypad Calculator ";

/// Help text (compact, for the sidebar).
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Type digits"),
    ("+ - /", "Operators"),
    ("* or x", "Multiply"),
    ("Enter", "Equals"),
    ("Bksp", "Delete"),
    ("Esc", "Clear"),
    ("q", "Quit"),
];

/// Operator glyphs as they appear in the display.
pub const HELP_OPERATORS: &str = "Ops: + - × ÷";

/// Footer badge shown under the help panel.
pub const APP_BADGE: &str = "Calcular - one key at a time";
