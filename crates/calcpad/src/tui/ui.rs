//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Title drawn on the outer border
pub const TITLE: &str = " calcpad ";

/// Keyboard shortcuts listed in the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter number"),
    ("+ - * /", "Operator"),
    ("Enter =", "Evaluate"),
    ("%", "Percent"),
    ("n ~ F9", "Toggle sign"),
    ("Bksp", "Delete digit"),
    ("Esc c", "Clear"),
    ("q", "Quit"),
    ("Mouse", "Click keys"),
];

#[derive(Debug, Clone, Copy)]
struct Regions {
    display: Rect,
    keypad: Rect,
    help: Rect,
}

fn regions(area: Rect) -> Regions {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(area);
    let calculator = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(7)])
        .split(columns[0]);

    Regions {
        display: calculator[0],
        keypad: calculator[1],
        help: columns[1],
    }
}

/// Where the keypad is drawn inside a frame of size `area`
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    regions(area).keypad
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUi { app }, area);
}

struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
}

impl CalculatorUi<'_> {
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let calc = self.app.calculator();

        let style = if calc.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Line::from(calc.pending_summary()).right_aligned());

        Paragraph::new(Span::styled(calc.display(), style))
            .alignment(Alignment::Right)
            .block(block)
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>8}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = regions(area);
        self.render_display(regions.display, buf);
        KeypadWidget::new(self.app.keypad()).render(regions.keypad, buf);
        Self::render_help(regions.help, buf);
    }
}
