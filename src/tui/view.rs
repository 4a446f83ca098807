//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches on the current Screen variant and lays the notice popup on
//! top when one is active. Widget-building functions are pure (state in,
//! widgets out); the only effect is `Frame::render_widget()` writing to
//! the terminal buffer.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::calc::CalcState;
use crate::report::{installment_card, interest_card};

use super::state::{App, FormFields, Screen};
use super::theme::{palette, Palette};

/// Field labels on the interest form, in display order.
const INTEREST_LABELS: [&str; 3] = ["Principal", "Rate (%)", "Time (years)"];

/// Field labels on the installment form, in display order.
const INSTALLMENT_LABELS: [&str; 3] = ["Principal", "Rate (%)", "Months"];

/// Keypad legend shown under the display. Purely informational — the
/// physical keys carry the tokens.
const KEYPAD_ROWS: [[&str; 4]; 4] = [
    ["7", "8", "9", "÷"],
    ["4", "5", "6", "×"],
    ["1", "2", "3", "-"],
    ["C", "0", ".", "+"],
];

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let pal = palette(app.theme);
    let area = frame.area();

    // Common layout: tab bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // tabs
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_tabs(app.screen, &pal), chunks[0]);
    frame.render_widget(render_help(app.screen, &pal), chunks[2]);

    let content_area = chunks[1];
    match app.screen {
        Screen::Standard => render_standard(&app.calc, &pal, frame, content_area),
        Screen::Interest => {
            let card = app.interest_result.as_ref().map(|b| interest_card(b));
            render_form(&app.interest, &INTEREST_LABELS, card, &pal, frame, content_area);
        }
        Screen::Installment => {
            let card = app.installment_result.as_ref().map(|b| installment_card(b));
            render_form(
                &app.installment,
                &INSTALLMENT_LABELS,
                card,
                &pal,
                frame,
                content_area,
            );
        }
    }

    if let Some(notice) = &app.notice {
        render_notice(notice, &pal, frame, area);
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Tab bar listing every screen, the active one highlighted.
fn render_tabs(active: Screen, pal: &Palette) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(" fincalc ", pal.title)];
    for screen in Screen::ALL {
        let style = if screen == active {
            pal.tab_active
        } else {
            pal.tab_inactive
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", screen.title()), style));
    }
    Paragraph::new(Line::from(spans))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: Screen, pal: &Palette) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Standard => {
            "[0-9 .] enter  [+ - * /] operator  [Enter] =  [Backspace] delete  [Esc] clear  [←/→] screen  [t] theme  [q] quit"
        }
        Screen::Interest | Screen::Installment => {
            "[0-9 .] type  [Tab ↑/↓] field  [Enter] calculate  [Esc] clear  [←/→] screen  [t] theme  [q] quit"
        }
    };

    Paragraph::new(Span::styled(help_text, pal.help))
}

// ============================================================================
// SCREEN: STANDARD CALCULATOR
// ============================================================================

fn render_standard(calc: &CalcState, pal: &Palette, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // spacer
        Constraint::Length(1), // history
        Constraint::Length(1), // display
        Constraint::Length(1), // spacer
        Constraint::Min(0),    // keypad legend
    ])
    .split(area);

    // History and entry mirror the two display regions: the in-progress
    // expression above, the current entry below.
    let history = Paragraph::new(Span::styled(calc.history.clone(), pal.history))
        .alignment(Alignment::Right);
    frame.render_widget(history, chunks[1]);

    let display = Paragraph::new(Span::styled(calc.entry.clone(), pal.display))
        .alignment(Alignment::Right);
    frame.render_widget(display, chunks[2]);

    frame.render_widget(render_keypad(pal), chunks[4]);
}

/// The keypad legend: labels only, one row per line.
fn render_keypad(pal: &Palette) -> Paragraph<'static> {
    let mut lines: Vec<Line> = Vec::new();

    for row in KEYPAD_ROWS {
        let mut spans = vec![Span::raw("  ")];
        for key in row {
            let style = if key.chars().all(|c| c.is_ascii_digit() || c == '.' || c == 'C') {
                pal.key
            } else {
                pal.accent
            };
            spans.push(Span::styled(format!("[ {} ]", key), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(vec![
        Span::raw("        "),
        Span::styled("[ ⌫ ]", pal.key),
        Span::raw(" "),
        Span::styled("[ = ]", pal.accent),
    ]));

    Paragraph::new(lines)
}

// ============================================================================
// SCREEN: FORMS
// ============================================================================

/// A three-field form with an optional result card below it.
fn render_form(
    fields: &FormFields,
    labels: &[&'static str; 3],
    card: Option<Vec<(&'static str, String)>>,
    pal: &Palette,
    frame: &mut Frame,
    area: Rect,
) {
    let mut lines = vec![Line::from("")];

    for (i, label) in labels.iter().enumerate() {
        lines.push(field_line(label, &fields.values[i], i == fields.focus, pal));
    }

    if let Some(rows) = card {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("  Result", pal.title)));
        lines.push(Line::from(Span::styled("  ──────────────────────────", pal.history)));
        for (label, value) in rows {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:<18} ", label), pal.label),
                Span::styled(value, pal.value),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// One labeled input line; the focused field gets a cursor mark.
fn field_line<'a>(label: &'a str, value: &'a str, focused: bool, pal: &Palette) -> Line<'a> {
    let style = if focused { pal.field_focused } else { pal.field };
    let cursor = if focused { "_" } else { " " };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<14}", label), pal.label),
        Span::styled(format!(" {}{} ", value, cursor), style),
    ])
}

// ============================================================================
// NOTICE POPUP
// ============================================================================

/// Centered interrupting notification; any key dismisses it.
fn render_notice(notice: &str, pal: &Palette, frame: &mut Frame, area: Rect) {
    let width = (notice.len() as u16 + 6).min(area.width);
    let popup = centered_rect(width, 5, area);

    let block = Block::default().borders(Borders::ALL).border_style(pal.notice);
    let text = vec![
        Line::from(Span::styled(notice.to_string(), pal.notice)),
        Line::from(""),
        Line::from(Span::styled("press any key", pal.help)),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// A rect of the given size centered inside `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ============================================================================
// TESTS
// ============================================================================
