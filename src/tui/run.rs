//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Single-threaded and cooperative: the loop blocks on the next terminal
//! event, applies one update to completion, then redraws. No background
//! work, so no channels or reader threads.

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::calc::{Op, Token};
use crate::prefs;

use super::state::{Action, App, Effect};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action. Digits and the
/// point pass through; '*' and '/' become the multiply and divide tokens.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Calculator tokens
        KeyCode::Char(c @ '0'..='9') => Some(Action::Token(Token::Digit(c as u8 - b'0'))),
        KeyCode::Char('.') => Some(Action::Token(Token::Point)),
        KeyCode::Char('+') => Some(Action::Token(Token::Op(Op::Add))),
        KeyCode::Char('-') => Some(Action::Token(Token::Op(Op::Subtract))),
        KeyCode::Char('*') | KeyCode::Char('×') => Some(Action::Token(Token::Op(Op::Multiply))),
        KeyCode::Char('/') | KeyCode::Char('÷') => Some(Action::Token(Token::Op(Op::Divide))),
        KeyCode::Enter | KeyCode::Char('=') => Some(Action::Token(Token::Evaluate)),
        KeyCode::Backspace => Some(Action::Token(Token::Backspace)),
        KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Token(Token::Clear)),

        // Navigation
        KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
        KeyCode::Right => Some(Action::NextScreen),
        KeyCode::Left => Some(Action::PrevScreen),

        // Global toggles
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Action::ToggleTheme),
        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the calculator TUI.
///
/// Loads the stored theme, runs the event loop until the user quits, and
/// restores the terminal.
pub fn run() -> io::Result<()> {
    let prefs_path = prefs::default_prefs_path();
    let theme = prefs::load_theme(&prefs_path);
    tracing::info!("starting widget with {} theme", theme);

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(theme);

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on the next terminal event
        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = map_key(key) {
                    if let Some(effect) = update(&mut app, action) {
                        run_effect(effect, &prefs_path);
                    }
                }
            }
            _ => {} // mouse and resize; the next draw repaints anyway
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Execute a side effect requested by a pure transition.
fn run_effect(effect: Effect, prefs_path: &Path) {
    match effect {
        Effect::PersistTheme(theme) => {
            // Storage faults don't interrupt the widget.
            if let Err(e) = prefs::save_theme(prefs_path, theme) {
                tracing::warn!("failed to persist theme preference: {}", e);
            } else {
                tracing::debug!("theme preference saved: {}", theme);
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_pass_through() {
        for d in 0..=9u8 {
            let key = plain(KeyCode::Char((b'0' + d) as char));
            assert_eq!(map_key(key), Some(Action::Token(Token::Digit(d))));
        }
    }

    #[test]
    fn point_passes_through() {
        assert_eq!(
            map_key(plain(KeyCode::Char('.'))),
            Some(Action::Token(Token::Point))
        );
    }

    #[test]
    fn ascii_operators_map_to_tokens() {
        assert_eq!(
            map_key(plain(KeyCode::Char('+'))),
            Some(Action::Token(Token::Op(Op::Add)))
        );
        assert_eq!(
            map_key(plain(KeyCode::Char('-'))),
            Some(Action::Token(Token::Op(Op::Subtract)))
        );
        assert_eq!(
            map_key(plain(KeyCode::Char('*'))),
            Some(Action::Token(Token::Op(Op::Multiply)))
        );
        assert_eq!(
            map_key(plain(KeyCode::Char('/'))),
            Some(Action::Token(Token::Op(Op::Divide)))
        );
    }

    #[test]
    fn symbol_operators_also_map() {
        assert_eq!(
            map_key(plain(KeyCode::Char('×'))),
            Some(Action::Token(Token::Op(Op::Multiply)))
        );
        assert_eq!(
            map_key(plain(KeyCode::Char('÷'))),
            Some(Action::Token(Token::Op(Op::Divide)))
        );
    }

    #[test]
    fn enter_and_equals_evaluate() {
        assert_eq!(
            map_key(plain(KeyCode::Enter)),
            Some(Action::Token(Token::Evaluate))
        );
        assert_eq!(
            map_key(plain(KeyCode::Char('='))),
            Some(Action::Token(Token::Evaluate))
        );
    }

    #[test]
    fn backspace_deletes() {
        assert_eq!(
            map_key(plain(KeyCode::Backspace)),
            Some(Action::Token(Token::Backspace))
        );
    }

    #[test]
    fn escape_and_c_clear() {
        assert_eq!(map_key(plain(KeyCode::Esc)), Some(Action::Token(Token::Clear)));
        assert_eq!(
            map_key(plain(KeyCode::Char('c'))),
            Some(Action::Token(Token::Clear))
        );
    }

    #[test]
    fn ctrl_c_quits_instead_of_clearing() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn arrows_and_tab_navigate() {
        assert_eq!(map_key(plain(KeyCode::Tab)), Some(Action::NextField));
        assert_eq!(map_key(plain(KeyCode::Down)), Some(Action::NextField));
        assert_eq!(map_key(plain(KeyCode::BackTab)), Some(Action::PrevField));
        assert_eq!(map_key(plain(KeyCode::Up)), Some(Action::PrevField));
        assert_eq!(map_key(plain(KeyCode::Right)), Some(Action::NextScreen));
        assert_eq!(map_key(plain(KeyCode::Left)), Some(Action::PrevScreen));
    }

    #[test]
    fn t_toggles_theme_and_q_quits() {
        assert_eq!(map_key(plain(KeyCode::Char('t'))), Some(Action::ToggleTheme));
        assert_eq!(map_key(plain(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn unmapped_key_returns_none() {
        assert_eq!(map_key(plain(KeyCode::Char('z'))), None);
        assert_eq!(map_key(plain(KeyCode::Home)), None);
    }
}
