//! Pure state transitions: (App, Action) → optional Effect.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Calculator tokens route to the state machine on the Standard screen
//! and reinterpret as field edits on the form screens; unhandled actions
//! are no-ops.

use crate::calc::{Op, Token};
use crate::forms;

use super::state::{Action, App, Effect, FormFields, Screen};

/// Apply one action to the widget state.
///
/// Returns a side effect for the run loop to execute, if any.
pub fn update(app: &mut App, action: Action) -> Option<Effect> {
    // An interrupting notice blocks input until acknowledged; the
    // acknowledging key is consumed. Quit still works.
    if app.notice.is_some() && action != Action::Quit {
        app.notice = None;
        return None;
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
            None
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            Some(Effect::PersistTheme(app.theme))
        }
        Action::NextScreen => {
            app.screen = app.screen.next();
            None
        }
        Action::PrevScreen => {
            app.screen = app.screen.prev();
            None
        }
        Action::NextField => {
            if let Some(fields) = current_form_mut(app) {
                fields.focus_next();
            }
            None
        }
        Action::PrevField => {
            if let Some(fields) = current_form_mut(app) {
                fields.focus_prev();
            }
            None
        }
        Action::Token(token) => {
            match app.screen {
                Screen::Standard => standard_token(app, token),
                Screen::Interest => interest_token(app, token),
                Screen::Installment => installment_token(app, token),
            }
            None
        }
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// The form fields of the current screen, if it has any.
fn current_form_mut(app: &mut App) -> Option<&mut FormFields> {
    match app.screen {
        Screen::Standard => None,
        Screen::Interest => Some(&mut app.interest),
        Screen::Installment => Some(&mut app.installment),
    }
}

/// Standard screen: every token goes straight to the state machine.
fn standard_token(app: &mut App, token: Token) {
    if let Err(e) = app.calc.dispatch(token) {
        app.notice = Some(e.to_string());
    }
}

/// Interest screen: edit fields, submit on Evaluate.
fn interest_token(app: &mut App, token: Token) {
    if edit_form(&mut app.interest, token) {
        let [principal, rate, time] = &app.interest.values;
        match forms::interest_from_fields(principal, rate, time) {
            Ok(breakdown) => app.interest_result = Some(breakdown),
            // No partial render: the previous card stays as-is.
            Err(e) => app.notice = Some(e.to_string()),
        }
    } else if token == Token::Clear {
        app.interest_result = None;
    }
}

/// Installment screen: edit fields, submit on Evaluate.
fn installment_token(app: &mut App, token: Token) {
    if edit_form(&mut app.installment, token) {
        let [principal, rate, months] = &app.installment.values;
        match forms::installment_from_fields(principal, rate, months) {
            Ok(breakdown) => app.installment_result = Some(breakdown),
            Err(e) => app.notice = Some(e.to_string()),
        }
    } else if token == Token::Clear {
        app.installment_result = None;
    }
}

/// Reinterpret a calculator token as an edit of the focused form field.
///
/// Returns true when the token asks for submission.
fn edit_form(fields: &mut FormFields, token: Token) -> bool {
    match token {
        Token::Digit(digit) => {
            fields.focused_mut().push(char::from(b'0' + digit));
            false
        }
        Token::Point => {
            fields.focused_mut().push('.');
            false
        }
        // Subtract doubles as the sign character so out-of-range input
        // can reach validation.
        Token::Op(Op::Subtract) => {
            fields.focused_mut().push('-');
            false
        }
        Token::Op(_) => false,
        Token::Backspace => {
            fields.focused_mut().pop();
            false
        }
        Token::Clear => {
            fields.clear();
            false
        }
        Token::Evaluate => true,
    }
}

// ============================================================================
// TESTS
// ============================================================================
