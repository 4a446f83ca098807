//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire widget state space. The transition
//! function and rendering layer both program against them. Per-screen
//! transient state (form fields, focus) lives beside the shared calculator
//! state in [`App`]; side effects are described by [`Effect`] values and
//! executed by the run loop.

use crate::calc::{CalcState, Token};
use crate::forms::{InstallmentBreakdown, InterestBreakdown};
use crate::prefs::ThemePreference;

// ============================================================================
// SCREENS
// ============================================================================

/// The visible calculator page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Four-function keypad calculator.
    #[default]
    Standard,
    /// Simple-interest form.
    Interest,
    /// Installment (EMI) form.
    Installment,
}

impl Screen {
    /// All screens in tab order.
    pub const ALL: [Screen; 3] = [Screen::Standard, Screen::Interest, Screen::Installment];

    /// Tab label.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Standard => "Standard",
            Screen::Interest => "Interest",
            Screen::Installment => "Installment",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Screen::Standard => Screen::Interest,
            Screen::Interest => Screen::Installment,
            Screen::Installment => Screen::Standard,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Screen::Standard => Screen::Installment,
            Screen::Interest => Screen::Standard,
            Screen::Installment => Screen::Interest,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the transition function
/// decides what each Action means on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A calculator token. Form screens reinterpret digits, point,
    /// backspace, clear, and evaluate as field edits and submission.
    Token(Token),
    /// Focus the next form field.
    NextField,
    /// Focus the previous form field.
    PrevField,
    /// Cycle to the next screen.
    NextScreen,
    /// Cycle to the previous screen.
    PrevScreen,
    /// Flip between light and dark.
    ToggleTheme,
    /// Quit the application.
    Quit,
}

// ============================================================================
// EFFECTS
// ============================================================================

/// Side effect requested by a pure transition.
///
/// Pure code never executes these — it only describes them. The run loop
/// interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Persist the theme preference to storage.
    PersistTheme(ThemePreference),
}

// ============================================================================
// FORM STATE
// ============================================================================

/// Number of input fields per form.
pub const FORM_FIELDS: usize = 3;

/// Editable state of a three-field numeric form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    /// Raw field contents, in display order.
    pub values: [String; FORM_FIELDS],
    /// Index of the focused field.
    pub focus: usize,
}

impl FormFields {
    pub fn focused_mut(&mut self) -> &mut String {
        &mut self.values[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FORM_FIELDS;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FORM_FIELDS - 1) % FORM_FIELDS;
    }

    pub fn clear(&mut self) {
        *self = FormFields::default();
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level widget model.
///
/// Constructed once at startup with the stored theme applied. Host
/// bindings (terminal handle, preferences path) stay in the run loop —
/// nothing in here touches the outside world.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    /// Current screen.
    pub screen: Screen,
    /// Calculator state, exclusively owned here and mutated only through
    /// its dispatch entry point.
    pub calc: CalcState,
    /// Interest form fields and the last successful result.
    pub interest: FormFields,
    pub interest_result: Option<InterestBreakdown>,
    /// Installment form fields and the last successful result.
    pub installment: FormFields,
    pub installment_result: Option<InstallmentBreakdown>,
    /// Active theme; the palette is applied on every frame.
    pub theme: ThemePreference,
    /// Interrupting notification. While present it blocks input; the
    /// acknowledging key is consumed.
    pub notice: Option<String>,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Create the widget with a stored theme preference applied.
    pub fn new(theme: ThemePreference) -> Self {
        App {
            screen: Screen::default(),
            calc: CalcState::new(),
            interest: FormFields::default(),
            interest_result: None,
            installment: FormFields::default(),
            installment_result: None,
            theme,
            notice: None,
            should_quit: false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
