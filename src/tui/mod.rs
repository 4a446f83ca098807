//! Terminal widget for the calculator.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Screen, Action, Effect)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: palette data
//! - `run`: the effects boundary (terminal lifecycle, key mapping, loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
