//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! Rendering reads selector state and never mutates it.

pub mod selector;
pub mod theme;
