//! Selector orchestration: state, input translation, transitions and the
//! terminal-owning host loop.

pub mod event;
pub mod handler;
pub mod session;
pub mod state;
