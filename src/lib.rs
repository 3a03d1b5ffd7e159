//! Terminal client for a remote notes CRUD API.

pub mod logging;
pub mod model;
pub mod remote;
pub mod tui;
mod tui_shell;
