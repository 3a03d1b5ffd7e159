use std::collections::VecDeque;
use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::{Note, NoteId};
use crate::remote::NotesApi;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::form::{FormField, FormMode, NoteForm};

mod event_loop;
mod lifecycle;
mod list_nav;
mod notes_ops;
mod render;
mod status_log;
mod time_utils;

use self::status_log::{EntryKind, ScrollEntry};
use self::time_utils::{fmt_ts_ui, now_ts};

pub(super) fn run(api: Box<dyn NotesApi>, origin: String) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::load(api, origin);
    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

pub(super) struct App {
    api: Box<dyn NotesApi>,
    origin: String,

    pub(super) notes: Vec<Note>,
    pub(super) form: Option<NoteForm>,
    pub(super) loading: bool,
    // Set when a list request should run after the next draw, so the
    // loading placeholder is on screen while the request blocks.
    fetch_pending: bool,
    pub(super) error: Option<String>,
    pub(super) selected: usize,

    // Recent action outcomes, newest last, capped at LOG_CAPACITY.
    log: VecDeque<ScrollEntry>,
    last_result: Option<ScrollEntry>,

    quit: bool,
}

impl App {
    pub(super) fn new(api: Box<dyn NotesApi>, origin: String) -> Self {
        Self {
            api,
            origin,
            notes: Vec::new(),
            form: None,
            loading: true,
            fetch_pending: false,
            error: None,
            selected: 0,
            log: VecDeque::new(),
            last_result: None,
            quit: false,
        }
    }

    pub(super) fn is_creating(&self) -> bool {
        self.form.as_ref().is_some_and(|f| f.mode == FormMode::Create)
    }

    pub(super) fn editing_id(&self) -> Option<&NoteId> {
        self.form.as_ref().and_then(|f| f.editing_id())
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app/fake_api.rs"]
mod fake_api;

#[cfg(test)]
#[path = "../tests/tui_shell/app/notes_ops_tests.rs"]
mod notes_ops_tests;

#[cfg(test)]
#[path = "../tests/tui_shell/app/key_dispatch_tests.rs"]
mod key_dispatch_tests;

#[cfg(test)]
#[path = "../tests/tui_shell/app/render_tests.rs"]
mod render_tests;
