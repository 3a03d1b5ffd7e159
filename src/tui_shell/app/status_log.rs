use super::*;

pub(in crate::tui_shell) const LOG_CAPACITY: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum EntryKind {
    Output,
    Error,
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct ScrollEntry {
    pub(in crate::tui_shell) ts: String,
    pub(in crate::tui_shell) kind: EntryKind,
    pub(in crate::tui_shell) lines: Vec<String>,
}

impl App {
    fn push_entry(&mut self, kind: EntryKind, lines: Vec<String>) {
        let entry = ScrollEntry {
            ts: now_ts(),
            kind,
            lines,
        };
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(entry.clone());
        self.last_result = Some(entry);
    }

    pub(in crate::tui_shell) fn push_output(&mut self, lines: Vec<String>) {
        self.push_entry(EntryKind::Output, lines);
    }

    /// Raises the error banner and records it in the log.
    pub(in crate::tui_shell) fn push_error(&mut self, msg: String) {
        tracing::warn!(error = %msg, "note board error");
        self.error = Some(msg.clone());
        self.push_entry(EntryKind::Error, vec![msg]);
    }

    pub(in crate::tui_shell) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(in crate::tui_shell) fn last_result(&self) -> Option<&ScrollEntry> {
        self.last_result.as_ref()
    }

    #[cfg(test)]
    pub(in crate::tui_shell) fn log_len(&self) -> usize {
        self.log.len()
    }
}
