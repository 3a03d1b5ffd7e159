use super::*;

use time::macros::format_description;

fn fmt_ts_abs(ts: &str) -> Option<String> {
    let dt = OffsetDateTime::parse(ts, &Rfc3339).ok()?;
    dt.format(format_description!(
        "[hour padding:zero]:[minute padding:zero]:[second padding:zero]Z"
    ))
    .ok()
}

pub(in crate::tui_shell) fn fmt_ts_ui(ts: &str) -> String {
    fmt_ts_abs(ts).unwrap_or_else(|| ts.to_string())
}

pub(in crate::tui_shell) fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}
