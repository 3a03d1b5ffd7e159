use super::*;

pub(super) fn with_retries<T>(label: &str, mut f: impl FnMut() -> Result<T>) -> Result<T> {
    const ATTEMPTS: usize = 3;
    let mut last: Option<anyhow::Error> = None;
    for i in 0..ATTEMPTS {
        match f() {
            Ok(v) => return Ok(v),
            Err(err) => {
                tracing::debug!(label, attempt = i + 1, error = %format!("{:#}", err), "request failed");
                last = Some(err);
                if i + 1 < ATTEMPTS {
                    std::thread::sleep(std::time::Duration::from_millis(200 * (1 << i)));
                }
            }
        }
    }
    Err(last.unwrap_or_else(|| anyhow::anyhow!("{}: unknown error", label)))
}

/// Picks the message shown to the user for a failed response: the server's
/// `message` field when it sent one, otherwise the status line.
pub(super) fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty());
    match parsed {
        Some(msg) => msg,
        None => format!("request failed with status {}", status),
    }
}

impl NotesClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        let msg = error_message(status, &body);
        tracing::warn!(label, %status, message = %msg, "remote rejected request");
        anyhow::bail!(msg)
    }

    /// Sends `req`, logging transport failures under `label`. The returned
    /// error carries only the transport text.
    pub(super) fn send(
        &self,
        req: reqwest::blocking::RequestBuilder,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        req.send().map_err(|err| {
            tracing::warn!(label, error = %err, "request did not complete");
            anyhow::Error::from(err)
        })
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// `{base}/notes/{id}` with the id encoded as a single path segment.
    pub(super) fn note_url(&self, id: &NoteId) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.url("/notes"))
            .with_context(|| format!("invalid base url {}", self.config.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("invalid base url {}", self.config.base_url))?
            .push(&id.to_string());
        Ok(url)
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
