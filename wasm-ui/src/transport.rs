//! Compile transport over the browser's `fetch`.

use gloo::net::http::Request;
use playground_rs::{CompileError, HttpResponse, HttpTransport};

/// [`HttpTransport`] backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    async fn post_text(&self, url: &str, body: String) -> Result<HttpResponse, CompileError> {
        let response = Request::post(url)
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(body)
            .map_err(|e| CompileError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| CompileError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CompileError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
