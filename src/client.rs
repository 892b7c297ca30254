//! Compile client.
//!
//! Posts raw source text to `{base}/compile` and interprets the response.
//! The HTTP stack is abstracted behind [`HttpTransport`] so the same client
//! runs over `gloo-net` in the browser and `reqwest` natively.

use tracing::debug;

use crate::error::CompileError;
use crate::protocol::{CompilationResult, decode_result};

/// Status and body text of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP capability needed by [`CompileClient`].
///
/// Futures are not required to be `Send`; browser transports are
/// single-threaded.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// POST `body` as plain text to `url`.
    async fn post_text(&self, url: &str, body: String) -> Result<HttpResponse, CompileError>;
}

/// Client for the remote compile endpoint.
pub struct CompileClient<T> {
    endpoint: String,
    transport: T,
}

impl<T: HttpTransport> CompileClient<T> {
    pub fn new(api_base: &str, transport: T) -> Self {
        Self {
            endpoint: format!("{}/compile", api_base.trim_end_matches('/')),
            transport,
        }
    }

    /// Send `source` for compilation.
    ///
    /// A non-2xx status becomes [`CompileError::Status`] carrying the body
    /// verbatim. A 2xx body must be a tagged [`CompilationResult`].
    pub async fn compile(&self, source: &str) -> Result<CompilationResult, CompileError> {
        debug!(endpoint = %self.endpoint, bytes = source.len(), "posting source");
        let response = self
            .transport
            .post_text(&self.endpoint, source.to_string())
            .await?;

        if !response.is_success() {
            debug!(status = response.status, "compile request failed");
            return Err(CompileError::Status {
                status: response.status,
                body: response.body,
            });
        }

        decode_result(&response.body)
    }
}
