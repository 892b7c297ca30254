//! Native transport and artifact downloader used by the CLI.
//!
//! Outside a browser there is no page to inject a script into, so "loading"
//! a project means downloading its artifact pair into a directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::client::{HttpResponse, HttpTransport};
use crate::error::{CompileError, LoadError};
use crate::loader::{Bootstrap, ScriptLoader};

/// [`HttpTransport`] over `reqwest`.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn post_text(&self, url: &str, body: String) -> Result<HttpResponse, CompileError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(|e| CompileError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CompileError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Fetch `url` and write the body to `dest`.
async fn download(client: &reqwest::Client, url: &str, dest: &Path) -> Result<(), LoadError> {
    let script_err = |reason: String| LoadError::Script {
        url: url.to_string(),
        reason,
    };

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| script_err(e.to_string()))?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(script_err(format!("{status}: {body}")));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|e| script_err(e.to_string()))?;

    tokio::fs::write(dest, &bytes).await?;
    debug!(%url, dest = %dest.display(), bytes = bytes.len(), "downloaded");
    Ok(())
}

fn file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// [`ScriptLoader`] that downloads artifacts into `out_dir`.
#[derive(Clone)]
pub struct DownloadLoader {
    client: reqwest::Client,
    out_dir: PathBuf,
}

impl DownloadLoader {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::Client::new(),
            out_dir: out_dir.into(),
        }
    }
}

impl ScriptLoader for DownloadLoader {
    type Bootstrap = DownloadBootstrap;

    async fn load_script(&self, url: &str) -> Result<Self::Bootstrap, LoadError> {
        tokio::fs::create_dir_all(&self.out_dir).await?;
        download(&self.client, url, &self.out_dir.join(file_name(url))).await?;
        Ok(DownloadBootstrap {
            client: self.client.clone(),
            out_dir: self.out_dir.clone(),
        })
    }
}

/// Downloads the binary next to the already downloaded script.
pub struct DownloadBootstrap {
    client: reqwest::Client,
    out_dir: PathBuf,
}

impl Bootstrap for DownloadBootstrap {
    async fn start(&self, binary_url: &str) -> Result<(), LoadError> {
        download(
            &self.client,
            binary_url,
            &self.out_dir.join(file_name(binary_url)),
        )
        .await
    }
}

/// Loader used with `--no-load`: resolves immediately and downloads nothing.
#[derive(Clone, Copy, Default)]
pub struct SkipLoader;

impl ScriptLoader for SkipLoader {
    type Bootstrap = SkipLoader;

    async fn load_script(&self, _url: &str) -> Result<Self::Bootstrap, LoadError> {
        Ok(SkipLoader)
    }
}

impl Bootstrap for SkipLoader {
    async fn start(&self, _binary_url: &str) -> Result<(), LoadError> {
        Ok(())
    }
}
