//! Error types for compiling and loading playground projects.

use thiserror::Error;

/// Failure of the compile request itself.
///
/// A compile that the server rejects with a structured `error` payload is
/// not a `CompileError`; it is a [`CompilationResult::Error`](crate::CompilationResult).
#[derive(Debug, Error)]
pub enum CompileError {
    /// Non-2xx response. The server's body text is the whole message.
    #[error("{body}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    #[error("invalid compile response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure while loading a compiled project into the host.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The entry script could not be fetched or failed before `load`.
    #[error("failed to load script {url}: {reason}")]
    Script { url: String, reason: String },

    /// The entry script loaded but did not expose the bootstrap symbol.
    #[error("entry script did not register `{0}`")]
    MissingBootstrap(String),

    #[error("bootstrap failed: {0}")]
    Bootstrap(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Any failure of a compile-and-load cycle.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Load(#[from] LoadError),
}
