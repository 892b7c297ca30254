//! # playground-rs
//!
//! Host-independent core of a compile-and-run playground.
//!
//! A playground session posts editor source text to a remote compile API,
//! receives a project identifier, and loads the resulting artifact pair
//! (an entry script and a wasm binary) so it can render into a canvas.
//!
//! ## Overview
//!
//! - **Compile client**: raw-text `POST {base}/compile`, decoded into a
//!   tagged [`CompilationResult`]
//! - **App loader**: derives the artifact URLs for a project and loads them
//!   through a [`ScriptLoader`], which hands back a [`Bootstrap`] capability
//! - **Shell**: the idle/compiling state machine and the log lines shown to
//!   the user
//!
//! The browser front-end lives in the `wasm-ui` crate. A native transport and
//! artifact downloader back the `playground-compile` CLI.
//!
//! ## Example
//!
//! ```
//! use playground_rs::{ArtifactUrls, CompilationResult, decode_result};
//!
//! let result = decode_result(r#"{"status":"success","id":"42"}"#).unwrap();
//! assert_eq!(result, CompilationResult::Success { id: "42".into() });
//!
//! let urls = ArtifactUrls::for_project("http://localhost:3000/api", "42");
//! assert_eq!(urls.binary, "http://localhost:3000/api/project/42/playground.wasm");
//! ```

pub mod artifact;
pub mod client;
pub mod config;
pub mod error;
pub mod loader;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;
pub mod protocol;
pub mod shell;
pub mod source;

pub use artifact::ArtifactUrls;
pub use client::{CompileClient, HttpResponse, HttpTransport};
pub use config::{DEFAULT_API_BASE, PlaygroundConfig};
pub use error::{CompileError, LoadError, PlaygroundError};
pub use loader::{AppLoader, Bootstrap, ScriptLoader};
pub use protocol::{CompilationResult, decode_result};
pub use shell::{
    CompileOutcome, KeyChord, ShellEvent, ShellState, Trigger, compile_and_load,
    is_compile_shortcut,
};
pub use source::DEFAULT_SOURCE;
