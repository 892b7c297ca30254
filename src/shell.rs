//! Playground shell: the compile-then-load sequence and its log output.
//!
//! The shell is either idle or compiling. A trigger (the Compile button or
//! Ctrl/Cmd+Enter in the editor) runs [`compile_and_load`], which reports
//! progress as a stream of [`ShellEvent`]s. Front-ends fold those events into
//! a [`ShellState`] for rendering.

use tracing::{debug, error, info, warn};

use crate::artifact::ArtifactUrls;
use crate::client::{CompileClient, HttpTransport};
use crate::error::PlaygroundError;
use crate::loader::{AppLoader, ScriptLoader};
use crate::protocol::CompilationResult;

pub const LOG_COMPILING: &str = "compiling...";
pub const LOG_LOADING: &str = "loading app...";
pub const LOG_SUCCESS: &str = "success";
pub const FAILURE_PREFIX: &str = "failed to compile: ";

/// What started a compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Button,
    Shortcut,
}

/// A key press as seen by the editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    /// Cmd on macOS.
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Default::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// Ctrl+Enter or Cmd+Enter.
pub fn is_compile_shortcut(chord: &KeyChord) -> bool {
    chord.key == "Enter" && (chord.ctrl || chord.meta)
}

/// Progress of a compile-and-load cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    /// Clears the log and enters the compiling state.
    Started,
    /// Appends one log line.
    Log(String),
    /// Replaces the log with a single failure line.
    Failed(String),
    /// Returns to idle.
    Finished,
}

/// Log lines and compiling flag shown by the front-end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub logs: Vec<String>,
    pub compiling: bool,
}

impl ShellState {
    pub fn apply(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::Started => {
                self.logs.clear();
                self.compiling = true;
            }
            ShellEvent::Log(line) => self.logs.push(line),
            ShellEvent::Failed(msg) => {
                self.logs = vec![format!("{FAILURE_PREFIX}{msg}")];
            }
            ShellEvent::Finished => self.compiling = false,
        }
    }
}

/// How a compile-and-load cycle ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompileOutcome {
    /// The project compiled and its artifacts were loaded.
    Loaded(ArtifactUrls),
    /// The compiler reported diagnostics.
    Rejected(String),
    /// The request or the artifact load failed.
    Failed(String),
}

/// Compile `source` and load the resulting project.
///
/// Emits `Started` first and `Finished` last on every path. Errors are
/// reported through events and the returned outcome, never propagated.
pub async fn compile_and_load<T, L>(
    source: &str,
    client: &CompileClient<T>,
    app_loader: &AppLoader<L>,
    trigger: Trigger,
    mut emit: impl FnMut(ShellEvent),
) -> CompileOutcome
where
    T: HttpTransport,
    L: ScriptLoader,
{
    debug!(?trigger, "compile triggered");
    emit(ShellEvent::Started);

    let outcome = match run_steps(source, client, app_loader, &mut emit).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, "compile cycle failed");
            emit(ShellEvent::Failed(e.to_string()));
            CompileOutcome::Failed(e.to_string())
        }
    };

    emit(ShellEvent::Finished);
    outcome
}

/// Log lines for a compiler diagnostic.
///
/// Surrounding blank lines are dropped; indentation is kept. A message with
/// no lines left still yields one line so a rejection is never silent.
fn diagnostic_lines(msg: &str) -> Vec<String> {
    let lines: Vec<String> = msg
        .trim_matches(|c: char| c == '\n' || c == '\r')
        .lines()
        .map(str::to_string)
        .collect();
    if lines.is_empty() {
        return vec![msg.to_string()];
    }
    lines
}

async fn run_steps<T, L>(
    source: &str,
    client: &CompileClient<T>,
    app_loader: &AppLoader<L>,
    emit: &mut impl FnMut(ShellEvent),
) -> Result<CompileOutcome, PlaygroundError>
where
    T: HttpTransport,
    L: ScriptLoader,
{
    emit(ShellEvent::Log(LOG_COMPILING.to_string()));

    let id = match client.compile(source).await? {
        CompilationResult::Success { id } => id,
        CompilationResult::Error { msg } => {
            let lines = diagnostic_lines(&msg);
            warn!(lines = lines.len(), "compilation rejected");
            let text = lines.join("\n");
            for line in lines {
                emit(ShellEvent::Log(line));
            }
            return Ok(CompileOutcome::Rejected(text));
        }
    };

    emit(ShellEvent::Log(LOG_LOADING.to_string()));
    let urls = app_loader.load_app(&id).await?;

    info!(%id, "project loaded");
    emit(ShellEvent::Log(LOG_SUCCESS.to_string()));
    Ok(CompileOutcome::Loaded(urls))
}
