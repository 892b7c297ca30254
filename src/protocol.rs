//! Wire format of the compile API response.

use serde::{Deserialize, Serialize};

use crate::error::CompileError;

/// Outcome reported by the compile server for a 2xx response.
///
/// Encoded as `{"status":"success","id":"..."}` or
/// `{"status":"error","msg":"..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CompilationResult {
    /// Compiled; `id` addresses the artifact pair.
    Success { id: String },
    /// Compiler diagnostics, possibly multi-line.
    Error { msg: String },
}

/// Decode a successful compile response body.
pub fn decode_result(body: &str) -> Result<CompilationResult, CompileError> {
    Ok(serde_json::from_str(body)?)
}
