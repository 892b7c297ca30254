//! Artifact URL derivation.

/// File name of the compiled entry script.
pub const SCRIPT_FILE: &str = "playground.js";
/// File name of the compiled wasm binary.
pub const BINARY_FILE: &str = "playground.wasm";

/// URLs of a compiled project's entry script and binary payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactUrls {
    pub script: String,
    pub binary: String,
}

impl ArtifactUrls {
    /// Derive both URLs for project `id` under `api_base`.
    pub fn for_project(api_base: &str, id: &str) -> Self {
        let project = format!("{}/project/{}", api_base.trim_end_matches('/'), id);
        Self {
            script: format!("{project}/{SCRIPT_FILE}"),
            binary: format!("{project}/{BINARY_FILE}"),
        }
    }
}
