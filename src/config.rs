//! Playground configuration.

/// Compile API base used when nothing overrides it.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api";

/// Environment variable that overrides the api base (build time for the
/// browser front-end, run time for the CLI).
pub const API_BASE_ENV: &str = "PLAYGROUND_API_BASE";

/// Settings shared by the browser front-end and the CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaygroundConfig {
    /// Base URL of the compile API, without a trailing slash.
    pub api_base: String,
    /// Id of the canvas the loaded project renders into.
    pub canvas_id: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Global function the entry script registers for bootstrapping.
    pub bootstrap_symbol: String,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            canvas_id: "bevy_canvas".to_string(),
            canvas_width: 512,
            canvas_height: 268,
            bootstrap_symbol: "wasm_bindgen".to_string(),
        }
    }
}

impl PlaygroundConfig {
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim().trim_end_matches('/').to_string();
        self
    }

    /// Apply an optional override, ignoring empty values.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(base) if !base.is_empty() => Self::default().with_api_base(base),
            _ => Self::default(),
        }
    }

    /// `{api_base}/compile`.
    pub fn compile_url(&self) -> String {
        format!("{}/compile", self.api_base)
    }
}
