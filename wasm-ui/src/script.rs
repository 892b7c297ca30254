//! Script injection.
//!
//! Loads a compiled project's entry script by appending a `<script>` tag to
//! `document.head`, then resolves the bootstrap function the script
//! registers. Tags are never removed; loading again appends another one.

use js_sys::{Function, Promise};
use playground_rs::{Bootstrap, LoadError, ScriptLoader};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;

/// Marker attribute set on every injected script.
pub const SCRIPT_MARKER: &str = "data-bevy-script";

/// Best-effort text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    if let Some(event) = value.dyn_ref::<web_sys::Event>() {
        return format!("{} event", event.type_());
    }
    format!("{value:?}")
}

/// [`ScriptLoader`] that injects scripts into the current page.
#[derive(Clone, Debug)]
pub struct DomScriptLoader {
    bootstrap_symbol: String,
}

impl DomScriptLoader {
    pub fn new(bootstrap_symbol: &str) -> Self {
        Self {
            bootstrap_symbol: bootstrap_symbol.to_string(),
        }
    }
}

fn script_error(url: &str, value: JsValue) -> LoadError {
    LoadError::Script {
        url: url.to_string(),
        reason: describe(&value),
    }
}

/// Create the `<script>` element for `url` without attaching it.
pub fn create_script(url: &str) -> Result<HtmlScriptElement, LoadError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| script_error(url, JsValue::from_str("no document")))?;

    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| script_error(url, e))?
        .dyn_into()
        .map_err(|_| script_error(url, JsValue::from_str("not a script element")))?;

    for (name, value) in [
        ("type", "application/javascript"),
        ("src", url),
        ("crossorigin", ""),
        (SCRIPT_MARKER, ""),
    ] {
        script
            .set_attribute(name, value)
            .map_err(|e| script_error(url, e))?;
    }
    Ok(script)
}

/// Append a script for `url` to `document.head` and wait for it to load.
///
/// Fails if the script fires `error` instead of `load`.
pub async fn inject_script(url: &str) -> Result<HtmlScriptElement, LoadError> {
    let script = create_script(url)?;
    let head = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.head())
        .ok_or_else(|| script_error(url, JsValue::from_str("document has no <head>")))?;

    let loaded = Promise::new(&mut |resolve, reject| {
        let _ = script.add_event_listener_with_callback("load", &resolve);
        let _ = script.add_event_listener_with_callback("error", &reject);
    });

    head.append_child(&script).map_err(|e| script_error(url, e))?;
    JsFuture::from(loaded)
        .await
        .map_err(|e| script_error(url, e))?;

    Ok(script)
}

/// Bootstrap function registered by a loaded entry script.
#[derive(Clone, Debug)]
pub struct JsBootstrap {
    function: Function,
}

impl JsBootstrap {
    /// Resolve a global binding named `symbol`.
    ///
    /// Tries `globalThis[symbol]` first. Classic scripts may declare the
    /// entry point with top-level `let`, which is not a property of the
    /// global object, so the name is then evaluated in global scope. Any
    /// exception (reserved word, CSP without `unsafe-eval`) is a missing
    /// bootstrap.
    pub fn lookup(symbol: &str) -> Result<Self, LoadError> {
        let missing = || LoadError::MissingBootstrap(symbol.to_string());

        let valid = !symbol.is_empty()
            && symbol
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
            && !symbol.starts_with(|c: char| c.is_ascii_digit());
        if !valid {
            return Err(missing());
        }

        let global = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(symbol))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok());
        let function = match global {
            Some(function) => function,
            None => js_sys::eval(symbol)
                .map_err(|_| missing())?
                .dyn_into::<Function>()
                .map_err(|_| missing())?,
        };
        Ok(Self { function })
    }
}

impl Bootstrap for JsBootstrap {
    async fn start(&self, binary_url: &str) -> Result<(), LoadError> {
        let returned = self
            .function
            .call1(&JsValue::UNDEFINED, &JsValue::from_str(binary_url))
            .map_err(|e| LoadError::Bootstrap(describe(&e)))?;

        if let Ok(pending) = returned.dyn_into::<Promise>() {
            JsFuture::from(pending)
                .await
                .map_err(|e| LoadError::Bootstrap(describe(&e)))?;
        }
        Ok(())
    }
}

impl ScriptLoader for DomScriptLoader {
    type Bootstrap = JsBootstrap;

    async fn load_script(&self, url: &str) -> Result<Self::Bootstrap, LoadError> {
        inject_script(url).await?;
        JsBootstrap::lookup(&self.bootstrap_symbol)
    }
}
