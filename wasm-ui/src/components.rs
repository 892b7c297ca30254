//! UI Components for the playground.

use playground_rs::{KeyChord, Trigger, is_compile_shortcut};
use yew::prelude::*;

/// Editor key press as a [`KeyChord`].
pub fn key_chord(event: &KeyboardEvent) -> KeyChord {
    KeyChord {
        key: event.key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        shift: event.shift_key(),
        alt: event.alt_key(),
    }
}

/// Source editor panel.
#[derive(Properties, PartialEq)]
pub struct EditorPanelProps {
    pub value: String,
    pub compiling: bool,
    pub on_change: Callback<String>,
    /// Receives the source to compile and what triggered it.
    pub on_compile: Callback<(String, Trigger)>,
}

#[function_component(EditorPanel)]
pub fn editor_panel(props: &EditorPanelProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    // Ctrl/Cmd+Enter compiles what is in the editor right now.
    let on_keydown = {
        let on_compile = props.on_compile.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_compile_shortcut(&key_chord(&e)) {
                e.prevent_default();
                let target: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                on_compile.emit((target.value(), Trigger::Shortcut));
            }
        })
    };

    let on_compile_click = {
        let on_compile = props.on_compile.clone();
        let value = props.value.clone();
        Callback::from(move |_: MouseEvent| {
            on_compile.emit((value.clone(), Trigger::Button));
        })
    };

    html! {
        <div class="panel editor-panel">
            <div class="panel-header">
                <h2>{ "main.rs" }</h2>
                <div class="button-group">
                    <span class="hint">{ "Ctrl/Cmd+Enter" }</span>
                    <button class="run-button" onclick={on_compile_click}>
                        { if props.compiling { "Compiling\u{2026}" } else { "Compile" } }
                    </button>
                </div>
            </div>
            <div class="panel-content">
                <textarea
                    class="source-input"
                    value={props.value.clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    spellcheck="false"
                    autocomplete="off"
                />
            </div>
        </div>
    }
}

/// Compile log panel.
#[derive(Properties, PartialEq)]
pub struct LogPanelProps {
    pub logs: Vec<String>,
}

#[function_component(LogPanel)]
pub fn log_panel(props: &LogPanelProps) -> Html {
    html! {
        <div class="panel log-panel">
            <div class="panel-header">
                <h2>{ "Output" }</h2>
            </div>
            <div class="panel-content messages">
                { for props.logs.iter().map(|line| html! { <pre>{ line }</pre> }) }
            </div>
        </div>
    }
}

/// Canvas that loaded projects locate by id and render into.
#[derive(Properties, PartialEq)]
pub struct CanvasPanelProps {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

#[function_component(CanvasPanel)]
pub fn canvas_panel(props: &CanvasPanelProps) -> Html {
    html! {
        <div class="panel canvas-panel">
            <canvas
                id={props.id.clone()}
                width={props.width.to_string()}
                height={props.height.to_string()}
                style="background-color: #393939"
            />
        </div>
    }
}
