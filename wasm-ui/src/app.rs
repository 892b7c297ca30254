//! Main application component.

use std::rc::Rc;

use playground_rs::{
    AppLoader, CompileClient, DEFAULT_SOURCE, PlaygroundConfig, ShellEvent, ShellState, Trigger,
    compile_and_load,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{CanvasPanel, EditorPanel, LogPanel};
use crate::script::DomScriptLoader;
use crate::transport::GlooTransport;

/// Configuration baked in at build time.
fn playground_config() -> PlaygroundConfig {
    PlaygroundConfig::from_env_value(option_env!("PLAYGROUND_API_BASE"))
}

/// Log and compiling flag, folded from compile events.
#[derive(Clone, Default, PartialEq)]
pub struct Console(pub ShellState);

impl Reducible for Console {
    type Action = ShellEvent;

    fn reduce(self: Rc<Self>, action: ShellEvent) -> Rc<Self> {
        let mut next = (*self).clone();
        next.0.apply(action);
        Rc::new(next)
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| playground_config());
    let source = use_state(|| DEFAULT_SOURCE.to_string());
    let console = use_reducer(Console::default);

    let on_source_change = {
        let source = source.clone();
        Callback::from(move |text: String| source.set(text))
    };

    // Overlapping compiles are allowed; each runs to completion.
    let on_compile = {
        let dispatcher = console.dispatcher();
        let config = config.clone();
        Callback::from(move |(text, trigger): (String, Trigger)| {
            let dispatcher = dispatcher.clone();
            let config = config.clone();
            spawn_local(async move {
                let client = CompileClient::new(&config.api_base, GlooTransport);
                let app_loader = AppLoader::new(
                    &config.api_base,
                    DomScriptLoader::new(&config.bootstrap_symbol),
                );
                compile_and_load(&text, &client, &app_loader, trigger, |event| {
                    dispatcher.dispatch(event)
                })
                .await;
            });
        })
    };

    html! {
        <div class="app">
            <header class="header">
                <div class="header-left">
                    <h1>{ "playground-rs" }</h1>
                    <p class="subtitle">{ format!("Compile API: {}", config.api_base) }</p>
                </div>
            </header>

            <main class="main">
                <div class="panels">
                    <EditorPanel
                        value={(*source).clone()}
                        compiling={console.0.compiling}
                        on_change={on_source_change}
                        on_compile={on_compile}
                    />

                    <div class="side-column">
                        <LogPanel logs={console.0.logs.clone()} />
                        <CanvasPanel
                            id={config.canvas_id.clone()}
                            width={config.canvas_width}
                            height={config.canvas_height}
                        />
                    </div>
                </div>
            </main>

            <footer class="footer">
                <div class="footer-row">
                    <span class="footer-left">{ "MIT License" }</span>
                    <span class="footer-build">
                        { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                    </span>
                </div>
            </footer>
        </div>
    }
}
