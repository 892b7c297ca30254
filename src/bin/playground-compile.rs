//! CLI tool to compile a source file against a playground compile server.
//!
//! Usage:
//!   playground-compile <main.rs>
//!   playground-compile <main.rs> -o <dir>
//!   playground-compile <main.rs> --api-base http://host:3000/api --no-load
//!
//! Prints the same log lines as the web playground. With `-o`, the compiled
//! artifact pair is downloaded into the given directory.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use playground_rs::config::API_BASE_ENV;
use playground_rs::native::{DownloadLoader, ReqwestTransport, SkipLoader};
use playground_rs::{
    AppLoader, CompileClient, CompileOutcome, PlaygroundConfig, ScriptLoader, ShellEvent,
    ShellState, Trigger, compile_and_load,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "playground-compile", version, about = "Compile a playground project remotely")]
struct Args {
    /// Source file to compile
    source: PathBuf,

    /// Compile API base URL
    #[arg(long, env = API_BASE_ENV)]
    api_base: Option<String>,

    /// Directory to download the compiled artifacts into
    #[arg(short, long, default_value = "playground-out")]
    out: PathBuf,

    /// Only compile; do not download artifacts
    #[arg(long)]
    no_load: bool,
}

async fn run<L: ScriptLoader>(config: &PlaygroundConfig, source: &str, loader: L) -> CompileOutcome {
    let client = CompileClient::new(&config.api_base, ReqwestTransport::new());
    let app_loader = AppLoader::new(&config.api_base, loader);

    let mut state = ShellState::default();
    compile_and_load(source, &client, &app_loader, Trigger::Button, |event| {
        match &event {
            ShellEvent::Log(line) => println!("{line}"),
            ShellEvent::Failed(_) => {
                state.apply(event.clone());
                for line in &state.logs {
                    eprintln!("{line}");
                }
                return;
            }
            ShellEvent::Started | ShellEvent::Finished => {}
        }
        state.apply(event);
    })
    .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("playground_rs=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = PlaygroundConfig::from_env_value(args.api_base.as_deref());

    let source = match fs::read_to_string(&args.source) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading source file '{}': {}", args.source.display(), e);
            process::exit(1);
        }
    };

    let outcome = if args.no_load {
        run(&config, &source, SkipLoader).await
    } else {
        run(&config, &source, DownloadLoader::new(&args.out)).await
    };

    match outcome {
        CompileOutcome::Loaded(urls) => {
            if args.no_load {
                eprintln!("Compiled: {}", urls.binary);
            } else {
                eprintln!("Artifacts written to {}", args.out.display());
            }
        }
        CompileOutcome::Rejected(_) | CompileOutcome::Failed(_) => process::exit(1),
    }
}
