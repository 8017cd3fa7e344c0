//! Chat frontend setup - bootstraps the chat-frontend React project

mod product;

use anyhow::Result;
use clap::Parser;
use product::ChatFrontendConfig;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "chat-frontend-setup")]
#[command(about = "Bootstrap the chat-frontend React + TypeScript project")]
#[command(version = CLI_VERSION)]
pub struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();
    let config = ChatFrontendConfig;

    let result = scaffolder_core::run(&config).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
