//! # Stockroom CLI
//!
//! Interactive inventory manager over stdin/stdout.
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  stockroom (bin)                 │
//! │  main → run → menu::run(Console, Inventory)      │
//! ├──────────────────────────────────────────────────┤
//! │  stockroom-store   (JSON codec + file IO)        │
//! ├──────────────────────────────────────────────────┤
//! │  stockroom-core    (products, inventory, rules)  │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`),
//! so menu output on stdout stays clean.

mod console;
mod menu;
mod paths;

use std::io;

use tracing_subscriber::EnvFilter;

use stockroom_core::Inventory;

use crate::console::Console;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut inventory = Inventory::new();

    menu::run(&mut console, &mut inventory)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
