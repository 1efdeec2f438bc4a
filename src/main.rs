mod app;
mod cli;
mod config;
mod core;
mod reporters;
mod scanner;
mod ui;
mod utils;

use clap::Parser;

fn main() {
    human_panic::setup_panic!();

    let cli = cli::args::Cli::parse();
    if let Err(err) = app::run(cli) {
        eprintln!("fatal: {:#}", err);
        std::process::exit(1);
    }
}
