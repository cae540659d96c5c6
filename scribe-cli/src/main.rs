use anyhow::Result;
use clap::Command;

mod cmd;
mod config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("scribe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown documents into HTML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::render::make_subcommand())
        .subcommand(cmd::title::make_subcommand())
        .get_matches();

    match matches.subcommand() {
        Some(("render", args)) => cmd::render::execute(args),
        Some(("title", args)) => cmd::title::execute(args),
        _ => unreachable!("subcommand is required"),
    }
}
