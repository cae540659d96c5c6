use anyhow::{Context, Result};
use clap::{ArgMatches, Command};
use scribe_core::extract_title;

use super::{config_arg, read_source, source_arg};
use crate::config::ScribeConfig;

pub fn make_subcommand() -> Command {
    Command::new("title")
        .about("Print the title of a markdown document")
        .arg(source_arg())
        .arg(config_arg())
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = ScribeConfig::load(args)?;
    let source = &config.render_config().source;

    let markdown = read_source(source)?;
    let title = extract_title(&markdown).with_context(|| format!("No title in {}", source))?;
    println!("{}", title);

    Ok(())
}
