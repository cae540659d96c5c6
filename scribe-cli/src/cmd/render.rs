use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use scribe_core::{markdown_to_html, strip_root};

use super::{config_arg, read_source, source_arg, write_output};
use crate::config::ScribeConfig;

pub fn make_subcommand() -> Command {
    Command::new("render")
        .about("Convert a markdown document into HTML")
        .arg(source_arg())
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("HTML file to write, `-` for stdout"),
        )
        .arg(config_arg())
        .arg(
            Arg::new("fragment")
                .long("fragment")
                .help("Strip the root <div> container from the output")
                .action(ArgAction::SetTrue),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let config = ScribeConfig::load(args)?;
    let render_config = config.render_config();

    let markdown = read_source(&render_config.source)?;
    let html = markdown_to_html(&markdown)
        .with_context(|| format!("Failed to convert {}", render_config.source))?;
    let html = if render_config.fragment {
        strip_root(&html)
    } else {
        html.as_str()
    };

    write_output(&render_config.output, html)?;

    if render_config.output != "-" {
        eprintln!("Rendered {} to {}", render_config.source, render_config.output);
    }

    Ok(())
}
