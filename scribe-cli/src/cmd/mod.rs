use anyhow::{Context, Result};
use clap::Arg;
use std::path::Path;

pub mod render;
pub mod title;

pub fn source_arg() -> Arg {
    Arg::new("source")
        .short('s')
        .long("source")
        .value_name("FILE")
        .help("Markdown file to read, `-` for stdin")
}

pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help("Configuration file")
        .default_value("./scribe.toml")
}

/// Read the markdown source, `-` meaning stdin.
pub fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        return std::io::read_to_string(std::io::stdin()).context("Failed to read stdin");
    }

    std::fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))
}

/// Write `contents` to `output`, `-` meaning stdout.
pub fn write_output(output: &str, contents: &str) -> Result<()> {
    if output == "-" {
        println!("{}", contents);
        return Ok(());
    }

    let path = Path::new(output);
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/index.html");
        let out = out.to_string_lossy();

        write_output(&out, "<p>hi</p>").unwrap();
        assert_eq!(read_source(&out).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_read_missing_file_has_context() {
        let err = read_source("/definitely/not/here.md").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.md"));
    }
}
