use anyhow::{Context, Result};
use markdown_loom_engine::{io, render_document};
use std::io::Read;
use std::path::PathBuf;
use std::{env, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let (input, output) = match args.len() {
        1 => (None, None),
        2 => (Some(PathBuf::from(&args[1])), None),
        3 => (Some(PathBuf::from(&args[1])), Some(PathBuf::from(&args[2]))),
        _ => {
            eprintln!("Usage: markdown-loom [input.md] [output.html]");
            eprintln!("  with no input path, markdown is read from stdin");
            process::exit(2);
        }
    };

    let markdown = match &input {
        Some(path) => io::read_markdown(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let html = render_document(&markdown).context("failed to render markdown")?;

    match &output {
        Some(path) => io::write_html(path, &html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{html}"),
    }

    Ok(())
}
