use anyhow::{Context, Result};
use clap::Parser;
use delta_html_config::Config;
use delta_html_engine::{RenderOptions, UnterminatedTail, render_with};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Render a Quill Delta (JSON array of insert operations) as HTML.
#[derive(Parser)]
#[command(name = "delta-html", author, version, about)]
struct Cli {
    /// Delta JSON file; `-` or omitted reads stdin
    input: Option<PathBuf>,

    /// Write HTML here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (default: ~/.config/delta-html/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Discard text after the last newline instead of rendering it as a paragraph
    #[arg(long)]
    drop_tail: bool,

    /// Copy text payloads verbatim instead of HTML-escaping them
    #[arg(long)]
    raw_text: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Result<RenderOptions> {
        let config = match &self.config {
            Some(path) => Config::load_from_path(path)?
                .with_context(|| format!("config file not found: {}", path.display()))?,
            None => Config::load()?.unwrap_or_default(),
        };

        let mut options = config.render;
        if self.drop_tail {
            options.unterminated_tail = UnterminatedTail::Drop;
        }
        if self.raw_text {
            options.escape_text = false;
        }
        Ok(options)
    }

    fn read_input(&self) -> Result<Vec<u8>> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))
            }
            _ => {
                let mut buf = Vec::new();
                io::stdin()
                    .read_to_end(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
        }
    }

    fn write_output(&self, html: &str) -> Result<()> {
        match &self.output {
            Some(path) => fs::write(path, html)
                .with_context(|| format!("failed to write {}", path.display())),
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.write_all(b"\n")?;
                Ok(())
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let options = cli.options()?;
    log::debug!("render options: {options:?}");

    let input = cli.read_input()?;
    match render_with(&input, None, &options) {
        Ok(html) => cli.write_output(&html),
        Err(err) => {
            // Keep whatever rendered before the failure.
            let partial = err.partial_html();
            if !partial.is_empty() {
                cli.write_output(partial)?;
            }
            Err(err).context("render failed")
        }
    }
}
