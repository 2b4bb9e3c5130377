//! stylesnap CLI
//!
//! Loads a rendered tree as JSON, injects CSS files into a style store in
//! order, and prints the tree's snapshot with the rules it uses inlined.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use serde::Deserialize;
use stylesnap_css::OutputStyle;
use stylesnap_serializer::{
    PrinterOptions, SerializerOptions, SharedStyleSheet, SnapshotPrinter, StyleSerializer,
};
use stylesnap_tree::RenderTree;

/// Print a rendered component tree with the CSS rules it uses
#[derive(Parser, Debug)]
#[command(name = "stylesnap")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Snapshot a tree against one stylesheet
    stylesnap --tree button.json --css styles.css

    # Several style tags, injected in order
    stylesnap --tree page.json --css reset.css --css app.css

    # Compressed CSS, tree read from stdin
    cat tree.json | stylesnap --tree - --css styles.css --compress

    # Options from a file: {"serializer":{"output":{"style":"compressed"}},"printer":{"indent":4}}
    stylesnap --tree tree.json --css styles.css --config stylesnap.json
"#)]
struct Cli {
    /// Rendered tree JSON (`-` reads stdin)
    #[arg(long, value_name = "FILE")]
    tree: PathBuf,

    /// CSS file to inject into the style store (repeatable)
    #[arg(long, value_name = "FILE")]
    css: Vec<PathBuf>,

    /// Inline CSS without optional whitespace
    #[arg(long)]
    compress: bool,

    /// Spaces per nesting level in the tree and the CSS
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// JSON file with serializer and printer options
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Options file contents. Command line flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    serializer: SerializerOptions,
    printer: PrinterOptions,
}

impl Config {
    fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    fn with_flags(mut self, cli: &Cli) -> Self {
        if cli.compress {
            self.serializer.output = OutputStyle::Compressed;
        }
        if let Some(indent) = cli.indent {
            self.printer.indent = indent;
            if let OutputStyle::Pretty { indent: css_indent } = &mut self.serializer.output {
                *css_indent = indent;
            }
        }
        self
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(snapshot) => {
            println!("{snapshot}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_flags(cli);

    let json = read_input(&cli.tree)
        .with_context(|| format!("failed to read tree {}", cli.tree.display()))?;
    let tree = RenderTree::from_json(&json)
        .with_context(|| format!("failed to load tree {}", cli.tree.display()))?;

    let store = SharedStyleSheet::new();
    for path in &cli.css {
        let css = fs::read_to_string(path)
            .with_context(|| format!("failed to read stylesheet {}", path.display()))?;
        store.inject(css);
    }

    let serializer = StyleSerializer::with_options(store, config.serializer);
    let printer = SnapshotPrinter::new(config.printer);
    serializer
        .snapshot_with(&tree, &printer)
        .context("failed to print snapshot")
}

fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    }
}
