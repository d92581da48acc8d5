use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufWriter, IsTerminal, Write};
use tracing_subscriber::prelude::*;

use yit::config::{Config, OutputFormat};
use yit::document::convert::to_serde_value;
use yit::document::{NodeKind, TreeNode, YamlNode};
use yit::file::loader::{load_yaml_file, load_yaml_from_stdin};
use yit::query::{Query, Select};

/// yit - query YAML documents node by node
#[derive(Parser)]
#[command(name = "yit")]
#[command(version)]
#[command(about = "Filter and extract nodes from YAML documents", long_about = None)]
struct Cli {
    /// YAML file to read (omit to read from stdin); `.gz` files are decompressed
    file: Option<String>,

    /// Only match nodes of this kind (document, sequence, mapping, scalar, alias)
    #[arg(long)]
    kind: Option<NodeKind>,

    /// Only match mappings containing this key
    #[arg(long)]
    key: Option<String>,

    /// Only match nodes with exactly this value
    #[arg(long)]
    value: Option<String>,

    /// Only match nodes whose value starts with this prefix
    #[arg(long)]
    prefix: Option<String>,

    /// Only match nodes whose value ends with this suffix
    #[arg(long)]
    suffix: Option<String>,

    /// Only match nodes with this short tag, e.g. `!!int`
    #[arg(long)]
    tag: Option<String>,

    /// What to print for each matching node
    #[arg(long, value_enum)]
    select: Option<SelectArg>,

    /// Print the value stored under this key of each matching mapping
    #[arg(long, conflicts_with = "select")]
    field: Option<String>,

    /// Only look at each document's root value instead of every node
    #[arg(long)]
    shallow: bool,

    /// Stop after this many matches (overrides the config file)
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Print each match as a YAML document
    #[arg(long)]
    yaml: bool,

    /// Include the short tag of each match
    #[arg(long)]
    show_tag: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SelectArg {
    Nodes,
    Keys,
    Values,
}

impl Cli {
    fn query(&self, config: &Config) -> Query {
        let select = match (&self.field, self.select) {
            (Some(field), _) => Select::Field(field.clone()),
            (None, Some(SelectArg::Keys)) => Select::Keys,
            (None, Some(SelectArg::Values)) => Select::Values,
            (None, Some(SelectArg::Nodes)) | (None, None) => Select::Nodes,
        };
        let limit = self
            .limit
            .or((config.limit > 0).then_some(config.limit));

        Query {
            roots_only: self.shallow,
            kind: self.kind,
            key: self.key.clone(),
            value: self.value.clone(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            tag: self.tag.clone(),
            select,
            limit,
        }
    }
}

fn main() -> Result<()> {
    // stdout carries the results, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load();
    if cli.yaml {
        config.output = OutputFormat::Yaml;
    }
    if cli.show_tag {
        config.show_tag = true;
    }

    let documents = match &cli.file {
        Some(path) => load_yaml_file(path)?,
        None => {
            if io::stdin().is_terminal() {
                anyhow::bail!("No input: pass a YAML file or pipe YAML into stdin");
            }
            load_yaml_from_stdin()?
        }
    };

    let query = cli.query(&config);
    let matches = query.run(&documents);
    tracing::debug!(matches = matches.len(), "query finished");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    print_matches(&mut out, &matches, &config)?;
    out.flush().context("Failed to write output")?;

    Ok(())
}

fn print_matches<W: Write>(out: &mut W, matches: &[&YamlNode], config: &Config) -> Result<()> {
    match config.output {
        OutputFormat::Line => {
            for node in matches {
                writeln!(out, "{}", format_line(node, config))?;
            }
        }
        OutputFormat::Yaml => {
            for node in matches {
                let rendered = serde_yaml::to_string(&to_serde_value(node))
                    .context("Failed to render match as YAML")?;
                write!(out, "---\n{}", rendered)?;
            }
        }
    }
    Ok(())
}

/// One output line: optional kind, optional short tag, then the value.
/// Containers show their size in place of a value.
fn format_line(node: &YamlNode, config: &Config) -> String {
    let mut parts = Vec::with_capacity(3);
    if config.show_kind {
        parts.push(node.kind().to_string());
    }
    if config.show_tag && !node.short_tag().is_empty() {
        parts.push(node.short_tag().to_string());
    }
    let body = match node.kind() {
        NodeKind::Mapping => format!("({} entries)", node.children().len() / 2),
        NodeKind::Sequence => format!("({} items)", node.children().len()),
        NodeKind::Document => String::from("(document)"),
        NodeKind::Alias => format!("*{}", node.value()),
        NodeKind::Scalar => node.value().to_string(),
    };
    parts.push(body);
    parts.join(" ")
}
