use ama_core::attributes::split_pair;
use ama_core::page::Viewport;
use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Resolve a network strategy and print everything it derives.
    Resolve(ResolveArgs),
    /// List supported ad networks.
    Networks,
    /// Print the JSON Schema of a response type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ResolveArgs {
    /// Network type of the amp-auto-ads element (e.g. adsense, doubleclick)
    #[arg(short, long)]
    pub network: String,

    /// Element attribute as name=value (repeatable)
    #[arg(short, long = "attr", value_parser = parse_attr)]
    pub attrs: Vec<(String, String)>,

    /// Canonical URL of the page
    #[arg(short, long)]
    pub canonical_url: String,

    /// Viewport as WIDTHxHEIGHT (defaults to page.default_viewport_* config)
    #[arg(long, value_parser = parse_viewport)]
    pub viewport: Option<Viewport>,

    /// Opt-in status code from the fetched auto-ads config (repeatable)
    #[arg(long = "opt-in-status")]
    pub opt_in_status: Vec<u64>,

    /// Full fetched auto-ads config JSON, instead of --opt-in-status
    #[arg(long, conflicts_with = "opt_in_status")]
    pub config_json: Option<String>,

    /// Experiment branch selection as experiment=branch (repeatable)
    #[arg(long = "experiment", value_parser = parse_attr)]
    pub experiments: Vec<(String, String)>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Report,
    Networks,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Response type to describe
    #[arg(value_enum, default_value = "report")]
    pub type_name: SchemaType,
}

fn parse_attr(input: &str) -> Result<(String, String), ama_core::errors::CoreError> {
    split_pair(input)
}

fn parse_viewport(input: &str) -> Result<Viewport, ama_core::errors::CoreError> {
    Viewport::parse(input)
}
