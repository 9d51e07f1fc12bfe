use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Global flags the command handlers read. `--quiet`/`--verbose` only set the
/// log level in `main` and are not carried here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GlobalFlags {
    pub format: OutputFormat,
}
