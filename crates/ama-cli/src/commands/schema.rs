use ama_core::responses::{NetworkReport, NetworkSummary};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `amacfg schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::Report => schema_for!(NetworkReport),
        SchemaType::Networks => schema_for!(Vec<NetworkSummary>),
    };
    output(&schema, flags.format)
}
