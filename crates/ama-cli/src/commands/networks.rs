use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `amacfg networks`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ama_network::supported_networks(), flags.format)
}
