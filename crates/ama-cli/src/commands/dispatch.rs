use ama_config::AmaConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &AmaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Resolve(args) => commands::resolve::handle(args, config, flags),
        Commands::Networks => commands::networks::handle(flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}
