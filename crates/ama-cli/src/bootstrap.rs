use anyhow::Context;

/// Load layered config, including a workspace or cwd `.env`.
pub fn load_config() -> anyhow::Result<ama_config::AmaConfig> {
    let config = ama_config::AmaConfig::load_with_dotenv()
        .context("failed to load amacfg configuration")?;
    tracing::debug!(
        config_url_base = %config.endpoint.config_url_base,
        max_url_length = config.endpoint.max_url_length,
        "configuration loaded"
    );
    Ok(config)
}
