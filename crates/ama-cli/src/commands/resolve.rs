use ama_config::AmaConfig;
use ama_core::attributes::ElementAttributes;
use ama_core::page::{PageContext, PageWindow, Viewport};
use ama_core::responses::NetworkReport;
use ama_core::sticky::AutoAdsConfig;
use ama_network::NetworkConfig;
use anyhow::{Context, bail};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResolveArgs;
use crate::output::output;

/// Handle `amacfg resolve`.
pub fn handle(args: &ResolveArgs, config: &AmaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = build_report(args, config)?;
    output(&report, flags.format)
}

fn build_report(args: &ResolveArgs, config: &AmaConfig) -> anyhow::Result<NetworkReport> {
    let attributes: ElementAttributes = args.attrs.iter().cloned().collect();
    let viewport = args.viewport.unwrap_or_else(|| {
        Viewport::new(
            config.page.default_viewport_width,
            config.page.default_viewport_height,
        )
    });
    let page = PageContext::new(args.canonical_url.clone(), viewport);

    let Some(network) = ama_network::resolve(&args.network, &attributes, &page, &config.endpoint)
    else {
        let supported = ama_core::network::NetworkId::ALL.map(|id| id.as_str()).join(", ");
        bail!(
            "unsupported ad network '{}' (supported: {supported})",
            args.network
        );
    };

    let win = args
        .experiments
        .iter()
        .fold(PageWindow::new(), |win, (experiment, branch)| {
            win.with_branch(experiment.clone(), branch.clone())
        });

    let auto_ads_config = match (&args.config_json, args.opt_in_status.is_empty()) {
        (Some(json), _) => {
            Some(AutoAdsConfig::from_json(json).context("failed to parse --config-json")?)
        }
        (None, false) => Some(AutoAdsConfig::with_opt_in_status(
            args.opt_in_status.iter().copied(),
        )),
        (None, true) => None,
    };

    Ok(network.report(&win, auto_ads_config.as_ref()))
}
