//! The `render` command.

use std::path::PathBuf;

use clap::Args;
use tracing::error;

use spoke_netvis_core::error::NetvisResult;
use spoke_netvis_core::render::RenderedNetwork;
use spoke_netvis_core::types::{load_metapath_table, MetapathTemplate};
use spoke_netvis_neo4j::{
    render_network, Neo4jBackend, Neo4jConfig, RenderOptions, RenderRequest,
};

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// NCBI id of the organism, as entered by the user
    #[arg(long)]
    pub organism: String,

    /// SPOKE identifier of the compound (or its display name, for the
    /// name-anchored fallback)
    #[arg(long)]
    pub compound: String,

    /// Optional metapath table (CSV: hop count, then relationship columns);
    /// switches the pipeline into template mode
    #[arg(long)]
    pub metapaths: Option<PathBuf>,

    /// Compact JSON output instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Run one render request. Exit code 0 on success (including an empty
/// network), 1 on any fatal pipeline error.
pub async fn handle_render(args: RenderArgs) -> i32 {
    // Missing or unparsable input means no query executes at all.
    let request = match RenderRequest::parse(&args.organism, &args.compound) {
        Some(request) => request,
        None => {
            eprintln!("nothing to render: provide a positive organism NCBI id and a compound id");
            return 0;
        }
    };

    match run(&request, args.metapaths.as_deref(), args.compact).await {
        Ok(network) => {
            if network.is_empty() {
                eprintln!(
                    "no path found between organism {} and compound {}",
                    request.organism_id, request.compound_id
                );
            }
            0
        }
        Err(err) => {
            error!(%err, "render request failed");
            eprintln!("error: {err}");
            1
        }
    }
}

async fn run(
    request: &RenderRequest,
    metapaths: Option<&std::path::Path>,
    compact: bool,
) -> NetvisResult<RenderedNetwork> {
    let templates: Option<Vec<MetapathTemplate>> = match metapaths {
        Some(path) => Some(load_metapath_table(path)?),
        None => None,
    };

    let config = Neo4jConfig::load()?;
    let backend = Neo4jBackend::connect(&config).await?;

    let network = render_network(
        request,
        templates.as_deref(),
        &backend,
        &RenderOptions::default(),
    )
    .await?;

    if let Some(json) = network_json(&network, compact)? {
        println!("{json}");
    }

    Ok(network)
}

/// Serialize a network for stdout. An empty network gets no stdout output
/// at all; the caller reports it on stderr instead.
fn network_json(network: &RenderedNetwork, compact: bool) -> NetvisResult<Option<String>> {
    if network.is_empty() {
        return Ok(None);
    }
    let json = if compact {
        serde_json::to_string(network)?
    } else {
        serde_json::to_string_pretty(network)?
    };
    Ok(Some(json))
}
