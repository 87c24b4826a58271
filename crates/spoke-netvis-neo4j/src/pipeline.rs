//! One-call render request handling.
//!
//! Wires builder -> fetcher -> assembler -> preparer for a single request.
//! The caller owns the resulting network end to end; nothing is shared
//! across concurrent requests.

use tracing::info;

use spoke_netvis_core::assemble::{assemble_graph, KeyProfile};
use spoke_netvis_core::error::NetvisResult;
use spoke_netvis_core::render::{prepare_render, LayoutParams, Palette, RenderedNetwork};
use spoke_netvis_core::types::MetapathTemplate;

use crate::backend::PathQueryBackend;
use crate::fetch::PathFetcher;

/// One validated render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub organism_id: i64,
    pub compound_id: String,
}

impl RenderRequest {
    /// Parse user input into a request.
    ///
    /// The organism id arrives as text; an absent or unparsable id, or a
    /// missing compound, means no query should execute - a no-op for the
    /// caller, not an error.
    pub fn parse(organism_text: &str, compound_id: &str) -> Option<Self> {
        let organism_id: i64 = organism_text.trim().parse().ok().filter(|id| *id > 0)?;
        let compound_id = compound_id.trim();
        if compound_id.is_empty() {
            return None;
        }
        Some(Self {
            organism_id,
            compound_id: compound_id.to_string(),
        })
    }
}

/// Styling configuration injected into render preparation.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub palette: Palette,
    pub layout: LayoutParams,
}

/// Run one complete render request.
///
/// With templates, every metapath row is queried and merged under the
/// metapath key profile; without, the default-mode fallback ladder runs.
/// An empty fetch yields an empty network ("no path found"), not an error;
/// every other failure aborts the request whole.
pub async fn render_network<B: PathQueryBackend>(
    request: &RenderRequest,
    templates: Option<&[MetapathTemplate]>,
    backend: &B,
    options: &RenderOptions,
) -> NetvisResult<RenderedNetwork> {
    let fetcher = PathFetcher::new(backend);

    let (paths, profile) = match templates {
        Some(templates) => {
            let paths = fetcher
                .fetch_metapaths(request.organism_id, &request.compound_id, templates)
                .await?;
            (paths, KeyProfile::Metapath)
        }
        None => {
            let paths = fetcher
                .fetch_default(request.organism_id, &request.compound_id)
                .await?;
            (paths, KeyProfile::Default)
        }
    };

    let graph = assemble_graph(&paths, profile)?;
    info!(
        organism_id = request.organism_id,
        compound_id = %request.compound_id,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "render request assembled"
    );
    prepare_render(&graph, &options.palette, options.layout)
}
