use crate::error::NetvisError;
use crate::render::{prepare_render, LayoutParams, Palette};
use crate::types::{DisplayKey, GraphEdge, NodeType, PathGraph};

fn sample_graph() -> PathGraph {
    let mut graph = PathGraph::new();
    graph
        .insert_node(DisplayKey::new("E. coli"), NodeType::Organism)
        .unwrap();
    graph
        .insert_node(DisplayKey::new("DnaK"), NodeType::Protein)
        .unwrap();
    graph
        .insert_node(DisplayKey::new("GroEL"), NodeType::Protein)
        .unwrap();
    graph.insert_edge(GraphEdge {
        source: DisplayKey::new("E. coli"),
        target: DisplayKey::new("DnaK"),
        relationship: "ENCODES_OeP".to_string(),
    });
    graph
}

#[test]
fn test_legend_exactly_matches_present_types() {
    let network =
        prepare_render(&sample_graph(), &Palette::spoke(), LayoutParams::default()).unwrap();
    let types: Vec<NodeType> = network.legend.iter().map(|e| e.node_type).collect();
    assert_eq!(types, vec![NodeType::Organism, NodeType::Protein]);
    assert_eq!(network.legend.color_for(NodeType::Protein), Some("#8dd3c7"));
    assert_eq!(network.legend.color_for(NodeType::Compound), None);
}

#[test]
fn test_node_colors_are_deterministic() {
    let network =
        prepare_render(&sample_graph(), &Palette::spoke(), LayoutParams::default()).unwrap();
    for node in &network.nodes {
        match node.node_type {
            NodeType::Organism => assert_eq!(node.color, "#d9c8ae"),
            NodeType::Protein => assert_eq!(node.color, "#8dd3c7"),
            other => panic!("unexpected type {other}"),
        }
    }
}

#[test]
fn test_edge_title_from_relationship_type() {
    let network =
        prepare_render(&sample_graph(), &Palette::spoke(), LayoutParams::default()).unwrap();
    assert_eq!(network.edges.len(), 1);
    assert_eq!(network.edges[0].title, "Edge Type: ENCODES_OeP");
    assert_eq!(network.edges[0].from.as_str(), "E. coli");
    assert_eq!(network.edges[0].to.as_str(), "DnaK");
}

#[test]
fn test_missing_palette_entry_is_reported() {
    let palette = Palette::empty().with_color(NodeType::Organism, "#d9c8ae");
    let err = prepare_render(&sample_graph(), &palette, LayoutParams::default()).unwrap_err();
    match err {
        NetvisError::UnknownNodeType(node_type) => assert_eq!(node_type, NodeType::Protein),
        other => panic!("expected UnknownNodeType, got {other:?}"),
    }
}

#[test]
fn test_empty_graph_renders_empty_network() {
    let network =
        prepare_render(&PathGraph::new(), &Palette::spoke(), LayoutParams::default()).unwrap();
    assert!(network.is_empty());
    assert!(network.legend.is_empty());
}

#[test]
fn test_layout_params_are_fixed_repulsion_constants() {
    let layout = LayoutParams::default();
    assert_eq!(layout.node_distance, 250.0);
    assert_eq!(layout.central_gravity, 0.33);
    assert_eq!(layout.spring_length, 110.0);
    assert_eq!(layout.spring_strength, 0.1);
    assert_eq!(layout.damping, 1.0);
}

#[test]
fn test_rendered_network_serializes_for_renderer() {
    let network =
        prepare_render(&sample_graph(), &Palette::spoke(), LayoutParams::default()).unwrap();
    let json = serde_json::to_value(&network).unwrap();
    assert_eq!(json["nodes"][0]["id"], "E. coli");
    assert_eq!(json["nodes"][0]["color"], "#d9c8ae");
    assert_eq!(json["edges"][0]["title"], "Edge Type: ENCODES_OeP");
    assert_eq!(json["layout"]["node_distance"], 250.0);
}
