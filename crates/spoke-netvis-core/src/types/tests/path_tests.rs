use crate::types::{NodeRecord, NodeType, TraversalHop, TraversalPath};

fn named(node_type: NodeType, name: &str) -> NodeRecord {
    NodeRecord::new(node_type).with_property("name", name)
}

fn hop(source: NodeRecord, relationship: &str, target: NodeRecord) -> TraversalHop {
    TraversalHop {
        source,
        relationship: relationship.to_string(),
        target,
    }
}

#[test]
fn test_node_sequence_follows_hop_order() {
    let path = TraversalPath::new(vec![
        hop(
            named(NodeType::Organism, "E. coli"),
            "ENCODES_OeP",
            named(NodeType::Protein, "DnaK"),
        ),
        hop(
            named(NodeType::Protein, "DnaK"),
            "HAS_PhEC",
            named(NodeType::EC, "3.6.4.10"),
        ),
    ]);
    assert_eq!(
        path.node_sequence(),
        vec![
            "Organism:E. coli".to_string(),
            "Protein:DnaK".to_string(),
            "EC:3.6.4.10".to_string(),
        ]
    );
}

#[test]
fn test_node_sequence_falls_back_to_identifier() {
    let path = TraversalPath::new(vec![hop(
        NodeRecord::new(NodeType::Organism).with_property("identifier", "98"),
        "ENCODES_OeP",
        named(NodeType::Protein, "DnaK"),
    )]);
    assert_eq!(path.node_sequence()[0], "Organism:98");
}

#[test]
fn test_empty_path() {
    let path = TraversalPath::default();
    assert!(path.is_empty());
    assert_eq!(path.node_occurrences(), 0);
    assert!(path.node_sequence().is_empty());
}

#[test]
fn test_node_occurrences_counts_endpoints() {
    let path = TraversalPath::new(vec![
        hop(
            named(NodeType::Organism, "a"),
            "r1",
            named(NodeType::Protein, "b"),
        ),
        hop(
            named(NodeType::Protein, "b"),
            "r2",
            named(NodeType::EC, "c"),
        ),
    ]);
    assert_eq!(path.node_occurrences(), 4);
}
