use crate::assemble::{resolve_display_key, KeyProfile};
use crate::error::NetvisError;
use crate::types::{NodeRecord, NodeType};

#[test]
fn test_name_wins_over_identifier() {
    let record = NodeRecord::new(NodeType::Compound)
        .with_property("name", "Cholic acid")
        .with_property("identifier", "DB02659");
    let key = resolve_display_key(&record, KeyProfile::Default).unwrap();
    assert_eq!(key.as_str(), "Cholic acid");
}

#[test]
fn test_identifier_used_when_name_absent() {
    let record = NodeRecord::new(NodeType::Organism).with_property("identifier", "98");
    let key = resolve_display_key(&record, KeyProfile::Default).unwrap();
    assert_eq!(key.as_str(), "98");
}

#[test]
fn test_empty_name_falls_through_to_identifier() {
    let record = NodeRecord::new(NodeType::Organism)
        .with_property("name", "")
        .with_property("identifier", "98");
    let key = resolve_display_key(&record, KeyProfile::Default).unwrap();
    assert_eq!(key.as_str(), "98");
}

#[test]
fn test_no_attribute_is_fatal() {
    let record = NodeRecord::new(NodeType::Reaction).with_property("ec_number", "1.1.1.1");
    let err = resolve_display_key(&record, KeyProfile::Default).unwrap_err();
    match err {
        NetvisError::IdentityResolution {
            node_type,
            attempted,
        } => {
            assert_eq!(node_type, NodeType::Reaction);
            assert_eq!(attempted, vec!["name", "identifier"]);
        }
        other => panic!("expected IdentityResolution, got {other:?}"),
    }
}

#[test]
fn test_metapath_profile_adds_protein_description() {
    let record = NodeRecord::new(NodeType::Protein).with_property("description", "Chaperone DnaK");
    // Default profile has no third attempt for proteins
    assert!(resolve_display_key(&record, KeyProfile::Default).is_err());
    let key = resolve_display_key(&record, KeyProfile::Metapath).unwrap();
    assert_eq!(key.as_str(), "Chaperone DnaK");
}

#[test]
fn test_metapath_profile_still_prefers_name() {
    let record = NodeRecord::new(NodeType::Protein)
        .with_property("name", "DnaK")
        .with_property("description", "Chaperone DnaK");
    let key = resolve_display_key(&record, KeyProfile::Metapath).unwrap();
    assert_eq!(key.as_str(), "DnaK");
}

#[test]
fn test_metapath_profile_description_only_for_protein() {
    let record = NodeRecord::new(NodeType::Reaction).with_property("description", "hydrolysis");
    assert!(resolve_display_key(&record, KeyProfile::Metapath).is_err());
}

#[test]
fn test_attempt_order_is_explicit() {
    assert_eq!(
        KeyProfile::Metapath.attempts(NodeType::Protein),
        vec!["name", "identifier", "description"]
    );
    assert_eq!(
        KeyProfile::Default.attempts(NodeType::Protein),
        vec!["name", "identifier"]
    );
}
