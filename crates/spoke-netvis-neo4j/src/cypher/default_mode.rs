//! Default-mode queries: the fixed enzyme skeleton and its fallbacks.

use super::{CypherQuery, ParamValue, ROW_LIMIT};

/// The bounded-hop relationship skeleton from the Organism anchor to a
/// Reaction node: organism-encoded protein, its EC class, one optional
/// class generalization, then a 1-2 hop segment into the reaction.
const ENZYME_SKELETON: &str =
    "(o)-[:ENCODES_OeP]->(p:Protein)-[:HAS_PhEC]->(e:EC)-[:ISA_ECiEC]->(e2:EC)-[*1..2]->(r:Reaction)";

fn default_mode_query(compound_anchor: &str, organism_id: i64, compound_id: &str) -> CypherQuery {
    let statement = format!(
        "MATCH (o:Organism {{identifier: $source}}), (c:Compound {{{compound_anchor}: $target}})\n\
         MATCH path1 = {ENZYME_SKELETON}\n\
         MATCH path2 = allShortestPaths((r)-[*]-(c))\n\
         RETURN path1, path2 LIMIT {ROW_LIMIT}"
    );
    CypherQuery {
        statement,
        parameters: vec![
            ("source", ParamValue::Int(organism_id)),
            ("target", ParamValue::Text(compound_id.to_string())),
        ],
        path_columns: vec!["path1", "path2"],
        row_limit: Some(ROW_LIMIT),
    }
}

/// The identifier-anchored primary query.
pub fn primary_path_query(organism_id: i64, compound_id: &str) -> CypherQuery {
    default_mode_query("identifier", organism_id, compound_id)
}

/// The same skeleton with the Compound anchor matched by display name,
/// used when identifier-based matching returns nothing.
pub fn name_anchored_path_query(organism_id: i64, compound_name: &str) -> CypherQuery {
    default_mode_query("name", organism_id, compound_name)
}

/// The last-resort query: all shortest paths between the raw anchors with
/// no relationship-type constraints. Unlike the skeleton queries this rung
/// is uncapped; whatever it yields is the final result.
pub fn shortest_path_fallback_query(organism_id: i64, compound_id: &str) -> CypherQuery {
    CypherQuery {
        statement: "MATCH (o:Organism {identifier: $source}), (c:Compound {identifier: $target})\n\
                    MATCH path = allShortestPaths((c)-[*]-(o))\n\
                    RETURN path"
            .to_string(),
        parameters: vec![
            ("source", ParamValue::Int(organism_id)),
            ("target", ParamValue::Text(compound_id.to_string())),
        ],
        path_columns: vec!["path"],
        row_limit: None,
    }
}
