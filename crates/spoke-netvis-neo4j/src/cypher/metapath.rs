//! Templated queries from metapath table rows.

use spoke_netvis_core::error::NetvisResult;
use spoke_netvis_core::types::MetapathTemplate;

use super::{CypherQuery, ParamValue, ROW_LIMIT};

/// Build the query for one metapath template.
///
/// A template of `hop_count = n` yields exactly `n` typed relationship
/// placeholders connecting the Organism anchor through `n - 1` untyped
/// intermediate nodes to the identifier-matched Compound anchor. The whole
/// traversed path is returned.
///
/// Relationship types cannot be bound as Cypher parameters, so the labels
/// are embedded in the pattern; [`MetapathTemplate::validate`] restricts
/// them to `[A-Za-z0-9_]` first.
pub fn metapath_query(
    organism_id: i64,
    compound_id: &str,
    template: &MetapathTemplate,
) -> NetvisResult<CypherQuery> {
    template.validate()?;

    let mut pattern = String::from("(o)");
    for (index, relationship) in template.relationships.iter().enumerate() {
        let is_last = index + 1 == template.hop_count;
        if is_last {
            pattern.push_str(&format!("-[:{relationship}]->(c)"));
        } else {
            pattern.push_str(&format!("-[:{relationship}]->(i{})", index + 1));
        }
    }

    let statement = format!(
        "MATCH (o:Organism {{identifier: $source}}), (c:Compound {{identifier: $target}})\n\
         MATCH path = {pattern}\n\
         RETURN path"
    );
    Ok(CypherQuery {
        statement,
        parameters: vec![
            ("source", ParamValue::Int(organism_id)),
            ("target", ParamValue::Text(compound_id.to_string())),
        ],
        path_columns: vec!["path"],
        row_limit: Some(ROW_LIMIT),
    })
}
