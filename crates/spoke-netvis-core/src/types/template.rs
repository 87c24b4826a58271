//! Metapath templates and their CSV table loader.
//!
//! A metapath template is a fixed-length ordered sequence of relationship
//! types describing one traversal shape between an organism and a compound.
//! Templates arrive as rows of a CSV table: a hop count column followed by
//! that many relationship-type columns.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NetvisError, NetvisResult};

/// One templated query shape: `hop_count` typed relationship steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetapathTemplate {
    pub hop_count: usize,
    pub relationships: Vec<String>,
}

impl MetapathTemplate {
    pub fn new(hop_count: usize, relationships: Vec<String>) -> Self {
        Self {
            hop_count,
            relationships,
        }
    }

    /// Check that the declared hop count matches the relationship labels and
    /// that every label can be embedded in a Cypher relationship pattern.
    ///
    /// Must pass before any query is constructed from this template.
    pub fn validate(&self) -> NetvisResult<()> {
        if self.relationships.len() != self.hop_count {
            return Err(NetvisError::TemplateValidation {
                declared: self.hop_count,
                actual: self.relationships.len(),
            });
        }
        for label in &self.relationships {
            let valid = !label.is_empty()
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid {
                return Err(NetvisError::InvalidRelationshipLabel(label.clone()));
            }
        }
        Ok(())
    }
}

/// Load a metapath table from a CSV file.
///
/// Expected layout: a header row, then per row a hop count followed by the
/// relationship-type columns. Rows shorter than the widest template pad
/// with empty cells, which are ignored. Every loaded template is validated.
pub fn load_metapath_table(path: &Path) -> NetvisResult<Vec<MetapathTemplate>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| NetvisError::TemplateTable(format!("{}: {}", path.display(), e)))?;

    let mut templates = Vec::new();
    for (row_index, record) in reader.records().enumerate() {
        let record = record?;
        let mut fields = record.iter().map(str::trim);

        let hop_field = fields.next().unwrap_or("");
        let hop_count: usize = hop_field.parse().map_err(|_| {
            NetvisError::TemplateTable(format!(
                "row {}: invalid hop count {:?}",
                row_index + 1,
                hop_field
            ))
        })?;

        let relationships: Vec<String> = fields
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();

        let template = MetapathTemplate::new(hop_count, relationships);
        template.validate()?;
        templates.push(template);
    }

    debug!(
        path = %path.display(),
        count = templates.len(),
        "loaded metapath table"
    );
    Ok(templates)
}
