//! Node categories, raw node records and resolved display keys.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NetvisError;

/// The fixed set of SPOKE node categories.
///
/// Every node returned by a traversal carries exactly one of these labels.
/// The set is closed: a label outside it is a data-integrity condition, not
/// a value to be defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Anatomy,
    BiologicalProcess,
    Blend,
    CellType,
    CellularComponent,
    ClinicalLab,
    Complex,
    Compound,
    Disease,
    EC,
    Food,
    Gene,
    Location,
    MiRNA,
    MolecularFunction,
    Organism,
    Pathway,
    PharmacologicClass,
    Protein,
    ProteinDomain,
    ProteinFamily,
    PwGroup,
    Reaction,
    SideEffect,
    Symptom,
}

impl NodeType {
    /// All categories, in palette order.
    pub const ALL: [NodeType; 25] = [
        NodeType::Anatomy,
        NodeType::BiologicalProcess,
        NodeType::Blend,
        NodeType::CellType,
        NodeType::CellularComponent,
        NodeType::ClinicalLab,
        NodeType::Complex,
        NodeType::Compound,
        NodeType::Disease,
        NodeType::EC,
        NodeType::Food,
        NodeType::Gene,
        NodeType::Location,
        NodeType::MiRNA,
        NodeType::MolecularFunction,
        NodeType::Organism,
        NodeType::Pathway,
        NodeType::PharmacologicClass,
        NodeType::Protein,
        NodeType::ProteinDomain,
        NodeType::ProteinFamily,
        NodeType::PwGroup,
        NodeType::Reaction,
        NodeType::SideEffect,
        NodeType::Symptom,
    ];

    /// The database label for this category.
    pub fn as_label(&self) -> &'static str {
        match self {
            NodeType::Anatomy => "Anatomy",
            NodeType::BiologicalProcess => "BiologicalProcess",
            NodeType::Blend => "Blend",
            NodeType::CellType => "CellType",
            NodeType::CellularComponent => "CellularComponent",
            NodeType::ClinicalLab => "ClinicalLab",
            NodeType::Complex => "Complex",
            NodeType::Compound => "Compound",
            NodeType::Disease => "Disease",
            NodeType::EC => "EC",
            NodeType::Food => "Food",
            NodeType::Gene => "Gene",
            NodeType::Location => "Location",
            NodeType::MiRNA => "MiRNA",
            NodeType::MolecularFunction => "MolecularFunction",
            NodeType::Organism => "Organism",
            NodeType::Pathway => "Pathway",
            NodeType::PharmacologicClass => "PharmacologicClass",
            NodeType::Protein => "Protein",
            NodeType::ProteinDomain => "ProteinDomain",
            NodeType::ProteinFamily => "ProteinFamily",
            NodeType::PwGroup => "PwGroup",
            NodeType::Reaction => "Reaction",
            NodeType::SideEffect => "SideEffect",
            NodeType::Symptom => "Symptom",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for NodeType {
    type Err = NetvisError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .iter()
            .copied()
            .find(|t| t.as_label() == label)
            .ok_or_else(|| NetvisError::UnknownLabel(label.to_string()))
    }
}

/// The resolved identity of a node, unique across all merged paths.
///
/// Two node records that resolve to the same key are the same rendered node,
/// regardless of which traversal produced them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayKey(String);

impl DisplayKey {
    pub fn new(key: impl Into<String>) -> Self {
        DisplayKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One node as returned by the database: a category plus raw properties.
///
/// Properties are kept as strings; numeric database values are stringified
/// at the client boundary. An empty-string property counts as absent for
/// identity resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub node_type: NodeType,
    properties: BTreeMap<String, String>,
}

impl NodeRecord {
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style property insertion.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Look up a property, treating empty strings as absent.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Raw identity string used for traversal-level deduplication, before
    /// any display-key profile is applied.
    pub(crate) fn raw_signature(&self) -> String {
        let display = self
            .property("name")
            .or_else(|| self.property("identifier"))
            .or_else(|| self.property("description"))
            .unwrap_or("");
        format!("{}:{}", self.node_type, display)
    }
}
