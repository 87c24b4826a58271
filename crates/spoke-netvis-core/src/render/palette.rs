//! The node-type color palette.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::NodeType;

/// Immutable map from node category to render color.
///
/// Injected into render preparation rather than read from ambient state, so
/// tests can substitute reduced or alternate palettes. The production
/// palette covers every category; a graph type missing from the injected
/// palette is a reported error, never a silent default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: BTreeMap<NodeType, String>,
}

impl Palette {
    /// An empty palette; useful as a base for test substitutes.
    pub fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// The fixed SPOKE palette with one color per category.
    pub fn spoke() -> Self {
        let colors = [
            (NodeType::Anatomy, "#b3de69"),
            (NodeType::BiologicalProcess, "#fdb462"),
            (NodeType::Blend, "#fcd9fc"),
            (NodeType::CellType, "#6b853f"),
            (NodeType::CellularComponent, "#ffffb3"),
            (NodeType::ClinicalLab, "#e2c3b8"),
            (NodeType::Complex, "#4575b4"),
            (NodeType::Compound, "#bc80bd"),
            (NodeType::Disease, "#fb8072"),
            (NodeType::EC, "#f79767"),
            (NodeType::Food, "#c7b78f"),
            (NodeType::Gene, "#80b1d3"),
            (NodeType::Location, "#e17910"),
            (NodeType::MiRNA, "#f3ecc5"),
            (NodeType::MolecularFunction, "#ffed6f"),
            (NodeType::Organism, "#d9c8ae"),
            (NodeType::Pathway, "#57c7e3"),
            (NodeType::PharmacologicClass, "#bebada"),
            (NodeType::Protein, "#8dd3c7"),
            (NodeType::ProteinDomain, "#00ffff"),
            (NodeType::ProteinFamily, "#006666"),
            (NodeType::PwGroup, "#5D3FD3"),
            (NodeType::Reaction, "#f16667"),
            (NodeType::SideEffect, "#ccebc5"),
            (NodeType::Symptom, "#fccde5"),
        ];
        Self {
            colors: colors
                .into_iter()
                .map(|(t, c)| (t, c.to_string()))
                .collect(),
        }
    }

    /// Builder-style color assignment, for test palettes.
    #[must_use]
    pub fn with_color(mut self, node_type: NodeType, color: impl Into<String>) -> Self {
        self.colors.insert(node_type, color.into());
        self
    }

    pub fn color(&self, node_type: NodeType) -> Option<&str> {
        self.colors.get(&node_type).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::spoke()
    }
}
