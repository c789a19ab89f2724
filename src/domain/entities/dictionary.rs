//! Dictionary records as served by the static dictionary files
//!
//! Industries are exactly two levels deep; areas nest arbitrarily.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::NodeId;

/// Top-level industry sector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub industries: Vec<Industry>,
}

/// Sub-industry inside a [`Category`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub id: NodeId,
    pub name: String,
}

/// Geographic region, nestable to any depth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaNode {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub areas: Vec<AreaNode>,
}

impl Category {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            industries: Vec::new(),
        }
    }

    pub fn with_industry(mut self, id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        self.industries.push(Industry {
            id: id.into(),
            name: name.into(),
        });
        self
    }
}

impl AreaNode {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            areas: Vec::new(),
        }
    }

    pub fn with_area(mut self, area: AreaNode) -> Self {
        self.areas.push(area);
        self
    }
}
