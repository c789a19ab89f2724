//! Test fixtures - reusable dictionaries.

use aurora_settings::domain::entities::{AreaNode, Category, NodeIdx, SelectionSet, TreeIndex};
use aurora_settings::domain::value_objects::NodeId;

/// The single-category dictionary used throughout the selection scenarios
pub fn it_dictionary() -> Vec<Category> {
    vec![Category::new("7", "IT")
        .with_industry("7.1", "Dev")
        .with_industry("7.2", "QA")]
}

/// A few sectors, including one without sub-industries
pub fn industries() -> Vec<Category> {
    vec![
        Category::new("1", "Agriculture")
            .with_industry("1.1", "Farming")
            .with_industry("1.2", "Fishing"),
        Category::new("7", "IT")
            .with_industry("7.1", "Dev")
            .with_industry("7.2", "QA")
            .with_industry("7.3", "Support"),
        Category::new("9", "Retail").with_industry("9.1", "Shops"),
        Category::new("42", "Other"),
    ]
}

pub fn areas() -> Vec<AreaNode> {
    vec![
        AreaNode::new("113", "Russia")
            .with_area(AreaNode::new("1", "Moscow"))
            .with_area(
                AreaNode::new("1620", "Mari El")
                    .with_area(AreaNode::new("1621", "Yoshkar-Ola"))
                    .with_area(AreaNode::new("1622", "Volzhsk")),
            ),
        AreaNode::new("40", "Kazakhstan").with_area(AreaNode::new("160", "Almaty")),
    ]
}

/// `count` root regions named "Region 000", "Region 001", ...
pub fn many_regions(count: usize) -> Vec<AreaNode> {
    (0..count)
        .map(|i| AreaNode::new(format!("r{}", i), format!("Region {:03}", i)))
        .collect()
}

pub fn ids(raw: &[&str]) -> Vec<NodeId> {
    raw.iter().map(|s| NodeId::new(*s)).collect()
}

pub fn selection(raw: &[&str]) -> SelectionSet {
    SelectionSet::from_ids(ids(raw))
}

pub fn node(index: &TreeIndex, id: &str) -> NodeIdx {
    index
        .lookup(&NodeId::new(id))
        .unwrap_or_else(|| panic!("fixture has no node '{}'", id))
}
