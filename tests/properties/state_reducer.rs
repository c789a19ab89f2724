//! Property tests for parent state, collapse and toggle.

use proptest::prelude::*;

use aurora_settings::domain::entities::{AreaNode, Category, SelectionSet, TreeIndex};
use aurora_settings::domain::services::{
    collapse, compute_parent_state, toggle, toggle_parent, StateMap,
};
use aurora_settings::domain::value_objects::{NodeId, SelectionState};

/// Category sizes; category `i` gets ids `c{i}` and `c{i}.{j}`
fn arb_category_sizes() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..5, 1..6)
}

fn build_categories(sizes: &[usize]) -> Vec<Category> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, n)| {
            (0..*n).fold(
                Category::new(format!("c{}", i), format!("Sector {}", i)),
                |cat, j| cat.with_industry(format!("c{}.{}", i, j), format!("Item {}.{}", i, j)),
            )
        })
        .collect()
}

/// Three-level area shape: roots -> regions -> cities
fn arb_area_shape() -> impl Strategy<Value = Vec<Vec<usize>>> {
    proptest::collection::vec(proptest::collection::vec(0usize..3, 0..3), 1..4)
}

fn build_areas(shape: &[Vec<usize>]) -> Vec<AreaNode> {
    shape
        .iter()
        .enumerate()
        .map(|(i, regions)| {
            regions.iter().enumerate().fold(
                AreaNode::new(format!("a{}", i), format!("Country {}", i)),
                |country, (j, cities)| {
                    let region = (0..*cities).fold(
                        AreaNode::new(format!("a{}.{}", i, j), format!("Region {}.{}", i, j)),
                        |region, k| {
                            region.with_area(AreaNode::new(
                                format!("a{}.{}.{}", i, j, k),
                                format!("City {}.{}.{}", i, j, k),
                            ))
                        },
                    );
                    country.with_area(region)
                },
            )
        })
        .collect()
}

fn all_ids(index: &TreeIndex) -> Vec<NodeId> {
    index.iter().map(|idx| index.node(idx).id.clone()).collect()
}

/// Pick ids by mask, cycling the mask if it is shorter
fn pick(ids: &[NodeId], mask: &[bool]) -> SelectionSet {
    SelectionSet::from_ids(
        ids.iter()
            .zip(mask.iter().cycle())
            .filter(|(_, keep)| **keep)
            .map(|(id, _)| id.clone()),
    )
}

/// Treat every id in `list` as "whole subtree selected"
fn expand(index: &TreeIndex, list: &[NodeId]) -> SelectionSet {
    let mut out = SelectionSet::new();
    for id in list {
        match index.lookup(id) {
            Some(idx) => {
                for d in std::iter::once(idx).chain(index.descendants(idx)) {
                    if index.node(d).is_leaf() {
                        out.insert(index.node(d).id.clone());
                    }
                }
            }
            None => {
                out.insert(id.clone());
            }
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a category with k of N children selected is Unselected,
    /// Partial or Selected exactly by k = 0, 0 < k < N, k = N.
    #[test]
    fn property_parent_state_follows_child_count(
        sizes in arb_category_sizes(),
        mask in proptest::collection::vec(any::<bool>(), 1..32),
    ) {
        let index = TreeIndex::from_categories(&build_categories(&sizes));
        let leaves: Vec<NodeId> = index
            .iter()
            .filter(|idx| index.node(*idx).parent.is_some())
            .map(|idx| index.node(idx).id.clone())
            .collect();
        let selection = pick(&leaves, &mask);
        let states = StateMap::compute(&index, &selection);

        for root in index.roots() {
            let children = index.children(*root);
            if children.is_empty() {
                continue;
            }
            let k = children
                .iter()
                .filter(|c| selection.contains(&index.node(**c).id))
                .count();
            let expected = if k == 0 {
                SelectionState::Unselected
            } else if k == children.len() {
                SelectionState::Selected
            } else {
                SelectionState::Partial
            };
            prop_assert_eq!(compute_parent_state(&index, &selection, *root), expected);
            prop_assert_eq!(states.get(*root), expected);
        }
    }

    /// PROPERTY: collapsing the selection derived from a collapsed list is stable.
    #[test]
    fn property_collapse_is_idempotent(
        sizes in arb_category_sizes(),
        mask in proptest::collection::vec(any::<bool>(), 1..32),
    ) {
        let index = TreeIndex::from_categories(&build_categories(&sizes));
        let selection = pick(&all_ids(&index), &mask);

        let once = collapse(&index, &selection);
        let twice = collapse(&index, &SelectionSet::from_ids(once.clone()));
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: expanding a collapsed list to leaves and collapsing again
    /// gives the same list, also for nested areas.
    #[test]
    fn property_collapse_round_trips_through_leaves(
        shape in arb_area_shape(),
        mask in proptest::collection::vec(any::<bool>(), 1..40),
    ) {
        let index = TreeIndex::from_areas(&build_areas(&shape));
        let selection = pick(&all_ids(&index), &mask);

        let list = collapse(&index, &selection);
        let again = collapse(&index, &expand(&index, &list));
        prop_assert_eq!(list, again);
    }

    /// PROPERTY: collapse never emits a node together with one of its descendants.
    #[test]
    fn property_collapse_is_minimal(
        shape in arb_area_shape(),
        mask in proptest::collection::vec(any::<bool>(), 1..40),
    ) {
        let index = TreeIndex::from_areas(&build_areas(&shape));
        let selection = pick(&all_ids(&index), &mask);

        let emitted: Vec<_> = collapse(&index, &selection)
            .iter()
            .filter_map(|id| index.lookup(id))
            .collect();
        for a in &emitted {
            for b in &emitted {
                prop_assert!(!index.is_descendant_of(*b, *a));
            }
        }
    }

    /// PROPERTY: checking then unchecking an untouched category restores the
    /// selection exactly; for a touched one it empties that subtree only.
    #[test]
    fn property_toggle_parent_on_off(
        sizes in arb_category_sizes(),
        mask in proptest::collection::vec(any::<bool>(), 1..32),
        pick_root in any::<prop::sample::Index>(),
    ) {
        let index = TreeIndex::from_categories(&build_categories(&sizes));
        let before = pick(&all_ids(&index), &mask);
        let root = index.roots()[pick_root.index(index.roots().len())];
        let was_untouched = compute_parent_state(&index, &before, root) == SelectionState::Unselected;

        let mut after = before.clone();
        prop_assert_eq!(toggle_parent(&index, &mut after, root, true), SelectionState::Selected);
        prop_assert_eq!(toggle_parent(&index, &mut after, root, false), SelectionState::Unselected);

        let subtree: Vec<NodeId> = std::iter::once(root)
            .chain(index.descendants(root))
            .map(|idx| index.node(idx).id.clone())
            .collect();
        for id in all_ids(&index) {
            if subtree.contains(&id) {
                prop_assert!(!after.contains(&id));
            } else {
                prop_assert_eq!(after.contains(&id), before.contains(&id));
            }
        }
        if was_untouched {
            prop_assert_eq!(after, before);
        }
    }

    /// PROPERTY: checking any node, at any depth, leaves it Selected and
    /// keeps the coverage of every leaf outside its subtree.
    #[test]
    fn property_check_keeps_outside_coverage(
        shape in arb_area_shape(),
        mask in proptest::collection::vec(any::<bool>(), 1..48),
        pick_node in any::<prop::sample::Index>(),
    ) {
        let index = TreeIndex::from_areas(&build_areas(&shape));
        let nodes: Vec<_> = index.iter().collect();
        prop_assume!(!nodes.is_empty());
        let before = pick(&all_ids(&index), &mask);
        let target = nodes[pick_node.index(nodes.len())];
        let states_before = StateMap::compute(&index, &before);

        let mut after = before.clone();
        prop_assert_eq!(toggle(&index, &mut after, target, true), SelectionState::Selected);
        let states_after = StateMap::compute(&index, &after);

        let inside: Vec<_> = std::iter::once(target).chain(index.descendants(target)).collect();
        for leaf in nodes.iter().copied().filter(|n| index.node(*n).is_leaf()) {
            if inside.contains(&leaf) {
                prop_assert_eq!(states_after.get(leaf), SelectionState::Selected);
            } else {
                prop_assert_eq!(states_after.get(leaf), states_before.get(leaf));
            }
        }
    }
}
