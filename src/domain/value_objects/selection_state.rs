//! Display state of a tree node, derived from the selection set

/// Selection state for a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionState {
    /// Node (and its whole subtree) selected (●)
    Selected,
    /// Nothing in the subtree selected (○)
    Unselected,
    /// Some but not all children selected (◐)
    Partial,
}

/// Checkbox projection of a [`SelectionState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkbox {
    pub checked: bool,
    pub indeterminate: bool,
}

impl SelectionState {
    /// Fold child states into the parent state.
    ///
    /// Empty input is `Unselected`; callers handle childless nodes separately.
    pub fn from_children(states: impl IntoIterator<Item = SelectionState>) -> Self {
        let mut any = false;
        let mut all = true;
        let mut seen = false;
        for state in states {
            seen = true;
            match state {
                SelectionState::Selected => any = true,
                SelectionState::Partial => {
                    any = true;
                    all = false;
                }
                SelectionState::Unselected => all = false,
            }
        }

        if seen && all {
            SelectionState::Selected
        } else if any {
            SelectionState::Partial
        } else {
            SelectionState::Unselected
        }
    }

    pub fn checkbox(self) -> Checkbox {
        match self {
            SelectionState::Selected => Checkbox {
                checked: true,
                indeterminate: false,
            },
            SelectionState::Unselected => Checkbox {
                checked: false,
                indeterminate: false,
            },
            SelectionState::Partial => Checkbox {
                checked: false,
                indeterminate: true,
            },
        }
    }

    /// Selected or partially selected
    pub fn is_touched(self) -> bool {
        !matches!(self, SelectionState::Unselected)
    }
}
