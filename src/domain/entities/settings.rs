//! Search settings as edited on the settings page

use crate::domain::value_objects::{Experience, NodeId, Salary};

/// Scalar filters edited next to the trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsDraft {
    pub salary: Salary,
    pub experience: Experience,
}

/// Settings after normalization from the API payload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserSettings {
    pub salary: Salary,
    pub experience: Experience,
    pub industry: Vec<NodeId>,
    pub search_areas: Vec<NodeId>,
}

/// Copy of everything the save request would send, used to skip no-op saves
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsSnapshot {
    pub salary: Salary,
    pub experience: Experience,
    pub industry: Vec<NodeId>,
    pub search_areas: Vec<NodeId>,
}

impl SettingsSnapshot {
    /// Id lists are sorted so comparison ignores order
    pub fn new(
        draft: SettingsDraft,
        mut industry: Vec<NodeId>,
        mut search_areas: Vec<NodeId>,
    ) -> Self {
        industry.sort();
        industry.dedup();
        search_areas.sort();
        search_areas.dedup();
        Self {
            salary: draft.salary,
            experience: draft.experience,
            industry,
            search_areas,
        }
    }
}
