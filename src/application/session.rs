//! Settings session - the page-level state owner
//!
//! Loads the user's settings and both dictionaries concurrently, keeps one
//! [`TreeSession`] per tree plus the scalar draft, and saves through the
//! [`SettingsApi`] port behind an idempotence guard.

use std::sync::mpsc::channel;
use std::thread;

use crate::domain::entities::{
    SelectionSet, SettingsDraft, SettingsSnapshot, TreeIndex, TreeKind, UserSettings,
};
use crate::domain::ports::{Credentials, DictionarySource, SettingsApi, SettingsUpdate};
use crate::domain::services::{collapse, StateMap};
use crate::domain::value_objects::{Experience, NodeId, Salary};
use crate::error::{SettingsError, SettingsResult};

/// Whether a tree's dictionary made it into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryStatus {
    Loaded,
    /// Load failed; the tree stays empty and shows this message
    Unavailable(String),
}

/// One tree and its selection
#[derive(Debug, Clone)]
pub struct TreeSession {
    index: TreeIndex,
    selection: SelectionSet,
    status: DictionaryStatus,
}

impl TreeSession {
    pub fn new(index: TreeIndex, selection: SelectionSet) -> Self {
        Self {
            index,
            selection,
            status: DictionaryStatus::Loaded,
        }
    }

    /// Empty tree for a dictionary that failed to load. The selection is
    /// kept so a save does not wipe ids the user already had.
    pub fn unavailable(kind: TreeKind, selection: SelectionSet, message: impl Into<String>) -> Self {
        Self {
            index: TreeIndex::empty(kind),
            selection,
            status: DictionaryStatus::Unavailable(message.into()),
        }
    }

    fn from_load(kind: TreeKind, loaded: SettingsResult<TreeIndex>) -> Self {
        match loaded {
            Ok(index) => Self::new(index, SelectionSet::new()),
            Err(err) => {
                tracing::warn!(tree = %kind, error = %err, "dictionary unavailable, tree left empty");
                Self::unavailable(kind, SelectionSet::new(), err.to_string())
            }
        }
    }

    pub fn kind(&self) -> TreeKind {
        self.index.kind()
    }

    pub fn index(&self) -> &TreeIndex {
        &self.index
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn status(&self) -> &DictionaryStatus {
        &self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == DictionaryStatus::Loaded
    }

    /// Swap in a selection edited elsewhere (the interactive menu works on a copy)
    pub fn replace_selection(&mut self, selection: SelectionSet) {
        self.selection = selection;
    }

    /// Wire-format id list for this tree
    pub fn collapsed(&self) -> Vec<NodeId> {
        collapse(&self.index, &self.selection)
    }

    /// Selected leaves and total leaves
    pub fn coverage(&self) -> (usize, usize) {
        let states = StateMap::compute(&self.index, &self.selection);
        let total = self
            .index
            .iter()
            .filter(|idx| self.index.node(*idx).is_leaf())
            .count();
        (states.selected_leaves(&self.index), total)
    }
}

/// `Loading` until both the dictionaries and the settings have resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
}

/// Two-flag rendezvous, independent of completion order
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadGate {
    dictionary_loaded: bool,
    settings_loaded: bool,
}

impl LoadGate {
    pub fn dictionary_loaded(&mut self) -> LoadPhase {
        self.dictionary_loaded = true;
        self.phase()
    }

    pub fn settings_loaded(&mut self) -> LoadPhase {
        self.settings_loaded = true;
        self.phase()
    }

    pub fn phase(&self) -> LoadPhase {
        if self.dictionary_loaded && self.settings_loaded {
            LoadPhase::Ready
        } else {
            LoadPhase::Loading
        }
    }
}

enum LoadEvent {
    Settings(SettingsResult<UserSettings>),
    Dictionary(TreeKind, SettingsResult<TreeIndex>),
}

/// Result of [`SettingsSession::save`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing differs from the last loaded or saved state; no request sent
    Unchanged,
    Saved(SettingsUpdate),
}

/// Everything the settings page holds between load and save
#[derive(Debug, Clone)]
pub struct SettingsSession {
    credentials: Credentials,
    industries: TreeSession,
    areas: TreeSession,
    draft: SettingsDraft,
    snapshot: SettingsSnapshot,
}

impl SettingsSession {
    /// Fetch settings and both dictionaries concurrently.
    ///
    /// A settings failure is returned as an error. A dictionary failure only
    /// leaves that tree empty with [`DictionaryStatus::Unavailable`].
    pub fn load<A, D>(api: &A, dictionaries: &D, credentials: Credentials) -> SettingsResult<Self>
    where
        A: SettingsApi + ?Sized,
        D: DictionarySource + ?Sized,
    {
        let (tx, rx) = channel();

        let (settings, industries, areas) = thread::scope(|scope| {
            let settings_tx = tx.clone();
            let creds = &credentials;
            scope.spawn(move || {
                let _ = settings_tx.send(LoadEvent::Settings(api.fetch(creds)));
            });
            for kind in [TreeKind::Industries, TreeKind::Areas] {
                let dictionary_tx = tx.clone();
                scope.spawn(move || {
                    let _ = dictionary_tx.send(LoadEvent::Dictionary(kind, dictionaries.load_index(kind)));
                });
            }
            drop(tx);

            let mut gate = LoadGate::default();
            let mut settings = None;
            let mut industries = None;
            let mut areas = None;

            for event in rx {
                let phase = match event {
                    LoadEvent::Settings(result) => {
                        settings = Some(result);
                        gate.settings_loaded()
                    }
                    LoadEvent::Dictionary(kind, result) => {
                        match kind {
                            TreeKind::Industries => industries = Some(result),
                            TreeKind::Areas => areas = Some(result),
                        }
                        if industries.is_some() && areas.is_some() {
                            gate.dictionary_loaded()
                        } else {
                            gate.phase()
                        }
                    }
                };
                if phase == LoadPhase::Ready {
                    break;
                }
            }
            (settings, industries, areas)
        });

        let settings = settings.ok_or(SettingsError::LoadIncomplete { what: "settings" })??;
        let industries = industries.ok_or(SettingsError::LoadIncomplete { what: "industries" })?;
        let areas = areas.ok_or(SettingsError::LoadIncomplete { what: "areas" })?;

        tracing::debug!(
            industry_ids = settings.industry.len(),
            area_ids = settings.search_areas.len(),
            "settings loaded"
        );

        Ok(Self::from_parts(
            credentials,
            settings,
            TreeSession::from_load(TreeKind::Industries, industries),
            TreeSession::from_load(TreeKind::Areas, areas),
        ))
    }

    /// Assemble a session from already loaded parts and seed both selections
    /// from `settings`
    pub fn from_parts(
        credentials: Credentials,
        settings: UserSettings,
        mut industries: TreeSession,
        mut areas: TreeSession,
    ) -> Self {
        industries.replace_selection(SelectionSet::from_ids(settings.industry));
        areas.replace_selection(SelectionSet::from_ids(settings.search_areas));
        let draft = SettingsDraft {
            salary: settings.salary,
            experience: settings.experience,
        };

        let mut session = Self {
            credentials,
            industries,
            areas,
            draft,
            snapshot: SettingsSnapshot::default(),
        };
        session.snapshot = session.current_snapshot();
        session
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn draft(&self) -> SettingsDraft {
        self.draft
    }

    pub fn tree(&self, kind: TreeKind) -> &TreeSession {
        match kind {
            TreeKind::Industries => &self.industries,
            TreeKind::Areas => &self.areas,
        }
    }

    pub fn tree_mut(&mut self, kind: TreeKind) -> &mut TreeSession {
        match kind {
            TreeKind::Industries => &mut self.industries,
            TreeKind::Areas => &mut self.areas,
        }
    }

    /// Validate and apply salary input. The draft is untouched on error.
    pub fn set_salary_input(&mut self, input: &str) -> SettingsResult<Salary> {
        let salary = Salary::parse(input)?;
        self.draft.salary = salary;
        Ok(salary)
    }

    pub fn set_experience(&mut self, experience: Experience) {
        self.draft.experience = experience;
    }

    /// The payload a save would send right now
    pub fn pending_update(&self) -> SettingsUpdate {
        SettingsUpdate {
            salary: self.draft.salary,
            experience: self.draft.experience,
            industry: self.industries.collapsed(),
            search_areas: self.areas.collapsed(),
        }
    }

    fn current_snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot::new(
            self.draft,
            self.industries.collapsed(),
            self.areas.collapsed(),
        )
    }

    /// True when a save would send a request
    pub fn has_changes(&self) -> bool {
        self.current_snapshot() != self.snapshot
    }

    /// Persist the current state.
    ///
    /// Returns [`SaveOutcome::Unchanged`] without calling the API when nothing
    /// differs from the snapshot. On error the snapshot is kept, so the same
    /// save can be retried.
    pub fn save<A>(&mut self, api: &A) -> SettingsResult<SaveOutcome>
    where
        A: SettingsApi + ?Sized,
    {
        let snapshot = self.current_snapshot();
        if snapshot == self.snapshot {
            tracing::info!("no changes, skipping save");
            return Ok(SaveOutcome::Unchanged);
        }

        let update = self.pending_update();
        api.update(&self.credentials, &update)?;
        self.snapshot = snapshot;
        tracing::info!(
            industries = update.industry.len(),
            areas = update.search_areas.len(),
            "settings saved"
        );
        Ok(SaveOutcome::Saved(update))
    }

    /// Save, asking `retry` after every failure whether to try again.
    ///
    /// The session keeps all edits between attempts. The last error is
    /// returned once `retry` declines.
    pub fn save_with_retry<A, F>(&mut self, api: &A, mut retry: F) -> SettingsResult<SaveOutcome>
    where
        A: SettingsApi + ?Sized,
        F: FnMut(&SettingsError) -> bool,
    {
        loop {
            match self.save(api) {
                Ok(outcome) => return Ok(outcome),
                Err(err) => {
                    tracing::warn!(error = %err, "save failed");
                    if !retry(&err) {
                        return Err(err);
                    }
                }
            }
        }
    }
}
