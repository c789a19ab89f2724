//! Loading settings, editing and saving through the session.

use aurora_settings::application::{DictionaryStatus, SaveOutcome, SettingsSession};
use aurora_settings::domain::entities::{TreeKind, UserSettings};
use aurora_settings::domain::services::toggle;
use aurora_settings::domain::value_objects::{Experience, Salary};

use crate::common::*;

fn stored_settings() -> UserSettings {
    UserSettings {
        salary: Salary::new(120_000).unwrap(),
        experience: Experience::Between1And3,
        industry: ids(&["7.1", "7.2", "7.3"]),
        search_areas: ids(&["1620"]),
    }
}

fn load(api: &FakeApi, dictionaries: &FakeDictionaries) -> SettingsSession {
    SettingsSession::load(api, dictionaries, credentials()).unwrap()
}

#[test]
fn scenario_load_seeds_both_trees() {
    let api = FakeApi::new(stored_settings());
    let session = load(&api, &FakeDictionaries::new(industries(), areas()));

    assert_eq!(session.tree(TreeKind::Industries).collapsed(), ids(&["7"]));
    assert_eq!(session.tree(TreeKind::Areas).collapsed(), ids(&["1620"]));
    assert_eq!(session.draft().salary.value(), 120_000);
    assert!(!session.has_changes());
}

#[test]
fn scenario_save_without_changes_sends_nothing() {
    let api = FakeApi::new(stored_settings());
    let mut session = load(&api, &FakeDictionaries::new(industries(), areas()));

    assert_eq!(session.save(&api).unwrap(), SaveOutcome::Unchanged);
    assert_eq!(api.update_calls(), 0);
}

#[test]
fn scenario_edit_and_save_sends_collapsed_lists() {
    let api = FakeApi::new(stored_settings());
    let mut session = load(&api, &FakeDictionaries::new(industries(), areas()));

    let tree = session.tree(TreeKind::Areas);
    let index = tree.index().clone();
    let mut sel = tree.selection().clone();
    toggle(&index, &mut sel, node(&index, "1"), true);
    session.tree_mut(TreeKind::Areas).replace_selection(sel);
    session.set_experience(Experience::MoreThan6);

    let outcome = session.save(&api).unwrap();

    let saved = api.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].industry, ids(&["7"]));
    assert_eq!(saved[0].search_areas, ids(&["113"]));
    assert_eq!(saved[0].experience, Experience::MoreThan6);
    assert_eq!(outcome, SaveOutcome::Saved(saved[0].clone()));

    assert_eq!(session.save(&api).unwrap(), SaveOutcome::Unchanged);
    assert_eq!(api.update_calls(), 1);
}

#[test]
fn scenario_failed_save_can_be_retried() {
    let api = FakeApi::new(stored_settings());
    let mut session = load(&api, &FakeDictionaries::new(industries(), areas()));
    session.set_salary_input("150000").unwrap();

    api.set_fail_updates(true);
    assert!(session.save(&api).is_err());
    assert!(session.has_changes());
    assert_eq!(session.draft().salary.value(), 150_000);

    api.set_fail_updates(false);
    assert!(matches!(session.save(&api).unwrap(), SaveOutcome::Saved(_)));
    assert_eq!(api.update_calls(), 2);
}

#[test]
fn scenario_confirmed_retry_saves_the_same_edits() {
    let api = FakeApi::new(stored_settings());
    let mut session = load(&api, &FakeDictionaries::new(industries(), areas()));
    session.set_salary_input("90000").unwrap();
    api.set_fail_updates(true);

    let mut failures = Vec::new();
    let outcome = session
        .save_with_retry(&api, |err| {
            failures.push(err.to_string());
            api.set_fail_updates(false);
            true
        })
        .unwrap();

    assert_eq!(failures.len(), 1);
    assert!(matches!(outcome, SaveOutcome::Saved(_)));
    assert_eq!(api.saved()[0].salary.value(), 90_000);
    assert!(!session.has_changes());
}

#[test]
fn scenario_invalid_salary_leaves_draft_untouched() {
    let api = FakeApi::new(stored_settings());
    let mut session = load(&api, &FakeDictionaries::new(industries(), areas()));

    assert!(session.set_salary_input("-5").is_err());
    assert!(session.set_salary_input("100000001").is_err());
    assert!(session.set_salary_input("lots").is_err());
    assert_eq!(session.draft().salary.value(), 120_000);

    session.set_salary_input("").unwrap();
    assert!(!session.draft().salary.is_set());
}

#[test]
fn scenario_missing_dictionary_degrades_to_message() {
    let api = FakeApi::new(stored_settings());
    let mut dictionaries = FakeDictionaries::new(industries(), areas());
    dictionaries.areas = Err("404 Not Found".to_string());

    let mut session = load(&api, &dictionaries);
    let areas = session.tree(TreeKind::Areas);

    assert!(matches!(areas.status(), DictionaryStatus::Unavailable(msg) if msg.contains("404")));
    assert!(areas.index().is_empty());
    assert_eq!(areas.collapsed(), ids(&["1620"]));
    assert!(session.tree(TreeKind::Industries).is_available());

    session.set_experience(Experience::NoExperience);
    session.save(&api).unwrap();
    assert_eq!(api.saved()[0].search_areas, ids(&["1620"]));
}

#[test]
fn scenario_settings_rejection_fails_the_load() {
    let api = FakeApi::rejecting_fetch("bad sign");
    let err = SettingsSession::load(
        &api,
        &FakeDictionaries::new(industries(), areas()),
        credentials(),
    )
    .unwrap_err();

    assert!(err.to_string().contains("bad sign"));
}
