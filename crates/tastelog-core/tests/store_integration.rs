//! Store integration tests: counters, note lifecycle, persistence
//! round-trips, and the countdown scenario driven end to end.

use proptest::prelude::*;

use tastelog_core::{
    AppStore, CountdownTimer, CulinaryNote, Event, MemoryGateway, NoteCategory, TimerState,
    UserStats,
};

fn fresh_store() -> AppStore {
    AppStore::open(Box::new(MemoryGateway::default()))
}

fn note(title: &str, content: &str) -> CulinaryNote {
    CulinaryNote::new(title, content, NoteCategory::Experiment).unwrap()
}

#[test]
fn each_counter_equals_number_of_calls() {
    let mut store = fresh_store();
    for _ in 0..7 {
        store.increment_recipes_viewed();
    }
    for _ in 0..2 {
        store.increment_timers_used();
    }
    store.add_note(note("one", "body")).unwrap();
    store.add_note(note("two", "body")).unwrap();
    store.add_note(note("three", "body")).unwrap();

    let stats = store.stats();
    assert_eq!(stats.recipes_viewed, 7);
    assert_eq!(stats.timers_used, 2);
    assert_eq!(stats.notes_created, 3);
    assert_eq!(stats.active_day_count(), 1);
}

#[test]
fn new_note_lands_at_index_zero() {
    let mut store = fresh_store();
    let first = note("first", "body");
    let second = note("second", "body");
    let second_id = second.id;

    store.add_note(first).unwrap();
    store.add_note(second).unwrap();

    assert_eq!(store.notes()[0].id, second_id);
}

#[test]
fn editing_a_note_advances_modified_but_not_created() {
    let mut store = fresh_store();
    let original = note("Stock", "Simmer bones for 4 hours");
    let id = original.id;
    let created = original.date_created;
    store.add_note(original).unwrap();
    let position = store.notes().iter().position(|n| n.id == id).unwrap();

    let mut edited = store.note(id).unwrap().clone();
    edited.content = "Simmer bones for 6 hours, skim often".into();
    store.update_note(edited).unwrap();

    let stored = store.note(id).unwrap();
    assert_eq!(stored.content, "Simmer bones for 6 hours, skim often");
    assert_eq!(stored.date_created, created);
    assert!(stored.date_modified >= created);
    assert_eq!(
        store.notes().iter().position(|n| n.id == id).unwrap(),
        position
    );
}

#[test]
fn whitespace_only_title_is_rejected_and_nothing_changes() {
    let mut store = fresh_store();
    let mut bad = note("placeholder", "body");
    bad.title = " \t\n ".into();

    assert!(store.add_note(bad).is_err());
    assert_eq!(store.stats().notes_created, 0);
    assert_eq!(store.stats().active_day_count(), 0);
}

#[test]
fn stats_and_notes_survive_a_reload() {
    let gateway = MemoryGateway::default();
    let mut store = AppStore::open(Box::new(gateway.clone()));
    for _ in 0..6 {
        store.increment_recipes_viewed();
    }
    store.increment_timers_used();
    store.add_note(note("kept", "across restarts")).unwrap();
    let stats = store.stats().clone();
    let titles: Vec<String> = store.notes().iter().map(|n| n.title.clone()).collect();

    let reloaded = AppStore::open(Box::new(gateway));
    assert_eq!(*reloaded.stats(), stats);
    assert_eq!(
        reloaded
            .notes()
            .iter()
            .map(|n| n.title.clone())
            .collect::<Vec<_>>(),
        titles
    );
}

#[test]
fn reset_wipes_progress_but_not_notes() {
    let gateway = MemoryGateway::default();
    let mut store = AppStore::open(Box::new(gateway.clone()));
    store.add_note(note("survivor", "still here")).unwrap();
    for _ in 0..5 {
        store.increment_recipes_viewed();
    }
    store.complete_onboarding();
    let note_count = store.notes().len();

    store.reset_progress();

    assert_eq!(*store.stats(), UserStats::default());
    assert!(!store.onboarding_complete());
    assert!(store.achievements().iter().all(|a| !a.is_unlocked));
    assert_eq!(store.notes().len(), note_count);

    // The wiped state is what a fresh process sees.
    let reloaded = AppStore::open(Box::new(gateway));
    assert_eq!(*reloaded.stats(), UserStats::default());
    assert!(!reloaded.onboarding_complete());
    assert_eq!(reloaded.notes().len(), note_count);
}

#[test]
fn countdown_scenario_with_pause_and_resume() {
    let mut store = fresh_store();
    let preset = store
        .presets()
        .iter()
        .find(|p| p.name == "Tea Steeping")
        .cloned()
        .unwrap();

    let mut timer = CountdownTimer::new(10, &preset.name);
    timer.start();
    store.increment_timers_used();

    for _ in 0..4 {
        timer.tick();
    }
    assert_eq!(timer.remaining_secs(), 6);

    timer.pause();
    assert_eq!(timer.state(), TimerState::Paused);
    timer.start();

    let mut completions = 0;
    for _ in 0..6 {
        if let Some(Event::TimerFinished { .. }) = timer.tick() {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
    assert_eq!(timer.remaining_secs(), 0);
    assert_eq!(store.stats().timers_used, 1);
}

proptest! {
    #[test]
    fn counters_track_arbitrary_operation_sequences(ops in proptest::collection::vec(0u8..3, 0..40)) {
        let mut store = fresh_store();
        let (mut views, mut notes, mut timers) = (0u64, 0u64, 0u64);
        for op in ops {
            match op {
                0 => {
                    store.increment_recipes_viewed();
                    views += 1;
                }
                1 => {
                    store.add_note(note("prop", "generated")).unwrap();
                    notes += 1;
                }
                _ => {
                    store.increment_timers_used();
                    timers += 1;
                }
            }
        }
        prop_assert_eq!(store.stats().recipes_viewed, views);
        prop_assert_eq!(store.stats().notes_created, notes);
        prop_assert_eq!(store.stats().timers_used, timers);
        if views + notes + timers == 0 {
            prop_assert_eq!(store.stats().active_day_count(), 0);
        } else {
            // A run can straddle one UTC midnight at most.
            let days = store.stats().active_day_count();
            prop_assert!((1..=2).contains(&days));
        }
    }
}
