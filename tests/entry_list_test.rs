//! Tests for entry list add/remove behavior as seen through the payload

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use profpredict::domain::{
    build_payload, CommandEffect, DiplomaEntry, EntryId, EntryKind, FormCommand, FormState,
    NewEntry, PayloadSchema,
};

fn diploma(n: usize) -> NewEntry {
    NewEntry::Diploma(DiplomaEntry::new(format!("Diplôme {n}"), "Licence"))
}

fn serialized_titles(state: &FormState) -> Vec<String> {
    let json = build_payload(state, PayloadSchema::Professor)
        .to_json()
        .unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    value["professor"]["diplomas"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["title"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn given_random_add_remove_sequences_when_serializing_then_length_and_order_match_model() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        // Arrange
        let mut state = FormState::default();
        let mut model: Vec<(EntryId, String)> = Vec::new();
        let mut adds = 0;
        let mut removes = 0;

        // Act
        for step in 0..rng.gen_range(0..40) {
            if model.is_empty() || rng.gen_bool(0.6) {
                let effect = state.apply(FormCommand::AddEntry(diploma(step))).unwrap();
                match effect {
                    CommandEffect::Added(EntryKind::Diploma, id) => {
                        model.push((id, format!("Diplôme {step}")))
                    }
                    other => panic!("unexpected effect {other:?}"),
                }
                adds += 1;
            } else {
                let index = rng.gen_range(0..model.len());
                let (id, _) = model.remove(index);
                let effect = state
                    .apply(FormCommand::RemoveEntry {
                        kind: EntryKind::Diploma,
                        id,
                    })
                    .unwrap();
                assert_eq!(effect, CommandEffect::Removed(EntryKind::Diploma));
                removes += 1;
            }
        }

        // Assert
        let titles = serialized_titles(&state);
        assert_eq!(titles.len(), adds - removes);
        let expected: Vec<String> = model.into_iter().map(|(_, title)| title).collect();
        assert_eq!(titles, expected);
    }
}

#[test]
fn given_detached_entry_when_removing_twice_then_second_is_not_found() {
    // Arrange
    let mut state = FormState::with_defaults();
    let id = state.entry_id_at(EntryKind::Experience, 1).unwrap();
    let remove = FormCommand::RemoveEntry {
        kind: EntryKind::Experience,
        id,
    };

    // Act
    let first = state.apply(remove.clone()).unwrap();
    let second = state.apply(remove).unwrap();

    // Assert
    assert_eq!(first, CommandEffect::Removed(EntryKind::Experience));
    assert_eq!(second, CommandEffect::NotFound(EntryKind::Experience));
    assert_eq!(state.entry_count(EntryKind::Experience), 0);
}

#[test]
fn given_id_from_other_list_when_removing_then_only_that_list_is_searched() {
    // Arrange: ids are per list, so diploma #0 and experience #0 share a value
    let mut state = FormState::with_defaults();
    let diploma_id = state.entry_id_at(EntryKind::Diploma, 1).unwrap();

    // Act
    state
        .apply(FormCommand::RemoveEntry {
            kind: EntryKind::Diploma,
            id: diploma_id,
        })
        .unwrap();

    // Assert
    assert_eq!(state.entry_count(EntryKind::Diploma), 0);
    assert_eq!(state.entry_count(EntryKind::Experience), 1);
    assert_eq!(state.entry_count(EntryKind::PastCourse), 1);
}

#[test]
fn given_all_entries_removed_when_serializing_then_empty_arrays() {
    // Arrange
    let mut state = FormState::with_defaults();
    for kind in [EntryKind::Diploma, EntryKind::Experience, EntryKind::PastCourse] {
        let id = state.entry_id_at(kind, 1).unwrap();
        state.apply(FormCommand::RemoveEntry { kind, id }).unwrap();
    }

    // Act
    let json = build_payload(&state, PayloadSchema::TeacherProfile)
        .to_json()
        .unwrap();

    // Assert
    assert!(json.contains(r#""diplomas":[],"experiences":[],"pastCourses":[]"#));
}
