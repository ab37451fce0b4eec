//! Tests for FormService on a real filesystem

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use profpredict::application::services::FormService;
use profpredict::application::ApplicationError;
use profpredict::domain::{
    CommandEffect, DiplomaEntry, DomainError, EntryKind, FormCommand, FormField, NewEntry,
    PastCourseEntry,
};
use profpredict::infrastructure::traits::RealFileSystem;
use profpredict::util::testing::init_test_setup;

fn service() -> FormService {
    FormService::new(Arc::new(RealFileSystem))
}

#[test]
fn given_new_path_when_init_then_form_has_one_default_entry_each() {
    // Arrange
    init_test_setup();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("forms/prof.toml");

    // Act
    service().init(&path, false).unwrap();

    // Assert
    let state = service().load(&path).unwrap();
    assert_eq!(state.diplomas.len(), 1);
    assert_eq!(state.experiences.len(), 1);
    assert_eq!(state.past_courses.len(), 1);
}

#[test]
fn given_existing_form_when_init_without_force_then_form_exists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prof.toml");
    service().init(&path, false).unwrap();

    let result = service().init(&path, false);

    assert!(matches!(result, Err(ApplicationError::FormExists(_))));
    assert!(service().init(&path, true).is_ok());
}

#[test]
fn given_missing_form_when_loading_then_form_not_found() {
    let dir = TempDir::new().unwrap();

    let result = service().load(&dir.path().join("absent.toml"));

    assert!(matches!(result, Err(ApplicationError::FormNotFound(_))));
}

#[test]
fn given_edits_when_reloading_then_changes_persist_in_order() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prof.toml");
    let service = service();
    service.init(&path, false).unwrap();

    // Act
    service
        .apply_all(
            &path,
            vec![
                FormCommand::SetField(FormField::City, "Lyon".into()),
                FormCommand::SetField(FormField::CourseTitle, "Algèbre".into()),
            ],
        )
        .unwrap();
    service
        .apply(
            &path,
            FormCommand::AddEntry(NewEntry::Diploma(DiplomaEntry::new(
                "Doctorat en Physique",
                "Doctorat",
            ))),
        )
        .unwrap();
    let effect = service.remove_at(&path, EntryKind::Diploma, 1).unwrap();

    // Assert
    assert_eq!(effect, CommandEffect::Removed(EntryKind::Diploma));
    let state = service.load(&path).unwrap();
    assert_eq!(state.city, "Lyon");
    assert_eq!(state.course.title, "Algèbre");
    let titles: Vec<&str> = state.diplomas.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Doctorat en Physique"]);
}

#[test]
fn given_position_out_of_range_when_removing_then_entry_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prof.toml");
    service().init(&path, false).unwrap();

    let result = service().remove_at(&path, EntryKind::PastCourse, 3);

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::EntryNotFound {
            kind: EntryKind::PastCourse,
            position: 3
        }))
    ));
}

#[test]
fn given_invalid_rating_added_when_applying_then_file_unchanged() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prof.toml");
    service().init(&path, false).unwrap();
    let before = fs::read_to_string(&path).unwrap();
    let course = PastCourseEntry {
        number_of_stars: 9.0,
        ..PastCourseEntry::default()
    };

    // Act
    let result = service().apply(&path, FormCommand::AddEntry(NewEntry::PastCourse(course)));

    // Assert
    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::InvalidStarRating(_)))
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn given_hand_edited_form_with_bad_rating_when_loading_then_invalid_form() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prof.toml");
    fs::write(
        &path,
        r#"
city = "Paris"

[[past_courses]]
title = "Java"
number_of_stars = 0.5
"#,
    )
    .unwrap();

    let result = service().load(&path);

    assert!(matches!(result, Err(ApplicationError::InvalidForm { .. })));
}
