//! Form commands: the only way the form state changes.
//!
//! UI adapters translate user actions into [`FormCommand`]s and hand them to
//! [`FormState::apply`]. Nothing here renders anything.

use crate::domain::{
    DiplomaEntry, DomainError, EntryId, EntryKind, ExperienceEntry, FormState, PastCourseEntry,
};

/// Singular (non-repeatable) form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    City,
    Description,
    CourseTitle,
    CourseDescription,
}

/// A new entry with its initial values.
#[derive(Debug, Clone, PartialEq)]
pub enum NewEntry {
    Diploma(DiplomaEntry),
    Experience(ExperienceEntry),
    PastCourse(PastCourseEntry),
}

impl NewEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            NewEntry::Diploma(_) => EntryKind::Diploma,
            NewEntry::Experience(_) => EntryKind::Experience,
            NewEntry::PastCourse(_) => EntryKind::PastCourse,
        }
    }

    /// Entry pre-populated with the defaults of its kind.
    pub fn default_for(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Diploma => NewEntry::Diploma(DiplomaEntry::default()),
            EntryKind::Experience => NewEntry::Experience(ExperienceEntry::default()),
            EntryKind::PastCourse => NewEntry::PastCourse(PastCourseEntry::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    SetField(FormField, String),
    AddEntry(NewEntry),
    RemoveEntry { kind: EntryKind, id: EntryId },
    /// Empty every field and list.
    Reset,
}

/// What a command did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    FieldSet(FormField),
    Added(EntryKind, EntryId),
    Removed(EntryKind),
    /// The entry had already been detached; nothing changed.
    NotFound(EntryKind),
    Reset,
}

impl FormState {
    pub fn apply(&mut self, command: FormCommand) -> Result<CommandEffect, DomainError> {
        match command {
            FormCommand::SetField(field, value) => {
                *self.field_mut(field) = value;
                Ok(CommandEffect::FieldSet(field))
            }
            FormCommand::AddEntry(entry) => {
                let kind = entry.kind();
                let id = match entry {
                    NewEntry::Diploma(diploma) => self.diplomas.push(diploma),
                    NewEntry::Experience(experience) => self.experiences.push(experience),
                    NewEntry::PastCourse(course) => {
                        course.validate()?;
                        self.past_courses.push(course)
                    }
                };
                Ok(CommandEffect::Added(kind, id))
            }
            FormCommand::RemoveEntry { kind, id } => {
                let removed = match kind {
                    EntryKind::Diploma => self.diplomas.remove(id).is_some(),
                    EntryKind::Experience => self.experiences.remove(id).is_some(),
                    EntryKind::PastCourse => self.past_courses.remove(id).is_some(),
                };
                Ok(if removed {
                    CommandEffect::Removed(kind)
                } else {
                    CommandEffect::NotFound(kind)
                })
            }
            FormCommand::Reset => {
                *self = FormState::default();
                Ok(CommandEffect::Reset)
            }
        }
    }

    /// Resolve a 1-based list position (as shown to users) to an entry id.
    pub fn entry_id_at(&self, kind: EntryKind, position: usize) -> Result<EntryId, DomainError> {
        let id = position.checked_sub(1).and_then(|index| match kind {
            EntryKind::Diploma => self.diplomas.id_at(index),
            EntryKind::Experience => self.experiences.id_at(index),
            EntryKind::PastCourse => self.past_courses.id_at(index),
        });
        id.ok_or(DomainError::EntryNotFound { kind, position })
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::City => &mut self.city,
            FormField::Description => &mut self.description,
            FormField::CourseTitle => &mut self.course.title,
            FormField::CourseDescription => &mut self.course.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_past_course_with_bad_rating_when_adding_then_state_unchanged() {
        let mut state = FormState::default();
        let bad = PastCourseEntry {
            number_of_stars: 0.5,
            ..PastCourseEntry::default()
        };

        let result = state.apply(FormCommand::AddEntry(NewEntry::PastCourse(bad)));

        assert_eq!(result, Err(DomainError::InvalidStarRating(0.5)));
        assert!(state.past_courses.is_empty());
    }

    #[test]
    fn given_position_zero_when_resolving_then_not_found() {
        let state = FormState::with_defaults();

        assert_eq!(
            state.entry_id_at(EntryKind::Diploma, 0),
            Err(DomainError::EntryNotFound {
                kind: EntryKind::Diploma,
                position: 0
            })
        );
        assert!(state.entry_id_at(EntryKind::Diploma, 1).is_ok());
    }

    #[test]
    fn given_course_fields_when_setting_then_course_updated() {
        let mut state = FormState::default();

        state
            .apply(FormCommand::SetField(FormField::CourseTitle, "Algèbre".into()))
            .unwrap();

        assert_eq!(state.course.title, "Algèbre");
    }
}
