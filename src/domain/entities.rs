//! Domain entities: form state and its repeatable entries

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{COMPANIES, DIPLOMA_LEVELS, DIPLOMA_TITLES, EXPERIENCE_TITLES};
use crate::domain::{DomainError, EntryList};

/// Lowest star rating accepted by the rating field.
pub const MIN_STARS: f64 = 1.0;
/// Highest star rating accepted by the rating field.
pub const MAX_STARS: f64 = 5.0;

/// Star rating a fresh past-course entry starts with.
const DEFAULT_STARS: f64 = 4.0;

/// Kind of repeatable entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Diploma,
    Experience,
    PastCourse,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryKind::Diploma => "diploma",
            EntryKind::Experience => "experience",
            EntryKind::PastCourse => "past-course",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiplomaEntry {
    pub title: String,
    pub level: String,
}

impl DiplomaEntry {
    pub fn new(title: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            level: level.into(),
        }
    }
}

/// A fresh diploma shows the first option of each select.
impl Default for DiplomaEntry {
    fn default() -> Self {
        Self::new(DIPLOMA_TITLES[0], DIPLOMA_LEVELS[0])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl ExperienceEntry {
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            description: None,
            duration: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}

impl Default for ExperienceEntry {
    fn default() -> Self {
        Self::new(EXPERIENCE_TITLES[0], COMPANIES[0])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastCourseEntry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub number_of_stars: f64,
}

impl PastCourseEntry {
    /// Create a past course, rejecting ratings outside `[1, 5]`.
    pub fn new(title: impl Into<String>, number_of_stars: f64) -> Result<Self, DomainError> {
        let entry = Self {
            title: title.into(),
            description: None,
            number_of_stars,
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if (MIN_STARS..=MAX_STARS).contains(&self.number_of_stars) {
            Ok(())
        } else {
            Err(DomainError::InvalidStarRating(self.number_of_stars))
        }
    }
}

impl Default for PastCourseEntry {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            number_of_stars: DEFAULT_STARS,
        }
    }
}

/// The course whose score is to be predicted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseToPredict {
    pub title: String,
    pub description: String,
}

/// Everything the form holds: identity, profile, entry lists and target course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub description: String,
    pub diplomas: EntryList<DiplomaEntry>,
    pub experiences: EntryList<ExperienceEntry>,
    pub past_courses: EntryList<PastCourseEntry>,
    pub course: CourseToPredict,
}

impl FormState {
    /// Form as shown on first load: one default entry in each list.
    pub fn with_defaults() -> Self {
        let mut state = Self::default();
        state.diplomas.push(DiplomaEntry::default());
        state.experiences.push(ExperienceEntry::default());
        state.past_courses.push(PastCourseEntry::default());
        state
    }

    pub fn entry_count(&self, kind: EntryKind) -> usize {
        match kind {
            EntryKind::Diploma => self.diplomas.len(),
            EntryKind::Experience => self.experiences.len(),
            EntryKind::PastCourse => self.past_courses.len(),
        }
    }

    pub fn clear_entries(&mut self) {
        self.diplomas.clear();
        self.experiences.clear();
        self.past_courses.clear();
    }

    /// Check every star rating; used after loading a form from outside.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.past_courses.iter().try_for_each(PastCourseEntry::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_fresh_form_when_created_then_each_list_has_one_entry() {
        let state = FormState::with_defaults();

        assert_eq!(state.entry_count(EntryKind::Diploma), 1);
        assert_eq!(state.entry_count(EntryKind::Experience), 1);
        assert_eq!(state.entry_count(EntryKind::PastCourse), 1);
        assert_eq!(
            state.diplomas.iter().next(),
            Some(&DiplomaEntry::new("Licence en Informatique", "Certificat"))
        );
    }

    #[test]
    fn given_rating_out_of_range_when_creating_past_course_then_rejected() {
        assert_eq!(
            PastCourseEntry::new("Python", 5.5),
            Err(DomainError::InvalidStarRating(5.5))
        );
        assert!(PastCourseEntry::new("Python", 1.0).is_ok());
        assert!(PastCourseEntry::new("Python", 5.0).is_ok());
    }

    #[test]
    fn entry_kind_displays_as_cli_name() {
        assert_eq!(EntryKind::PastCourse.to_string(), "past-course");
    }
}
