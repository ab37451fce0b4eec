//! Prediction request payload assembly.
//!
//! The prediction service has gone through two request shapes. Both are
//! available as an explicit [`PayloadSchema`]; `professor` is the default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{CourseToPredict, DomainError, FormState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadSchema {
    /// `{teacher_profile, course_to_predict}`, answered with `predicted_score`.
    TeacherProfile,
    /// `{professor, course}`, answered with `gradeAverage`.
    #[default]
    Professor,
}

impl PayloadSchema {
    pub const ALL: [PayloadSchema; 2] = [PayloadSchema::TeacherProfile, PayloadSchema::Professor];

    /// Name of the numeric field carrying the score in a success response.
    pub fn score_field(self) -> &'static str {
        match self {
            PayloadSchema::TeacherProfile => "predicted_score",
            PayloadSchema::Professor => "gradeAverage",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PayloadSchema::TeacherProfile => "teacher-profile",
            PayloadSchema::Professor => "professor",
        }
    }
}

impl fmt::Display for PayloadSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayloadSchema {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PayloadSchema::ALL
            .into_iter()
            .find(|schema| schema.as_str() == s)
            .ok_or_else(|| DomainError::UnknownSchema(s.to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct CourseDto<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a CourseToPredict> for CourseDto<'a> {
    fn from(course: &'a CourseToPredict) -> Self {
        Self {
            title: &course.title,
            description: &course.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiplomaDto<'a> {
    pub title: &'a str,
    pub level: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ExperienceDto<'a> {
    pub title: &'a str,
    pub company: &'a str,
}

#[derive(Debug, Serialize)]
pub struct DetailedExperienceDto<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub description: &'a str,
    pub duration: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PastCourseDto<'a> {
    pub title: &'a str,
    pub number_of_stars: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedPastCourseDto<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub number_of_stars: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherProfileDto<'a> {
    pub description: &'a str,
    pub city: &'a str,
    pub diplomas: Vec<DiplomaDto<'a>>,
    pub experiences: Vec<ExperienceDto<'a>>,
    pub past_courses: Vec<PastCourseDto<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorDto<'a> {
    /// Spelled as the service's request model spells it.
    #[serde(rename = "fistname")]
    pub first_name: &'a str,
    #[serde(rename = "lastname")]
    pub last_name: &'a str,
    pub city: &'a str,
    pub description: &'a str,
    pub diplomas: Vec<DiplomaDto<'a>>,
    pub experiences: Vec<DetailedExperienceDto<'a>>,
    pub past_courses: Vec<DetailedPastCourseDto<'a>>,
}

/// Request body borrowed from a form state.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Payload<'a> {
    TeacherProfile {
        teacher_profile: TeacherProfileDto<'a>,
        course_to_predict: CourseDto<'a>,
    },
    Professor {
        professor: ProfessorDto<'a>,
        course: CourseDto<'a>,
    },
}

impl Payload<'_> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Turn the form state into the request body of the given schema.
///
/// Pure: reads the state, touches nothing else.
pub fn build_payload(state: &FormState, schema: PayloadSchema) -> Payload<'_> {
    let diplomas = state
        .diplomas
        .iter()
        .map(|d| DiplomaDto {
            title: &d.title,
            level: &d.level,
        })
        .collect();
    let course = CourseDto::from(&state.course);

    match schema {
        PayloadSchema::TeacherProfile => Payload::TeacherProfile {
            teacher_profile: TeacherProfileDto {
                description: &state.description,
                city: &state.city,
                diplomas,
                experiences: state
                    .experiences
                    .iter()
                    .map(|e| ExperienceDto {
                        title: &e.title,
                        company: &e.company,
                    })
                    .collect(),
                past_courses: state
                    .past_courses
                    .iter()
                    .map(|c| PastCourseDto {
                        title: &c.title,
                        number_of_stars: c.number_of_stars,
                    })
                    .collect(),
            },
            course_to_predict: course,
        },
        PayloadSchema::Professor => Payload::Professor {
            professor: ProfessorDto {
                first_name: &state.first_name,
                last_name: &state.last_name,
                city: &state.city,
                description: &state.description,
                diplomas,
                experiences: state
                    .experiences
                    .iter()
                    .map(|e| DetailedExperienceDto {
                        title: &e.title,
                        company: &e.company,
                        description: e.description.as_deref().unwrap_or_default(),
                        duration: e.duration.as_deref().unwrap_or_default(),
                    })
                    .collect(),
                past_courses: state
                    .past_courses
                    .iter()
                    .map(|c| DetailedPastCourseDto {
                        title: &c.title,
                        description: c.description.as_deref().unwrap_or_default(),
                        number_of_stars: c.number_of_stars,
                    })
                    .collect(),
            },
            course,
        },
    }
}
