//! Random demo profile generation
//!
//! Builds a coherent profile from one subject domain and picks the course to
//! predict either from the same domain (corrélé) or from another one
//! (non corrélé), with even odds. The random source is injected so runs can
//! be reproduced from a seed.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::domain::catalog::{CITIES, DOMAINS, FIRST_NAMES, LAST_NAMES};
use crate::domain::{
    CourseToPredict, DiplomaEntry, ExperienceEntry, FormState, PastCourseEntry, SubjectDomain,
};

/// Lowest star rating given to a generated past course.
pub const MIN_GENERATED_STARS: f64 = 3.5;
/// Highest star rating given to a generated past course.
pub const MAX_GENERATED_STARS: f64 = 5.0;

/// Whether the course to predict belongs to the profile's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correlation {
    Correlated,
    Uncorrelated,
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correlation::Correlated => f.write_str("corrélé"),
            Correlation::Uncorrelated => f.write_str("non corrélé"),
        }
    }
}

/// What the generator picked; its `Display` is the user-facing confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub domain: &'static str,
    pub course_domain: &'static str,
    pub correlation: Correlation,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Profil aléatoire généré : domaine {}, cours {} ({})",
            self.domain, self.correlation, self.course_domain
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedProfile {
    pub state: FormState,
    pub report: GenerationReport,
}

pub struct RandomProfileGenerator {
    domains: &'static [SubjectDomain],
}

impl Default for RandomProfileGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomProfileGenerator {
    /// Generator over the built-in domain table.
    pub fn new() -> Self {
        Self::with_domains(DOMAINS)
    }

    /// Generator over a custom domain table (must not be empty).
    pub fn with_domains(domains: &'static [SubjectDomain]) -> Self {
        Self { domains }
    }

    pub fn domains(&self) -> &'static [SubjectDomain] {
        self.domains
    }

    /// Generate a full profile from a uniformly chosen domain.
    ///
    /// Returns `None` only when the domain table is empty.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<GeneratedProfile> {
        let domain = self.domains.choose(rng)?;
        Some(self.generate_for(domain, rng))
    }

    /// Generate a full profile for the given domain.
    pub fn generate_for<R: Rng + ?Sized>(
        &self,
        domain: &'static SubjectDomain,
        rng: &mut R,
    ) -> GeneratedProfile {
        let mut state = FormState {
            first_name: pick(FIRST_NAMES, rng).to_string(),
            last_name: pick(LAST_NAMES, rng).to_string(),
            city: pick(CITIES, rng).to_string(),
            description: domain.description.to_string(),
            ..FormState::default()
        };
        state.clear_entries();

        for _ in 0..rng.gen_range(1..=2) {
            if let Some((title, level)) = domain.diplomas.choose(rng) {
                state.diplomas.push(DiplomaEntry::new(*title, *level));
            }
        }

        for _ in 0..rng.gen_range(1..=3) {
            let title = pick(domain.experience_titles, rng);
            let company = pick(domain.companies, rng);
            let years = rng.gen_range(1..=10);
            let experience = ExperienceEntry::new(title, company)
                .with_description(format!("{title} chez {company}"))
                .with_duration(format!("{years} {}", if years == 1 { "an" } else { "ans" }));
            state.experiences.push(experience);
        }

        for _ in 0..rng.gen_range(1..=2) {
            let title = pick(domain.course_titles, rng);
            state.past_courses.push(PastCourseEntry {
                title: title.to_string(),
                description: Some(domain.course_description.to_string()),
                number_of_stars: random_stars(rng),
            });
        }

        let (course_domain, correlation) = self.pick_course_domain(domain, rng);
        state.course = CourseToPredict {
            title: pick(course_domain.course_titles, rng).to_string(),
            description: course_domain.course_description.to_string(),
        };

        let report = GenerationReport {
            domain: domain.name,
            course_domain: course_domain.name,
            correlation,
        };
        debug!("generate_for: {}", report);

        GeneratedProfile { state, report }
    }

    /// Even odds between the profile's own domain and any other domain.
    fn pick_course_domain<R: Rng + ?Sized>(
        &self,
        domain: &'static SubjectDomain,
        rng: &mut R,
    ) -> (&'static SubjectDomain, Correlation) {
        if rng.gen_bool(0.5) {
            return (domain, Correlation::Correlated);
        }
        let others: Vec<&'static SubjectDomain> = self
            .domains
            .iter()
            .filter(|other| other.name != domain.name)
            .collect();
        match others.choose(rng) {
            Some(other) => (*other, Correlation::Uncorrelated),
            // single-domain table: nothing else to pick from
            None => (domain, Correlation::Correlated),
        }
    }
}

/// Uniform in `[3.5, 5.0]`, one decimal.
pub fn random_stars<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let stars = rng.gen_range(MIN_GENERATED_STARS..=MAX_GENERATED_STARS);
    ((stars * 10.0).round() / 10.0).clamp(MIN_GENERATED_STARS, MAX_GENERATED_STARS)
}

fn pick<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}
