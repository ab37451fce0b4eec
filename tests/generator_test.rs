//! Tests for RandomProfileGenerator

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

use profpredict::application::services::{
    random_stars, Correlation, RandomProfileGenerator, MAX_GENERATED_STARS, MIN_GENERATED_STARS,
};
use profpredict::domain::catalog::{CITIES, FIRST_NAMES, LAST_NAMES};
use profpredict::domain::{find_domain, SubjectDomain, DOMAINS};

const RUNS: usize = 1000;

/// Domain whose course pool holds `title` (titles are unique across domains).
fn domain_of_course(title: &str) -> &'static SubjectDomain {
    DOMAINS
        .iter()
        .find(|domain| domain.course_titles.contains(&title))
        .unwrap_or_else(|| panic!("course title {title} not in any domain"))
}

#[test]
fn given_many_runs_when_generating_then_domains_are_uniform() {
    // Arrange
    let generator = RandomProfileGenerator::new();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts: HashMap<&str, usize> = HashMap::new();

    // Act
    for _ in 0..RUNS {
        let profile = generator.generate(&mut rng).unwrap();
        *counts.entry(profile.report.domain).or_default() += 1;
    }

    // Assert: expected ~167 each, std dev ~12; allow 5 sigma
    assert_eq!(counts.len(), DOMAINS.len());
    let expected = RUNS as f64 / DOMAINS.len() as f64;
    for (domain, count) in counts {
        assert!(
            (count as f64 - expected).abs() < 60.0,
            "domain {domain} drawn {count} times, expected about {expected:.0}"
        );
    }
}

#[test]
fn given_many_runs_when_generating_then_star_ratings_stay_in_range_with_one_decimal() {
    let generator = RandomProfileGenerator::new();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..RUNS {
        let profile = generator.generate(&mut rng).unwrap();
        for course in profile.state.past_courses.iter() {
            let stars = course.number_of_stars;
            assert!(
                (MIN_GENERATED_STARS..=MAX_GENERATED_STARS).contains(&stars),
                "stars {stars} out of range"
            );
            assert!(
                ((stars * 10.0).round() - stars * 10.0).abs() < 1e-9,
                "stars {stars} has more than one decimal"
            );
        }
    }
}

#[test]
fn given_many_runs_when_generating_then_correlation_branches_respect_domains() {
    // Arrange
    let generator = RandomProfileGenerator::new();
    let mut rng = StdRng::seed_from_u64(99);
    let mut correlated = 0;

    // Act / Assert
    for _ in 0..RUNS {
        let profile = generator.generate(&mut rng).unwrap();
        let course_domain = domain_of_course(&profile.state.course.title);
        assert_eq!(course_domain.name, profile.report.course_domain);
        assert_eq!(
            profile.state.course.description,
            course_domain.course_description
        );

        match profile.report.correlation {
            Correlation::Correlated => {
                correlated += 1;
                assert_eq!(course_domain.name, profile.report.domain);
            }
            Correlation::Uncorrelated => {
                assert_ne!(course_domain.name, profile.report.domain);
            }
        }
    }

    // Assert: 50/50 split, std dev ~16
    assert!(
        (400..=600).contains(&correlated),
        "correlated {correlated} of {RUNS}"
    );
}

#[test]
fn given_many_runs_when_generating_then_entry_counts_and_pools_match_domain() {
    let generator = RandomProfileGenerator::new();
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..RUNS {
        let profile = generator.generate(&mut rng).unwrap();
        let state = &profile.state;
        let domain = find_domain(profile.report.domain).unwrap();

        assert!((1..=2).contains(&state.diplomas.len()));
        assert!((1..=3).contains(&state.experiences.len()));
        assert!((1..=2).contains(&state.past_courses.len()));

        assert_eq!(state.description, domain.description);
        assert!(FIRST_NAMES.contains(&state.first_name.as_str()));
        assert!(LAST_NAMES.contains(&state.last_name.as_str()));
        assert!(CITIES.contains(&state.city.as_str()));

        for diploma in state.diplomas.iter() {
            assert!(domain
                .diplomas
                .contains(&(diploma.title.as_str(), diploma.level.as_str())));
        }
        for experience in state.experiences.iter() {
            assert!(domain
                .experience_titles
                .contains(&experience.title.as_str()));
            assert!(domain.companies.contains(&experience.company.as_str()));
            assert!(experience.duration.is_some());
        }
        for course in state.past_courses.iter() {
            assert!(domain.course_titles.contains(&course.title.as_str()));
        }
    }
}

#[test]
fn given_generated_profile_when_inspecting_then_optional_fields_are_filled() {
    // Arrange
    let generator = RandomProfileGenerator::new();
    let mut rng = StdRng::seed_from_u64(1);

    // Act
    let profile = generator.generate(&mut rng).unwrap();

    // Assert
    assert!(!profile.state.course.title.is_empty());
    for experience in profile.state.experiences.iter() {
        assert!(experience.description.is_some());
    }
    for course in profile.state.past_courses.iter() {
        assert!(course.description.is_some());
    }
}

#[rstest]
#[case("informatique")]
#[case("maths")]
#[case("français")]
#[case("physique")]
#[case("chimie")]
#[case("histoire")]
fn given_forced_domain_when_generating_then_profile_uses_it(#[case] name: &str) {
    let generator = RandomProfileGenerator::new();
    let domain = find_domain(name).unwrap();
    let mut rng = StdRng::seed_from_u64(8);

    let profile = generator.generate_for(domain, &mut rng);

    assert_eq!(profile.report.domain, name);
    assert_eq!(profile.state.description, domain.description);
}

#[test]
fn given_many_draws_when_rounding_stars_then_both_bounds_are_reachable() {
    let mut rng = StdRng::seed_from_u64(17);

    let draws: Vec<f64> = (0..10_000).map(|_| random_stars(&mut rng)).collect();

    assert!(draws.iter().any(|s| (*s - MIN_GENERATED_STARS).abs() < 1e-9));
    assert!(draws.iter().any(|s| (*s - MAX_GENERATED_STARS).abs() < 1e-9));
}
