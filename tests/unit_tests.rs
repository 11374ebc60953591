// Unit tests for HackBuddy Match

use hackbuddy_match::core::{
    extract,
    keywords::{DEFAULT_INTERESTS, DEFAULT_SKILLS},
    scoring::{calculate_match_score, score},
};
use hackbuddy_match::models::{Flexibility, ParticipantProfile, ScoringWeights};

fn profile(id: &str, skills: &[&str], interests: &[&str]) -> ParticipantProfile {
    ParticipantProfile::new(id)
        .with_skills(skills.iter().copied())
        .with_interests(interests.iter().copied())
}

#[test]
fn test_extract_empty_string() {
    let fragment = extract("");

    assert!(fragment.skills.is_empty());
    assert!(fragment.interests.is_empty());
    assert!(fragment.project_experience.is_none());

    let prefs = fragment.team_preferences.expect("team preferences are always filled");
    assert_eq!(prefs.flexibility, Flexibility::Specific);
    assert!(prefs.required_skills.is_empty());
}

#[test]
fn test_extract_outputs_are_vocabulary_entries() {
    let transcripts = [
        "Full-Stack dev, Node.js and Three.js, some iOS and Android, into VR and Virtual Reality",
        "UI/UX Design, cloud computing and open source contributions, frontend and backend work",
        "nothing relevant here at all",
    ];

    for transcript in transcripts {
        let fragment = extract(transcript);
        for skill in &fragment.skills {
            assert!(DEFAULT_SKILLS.contains(&skill.as_str()), "{} is not a known skill", skill);
        }
        for interest in &fragment.interests {
            assert!(DEFAULT_INTERESTS.contains(&interest.as_str()), "{} is not a known interest", interest);
        }
    }
}

#[test]
fn test_extract_punctuated_keywords() {
    let fragment = extract("Full-Stack dev with Node.js and Three.js, into UI/UX Design");

    assert!(fragment.skills.contains(&"full-stack".to_string()));
    assert!(fragment.skills.contains(&"node.js".to_string()));
    assert!(fragment.skills.contains(&"three.js".to_string()));
    assert_eq!(fragment.interests, vec!["ui/ux design"]);
}

#[test]
fn test_extract_reference_sentence() {
    let fragment = extract("I know javascript and react, and I love web development");

    assert!(fragment.skills.contains(&"javascript".to_string()));
    assert!(fragment.skills.contains(&"react".to_string()));
    assert!(fragment.interests.contains(&"web development".to_string()));
}

#[test]
fn test_extract_open_to_anything() {
    let fragment = extract("I'm open to anything, need python");
    let prefs = fragment.team_preferences.unwrap();

    assert_eq!(prefs.flexibility, Flexibility::Flexible);
    assert!(fragment.skills.contains(&"python".to_string()));
    assert!(prefs.required_skills.contains(&"python".to_string()));
}

#[test]
fn test_extract_idempotent() {
    let text = "We created a project called 'Beacon' using flutter. I'm flexible about roles.";

    assert_eq!(extract(text), extract(text));
}

#[test]
fn test_score_reference_scenario() {
    let a = profile("a", &["javascript", "react"], &["web development"]);
    let b = profile("b", &["javascript", "python"], &["web development", "ai"]);

    let result = score(&a, &b);

    assert_eq!(result.common_skills, vec!["javascript"]);
    assert_eq!(result.common_interests, vec!["web development"]);
    assert_eq!(result.score, 50.0);
}

#[test]
fn test_score_empty_profile_is_zero() {
    let empty = profile("empty", &[], &[]);
    let full = profile("full", &["python", "react"], &["robotics", "devops"]);

    assert_eq!(score(&empty, &full).score, 0.0);
    assert_eq!(score(&full, &empty).score, 0.0);
}

#[test]
fn test_score_follows_formula_per_direction() {
    let a = profile("a", &["python"], &["ai"]);
    let b = profile("b", &["python", "react", "vue", "flutter"], &["ai research", "ai ethics"]);

    // a -> b: skills 1/4, interests 2/2
    assert_eq!(score(&a, &b).score, 55.0);

    // b -> a: skills 1/4, interests 1/2
    assert_eq!(score(&b, &a).score, 35.0);
}

#[test]
fn test_score_stays_in_range() {
    let a = profile("a", &["python", "react"], &["ai", "web"]);
    let b = profile("b", &["Python", "React"], &["ai", "web development", "web design"]);
    let weights = ScoringWeights::default();

    let result = calculate_match_score(&a, &b, &weights);

    assert!(result.score >= 0.0 && result.score <= 100.0);
}
