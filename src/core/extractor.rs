use crate::core::keywords::Vocabulary;
use crate::models::{ExtractionOptions, Flexibility, ProfileFragment, ProjectExperience, TeamPreferences};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

static PROJECT_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"project called ["']([^"']+)["']"#).expect("project name pattern is valid")
});

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]+").expect("sentence break pattern is valid")
});

static DEFAULT_EXTRACTOR: Lazy<TranscriptExtractor> = Lazy::new(TranscriptExtractor::default);

/// Words that mark a sentence as describing project work
const PROJECT_VERBS: [&str; 3] = ["built", "created", "developed"];

/// Keyword-based transcript extractor
///
/// Stateless apart from its immutable vocabulary, so a single instance can be
/// shared across worker threads.
#[derive(Debug, Clone)]
pub struct TranscriptExtractor {
    vocabulary: Arc<Vocabulary>,
    options: ExtractionOptions,
}

impl TranscriptExtractor {
    pub fn new(vocabulary: Arc<Vocabulary>, options: ExtractionOptions) -> Self {
        Self { vocabulary, options }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Extract a profile fragment from transcript text
    ///
    /// Total over all inputs: an empty or unmatched transcript yields empty
    /// collections, never an error.
    pub fn extract(&self, transcript: &str) -> ProfileFragment {
        let text = transcript.to_lowercase();

        let skills = self.vocabulary.skills.find_in(&text);
        let interests = self.vocabulary.interests.find_in(&text);

        let project_experience = if self.options.projects {
            extract_project(&text, &skills).map(|project| vec![project])
        } else {
            None
        };

        let team_preferences = if self.options.team_preferences {
            Some(extract_team_preferences(&text, &skills))
        } else {
            None
        };

        ProfileFragment {
            skills,
            interests,
            project_experience,
            team_preferences,
        }
    }
}

impl Default for TranscriptExtractor {
    fn default() -> Self {
        Self::new(Arc::new(Vocabulary::default()), ExtractionOptions::default())
    }
}

/// Extract with the built-in vocabulary and all optional fields enabled
pub fn extract(transcript: &str) -> ProfileFragment {
    DEFAULT_EXTRACTOR.extract(transcript)
}

/// Skills mentioned right after one of the given lead-in phrases
fn skills_after(text: &str, skills: &[String], lead_ins: &[&str]) -> Vec<String> {
    skills
        .iter()
        .filter(|skill| {
            let skill = skill.to_lowercase();
            lead_ins
                .iter()
                .any(|lead_in| text.contains(&format!("{}{}", lead_in, skill)))
        })
        .cloned()
        .collect()
}

/// Only the first quoted name after "project called" is captured.
fn extract_project(text: &str, skills: &[String]) -> Option<ProjectExperience> {
    let name = PROJECT_NAME.captures(text)?.get(1)?.as_str().to_string();

    let technologies = skills_after(text, skills, &["used: ", "using ", "built with "]);
    let description = extract_project_description(text, &name);

    Some(ProjectExperience {
        name,
        technologies,
        description,
    })
}

fn extract_project_description(text: &str, project_name: &str) -> String {
    let project_name = project_name.to_lowercase();

    let relevant: Vec<&str> = SENTENCE_BREAK
        .split(text)
        .filter(|sentence| {
            sentence.contains(project_name.as_str())
                || PROJECT_VERBS.iter().any(|verb| sentence.contains(verb))
        })
        .collect();

    relevant.join(". ").trim().to_string()
}

fn extract_team_preferences(text: &str, skills: &[String]) -> TeamPreferences {
    let flexibility = if text.contains("open to") || text.contains("flexible") {
        Flexibility::Flexible
    } else {
        Flexibility::Specific
    };

    TeamPreferences {
        desired_team_size: None,
        required_skills: skills_after(text, skills, &["looking for ", "need "]),
        flexibility,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keywords::{DEFAULT_INTERESTS, DEFAULT_SKILLS};

    #[test]
    fn test_empty_transcript() {
        let fragment = extract("");

        assert!(fragment.skills.is_empty());
        assert!(fragment.interests.is_empty());
        assert!(fragment.project_experience.is_none());

        let prefs = fragment.team_preferences.unwrap();
        assert_eq!(prefs.flexibility, Flexibility::Specific);
        assert!(prefs.required_skills.is_empty());
        assert!(prefs.desired_team_size.is_none());
    }

    #[test]
    fn test_skills_and_interests() {
        let fragment = extract("I know javascript and react, and I love web development");

        assert!(fragment.skills.contains(&"javascript".to_string()));
        assert!(fragment.skills.contains(&"react".to_string()));
        assert!(fragment.interests.contains(&"web development".to_string()));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let fragment = extract("I mostly write PYTHON and some TypeScript");

        assert_eq!(fragment.skills, vec!["python", "typescript"]);
    }

    #[test]
    fn test_results_come_from_vocabulary() {
        let fragment = extract(
            "Rust, Haskell, python, cooking, robotics and Machine Learning are my thing",
        );

        assert!(fragment.skills.iter().all(|s| DEFAULT_SKILLS.contains(&s.as_str())));
        assert!(fragment.interests.iter().all(|i| DEFAULT_INTERESTS.contains(&i.as_str())));
        assert!(fragment.interests.contains(&"robotics".to_string()));
        assert!(fragment.interests.contains(&"machine learning".to_string()));
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "ai" is found inside "email"; containment is not word-bounded
        let fragment = extract("send me an email");

        assert_eq!(fragment.skills, vec!["ai"]);
    }

    #[test]
    fn test_flexible_and_required_skills() {
        let fragment = extract("I'm open to anything, need python");
        let prefs = fragment.team_preferences.unwrap();

        assert_eq!(prefs.flexibility, Flexibility::Flexible);
        assert_eq!(prefs.required_skills, vec!["python"]);
    }

    #[test]
    fn test_required_skills_only_from_detected_skills() {
        let fragment = extract("we are looking for rust developers");
        let prefs = fragment.team_preferences.unwrap();

        assert!(prefs.required_skills.is_empty());
        assert_eq!(prefs.flexibility, Flexibility::Specific);
    }

    #[test]
    fn test_project_extraction() {
        let transcript = "Last year I worked on a project called \"EcoTrack\". \
            We built it using react and python! It tracks carbon usage. \
            I am looking for flutter people.";
        let fragment = extract(transcript);

        let projects = fragment.project_experience.unwrap();
        assert_eq!(projects.len(), 1);

        let project = &projects[0];
        assert_eq!(project.name, "ecotrack");
        assert_eq!(project.technologies, vec!["react"]);
        // Sentences keep their leading space, so joins carry a double space
        assert_eq!(
            project.description,
            "last year i worked on a project called \"ecotrack\".  we built it using react and python"
        );

        let prefs = fragment.team_preferences.unwrap();
        assert_eq!(prefs.required_skills, vec!["flutter"]);
    }

    #[test]
    fn test_project_with_single_quotes_and_built_with() {
        let fragment = extract("My project called 'Chatter' was built with typescript");

        let project = &fragment.project_experience.unwrap()[0];
        assert_eq!(project.name, "chatter");
        assert_eq!(project.technologies, vec!["typescript"]);
        assert_eq!(project.description, "my project called 'chatter' was built with typescript");
    }

    #[test]
    fn test_unquoted_project_is_ignored() {
        let fragment = extract("I made a project called Chatter");

        assert!(fragment.project_experience.is_none());
    }

    #[test]
    fn test_options_suppress_optional_fields() {
        let extractor = TranscriptExtractor::new(
            Arc::new(Vocabulary::default()),
            ExtractionOptions { projects: false, team_preferences: false },
        );
        let fragment = extractor.extract("a project called 'x' using python, open to all");

        assert_eq!(fragment.skills, vec!["python"]);
        assert!(fragment.project_experience.is_none());
        assert!(fragment.team_preferences.is_none());
    }

    #[test]
    fn test_custom_vocabulary_keeps_list_casing() {
        let vocabulary = Vocabulary::new(&["Rust", "Go"], &["Embedded Systems"]).unwrap();
        let extractor = TranscriptExtractor::new(Arc::new(vocabulary), ExtractionOptions::default());

        let fragment = extractor.extract("rust and GO, plus embedded systems");

        assert_eq!(fragment.skills, vec!["Rust", "Go"]);
        assert_eq!(fragment.interests, vec!["Embedded Systems"]);
        assert_eq!(extractor.vocabulary().skills.len(), 2);
        assert_eq!(extractor.vocabulary().interests.len(), 1);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let text = "I'm flexible. I created a project called 'Orbit' using three.js";

        assert_eq!(extract(text), extract(text));
    }
}
