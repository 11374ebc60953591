use thiserror::Error;

/// Skill phrases recognized in transcripts
pub const DEFAULT_SKILLS: &[&str] = &[
    "python", "javascript", "typescript", "node.js", "three.js",
    "react", "vue", "angular", "web development", "full-stack",
    "frontend", "backend", "web scraping", "machine learning",
    "ai", "artificial intelligence", "data science", "blockchain",
    "mobile development", "ios", "android", "flutter", "react native",
];

/// Interest phrases recognized in transcripts
pub const DEFAULT_INTERESTS: &[&str] = &[
    "web development", "mobile development", "artificial intelligence",
    "machine learning", "blockchain", "game development", "cybersecurity",
    "data science", "cloud computing", "devops", "ui/ux design",
    "open source", "robotics", "virtual reality", "augmented reality",
];

/// Errors raised while building a vocabulary from configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("{list} list contains a blank phrase at position {index}")]
    BlankPhrase { list: &'static str, index: usize },
}

/// Ordered list of keyword phrases
///
/// Each entry keeps its configured casing and a lowercased copy used for
/// containment tests. Entries are unique case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    entries: Vec<(String, String)>,
}

impl KeywordSet {
    /// Build a keyword set, collapsing case-insensitive duplicates to the first occurrence
    pub fn new<I, S>(list: &'static str, phrases: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<S> = phrases.into_iter().collect();

        if let Some(index) = phrases.iter().position(|p| p.as_ref().trim().is_empty()) {
            return Err(VocabularyError::BlankPhrase { list, index });
        }

        Ok(Self::collect(phrases))
    }

    fn collect<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();

        for phrase in phrases {
            let phrase = phrase.as_ref();
            let lowered = phrase.to_lowercase();
            if entries.iter().any(|(_, existing)| *existing == lowered) {
                continue;
            }
            entries.push((phrase.to_string(), lowered));
        }

        Self { entries }
    }

    /// Phrases contained in `lowered_text`, in list order, with list casing
    pub fn find_in(&self, lowered_text: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, lowered)| lowered_text.contains(lowered.as_str()))
            .map(|(phrase, _)| phrase.clone())
            .collect()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        let lowered = phrase.to_lowercase();
        self.entries.iter().any(|(_, existing)| *existing == lowered)
    }

    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(phrase, _)| phrase.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Skill and interest vocabularies used by the extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub skills: KeywordSet,
    pub interests: KeywordSet,
}

impl Vocabulary {
    pub fn new<S: AsRef<str>>(skills: &[S], interests: &[S]) -> Result<Self, VocabularyError> {
        Ok(Self {
            skills: KeywordSet::new("skills", skills)?,
            interests: KeywordSet::new("interests", interests)?,
        })
    }

    /// Build from optional overrides, falling back to the built-in lists per list
    pub fn from_overrides(
        skills: Option<&[String]>,
        interests: Option<&[String]>,
    ) -> Result<Self, VocabularyError> {
        let skills = match skills {
            Some(list) => KeywordSet::new("skills", list)?,
            None => KeywordSet::collect(DEFAULT_SKILLS),
        };
        let interests = match interests {
            Some(list) => KeywordSet::new("interests", list)?,
            None => KeywordSet::collect(DEFAULT_INTERESTS),
        };

        Ok(Self { skills, interests })
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            skills: KeywordSet::collect(DEFAULT_SKILLS),
            interests: KeywordSet::collect(DEFAULT_INTERESTS),
        }
    }
}
