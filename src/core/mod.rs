// Core algorithm exports
pub mod extractor;
pub mod keywords;
pub mod matcher;
pub mod merge;
pub mod scoring;

pub use extractor::{extract, TranscriptExtractor};
pub use keywords::{KeywordSet, Vocabulary, VocabularyError, DEFAULT_SKILLS, DEFAULT_INTERESTS};
pub use matcher::{Matcher, TeammateResult};
pub use merge::merge_profile;
pub use scoring::{calculate_match_score, score};
