//! HackBuddy Match - transcript extraction and teammate matching for HackBuddy
//!
//! This library turns free-text call transcripts into structured profile
//! fragments and ranks hackathon participants by shared skills and interests.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{extract, score, Matcher, TranscriptExtractor, Vocabulary};
pub use models::{ParticipantProfile, ProfileFragment, MatchResult, ScoringWeights, FindTeammatesRequest, FindTeammatesResponse};
