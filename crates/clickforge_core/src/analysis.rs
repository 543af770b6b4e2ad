//! Title + thumbnail analysis record.

use serde::{Deserialize, Serialize};

/// Joint evaluation of a title and thumbnail as one packaging unit.
///
/// Lists may be empty but are always present once parsed.
///
/// # Examples
///
/// ```
/// use clickforge_core::AnalysisResult;
///
/// let analysis: AnalysisResult = serde_json::from_str(r#"{
///     "opinion": "Strong hook",
///     "strengths": ["curiosity gap"],
///     "weaknesses": [],
///     "improvements": ["add a number"],
///     "competition": "Crowded niche"
/// }"#).unwrap();
///
/// assert_eq!(analysis.strengths, vec!["curiosity gap".to_string()]);
/// assert!(analysis.weaknesses.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall opinion of how title and thumbnail work together
    pub opinion: String,
    /// What helps the combination spread
    pub strengths: Vec<String>,
    /// Points of friction
    pub weaknesses: Vec<String>,
    /// Actionable changes
    pub improvements: Vec<String>,
    /// How competing videos look and how this one stacks up
    pub competition: String,
}
