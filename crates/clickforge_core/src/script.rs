//! Long-form video script record.

use serde::{Deserialize, Serialize};

/// One body section of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSection {
    /// Section heading
    pub heading: String,
    /// What the host says
    pub content: String,
    /// B-roll, on-screen text and graphics direction
    pub visuals: String,
}

/// A complete narration script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptResult {
    /// Final optimized title
    pub title: String,
    /// Opening 15-30 seconds
    pub hook: String,
    /// Body sections in narration order
    pub sections: Vec<ScriptSection>,
    /// Call to action
    pub cta: String,
    /// Closing
    pub outro: String,
}
