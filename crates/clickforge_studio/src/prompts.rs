//! Instruction text for each studio job.
//!
//! Pure string templates: no I/O, no validation.

use clickforge_core::AnalysisResult;

/// Ask for a joint evaluation of title and thumbnail as one packaging unit.
///
/// The thumbnail itself travels as an inline image part next to this text.
pub fn analysis_prompt(title: &str) -> String {
    format!(
        r#"You are a YouTube growth strategist. Judge how well this video title and the attached thumbnail work together to win clicks and go viral.
Video Title: "{title}"

Treat the title and thumbnail as a single "packaging" unit and answer each point:
1. **Opinion**: How well do they work together to attract clicks from a broad audience?
2. **Strengths**: 2-3 key strengths of the combination for going viral.
3. **Weaknesses**: 2-3 weaknesses or points of friction that could hold it back.
4. **Improvements**: 2-3 concrete changes that would raise its viral potential.
5. **Competition**: The likely style of competing viral videos, and how this combination stacks up.
"#
    )
}

/// Ask for three new title + thumbnail-prompt pairs that fix the analysed weaknesses.
pub fn combo_ideas_prompt(analysis: &AnalysisResult, original_title: &str) -> String {
    format!(
        r#"Using the analysis below of a YouTube title and thumbnail, create 3 new combinations built for maximum virality.
For each combination give a viral-optimized title and a detailed, descriptive prompt an AI image generator can use to draw the matching thumbnail.

Original Title: "{original_title}"
Analysis:
- Opinion: {opinion}
- Weaknesses: {weaknesses}
- Improvements Suggested: {improvements}

The 3 ideas must be distinct, directly address the weaknesses, and aim for a massive click-through rate. Make the thumbnail prompts vivid and compelling.
"#,
        opinion = analysis.opinion,
        weaknesses = analysis.weaknesses.join(", "),
        improvements = analysis.improvements.join(", "),
    )
}

/// Ask for a complete narration script sized for at least eight minutes.
pub fn script_prompt(analysis: &AnalysisResult, title: &str) -> String {
    format!(
        r#"You are an expert viral YouTube scriptwriter. Write a highly engaging video script informed by this analysis of the video's title and thumbnail.
Write in English, and size the script for a video of at least 8 minutes to maximize watch time.

Original Title Idea: "{title}"
Analysis of the Idea:
- Opinion: {opinion}
- Strengths: {strengths}
- Weaknesses: {weaknesses}
- Suggested Improvements: {improvements}

Produce a complete script with this structure:
1. **Title**: The final, optimized, viral title.
2. **Hook**: An attention-grabbing opening (the first 15-30 seconds) that makes the viewer need to know what happens next.
3. **Sections**: At least 4-5 detailed body sections. For each give a "Heading", the "Content" the host says, and "Visuals" (B-roll, on-screen text, graphics or animation ideas). The content must be detailed enough to fill the 8-minute runtime.
4. **CTA**: A clear call to action (subscribe, comment, watch another video).
5. **Outro**: A memorable close that wraps up and points viewers to more content.
"#,
        opinion = analysis.opinion,
        strengths = analysis.strengths.join(", "),
        weaknesses = analysis.weaknesses.join(", "),
        improvements = analysis.improvements.join(", "),
    )
}
