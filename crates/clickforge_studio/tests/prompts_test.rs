// Prompt template tests.

mod test_utils;

use clickforge_studio::prompts::{analysis_prompt, combo_ideas_prompt, script_prompt};
use test_utils::sample_analysis;

const TITLE: &str = "10 Foods That Destroy Your Metabolism";

#[test]
fn test_analysis_prompt_quotes_title() {
    let prompt = analysis_prompt(TITLE);
    assert!(prompt.contains(&format!("\"{TITLE}\"")));
}

#[test]
fn test_combo_prompt_carries_weaknesses_and_improvements() {
    let analysis = sample_analysis();
    let prompt = combo_ideas_prompt(&analysis, TITLE);

    assert!(prompt.contains(TITLE));
    assert!(prompt.contains(&analysis.opinion));
    assert!(prompt.contains("Generic stock food photo, No face to connect with"));
    for improvement in &analysis.improvements {
        assert!(prompt.contains(improvement.as_str()));
    }
}

#[test]
fn test_script_prompt_carries_full_analysis() {
    let analysis = sample_analysis();
    let prompt = script_prompt(&analysis, TITLE);

    assert!(prompt.contains(TITLE));
    assert!(prompt.contains("Number in the title, Fear of loss hook, High-contrast thumbnail"));
    assert!(prompt.contains("Show a shocked face next to the food"));
    assert!(prompt.contains("8 minutes"));
}
