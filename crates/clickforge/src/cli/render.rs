//! Terminal output for job results.

use std::path::{Path, PathBuf};

use clickforge::{
    AnalysisResult, ClickforgeResult, FileError, FileErrorKind, GeneratedCombo, ImageMime,
    ScriptResult, Session, SlotState,
};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

pub fn analysis(analysis: &AnalysisResult, json: bool) -> ClickforgeResult<()> {
    if json {
        return print_json(analysis);
    }
    println!("{}", format_analysis(analysis));
    Ok(())
}

pub fn combos(combos: &[GeneratedCombo], out_dir: Option<&Path>, json: bool) -> ClickforgeResult<()> {
    let saved = match out_dir {
        Some(dir) => save_combos(combos, dir)?,
        None => Vec::new(),
    };
    if json {
        return print_json(&combos);
    }
    println!("{}", format_combos(combos, &saved));
    Ok(())
}

pub fn script(script: &ScriptResult, json: bool) -> ClickforgeResult<()> {
    if json {
        return print_json(script);
    }
    println!("{}", format_script(script));
    Ok(())
}

/// Print every slot of a finished session.
pub fn session(session: &Session, out_dir: Option<&Path>, json: bool) -> ClickforgeResult<()> {
    let saved = match (session.combos().result(), out_dir) {
        (Some(combos), Some(dir)) => save_combos(combos, dir)?,
        _ => Vec::new(),
    };

    if json {
        return print_json(&json!({
            "analysis": slot_json(session.analysis().state()),
            "combos": slot_json(session.combos().state()),
            "script": slot_json(session.script().state()),
        }));
    }

    match session.analysis().state() {
        SlotState::Ready(analysis) => println!("{}", format_analysis(analysis)),
        SlotState::Failed(message) => eprintln!("Analysis failed: {message}"),
        _ => {}
    }
    match session.combos().state() {
        SlotState::Ready(combos) => println!("{}", format_combos(combos, &saved)),
        SlotState::Failed(message) => eprintln!("Combos failed: {message}"),
        _ => {}
    }
    match session.script().state() {
        SlotState::Ready(script) => println!("{}", format_script(script)),
        SlotState::Failed(message) => eprintln!("Script failed: {message}"),
        _ => {}
    }
    Ok(())
}

fn slot_json<T: Serialize>(state: &SlotState<T>) -> serde_json::Value {
    match state {
        SlotState::Ready(value) => json!({ "result": value }),
        SlotState::Failed(message) => json!({ "error": message }),
        SlotState::Idle | SlotState::Loading => serde_json::Value::Null,
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> ClickforgeResult<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> ClickforgeResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        FileError::new(FileErrorKind::Write {
            path: "<stdout>".to_string(),
            message: format!("could not render JSON: {}", e),
        })
        .into()
    })
}

fn bullets(items: &[String]) -> String {
    if items.is_empty() {
        return "  (none)".to_string();
    }
    items
        .iter()
        .map(|item| format!("  - {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_analysis(analysis: &AnalysisResult) -> String {
    format!(
        "== Analysis ==\n{}\n\nStrengths:\n{}\n\nWeaknesses:\n{}\n\nImprovements:\n{}\n\nCompetition:\n{}\n",
        analysis.opinion,
        bullets(&analysis.strengths),
        bullets(&analysis.weaknesses),
        bullets(&analysis.improvements),
        analysis.competition,
    )
}

fn format_combos(combos: &[GeneratedCombo], saved: &[PathBuf]) -> String {
    let mut out = String::from("== New combinations ==\n");
    for (index, combo) in combos.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, combo.title));
        if let Some(path) = saved.get(index) {
            out.push_str(&format!("   thumbnail: {}\n", path.display()));
        }
    }
    out
}

fn format_script(script: &ScriptResult) -> String {
    let mut out = format!("== {} ==\n\n[Hook]\n{}\n", script.title, script.hook);
    for section in &script.sections {
        out.push_str(&format!(
            "\n[{}]\n{}\nVisuals: {}\n",
            section.heading, section.content, section.visuals
        ));
    }
    out.push_str(&format!("\n[Call to action]\n{}\n\n[Outro]\n{}\n", script.cta, script.outro));
    out
}

/// Write each combo thumbnail as `combo-<n>.<ext>`.
fn save_combos(combos: &[GeneratedCombo], dir: &Path) -> ClickforgeResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|e| {
        FileError::new(FileErrorKind::DirectoryCreation {
            path: dir.display().to_string(),
            message: e.to_string(),
        })
    })?;

    let mut saved = Vec::with_capacity(combos.len());
    for (index, combo) in combos.iter().enumerate() {
        let image = combo.image()?;
        let ext = ImageMime::parse(&image.mime_type)
            .map(|mime| mime.extension())
            .unwrap_or("bin");
        let path = dir.join(format!("combo-{}.{ext}", index + 1));
        std::fs::write(&path, image.decode()?).map_err(|e| {
            FileError::new(FileErrorKind::Write {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        debug!(path = %path.display(), "Saved combo thumbnail");
        saved.push(path);
    }
    Ok(saved)
}
