//! Command handlers.

use std::path::Path;

use clickforge::{
    AnalysisResult, ClickforgeResult, FileError, FileErrorKind, GeminiClient, ImageInput,
    ImageMime, InputError, InputErrorKind, Session, StructuredResponse, Studio,
};
use tracing::{info, instrument, warn};

use super::commands::{AnalysisSource, Packaging};
use super::render;

/// Analyze a title + thumbnail and print the result.
#[instrument(skip_all, fields(title = %packaging.title))]
pub async fn analyze(
    studio: &Studio<GeminiClient>,
    packaging: &Packaging,
    json: bool,
) -> ClickforgeResult<()> {
    let thumbnail = load_thumbnail(packaging)?;
    let analysis = studio.analyze(&packaging.title, thumbnail).await?;
    render::analysis(&analysis, json)
}

/// Generate combos from a fresh or saved analysis.
#[instrument(skip_all, fields(title = %packaging.title))]
pub async fn combos(
    studio: &Studio<GeminiClient>,
    packaging: &Packaging,
    source: &AnalysisSource,
    out_dir: Option<&Path>,
    json: bool,
) -> ClickforgeResult<()> {
    let analysis = resolve_analysis(studio, packaging, source).await?;
    let combos = studio.generate_combos(&analysis, &packaging.title).await?;
    render::combos(&combos, out_dir, json)
}

/// Generate a script from a fresh or saved analysis.
#[instrument(skip_all, fields(title = %packaging.title))]
pub async fn script(
    studio: &Studio<GeminiClient>,
    packaging: &Packaging,
    source: &AnalysisSource,
    json: bool,
) -> ClickforgeResult<()> {
    let analysis = resolve_analysis(studio, packaging, source).await?;
    let script = studio.generate_script(&analysis, &packaging.title).await?;
    render::script(&script, json)
}

/// Analyze, then run combos and script side by side.
///
/// Returns `false` when at least one job failed; failures are reported and
/// do not stop the other job.
#[instrument(skip_all, fields(title = %packaging.title))]
pub async fn run_all(
    studio: &Studio<GeminiClient>,
    packaging: &Packaging,
    out_dir: Option<&Path>,
    with_combos: bool,
    with_script: bool,
    json: bool,
) -> ClickforgeResult<bool> {
    let thumbnail = load_thumbnail(packaging)?;
    let title = packaging.title.as_str();
    let mut session = Session::new();

    let ticket = session.analysis_mut().begin();
    let outcome = studio.analyze(title, thumbnail).await;
    if outcome.as_ref().is_err_and(|e| e.is_configuration()) {
        warn!("Stopping: configuration must be fixed before any job can run");
    }
    session.analysis_mut().settle(ticket, outcome);

    let Some(analysis) = session.analysis().result().cloned() else {
        render::session(&session, out_dir, json)?;
        return Ok(false);
    };

    let combos_ticket = with_combos.then(|| session.combos_mut().begin());
    let script_ticket = with_script.then(|| session.script_mut().begin());
    info!(combos = with_combos, script = with_script, "Analysis ready, starting follow-up jobs");

    let (combos, script) = tokio::join!(
        async {
            if with_combos {
                Some(studio.generate_combos(&analysis, title).await)
            } else {
                None
            }
        },
        async {
            if with_script {
                Some(studio.generate_script(&analysis, title).await)
            } else {
                None
            }
        },
    );

    if let (Some(ticket), Some(outcome)) = (combos_ticket, combos) {
        session.combos_mut().settle(ticket, outcome);
    }
    if let (Some(ticket), Some(outcome)) = (script_ticket, script) {
        session.script_mut().settle(ticket, outcome);
    }

    render::session(&session, out_dir, json)?;

    let failed = session.combos().error().is_some() || session.script().error().is_some();
    Ok(!failed)
}

/// Read the thumbnail named on the command line.
fn load_thumbnail(packaging: &Packaging) -> ClickforgeResult<ImageInput> {
    let path = packaging
        .image
        .as_deref()
        .ok_or_else(|| InputError::new(InputErrorKind::MissingImage))?;
    let bytes = std::fs::read(path).map_err(|e| {
        FileError::new(FileErrorKind::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    let mime = packaging
        .mime
        .clone()
        .unwrap_or_else(|| guess_mime(path));
    Ok(ImageInput::raw(bytes, mime))
}

/// Load a saved analysis, or analyze the thumbnail if none was given.
async fn resolve_analysis(
    studio: &Studio<GeminiClient>,
    packaging: &Packaging,
    source: &AnalysisSource,
) -> ClickforgeResult<AnalysisResult> {
    match &source.analysis {
        Some(path) => load_analysis(path),
        None => {
            let thumbnail = load_thumbnail(packaging)?;
            studio.analyze(&packaging.title, thumbnail).await
        }
    }
}

fn load_analysis(path: &Path) -> ClickforgeResult<AnalysisResult> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        FileError::new(FileErrorKind::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    Ok(AnalysisResult::parse_response(&text)?)
}

/// MIME type from the file extension; unknown extensions pass through so the
/// encoder can reject them.
fn guess_mime(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    match ImageMime::from_extension(ext) {
        Some(mime) => mime.as_str().to_string(),
        None => format!("image/{}", ext.to_ascii_lowercase()),
    }
}
