//! The three studio jobs and the calls they issue.

use futures::future::try_join_all;
use tracing::{debug, info, instrument, warn};

use clickforge_core::{
    AnalysisResult, ComboIdea, ComboIdeaBatch, GenerateRequest, GenerateResponse, GeneratedCombo,
    ScriptResult,
};
use clickforge_error::{
    ClickforgeError, ClickforgeErrorKind, ClickforgeResult, ContractError, ContractErrorKind,
    GeminiError, GeminiErrorKind, InputError, InputErrorKind, JobError, JobErrorKind,
};
use clickforge_interface::ModelDriver;

use crate::{ImageInput, StructuredResponse, StudioSettings, prompts};

/// Number of combinations one combo job produces.
pub const COMBO_COUNT: usize = 3;

/// Runs analysis, combo and script jobs against a model driver.
///
/// Each job resolves to one typed record or one error; nothing partial is
/// returned. Configuration errors (missing or rejected API key) pass through
/// unchanged; every other failure is wrapped in the job's own error kind.
///
/// # Examples
///
/// ```no_run
/// use clickforge_studio::{ImageInput, Studio, StudioSettings};
/// use clickforge_models::GeminiClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let studio = Studio::new(GeminiClient::from_env()?, StudioSettings::default());
///
/// let thumbnail = std::fs::read("thumbnail.jpg")?;
/// let title = "10 Foods That Destroy Your Metabolism";
/// let analysis = studio.analyze(title, ImageInput::raw(thumbnail, "image/jpeg")).await?;
/// let script = studio.generate_script(&analysis, title).await?;
/// println!("{}", script.hook);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Studio<D> {
    driver: D,
    settings: StudioSettings,
}

impl<D: ModelDriver> Studio<D> {
    /// Create a studio over a driver.
    pub fn new(driver: D, settings: StudioSettings) -> Self {
        Self { driver, settings }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Active settings.
    pub fn settings(&self) -> &StudioSettings {
        &self.settings
    }

    /// Evaluate a title and thumbnail together.
    ///
    /// # Errors
    ///
    /// - `EmptyTitle`, `UnsupportedFormat`, `TooLarge` before any call
    /// - configuration errors from the driver, unwrapped
    /// - `AnalysisFailed` for call, timeout and malformed-response failures
    #[instrument(skip(self, image))]
    pub async fn analyze(
        &self,
        title: &str,
        image: impl Into<ImageInput>,
    ) -> ClickforgeResult<AnalysisResult> {
        if title.trim().is_empty() {
            return Err(InputError::new(InputErrorKind::EmptyTitle).into());
        }
        let image: ImageInput = image.into();
        let image = image.into_encoded()?;

        let request = GenerateRequest::structured(
            self.settings.analysis_model(),
            prompts::analysis_prompt(title),
            Some(image),
            AnalysisResult::schema().to_json(),
        )?;

        let response = self
            .call(&request)
            .await
            .map_err(|e| job_failure(e, JobErrorKind::AnalysisFailed))?;
        let analysis = AnalysisResult::parse_response(&response.text())
            .map_err(|e| job_failure(e.into(), JobErrorKind::AnalysisFailed))?;

        info!(
            strengths = analysis.strengths.len(),
            weaknesses = analysis.weaknesses.len(),
            improvements = analysis.improvements.len(),
            "Analysis complete"
        );
        Ok(analysis)
    }

    /// Propose three new combinations and draw a thumbnail for each.
    ///
    /// The three image calls run concurrently; the first failure cancels the
    /// rest and fails the whole job. Output order follows idea order.
    ///
    /// # Errors
    ///
    /// - `ImageDataMissing` naming the prompt whose image call returned no
    ///   image or timed out
    /// - `ImageGenerationFailed` for the combo-ideas call, including its
    ///   timeout, and for image-call failures other than a timeout or a
    ///   missing image
    #[instrument(skip(self, analysis))]
    pub async fn generate_combos(
        &self,
        analysis: &AnalysisResult,
        title: &str,
    ) -> ClickforgeResult<[GeneratedCombo; COMBO_COUNT]> {
        let request = GenerateRequest::structured(
            self.settings.ideas_model(),
            prompts::combo_ideas_prompt(analysis, title),
            None,
            ComboIdeaBatch::schema().to_json(),
        )?;

        let response = self
            .call(&request)
            .await
            .map_err(|e| job_failure(e, JobErrorKind::ImageGenerationFailed))?;
        let ideas = ComboIdeaBatch::parse_response(&response.text())
            .and_then(select_ideas)
            .map_err(|e| job_failure(e.into(), JobErrorKind::ImageGenerationFailed))?;

        debug!(ideas = ideas.len(), "Rendering combo thumbnails");
        let combos = try_join_all(ideas.iter().map(|idea| self.render_combo(idea))).await?;

        let combos = <[GeneratedCombo; COMBO_COUNT]>::try_from(combos).map_err(|rest| {
            ContractError::new(ContractErrorKind::BatchSize {
                expected: COMBO_COUNT,
                actual: rest.len(),
            })
        })?;

        info!("Combo generation complete");
        Ok(combos)
    }

    /// Write a full narration script informed by the analysis.
    ///
    /// # Errors
    ///
    /// `ScriptFailed` for call, timeout and malformed-response failures.
    #[instrument(skip(self, analysis))]
    pub async fn generate_script(
        &self,
        analysis: &AnalysisResult,
        title: &str,
    ) -> ClickforgeResult<ScriptResult> {
        let request = GenerateRequest::structured(
            self.settings.script_model(),
            prompts::script_prompt(analysis, title),
            None,
            ScriptResult::schema().to_json(),
        )?;

        let response = self
            .call(&request)
            .await
            .map_err(|e| job_failure(e, JobErrorKind::ScriptFailed))?;
        let script = ScriptResult::parse_response(&response.text())
            .map_err(|e| job_failure(e.into(), JobErrorKind::ScriptFailed))?;

        info!(sections = script.sections.len(), "Script complete");
        Ok(script)
    }

    /// One image call for one idea.
    #[instrument(skip(self, idea), fields(title = %idea.title))]
    async fn render_combo(&self, idea: &ComboIdea) -> ClickforgeResult<GeneratedCombo> {
        let missing = || {
            ClickforgeError::from(JobError::new(JobErrorKind::ImageDataMissing {
                prompt: idea.thumbnail_prompt.clone(),
            }))
        };

        let request =
            GenerateRequest::image(self.settings.image_model(), idea.thumbnail_prompt.clone())?;

        let response = match self.call(&request).await {
            Ok(response) => response,
            Err(e) if is_timeout(&e) => return Err(missing()),
            Err(e) => return Err(job_failure(e, JobErrorKind::ImageGenerationFailed)),
        };

        let image = response.first_image().ok_or_else(|| {
            warn!(prompt = %idea.thumbnail_prompt, "Image response had no inline image");
            missing()
        })?;

        Ok(GeneratedCombo::new(idea.title.clone(), &image))
    }

    /// Issue one call, bounded by the configured timeout.
    async fn call(&self, request: &GenerateRequest) -> ClickforgeResult<GenerateResponse> {
        let limit = self.settings.call_timeout();
        match tokio::time::timeout(limit, self.driver.generate(request)).await {
            Ok(result) => result,
            Err(_) => {
                let millis = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
                warn!(
                    provider = self.driver.provider_name(),
                    model = request.model().as_deref().unwrap_or(self.driver.model_name()),
                    timeout_ms = millis,
                    "Model call timed out"
                );
                Err(GeminiError::new(GeminiErrorKind::Timeout(millis)).into())
            }
        }
    }
}

/// Keep the first [`COMBO_COUNT`] ideas; fewer is a contract violation.
fn select_ideas(batch: ComboIdeaBatch) -> Result<Vec<ComboIdea>, ContractError> {
    let actual = batch.combinations.len();
    if actual < COMBO_COUNT {
        return Err(ContractError::new(ContractErrorKind::BatchSize {
            expected: COMBO_COUNT,
            actual,
        }));
    }
    if actual > COMBO_COUNT {
        warn!(actual, "Model returned extra combo ideas; keeping the first {}", COMBO_COUNT);
    }
    Ok(batch.combinations.into_iter().take(COMBO_COUNT).collect())
}

/// Wrap a failure in the job's error kind unless it is a configuration error.
///
/// The cause keeps the full rendering of `err`, source location included.
fn job_failure(err: ClickforgeError, kind: fn(String) -> JobErrorKind) -> ClickforgeError {
    if err.is_configuration() {
        return err;
    }
    tracing::error!(error = %err, "Job failed");
    JobError::new(kind(err.to_string())).into()
}

fn is_timeout(err: &ClickforgeError) -> bool {
    matches!(
        err.kind(),
        ClickforgeErrorKind::Gemini(e) if matches!(e.kind, GeminiErrorKind::Timeout(_))
    )
}
