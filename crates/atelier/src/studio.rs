//! The creative generation orchestrator.

use crate::StudioConfig;
use crate::guard::InFlight;
use atelier_core::{
    ANIMATION_PROMPT, AspectRatio, AssetParameters, GeneratedAsset, GenerationKind,
    GenerationRequest, JobHandle, MediaPayload, Recommendation, ResolutionTier, SourceImage,
    VideoPhase, image_prompt, recommendation_prompt, recommendation_schema,
};
use atelier_error::{
    AtelierError, AtelierResult, GeminiError, GeminiErrorKind, StudioError, StudioErrorKind,
};
use atelier_interface::{
    ContentPart, CredentialProvider, GenerativeProvider, ImagePrompt, ProgressReporter,
    StructuredPrompt, TracingReporter, VideoPrompt,
};
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Result of [`CreativeStudio::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Recommendation, or `None` when the occasion text was blank
    Recommendation(Option<Recommendation>),
    /// Generated image or video
    Asset(GeneratedAsset),
}

/// Turns user intent into provider calls and hands back results.
///
/// Each operation is a single invocation: errors are terminal and nothing is
/// retried. At most one operation of each [`GenerationKind`] runs at a time;
/// a concurrent call of the same kind fails with `Busy`.
///
/// The credential is checked before every provider call. When the provider
/// rejects it, the credential selection flow runs once and the operation
/// fails with `Entitlement`; the user resubmits.
pub struct CreativeStudio<P, C> {
    provider: P,
    credentials: C,
    config: StudioConfig,
    reporter: Arc<dyn ProgressReporter>,
    in_flight: InFlight,
    video_phase: watch::Sender<VideoPhase>,
    teardown: CancellationToken,
}

impl<P, C> std::fmt::Debug for CreativeStudio<P, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreativeStudio")
            .field("config", &self.config)
            .field("in_flight", &self.in_flight)
            .field("video_phase", &*self.video_phase.borrow())
            .finish_non_exhaustive()
    }
}

impl<P, C> CreativeStudio<P, C>
where
    P: GenerativeProvider,
    C: CredentialProvider,
{
    /// Creates a studio over a provider and a credential source.
    pub fn new(provider: P, credentials: C, config: StudioConfig) -> Self {
        let (video_phase, _) = watch::channel(VideoPhase::Idle);
        Self {
            provider,
            credentials,
            config,
            reporter: Arc::new(TracingReporter),
            in_flight: InFlight::default(),
            video_phase,
            teardown: CancellationToken::new(),
        }
    }

    /// Sends status lines to `reporter` instead of the log.
    pub fn with_reporter(mut self, reporter: impl ProgressReporter + 'static) -> Self {
        self.reporter = Arc::new(reporter);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Returns the provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the credential source.
    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    /// Whether a generation of `kind` is in flight.
    pub fn is_busy(&self, kind: GenerationKind) -> bool {
        self.in_flight.is_busy(kind)
    }

    /// Observes the phase of the current or last video generation.
    pub fn subscribe_video_phase(&self) -> watch::Receiver<VideoPhase> {
        self.video_phase.subscribe()
    }

    /// Token cancelled when the studio is torn down.
    ///
    /// Clone it into whatever owns the studio's lifetime (a UI, a signal
    /// handler) so teardown reaches polling loops.
    pub fn teardown_token(&self) -> CancellationToken {
        self.teardown.clone()
    }

    /// Abandons every polling video job. Later animations fail with `Cancelled`.
    pub fn shutdown(&self) {
        info!("Studio shutting down");
        self.teardown.cancel();
    }

    /// Runs any tagged request.
    pub async fn generate(&self, request: GenerationRequest) -> AtelierResult<GenerationOutcome> {
        match request {
            GenerationRequest::Recommendation { occasion_text } => self
                .recommend(&occasion_text)
                .await
                .map(GenerationOutcome::Recommendation),
            GenerationRequest::Image {
                prompt,
                resolution_tier,
            } => self
                .generate_image(&prompt, resolution_tier)
                .await
                .map(GenerationOutcome::Asset),
            GenerationRequest::Video {
                source_image,
                aspect_ratio,
            } => self
                .animate_image(source_image, aspect_ratio)
                .await
                .map(GenerationOutcome::Asset),
        }
    }

    /// Suggests a cake for an occasion.
    ///
    /// Blank text is a no-op: `Ok(None)` without contacting the provider.
    ///
    /// # Errors
    ///
    /// `ResponseFormat` when the response is not a JSON object with
    /// non-empty `name` and `reason`; `Entitlement`, `GenerationFailed`, or
    /// `Busy` otherwise.
    #[instrument(skip(self), fields(provider = self.provider.provider_name()))]
    pub async fn recommend(&self, occasion_text: &str) -> AtelierResult<Option<Recommendation>> {
        let occasion = occasion_text.trim();
        if occasion.is_empty() {
            debug!("Blank occasion, nothing to recommend");
            return Ok(None);
        }

        let kind = GenerationKind::Recommendation;
        let _slot = self.in_flight.try_begin(kind)?;
        self.ensure_entitlement().await?;

        let request = StructuredPrompt::new(
            recommendation_prompt(occasion),
            recommendation_schema(),
            *self.config.thinking_budget(),
        );

        let parts = match self.provider.generate_structured(&request).await {
            Ok(parts) => parts,
            Err(e) => return Err(self.classify(kind, e).await),
        };

        let text: String = parts.iter().filter_map(ContentPart::as_text).collect();
        if text.trim().is_empty() {
            warn!("Recommendation response carried no text");
            return Err(StudioError::new(StudioErrorKind::ResponseFormat(
                "response has no text part".to_string(),
            ))
            .into());
        }

        let recommendation = Recommendation::from_json(&text).inspect_err(|e| {
            warn!(error = %e, "Discarding malformed recommendation");
        })?;

        info!(name = %recommendation.name(), "Recommendation ready");
        Ok(Some(recommendation))
    }

    /// Renders a concept image of the described cake.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a blank prompt (no provider activity), `NoContent`
    /// when the response has no image part, `Entitlement`,
    /// `GenerationFailed`, or `Busy` otherwise.
    #[instrument(skip(self), fields(provider = self.provider.provider_name()))]
    pub async fn generate_image(
        &self,
        prompt: &str,
        resolution_tier: ResolutionTier,
    ) -> AtelierResult<GeneratedAsset> {
        let description = prompt.trim();
        if description.is_empty() {
            return Err(StudioError::new(StudioErrorKind::InvalidInput(
                "image prompt is empty".to_string(),
            ))
            .into());
        }

        let kind = GenerationKind::Image;
        let _slot = self.in_flight.try_begin(kind)?;
        self.ensure_entitlement().await?;

        let request = ImagePrompt::new(
            image_prompt(description),
            resolution_tier,
            self.config.image_aspect_ratio().clone(),
        );

        let parts = match self.provider.generate_image(&request).await {
            Ok(parts) => parts,
            Err(e) => return Err(self.classify(kind, e).await),
        };

        let (mime, data) = parts
            .into_iter()
            .find_map(|part| match part {
                ContentPart::InlineData { mime, data } if mime.starts_with("image/") => {
                    Some((mime, data))
                }
                _ => None,
            })
            .ok_or_else(|| {
                warn!("Image response carried no image part");
                StudioError::new(StudioErrorKind::NoContent(
                    "response has no image part".to_string(),
                ))
            })?;

        info!(mime = %mime, bytes = data.len(), "Image ready");
        Ok(GeneratedAsset::new(
            MediaPayload::Image { mime, data },
            AssetParameters::Image {
                prompt: description.to_string(),
                resolution_tier,
            },
        ))
    }

    /// Animates an image into a short video, polling until the job finishes.
    ///
    /// Polling stops early when the studio is shut down.
    pub async fn animate_image(
        &self,
        source_image: SourceImage,
        aspect_ratio: AspectRatio,
    ) -> AtelierResult<GeneratedAsset> {
        self.animate_image_with_cancel(source_image, aspect_ratio, &CancellationToken::new())
            .await
    }

    /// Animates an image, abandoning the job when `cancel` fires.
    ///
    /// Protocol: submit the job, then repeatedly wait one polling interval
    /// and query the job until it reports done, then download the video.
    /// The first query always follows a full interval. The credential is
    /// checked before the submission, before each query, and before the
    /// download.
    ///
    /// # Errors
    ///
    /// `Cancelled` when `cancel` or studio teardown fires during a wait,
    /// `PollLimitExceeded` when the configured number of polls is used up,
    /// `NoContent` when the finished job has no video, `Entitlement`,
    /// `GenerationFailed`, or `Busy` otherwise.
    #[instrument(skip(self, source_image, cancel), fields(provider = self.provider.provider_name()))]
    pub async fn animate_image_with_cancel(
        &self,
        source_image: SourceImage,
        aspect_ratio: AspectRatio,
        cancel: &CancellationToken,
    ) -> AtelierResult<GeneratedAsset> {
        let _slot = self.in_flight.try_begin(GenerationKind::Video)?;

        let result = self.run_video(source_image, aspect_ratio, cancel).await;
        match &result {
            Ok(_) => self.set_phase(VideoPhase::Complete),
            Err(e) => {
                warn!(error = %e, "Video generation failed");
                self.set_phase(VideoPhase::Failed);
            }
        }
        result
    }

    async fn run_video(
        &self,
        source_image: SourceImage,
        aspect_ratio: AspectRatio,
        cancel: &CancellationToken,
    ) -> AtelierResult<GeneratedAsset> {
        let kind = GenerationKind::Video;
        self.ensure_entitlement().await?;

        self.set_phase(VideoPhase::Submitting);
        let source_mime = source_image.mime().clone();
        let request = VideoPrompt::new(
            ANIMATION_PROMPT,
            source_image,
            aspect_ratio,
            self.config.video_resolution().clone(),
        );

        let mut job = match self.provider.submit_video(&request).await {
            Ok(job) => job,
            Err(e) => return Err(self.classify(kind, e).await),
        };
        info!(job = %job.id(), "Video job submitted");

        job = self.poll_until_done(job, cancel).await?;

        if let Some(message) = job.error() {
            let failure = GeminiError::new(GeminiErrorKind::OperationFailed(message.clone()));
            return Err(self.classify(kind, failure.into()).await);
        }

        let uri = job.result_uri().clone().ok_or_else(|| {
            warn!(job = %job.id(), "Finished job has no video reference");
            StudioError::new(StudioErrorKind::NoContent(
                "finished job has no video".to_string(),
            ))
        })?;

        self.set_phase(VideoPhase::Fetching);
        self.ensure_entitlement().await?;
        let payload = match self.provider.fetch_video(&uri).await {
            Ok(payload) => payload,
            Err(e) => return Err(self.classify(kind, e).await),
        };

        if payload.data().is_empty() {
            return Err(StudioError::new(StudioErrorKind::NoContent(
                "downloaded video is empty".to_string(),
            ))
            .into());
        }

        info!(bytes = payload.data().len(), mime = %payload.mime(), "Video ready");
        Ok(GeneratedAsset::new(
            payload,
            AssetParameters::Video {
                aspect_ratio,
                source_mime,
            },
        ))
    }

    async fn poll_until_done(
        &self,
        mut job: JobHandle,
        cancel: &CancellationToken,
    ) -> AtelierResult<JobHandle> {
        let interval = self.config.polling().interval();
        let max_attempts = self.config.polling().attempt_limit();
        let mut attempt: u32 = 0;

        loop {
            if max_attempts.is_some_and(|max| attempt >= max) {
                warn!(job = %job.id(), attempts = attempt, "Giving up on video job");
                return Err(StudioError::new(StudioErrorKind::PollLimitExceeded {
                    attempts: attempt,
                })
                .into());
            }
            attempt += 1;
            self.set_phase(VideoPhase::Polling { attempt });

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    warn!(job = %job.id(), "Video job abandoned by caller");
                    return Err(StudioError::new(StudioErrorKind::Cancelled).into());
                }
                _ = self.teardown.cancelled() => {
                    warn!(job = %job.id(), "Video job abandoned at teardown");
                    return Err(StudioError::new(StudioErrorKind::Cancelled).into());
                }
                _ = tokio::time::sleep(interval) => {}
            }

            self.ensure_entitlement().await?;
            job = match self.provider.poll_video(&job).await {
                Ok(next) => next,
                Err(e) => return Err(self.classify(GenerationKind::Video, e).await),
            };
            debug!(job = %job.id(), attempt, done = *job.done(), "Polled video job");

            if *job.done() {
                return Ok(job);
            }
        }
    }

    fn set_phase(&self, phase: VideoPhase) {
        debug!(?phase, "Video phase");
        if let Some(status) = phase.status_line() {
            self.reporter.report(GenerationKind::Video, status);
        }
        self.video_phase.send_replace(phase);
    }

    /// Makes sure a credential is selected, running the selection flow if not.
    async fn ensure_entitlement(&self) -> AtelierResult<()> {
        if self.credentials.has_valid_credential().await {
            return Ok(());
        }

        info!("No credential selected, starting selection");
        if let Err(e) = self.credentials.select_credential().await {
            warn!(error = %e, "Credential selection abandoned");
            return Err(StudioError::new(StudioErrorKind::Entitlement(e.to_string())).into());
        }

        if !self.credentials.has_valid_credential().await {
            return Err(StudioError::new(StudioErrorKind::Entitlement(
                "selection finished without a usable credential".to_string(),
            ))
            .into());
        }
        Ok(())
    }

    /// Maps a provider failure onto the studio taxonomy.
    ///
    /// Credential failures trigger one reselection; the operation itself is
    /// not retried.
    async fn classify(&self, kind: GenerationKind, err: AtelierError) -> AtelierError {
        if err.studio_kind().is_some() {
            return err;
        }

        if err.is_entitlement() {
            warn!(kind = %kind, error = %err, "Provider rejected the credential, reselecting");
            if let Err(select_err) = self.credentials.select_credential().await {
                warn!(error = %select_err, "Credential reselection failed");
            }
            return StudioError::new(StudioErrorKind::Entitlement(err.to_string())).into();
        }

        warn!(kind = %kind, error = %err, "Provider call failed");
        StudioError::new(StudioErrorKind::GenerationFailed(err.to_string())).into()
    }
}
