//! Story assembly over a completion driver.

use crate::{
    Dispatch, PipelineConfig, SYSTEM_PROMPT, StoryPrompts, extract_choices, strip_option_lines,
};
use conteur_core::{
    CompletionRequest, END_MARKER, NodeId, Story, StoryNode, StoryRequest, StoryVariant,
};
use conteur_error::{
    ConteurResult, NarrativeError, NarrativeErrorKind, ValidationError, ValidationErrorKind,
};
use conteur_interface::CompletionDriver;
use conteur_retry::with_retry;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Continuation produced for the interactive reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continuation {
    /// Next part of the story, without its option lines
    pub text: String,
    /// The two options offered at the end of this part
    pub choices: [String; 2],
}

/// Drives the fixed story tree over a completion driver.
///
/// Every generation goes through the configured retry policy. Any stage that
/// still fails aborts the whole assembly; no partial story is returned.
///
/// # Example
///
/// ```rust,ignore
/// use conteur_narrative::StoryAssembler;
///
/// let assembler = StoryAssembler::new(driver);
/// let story = assembler.assemble_story(&request).await?;
/// assert_eq!(story.nodes().len(), 8);
/// ```
pub struct StoryAssembler<D: CompletionDriver> {
    driver: D,
    config: PipelineConfig,
}

impl<D: CompletionDriver> StoryAssembler<D> {
    /// Create a new assembler with the default pipeline settings.
    pub fn new(driver: D) -> Self {
        Self::with_config(driver, PipelineConfig::default())
    }

    /// Create a new assembler with explicit pipeline settings.
    pub fn with_config(driver: D, config: PipelineConfig) -> Self {
        Self { driver, config }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The pipeline settings.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs one stage with retries, labelling failures with the stage name.
    #[instrument(skip(self, stage, prompt), fields(stage = %stage))]
    async fn stage(&self, stage: NodeId, prompt: String) -> ConteurResult<String> {
        let request = CompletionRequest::new(prompt)
            .with_system(SYSTEM_PROMPT)
            .with_params(*self.config.params());

        debug!(provider = self.driver.provider_name(), "Generating stage");
        let text = with_retry(self.config.retry(), || self.driver.complete(&request))
            .await
            .map_err(|e| {
                error!(error = %e, "Stage failed");
                NarrativeError::new(NarrativeErrorKind::StageFailed {
                    stage: stage.to_string(),
                    message: e.to_string(),
                })
            })?;
        info!(chars = text.len(), "Stage complete");
        Ok(text)
    }

    async fn pause(&self) {
        let delay = self.config.inter_call_delay();
        if delay > Duration::ZERO {
            tokio::time::sleep(delay).await;
        }
    }

    /// Runs two sibling stages according to the dispatch policy.
    async fn pair(
        &self,
        first: (NodeId, String),
        second: (NodeId, String),
    ) -> ConteurResult<(String, String)> {
        match self.config.dispatch() {
            Dispatch::Sequential => {
                self.pause().await;
                let a = self.stage(first.0, first.1).await?;
                self.pause().await;
                let b = self.stage(second.0, second.1).await?;
                Ok((a, b))
            }
            Dispatch::Concurrent => {
                futures::try_join!(self.stage(first.0, first.1), self.stage(second.0, second.1))
            }
        }
    }

    /// Generates the eight-page branching story.
    ///
    /// # Errors
    ///
    /// Returns a narrative error naming the first stage whose generation
    /// failed after retries.
    #[instrument(skip(self, request), fields(style = %request.style()))]
    pub async fn assemble_story(&self, request: &StoryRequest) -> ConteurResult<Story> {
        info!(dispatch = %self.config.dispatch(), "Assembling branching story");
        let prompts = StoryPrompts::new(request);

        let intro = self.stage(NodeId::Intro, prompts.intro()).await?;
        let intro = strip_option_lines(&intro);

        self.pause().await;
        let page1_raw = self.stage(NodeId::Page1, prompts.page1(&intro)).await?;
        let page1 = extract_choices(&page1_raw, ["A", "B"]);
        let [choice_a, choice_b] = page1.labels();

        let (page2a_raw, page2b_raw) = self
            .pair(
                (
                    NodeId::Page2A,
                    prompts.page2(&intro, page1.prose(), choice_a, ["A1", "A2"]),
                ),
                (
                    NodeId::Page2B,
                    prompts.page2(&intro, page1.prose(), choice_b, ["B1", "B2"]),
                ),
            )
            .await?;
        let page2a = extract_choices(&page2a_raw, ["A1", "A2"]);
        let page2b = extract_choices(&page2b_raw, ["B1", "B2"]);
        let [choice_a1, choice_a2] = page2a.labels();
        let [choice_b1, choice_b2] = page2b.labels();

        let ending_prompts = [
            (NodeId::EndingA1, prompts.ending(page2a.prose(), choice_a1)),
            (NodeId::EndingA2, prompts.ending(page2a.prose(), choice_a2)),
            (NodeId::EndingB1, prompts.ending(page2b.prose(), choice_b1)),
            (NodeId::EndingB2, prompts.ending(page2b.prose(), choice_b2)),
        ];
        let endings = self.endings(ending_prompts).await?;

        let mut nodes = vec![
            StoryNode::linear(NodeId::Intro, intro),
            StoryNode::branching(NodeId::Page1, page1.prose(), page1.labels()),
            StoryNode::branching(NodeId::Page2A, page2a.prose(), page2a.labels()),
            StoryNode::branching(NodeId::Page2B, page2b.prose(), page2b.labels()),
        ];
        nodes.extend(
            NodeId::TREE[4..]
                .iter()
                .zip(endings)
                .map(|(id, text)| StoryNode::linear(*id, terminal_text(&text))),
        );

        info!(nodes = nodes.len(), "Story assembled");
        Ok(Story::new(
            request.title().clone(),
            request.subtitle().clone(),
            request.style().clone(),
            nodes,
        ))
    }

    /// Runs the four ending stages, returning texts in leaf order.
    async fn endings(&self, prompts: [(NodeId, String); 4]) -> ConteurResult<[String; 4]> {
        let [a1, a2, b1, b2] = prompts;
        match self.config.dispatch() {
            Dispatch::Sequential => {
                self.pause().await;
                let t1 = self.stage(a1.0, a1.1).await?;
                self.pause().await;
                let t2 = self.stage(a2.0, a2.1).await?;
                self.pause().await;
                let t3 = self.stage(b1.0, b1.1).await?;
                self.pause().await;
                let t4 = self.stage(b2.0, b2.1).await?;
                Ok([t1, t2, t3, t4])
            }
            Dispatch::Concurrent => {
                let (t1, t2, t3, t4) = futures::try_join!(
                    self.stage(a1.0, a1.1),
                    self.stage(a2.0, a2.1),
                    self.stage(b1.0, b1.1),
                    self.stage(b2.0, b2.1),
                )?;
                Ok([t1, t2, t3, t4])
            }
        }
    }

    /// Generates a one-page story.
    #[instrument(skip(self, request), fields(style = %request.style()))]
    pub async fn assemble_single(&self, request: &StoryRequest) -> ConteurResult<Story> {
        let prompts = StoryPrompts::new(request);
        let text = self.stage(NodeId::Story, prompts.single()).await?;
        Ok(Story::new(
            request.title().clone(),
            request.subtitle().clone(),
            request.style().clone(),
            vec![StoryNode::linear(NodeId::Story, terminal_text(&text))],
        ))
    }

    /// Generates the story shape selected by `variant`.
    pub async fn assemble(
        &self,
        request: &StoryRequest,
        variant: StoryVariant,
    ) -> ConteurResult<Story> {
        match variant {
            StoryVariant::Full => self.assemble_story(request).await,
            StoryVariant::Single => self.assemble_single(request).await,
        }
    }

    /// Generates the story and returns it as one document.
    pub async fn assemble_document(&self, request: &StoryRequest) -> ConteurResult<String> {
        Ok(self.assemble_story(request).await?.to_document())
    }

    /// Continues an interactive story after the reader picked an option.
    ///
    /// # Errors
    ///
    /// Returns a validation error when either input is blank, without
    /// calling the provider.
    #[instrument(skip(self, previous, choice))]
    pub async fn continue_story(
        &self,
        previous: &str,
        choice: &str,
    ) -> ConteurResult<Continuation> {
        if previous.trim().is_empty() {
            Err(ValidationError::new(ValidationErrorKind::MissingField(
                "previousPart".to_string(),
            )))?
        }
        if choice.trim().is_empty() {
            Err(ValidationError::new(ValidationErrorKind::MissingField(
                "choiceMade".to_string(),
            )))?
        }

        // A continuation is generated like a first branching page
        let raw = self
            .stage(NodeId::Page1, StoryPrompts::continuation(previous, choice))
            .await?;
        let extracted = extract_choices(&raw, ["A", "B"]);
        let [first, second] = extracted.labels();
        Ok(Continuation {
            text: extracted.prose().clone(),
            choices: [first.to_string(), second.to_string()],
        })
    }
}

/// Text of a page with no outgoing choices: option lines dropped, marker appended.
fn terminal_text(text: &str) -> String {
    with_end_marker(&strip_option_lines(text))
}

/// Appends the terminal marker unless the text already ends with it.
fn with_end_marker(text: &str) -> String {
    let trimmed = text.trim();
    let last_line = trimmed.lines().last().unwrap_or_default();
    let closed = last_line
        .trim()
        .trim_matches(|c: char| !c.is_alphanumeric())
        .eq_ignore_ascii_case(END_MARKER);
    if closed {
        trimmed.to_string()
    } else {
        format!("{}\n\n{}", trimmed, END_MARKER)
    }
}
