//! One-shot story generation.

use super::GenerateArgs;
use anyhow::Context;
use conteur::{
    AppConfig, StoryAssembler, StoryRequest, driver_for, parse_document, render_html, render_pdf,
};
use tracing::info;

/// Generates one story, prints its document and writes the requested files.
pub async fn run_generate(config: AppConfig, args: GenerateArgs) -> anyhow::Result<()> {
    let request = StoryRequest::builder()
        .child_info(args.child_info)
        .style(args.style)
        .title(args.title)
        .subtitle(args.subtitle)
        .build()?;

    let driver = driver_for(config.provider_config())?;
    let assembler = StoryAssembler::with_config(driver, config.pipeline_config()?);
    let story = assembler.assemble(&request, args.variant).await?;
    let document = story.to_document();
    println!("{}", document);

    if let Some(path) = args.html {
        let html = render_html(&parse_document(&document));
        std::fs::write(&path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Wrote HTML");
    }

    if let Some(path) = args.pdf {
        let title = story.title().clone();
        let subtitle = story.subtitle().clone();
        let bytes = tokio::task::spawn_blocking(move || {
            render_pdf(&document, title.as_deref(), subtitle.as_deref())
        })
        .await??;
        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Wrote PDF");
    }

    Ok(())
}
