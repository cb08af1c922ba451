//! End-to-end story generation against a real provider.

use conteur_core::{NodeId, StoryRequest};
use conteur_interface::ProviderKind;
use conteur_models::{ProviderConfig, driver_for};
use conteur_narrative::{Dispatch, PipelineConfig, StoryAssembler};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_real_provider_story() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let driver = driver_for(ProviderConfig::from_env(ProviderKind::Anthropic))?;
    let config = PipelineConfig::builder()
        .dispatch(Dispatch::Concurrent)
        .build()?;
    let assembler = StoryAssembler::with_config(driver, config);

    let request = StoryRequest::from_form(
        "Le ballon magique",
        "Une aventure au stade",
        "Léo, 6 ans, adore le football",
        "aventure",
    )?;
    let story = assembler.assemble_story(&request).await?;

    assert_eq!(story.nodes().len(), 8);
    assert!(story.node(NodeId::EndingA1).unwrap().text().ends_with("FIN"));
    Ok(())
}
