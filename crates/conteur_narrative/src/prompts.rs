//! French prompts of every pipeline stage.

use conteur_core::{END_MARKER, StoryRequest};

/// System instructions shared by every stage.
pub const SYSTEM_PROMPT: &str = "Tu es un conteur bienveillant qui écrit des histoires \
pour enfants en français. Tes phrases sont simples, chaleureuses et adaptées à un jeune \
lecteur. Tu n'écris jamais de contenu effrayant ou violent. Tu réponds uniquement avec \
le texte de l'histoire, sans commentaire ni titre.";

/// Prompt builder bound to one story request.
#[derive(Debug, Clone)]
pub struct StoryPrompts {
    child_info: String,
    style: String,
    title: Option<String>,
}

impl StoryPrompts {
    /// Captures the request fields every prompt refers to.
    pub fn new(request: &StoryRequest) -> Self {
        Self {
            child_info: request.child_info().clone(),
            style: request.style().description(),
            title: request.title().clone(),
        }
    }

    fn context(&self) -> String {
        let mut context = format!(
            "Informations sur l'enfant : {}\nStyle de l'histoire : {}",
            self.child_info, self.style
        );
        if let Some(title) = &self.title {
            context.push_str(&format!("\nTitre choisi : {}", title));
        }
        context
    }

    fn options_instruction(keys: [&str; 2]) -> String {
        format!(
            "Termine par exactement deux choix, chacun sur sa propre ligne, au format :\n\
             Option {} : <premier choix>\n\
             Option {} : <second choix>",
            keys[0], keys[1]
        )
    }

    /// Character and setting introduction.
    pub fn intro(&self) -> String {
        format!(
            "{}\n\nÉcris l'introduction d'une histoire interactive (un paragraphe de 5 à 7 \
             phrases). Présente le héros, inspiré de l'enfant, en donnant son prénom, puis \
             le lieu où commence l'aventure. Ne propose pas encore de choix.",
            self.context()
        )
    }

    /// First branching page.
    pub fn page1(&self, intro: &str) -> String {
        format!(
            "{}\n\nIntroduction :\n{}\n\nÉcris la page suivante (un ou deux paragraphes). \
             Le héros rencontre une situation qui l'oblige à faire un choix.\n{}",
            self.context(),
            intro.trim(),
            Self::options_instruction(["A", "B"])
        )
    }

    /// Second page after one of the first choices.
    pub fn page2(&self, intro: &str, page1: &str, choice: &str, keys: [&str; 2]) -> String {
        format!(
            "{}\n\nIntroduction :\n{}\n\nPage précédente :\n{}\n\nLe lecteur a choisi : « {} ».\n\n\
             Écris la suite (un ou deux paragraphes) qui découle de ce choix, jusqu'à un \
             nouveau moment de décision.\n{}",
            self.context(),
            intro.trim(),
            page1.trim(),
            choice.trim(),
            Self::options_instruction(keys)
        )
    }

    /// Terminal page after one of the second choices.
    pub fn ending(&self, page2: &str, choice: &str) -> String {
        format!(
            "{}\n\nPage précédente :\n{}\n\nLe lecteur a choisi : « {} ».\n\n\
             Écris la fin de l'histoire (un ou deux paragraphes) qui découle de ce choix. \
             La fin doit être positive et rassurante, et se terminer par le mot {} seul \
             sur la dernière ligne.",
            self.context(),
            page2.trim(),
            choice.trim(),
            END_MARKER
        )
    }

    /// Complete one-page story.
    pub fn single(&self) -> String {
        format!(
            "{}\n\nÉcris une histoire complète et courte (4 à 6 paragraphes) dont le héros \
             est inspiré de l'enfant. L'histoire a un début, une aventure et une fin \
             positive, et se termine par le mot {} seul sur la dernière ligne.",
            self.context(),
            END_MARKER
        )
    }

    /// Interactive continuation after a reader choice.
    pub fn continuation(previous: &str, choice: &str) -> String {
        format!(
            "Voici le début d'une histoire pour enfants :\n{}\n\nLe lecteur a choisi : « {} ».\n\n\
             Écris la suite (un ou deux paragraphes) qui découle de ce choix.\n{}",
            previous.trim(),
            choice.trim(),
            Self::options_instruction(["A", "B"])
        )
    }
}
