use crate::models::content::Content;
use crate::models::request::GenerateContentRequest;
use crate::models::role::Role;
use crate::models::turn::Turn;
use crate::persona::{GENERATION, PERSONA_INSTRUCTION, SAFETY_SETTINGS};

/// Assemble the `contents` array for the provider.
///
/// With no history the utterance is folded into the persona element, so the
/// payload is a single entry. Otherwise the persona stands alone, the history
/// is replayed as received, and the utterance closes the sequence.
pub fn compose_contents(utterance: &str, history: &[Turn]) -> Vec<Content> {
    if history.is_empty() {
        return vec![Content::user(format!("{}\n\n{}", PERSONA_INSTRUCTION, utterance))];
    }

    let mut contents = Vec::with_capacity(history.len() + 2);
    contents.push(Content::user(PERSONA_INSTRUCTION));
    contents.extend(
        history
            .iter()
            .map(|turn| Content::new(turn.role().cloned(), turn.content().map(str::to_string))),
    );
    contents.push(Content::new(Some(Role::User), Some(utterance.to_string())));
    contents
}

pub fn build_request(utterance: &str, history: &[Turn]) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: compose_contents(utterance, history),
        generation_config: GENERATION,
        safety_settings: SAFETY_SETTINGS.to_vec(),
    }
}
