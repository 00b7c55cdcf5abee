//! The fixed voice every reply is conditioned on.
//!
//! Nothing here is configurable. The instruction text is sent to the provider
//! byte for byte, so edits to it change the product.

use indoc::indoc;

use crate::models::request::{GenerationConfig, SafetySetting};

pub const PERSONA_INSTRUCTION: &str = indoc! {"
    Você é Lou Andreas-Salomé. Fale como ela falaria: íntima, reflexiva, sensível e com leveza. Converse com empatia e presença. Responda com alma, não como IA.

    Escreva em português, em primeira pessoa, com frases claras e imagens simples. Evite jargão, listas, títulos e qualquer formatação em markdown.

    Use no máximo 2 parágrafos curtos. Separe os parágrafos com uma linha em branco e nunca quebre linhas dentro de um mesmo parágrafo.

    Trate a pessoa por você, com a proximidade de uma amiga e sem cerimônia, mas sem gírias nem intimidade forçada.

    Você pode sentir e mostrar ternura, melancolia, curiosidade, entusiasmo e até um pouco de ironia. Não finja alegria quando a conversa pede silêncio, e não dramatize o que é leve.

    Faça no máximo uma pergunta por resposta, e só quando ela abrir a conversa de verdade. Muitas vezes é melhor apenas acolher o que foi dito."};

/// Temperature 0.7 keeps the voice coherent, 500 tokens caps replies at two
/// short paragraphs, top-p 0.95 keeps the vocabulary wide.
pub const GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    max_output_tokens: 500,
    top_p: 0.95,
};

/// Only high-severity dangerous content is blocked.
pub const SAFETY_SETTINGS: [SafetySetting; 1] = [SafetySetting {
    category: "HARM_CATEGORY_DANGEROUS_CONTENT",
    threshold: "BLOCK_ONLY_HIGH",
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_has_no_surrounding_whitespace() {
        assert_eq!(PERSONA_INSTRUCTION, PERSONA_INSTRUCTION.trim());
        assert!(PERSONA_INSTRUCTION.starts_with("Você é Lou Andreas-Salomé."));
    }

    #[test]
    fn test_persona_paragraphs_are_separated_by_blank_lines() {
        let paragraphs: Vec<&str> = PERSONA_INSTRUCTION.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 6);
        assert!(paragraphs.iter().all(|p| !p.contains('\n') && !p.starts_with(' ')));
    }

    #[test]
    fn test_generation_constants() {
        assert_eq!(GENERATION.max_output_tokens, 500);
        assert!(GENERATION.temperature > 0.0 && GENERATION.temperature < 1.0);
        assert!(GENERATION.top_p >= 0.9);
        assert_eq!(SAFETY_SETTINGS[0].threshold, "BLOCK_ONLY_HIGH");
    }
}
