//! Prompt templates for paragraph generation

use tracing::debug;

/// Writing style of the paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Informative,
    Creative,
    Technical,
    Simple,
}

impl Style {
    /// Resolve a style name, falling back to `Informative` for unknown values
    pub fn resolve(value: &str) -> Self {
        match value {
            "informative" => Self::Informative,
            "creative" => Self::Creative,
            "technical" => Self::Technical,
            "simple" => Self::Simple,
            other => {
                debug!("Unknown style '{}', using informative", other);
                Self::default()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Informative => "informative",
            Self::Creative => "creative",
            Self::Technical => "technical",
            Self::Simple => "simple",
        }
    }

    /// Opening instruction of the prompt
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Informative => "Write an informative and educational paragraph about",
            Self::Creative => "Write a creative and engaging paragraph about",
            Self::Technical => "Write a detailed technical explanation about",
            Self::Simple => "Write a simple, easy-to-understand paragraph about",
        }
    }
}

/// Target length of the paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    /// Resolve a length name, falling back to `Medium` for unknown values
    pub fn resolve(value: &str) -> Self {
        match value {
            "short" => Self::Short,
            "medium" => Self::Medium,
            "long" => Self::Long,
            other => {
                debug!("Unknown length '{}', using medium", other);
                Self::default()
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Short => "Keep it concise, around 3-4 sentences.",
            Self::Medium => "Write a well-developed paragraph of 5-7 sentences.",
            Self::Long => "Write a comprehensive paragraph of 8-10 sentences with detailed information.",
        }
    }

    /// Token budget passed upstream as `num_predict`
    pub fn max_tokens(&self) -> u32 {
        match self {
            Self::Short => 100,
            Self::Medium => 200,
            Self::Long => 300,
        }
    }
}

/// Quality directives listed in every prompt
pub const QUALITY_DIRECTIVES: &str = "Make sure the paragraph:
- Is factually accurate and well-researched
- Flows naturally from one sentence to the next
- Provides valuable insights about the topic
- Maintains a consistent tone throughout
- Ends with a strong concluding thought";

/// Prompt for a single paragraph
pub fn build_prompt(topic: &str, style: Style, length: Length) -> String {
    format!(
        "{} \"{}\". \n\n{}\n\n{}\n\nTopic: {}\n\nParagraph:",
        style.instruction(),
        topic,
        length.instruction(),
        QUALITY_DIRECTIVES,
        topic
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_uses_informative() {
        for value in ["poetic", "", "Creative", " technical"] {
            let style = Style::resolve(value);
            assert_eq!(style, Style::Informative);
            assert_eq!(
                style.instruction(),
                "Write an informative and educational paragraph about"
            );
        }
    }

    #[test]
    fn test_known_styles() {
        for style in [Style::Informative, Style::Creative, Style::Technical, Style::Simple] {
            assert_eq!(Style::resolve(style.as_str()), style);
        }
    }

    #[test]
    fn test_unknown_length_uses_medium() {
        for value in ["huge", "", "SHORT"] {
            let length = Length::resolve(value);
            assert_eq!(length.max_tokens(), 200);
            assert_eq!(
                length.instruction(),
                "Write a well-developed paragraph of 5-7 sentences."
            );
        }
    }

    #[test]
    fn test_token_budgets() {
        assert_eq!(Length::resolve("short").max_tokens(), 100);
        assert_eq!(Length::resolve("medium").max_tokens(), 200);
        assert_eq!(Length::resolve("long").max_tokens(), 300);
    }

    #[test]
    fn test_prompt_template() {
        let prompt = build_prompt("black holes", Style::Technical, Length::Short);
        let expected = "Write a detailed technical explanation about \"black holes\". \n\
\n\
Keep it concise, around 3-4 sentences.\n\
\n\
Make sure the paragraph:\n\
- Is factually accurate and well-researched\n\
- Flows naturally from one sentence to the next\n\
- Provides valuable insights about the topic\n\
- Maintains a consistent tone throughout\n\
- Ends with a strong concluding thought\n\
\n\
Topic: black holes\n\
\n\
Paragraph:";
        assert_eq!(prompt, expected);
    }
}
