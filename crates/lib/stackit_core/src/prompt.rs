//! Prompt construction for the assistant endpoints.

use std::fmt;

use crate::completion::ChatMessage;

/// Instruction prepended to every chat request.
pub const SYSTEM_PROMPT: &str = "You are an expert software developer and coding assistant for StackIt, a Q&A platform for developers. Your role is to:

1. Provide clear, accurate, and helpful answers to coding questions
2. Explain complex concepts in an understandable way
3. Give practical code examples when relevant
4. Suggest best practices and alternatives
5. Be encouraging and supportive to developers of all skill levels
6. Format your responses with proper markdown when including code
7. Ask clarifying questions if the problem isn't clear

Keep responses concise but comprehensive. Always aim to help the developer learn and understand the solution.";

/// Ordered prompt for `/api/chat`: system instruction, then the user's message.
pub fn chat_messages(message: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(message)]
}

/// Rewrite styles offered by the text assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhancementKind {
    Enhance,
    Grammar,
    Expand,
    Summarize,
    Professional,
    Casual,
}

impl EnhancementKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "enhance" => Some(Self::Enhance),
            "grammar" => Some(Self::Grammar),
            "expand" => Some(Self::Expand),
            "summarize" => Some(Self::Summarize),
            "professional" => Some(Self::Professional),
            "casual" => Some(Self::Casual),
            _ => None,
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            Self::Enhance => {
                "Enhance the following text to make it clearer, more engaging, and better structured while maintaining its original meaning and tone."
            }
            Self::Grammar => {
                "Fix any grammatical errors, spelling mistakes, and improve sentence structure in the following text while preserving the original meaning and tone."
            }
            Self::Expand => {
                "Expand the following text with more details, examples, and explanations while maintaining the same topic and tone."
            }
            Self::Summarize => {
                "Summarize the following text while keeping the key points and main ideas."
            }
            Self::Professional => {
                "Rewrite the following text in a more professional and formal tone suitable for business or academic contexts."
            }
            Self::Casual => "Rewrite the following text in a more casual and friendly tone.",
        }
    }

    fn answer_label(self) -> &'static str {
        match self {
            Self::Enhance => "Enhanced text:",
            Self::Grammar => "Corrected text:",
            Self::Expand => "Expanded text:",
            Self::Summarize => "Summary:",
            Self::Professional => "Professional version:",
            Self::Casual => "Casual version:",
        }
    }
}

impl fmt::Display for EnhancementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Enhance => "enhance",
            Self::Grammar => "grammar",
            Self::Expand => "expand",
            Self::Summarize => "summarize",
            Self::Professional => "professional",
            Self::Casual => "casual",
        };
        f.write_str(name)
    }
}

/// Single-message prompt asking the model to rewrite `text` in the given style.
pub fn enhancement_messages(
    kind: EnhancementKind,
    text: &str,
    context: Option<&str>,
) -> Vec<ChatMessage> {
    let mut prompt = format!(
        "{} Keep the same format (HTML if applicable):\n\nOriginal text: {text}\n\n{}",
        kind.instruction(),
        kind.answer_label()
    );
    if let Some(context) = context.filter(|c| !c.is_empty()) {
        prompt.push_str(&format!("\n\nContext: {context}"));
    }
    vec![ChatMessage::user(prompt)]
}

/// Single-message prompt for free-form generation, framed by optional context.
pub fn generation_messages(prompt: &str, context: Option<&str>) -> Vec<ChatMessage> {
    let full = match context.filter(|c| !c.is_empty()) {
        Some(context) => format!("Context: {context}\n\nRequest: {prompt}\n\nResponse:"),
        None => prompt.to_string(),
    };
    vec![ChatMessage::user(full)]
}
