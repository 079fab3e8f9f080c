use lazy_static::lazy_static;
use regex::{ Captures, Regex };
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// System prompt used by /api/chat when neither the request nor the
/// configuration supplies one.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful, accurate, and concise assistant.
When answering questions:
- Provide factually correct information
- If you're unsure about something, say so rather than making up information
- Format your responses with proper Markdown for readability
- Use bullet points and numbered lists for clarity when appropriate
- Keep your answers focused and to the point";

#[derive(Debug)]
pub enum PromptError {
    EmptyPrompt(String),
    IoError(std::io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::EmptyPrompt(path) => write!(f, "System prompt file '{}' is empty", path),
            PromptError::IoError(e) => write!(f, "Prompt file IO error: {}", e),
        }
    }
}

impl Error for PromptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PromptError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        PromptError::IoError(err)
    }
}

/// Reads a system prompt override. Surrounding whitespace is dropped; an
/// empty file is rejected so a typo'd path cannot silently blank the prompt.
pub fn load_system_prompt<P: AsRef<Path>>(path: P) -> Result<String, PromptError> {
    let content = fs::read_to_string(&path)?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(PromptError::EmptyPrompt(path.as_ref().display().to_string()));
    }
    Ok(trimmed.to_string())
}

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{(\w+)\}").unwrap();
}

/// Fills `{name}` placeholders in one pass over the template. Substituted
/// values are never rescanned, and unknown placeholders are left as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER.replace_all(template, |caps: &Captures| {
        values.iter()
            .find(|(key, _)| *key == &caps[1])
            .map(|(_, value)| value.to_string())
            .unwrap_or_else(|| caps[0].to_string())
    }).into_owned()
}
