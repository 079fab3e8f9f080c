use lazy_static::lazy_static;
use regex::Regex;
use super::classify::{ Advisor, Branch, Recipient };

lazy_static! {
    static ref SHARING_MARKER: Regex = Regex::new(r"(?i)\b(sharing with|recipient)\b").unwrap();
    static ref RECIPIENT_WORD: Regex = Regex::new(r"(?i)\b(self|friend|partner|family)\b").unwrap();
    static ref ADVISOR_WORD: Regex = Regex::new(r"(?i)\b(therapist|friend|mentor|parent)\b").unwrap();
}

const ADVISOR_PRIORITY: [&str; 4] = ["therapist", "friend", "mentor", "parent"];
const RECIPIENT_PRIORITY: [&str; 4] = ["self", "friend", "partner", "family"];

/// Highest-priority keyword present in the message, regardless of position.
fn pick<'a>(pattern: &Regex, priority: &[&'a str], message: &str) -> Option<&'a str> {
    let found: Vec<String> = pattern.find_iter(message).map(|m| m.as_str().to_lowercase()).collect();
    priority.iter().copied().find(|word| found.iter().any(|f| f == word))
}

/// Persona guessed from the free text of a /api/chat message, which carries
/// no structured advisor or recipient field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatHint {
    Advisor(Advisor),
    Recipient(Recipient),
}

impl ChatHint {
    /// Advisor keywords are checked first (therapist, friend, mentor, parent).
    /// Recipient keywords only count when the message is a sharing request.
    pub fn detect(message: &str) -> Option<Self> {
        if let Some(word) = pick(&ADVISOR_WORD, &ADVISOR_PRIORITY, message) {
            return Advisor::parse(Some(word)).map(ChatHint::Advisor);
        }
        if !SHARING_MARKER.is_match(message) {
            return None;
        }
        pick(&RECIPIENT_WORD, &RECIPIENT_PRIORITY, message)
            .and_then(|word| Recipient::parse(Some(word)))
            .map(ChatHint::Recipient)
    }

    pub fn branch(&self) -> Branch {
        match self {
            ChatHint::Advisor(advisor) => Branch::AdvisorOnly(advisor.clone()),
            ChatHint::Recipient(recipient) => Branch::RecipientOnly(recipient.clone()),
        }
    }
}
