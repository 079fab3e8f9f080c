use std::fmt;
use log::warn;
use crate::models::chat::{ RespondRequest, DEFAULT_INTENSITY };

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisor {
    Therapist,
    Friend,
    Mentor,
    Parent,
    /// Unrecognised value, kept verbatim so the generic template can name it.
    Other(String),
}

impl Advisor {
    /// Returns `None` for a missing or blank value.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match raw.to_lowercase().as_str() {
            "therapist" => Advisor::Therapist,
            "friend" => Advisor::Friend,
            "mentor" => Advisor::Mentor,
            "parent" => Advisor::Parent,
            _ => {
                warn!("Unrecognised advisor perspective '{}', using generic template", raw);
                Advisor::Other(raw.to_string())
            }
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Advisor::Therapist => "therapist",
            Advisor::Friend => "friend",
            Advisor::Mentor => "mentor",
            Advisor::Parent => "parent",
            Advisor::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Advisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    SelfReflection,
    Friend,
    Partner,
    Family,
    Other(String),
}

impl Recipient {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match raw.to_lowercase().as_str() {
            "self" => Recipient::SelfReflection,
            "friend" => Recipient::Friend,
            "partner" => Recipient::Partner,
            "family" => Recipient::Family,
            _ => {
                warn!("Unrecognised recipient '{}', using generic template", raw);
                Recipient::Other(raw.to_string())
            }
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Recipient::SelfReflection => "self",
            Recipient::Friend => "friend",
            Recipient::Partner => "partner",
            Recipient::Family => "family",
            Recipient::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which prompt-construction path a /api/respond request takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    AdvisorOnly(Advisor),
    RecipientOnly(Recipient),
    Combined(Advisor, Recipient),
    Default,
}

impl Branch {
    pub fn classify(req: &RespondRequest) -> Self {
        let advisor = Advisor::parse(req.advisor_perspective.as_deref());
        let recipient = Recipient::parse(req.recipient.as_deref());

        match (advisor, recipient) {
            (Some(advisor), None) => Branch::AdvisorOnly(advisor),
            (None, Some(recipient)) => Branch::RecipientOnly(recipient),
            (Some(advisor), Some(recipient)) => Branch::Combined(advisor, recipient),
            (None, None) => Branch::Default,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Branch::AdvisorOnly(_) => "advisor",
            Branch::RecipientOnly(_) => "recipient",
            Branch::Combined(_, _) => "combined",
            Branch::Default => "default",
        }
    }
}

/// The journal fields every template interpolates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub content: String,
    pub emotion: String,
    pub intensity: i64,
}

impl JournalEntry {
    pub fn new(content: &str, emotion: &str, intensity: Option<i64>) -> Self {
        Self {
            content: content.to_string(),
            emotion: emotion.to_string(),
            intensity: intensity.unwrap_or(DEFAULT_INTENSITY),
        }
    }
}

impl From<&RespondRequest> for JournalEntry {
    fn from(req: &RespondRequest) -> Self {
        JournalEntry::new(&req.content, &req.emotion, req.intensity)
    }
}
