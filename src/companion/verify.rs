use log::warn;
use super::classify::{ Advisor, Branch, Recipient };

/// Accepted lead-in phrases (lower-case) and the prefix used when none appear.
struct LeadIn {
    phrases: Vec<String>,
    prefix: String,
}

impl LeadIn {
    fn fixed(phrases: &[&str], prefix: &str) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            prefix: prefix.to_string(),
        }
    }

    fn is_satisfied_by(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.phrases.iter().any(|phrase| lowered.contains(phrase.as_str()))
    }
}

fn advisor_lead_in(advisor: &Advisor) -> LeadIn {
    match advisor {
        Advisor::Therapist => LeadIn::fixed(
            &["as your therapist", "from a therapeutic perspective", "as a therapist"],
            "As your therapist, I want to acknowledge your feelings. ",
        ),
        Advisor::Friend => LeadIn::fixed(
            &["as your friend", "hey", "hi friend"],
            "Hey there, as your friend, I just want to say I'm here for you. ",
        ),
        Advisor::Mentor => LeadIn::fixed(
            &["as your mentor", "from a mentorship perspective"],
            "As your mentor, I see this as a growth opportunity. ",
        ),
        Advisor::Parent => LeadIn::fixed(
            &["as your parent", "my dear"],
            "My dear, as your parent, I want you to know I care. ",
        ),
        Advisor::Other(_) => LeadIn::fixed(
            &["as someone who cares about you"],
            "As someone who cares about you, I want to say this. ",
        ),
    }
}

fn recipient_lead_in(recipient: &Recipient) -> LeadIn {
    match recipient {
        Recipient::SelfReflection => LeadIn::fixed(
            &["personal reflection", "note to self", "dear self"],
            "Personal reflection: ",
        ),
        Recipient::Friend => LeadIn::fixed(&["dear friend", "hey friend", "hi friend"], "Dear friend, "),
        Recipient::Partner => LeadIn::fixed(&["dear partner", "my love", "honey"], "Dear partner, "),
        Recipient::Family => LeadIn::fixed(&["dear family", "to my family"], "Dear family, "),
        Recipient::Other(name) => LeadIn {
            phrases: addressed_to(&name.to_lowercase()),
            prefix: format!("Dear {}, ", name),
        },
    }
}

fn addressed_to(name: &str) -> Vec<String> {
    vec![format!("dear {}", name), format!("to my {}", name), format!("hey {}", name)]
}

fn lead_in_for(branch: &Branch) -> Option<LeadIn> {
    match branch {
        Branch::AdvisorOnly(advisor) => Some(advisor_lead_in(advisor)),
        Branch::RecipientOnly(recipient) => Some(recipient_lead_in(recipient)),
        Branch::Combined(_, recipient) => {
            let mut lead_in = recipient_lead_in(recipient);
            for phrase in addressed_to(&recipient.as_str().to_lowercase()) {
                if !lead_in.phrases.contains(&phrase) {
                    lead_in.phrases.push(phrase);
                }
            }
            Some(lead_in)
        }
        Branch::Default => None,
    }
}

/// Prepends the branch's fixed prefix when the model skipped every accepted
/// lead-in. The match is a case-insensitive substring test.
pub fn ensure_lead_in(branch: &Branch, text: &str) -> String {
    match lead_in_for(branch) {
        Some(lead_in) if !lead_in.is_satisfied_by(text) => {
            warn!("Response missing {} lead-in, prepending '{}'", branch.label(), lead_in.prefix.trim_end());
            format!("{}{}", lead_in.prefix, text)
        }
        _ => text.to_string(),
    }
}
