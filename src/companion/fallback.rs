//! Static text substituted when the model runtime cannot answer.

use super::classify::{ Advisor, Branch, JournalEntry, Recipient };
use super::hints::ChatHint;

/// Advisor paragraph used on its own and as the advice inside combined fallbacks.
fn advisor_paragraph(advisor: &Advisor, emotion: &str) -> String {
    match advisor {
        Advisor::Therapist => format!(
            "As your therapist, I want to acknowledge that your feelings of {} are completely valid. Emotions often provide valuable information about what matters to us and what we need. What aspects of this situation feel most significant to you right now? Remember that developing small coping strategies can make a meaningful difference.",
            emotion
        ),
        Advisor::Friend => format!(
            "Hey there, as your friend, I just want to say I totally get why you're feeling {}! That's a lot to deal with, but I know you've got this. Want to grab coffee soon? I'm always here for you, no matter what.",
            emotion
        ),
        Advisor::Mentor => format!(
            "As your mentor, I believe your {} feelings highlight an important growth opportunity. Consider how this challenge connects to your broader goals and values. What skills might you develop by navigating this situation thoughtfully? Remember that discomfort often precedes significant development.",
            emotion
        ),
        Advisor::Parent => format!(
            "My dear, as your parent, I want you to know that your {} feelings are completely understandable. You've always had such strength in facing challenges, and I have complete faith in you now. What small step might help you feel more grounded today? I'm always here for you, no matter what.",
            emotion
        ),
        Advisor::Other(_) => format!(
            "As someone who cares about you, I want to say I understand your {} feelings. It's perfectly natural to feel this way given what you're experiencing. What support would be most helpful right now? I'm here for you however you need.",
            emotion
        ),
    }
}

fn recipient_paragraph(recipient: &Recipient, entry: &JournalEntry) -> String {
    let JournalEntry { content, emotion, intensity } = entry;
    match recipient {
        Recipient::SelfReflection => format!(
            "Personal reflection: I've been feeling {} with intensity level {}.\n\n{}\n\nI need to remember this moment and what I've learned from it.",
            emotion, intensity, content
        ),
        Recipient::Friend => format!(
            "Dear friend, I wanted to share something with you. I've been feeling {} with intensity level {} because: {}\n\nI'd value your thoughts on this if you have time to talk.",
            emotion, intensity, content
        ),
        Recipient::Partner => format!(
            "Dear partner, I wanted to open up to you about something I've been feeling. I've experienced {} with intensity level {} recently: {}\n\nI'm sharing this because you're important to me and I value our connection.",
            emotion, intensity, content
        ),
        Recipient::Family => format!(
            "Dear family, I wanted to share with you that I've been feeling {} with intensity level {} lately: {}\n\nI'm sharing this with you because family support means a lot to me.",
            emotion, intensity, content
        ),
        Recipient::Other(name) => format!(
            "Dear {}, I've been feeling {} with intensity level {} because: {}\n\nI wanted to share this with you.",
            name, emotion, intensity, content
        ),
    }
}

fn combined_paragraph(advisor: &Advisor, recipient: &Recipient, emotion: &str) -> String {
    let advice = advisor_paragraph(advisor, emotion);
    match recipient {
        Recipient::SelfReflection => format!("Personal reflection: {}", advice),
        Recipient::Friend => format!(
            "Dear friend, my {} shared this advice with me and I wanted to pass it along: {}",
            advisor, advice
        ),
        Recipient::Partner => format!(
            "Dear partner, I talked with my {} about how I've been feeling {}, and they said: {}",
            advisor, emotion, advice
        ),
        Recipient::Family => format!(
            "Dear family, I've been getting some support for my {} feelings, and my {} suggested: {}",
            emotion, advisor, advice
        ),
        Recipient::Other(name) => format!(
            "Dear {}, I wanted to share some advice I received about my {} feelings: {}",
            name, emotion, advice
        ),
    }
}

/// Acknowledgment for requests that name neither an advisor nor a recipient.
pub fn acknowledgment(emotion: &str) -> String {
    format!(
        "Thank you for sharing how you feel {}. I hope putting your thoughts into words has been helpful.",
        emotion
    )
}

pub fn respond_fallback(branch: &Branch, entry: &JournalEntry) -> String {
    match branch {
        Branch::AdvisorOnly(advisor) => advisor_paragraph(advisor, &entry.emotion),
        Branch::RecipientOnly(recipient) => recipient_paragraph(recipient, entry),
        Branch::Combined(advisor, recipient) => combined_paragraph(advisor, recipient, &entry.emotion),
        Branch::Default => acknowledgment(&entry.emotion),
    }
}

pub fn analysis_fallback(entry: &JournalEntry) -> String {
    let JournalEntry { emotion, intensity, .. } = entry;
    match emotion.to_lowercase().as_str() {
        "happy" => format!(
            "I sense that you're feeling {} with {} intensity. Your journal entry shows genuine joy and a positive outlook. This happiness seems to stem from recent achievements or connections in your life. Savor these positive emotions and consider what contributed to them.",
            emotion, intensity
        ),
        "sad" => format!(
            "I notice a sense of {}ness with {} intensity in your writing. Your journal reflects some difficult emotions that you're processing thoughtfully. This sadness appears connected to meaningful aspects of your life, showing what you value. Be gentle with yourself as you navigate these feelings.",
            emotion, intensity
        ),
        "angry" => format!(
            "Your writing shows {} feelings with {} intensity. This emotion often signals boundaries being crossed or needs not being met. Your awareness of these feelings is a strength and indicates self-awareness. Consider what specific needs might be underlying this emotional response.",
            emotion, intensity
        ),
        "anxious" => format!(
            "I sense {}ness with {} intensity in your journal entry. Your thoughtful reflection shows you're engaging with these feelings rather than avoiding them. This anxiety may be highlighting areas where you care deeply or feel uncertainty. Small steps toward addressing specific concerns could be helpful.",
            emotion, intensity
        ),
        _ => format!(
            "I sense that you're feeling {} with {} intensity. Your journal entry shows self-awareness and a desire to understand these emotions better. Reflecting on your feelings this way is a helpful practice for emotional well-being.",
            emotion, intensity
        ),
    }
}

pub fn chat_fallback(hint: Option<&ChatHint>) -> &'static str {
    match hint {
        Some(ChatHint::Advisor(Advisor::Therapist)) =>
            "As your therapist, I want to acknowledge that it's completely normal to feel this way. Your emotions are valid and provide important information about what matters to you. What specific aspects of this situation feel most challenging right now? Remember that developing small coping strategies can make a significant difference.",
        Some(ChatHint::Advisor(Advisor::Friend)) =>
            "Hey there, as your friend, I just want to say I'm totally here for you! We all go through tough times, and you're handling this like a champ. Want to grab coffee soon and talk more about it? I bet we could brainstorm some fun distractions if you need a break from everything.",
        Some(ChatHint::Advisor(Advisor::Mentor)) =>
            "As your mentor, I believe this experience offers valuable growth opportunities. Consider how this challenge connects to your longer-term goals. What skills are you developing through this situation that will serve you well in the future? Remember that discomfort often precedes significant development.",
        Some(ChatHint::Advisor(Advisor::Parent)) =>
            "My dear, as your parent, I want you to know I'm always here for you. You have shown such strength in difficult situations before, and I have complete faith in your ability to navigate this too. What small step could you take today that might make things a little easier?",
        Some(ChatHint::Recipient(Recipient::SelfReflection)) =>
            "Personal reflection: I've been experiencing some challenging emotions lately. I'm noticing patterns in how I respond to stress, and I'm working on developing healthier coping strategies. I'm proud of myself for taking time to process these feelings.",
        Some(ChatHint::Recipient(Recipient::Friend)) =>
            "Dear friend, I wanted to share something I've been going through lately. I've had some ups and downs with my emotions, and I'd value your perspective when you have time. No pressure for advice - sometimes just talking helps. Let me know if you'd be up for coffee soon?",
        Some(ChatHint::Recipient(Recipient::Partner)) =>
            "Dear partner, I've been reflecting on my emotional state lately and wanted to open up to you about it. You're such an important part of my support system, and sharing these feelings with you helps me process them. I appreciate your patience and understanding.",
        Some(ChatHint::Recipient(Recipient::Family)) =>
            "Dear family, I wanted to share some thoughts I've been having lately. Family support means so much to me, and I value the perspective you all bring. I'm working through some emotions and thought it might help to express them to people who know me well.",
        _ =>
            "Thank you for sharing your thoughts and feelings. I appreciate your openness and trust. Is there a specific aspect of this situation you'd like to explore further?",
    }
}
