//! Canned replies for the health chat when no remote model answers.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::CoreError;

/// Reply used when a remote answer came back empty or unreadable
pub const SAFE_REPLY: &str = "I'm sorry, I couldn't understand that right now. \
    For any health concern, please consult a healthcare professional.";

const EMERGENCY_REPLY: &str = "If this is an emergency, call your local emergency number \
    or go to the nearest hospital right away.";

const APPOINTMENT_REPLY: &str = "You can book, view or reschedule appointments from your \
    dashboard. Bring your health ID and any previous prescriptions to your visit.";

const MEDICATION_REPLY: &str = "Take your medications exactly as prescribed. If you have \
    side effects or missed doses, talk to your doctor or pharmacist before changing anything.";

const SYMPTOM_REPLY: &str = "You can describe your symptoms in the symptom checker for a \
    quick assessment. If symptoms are severe or getting worse, please see a doctor.";

const GREETING_REPLY: &str = "Hello! I'm your MigrantCare health assistant. \
    How can I help you today?";

/// Replies picked at random when no topic matches
pub const GENERIC_REPLIES: &[&str] = &[
    "I'm here to help with your health questions. Could you tell me a bit more?",
    "Thank you for your question. For personal medical advice, please consult a healthcare professional.",
    "I can help with symptoms, appointments and medications. What would you like to know?",
    "Staying on top of your health is important. Is there something specific you'd like to discuss?",
];

/// Substring topics, checked in order; the first match answers
const TOPICS: &[(&[&str], &str)] = &[
    (&["emergency", "ambulance", "can't breathe"], EMERGENCY_REPLY),
    (&["appointment", "booking", "schedule"], APPOINTMENT_REPLY),
    (&["medication", "medicine", "pill", "dose"], MEDICATION_REPLY),
    (&["symptom", "pain", "fever", "headache", "cough"], SYMPTOM_REPLY),
];

/// Greetings are matched as whole words so "hi" does not fire inside "this"
const GREETINGS: &[&str] = &["hello", "hi", "hey", "namaste"];

/// Trim a chat message, rejecting blank input
pub fn validate_message(message: &str) -> Result<&str, CoreError> {
    match message.trim() {
        "" => Err(CoreError::EmptyMessage),
        trimmed => Ok(trimmed),
    }
}

/// Pick a canned reply for a chat message
pub fn canned_reply<R: Rng + ?Sized>(message: &str, rng: &mut R) -> &'static str {
    let text = message.to_lowercase();

    for &(keywords, reply) in TOPICS {
        if keywords.iter().any(|k| text.contains(k)) {
            return reply;
        }
    }

    let is_greeting = text
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| GREETINGS.contains(&word));
    if is_greeting {
        return GREETING_REPLY;
    }

    GENERIC_REPLIES.choose(rng).copied().unwrap_or(SAFE_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_topic_replies() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(canned_reply("Is this an EMERGENCY?", &mut rng), EMERGENCY_REPLY);
        assert_eq!(
            canned_reply("How do I book an appointment", &mut rng),
            APPOINTMENT_REPLY
        );
        assert_eq!(
            canned_reply("I forgot my medicine", &mut rng),
            MEDICATION_REPLY
        );
        assert_eq!(canned_reply("I have a fever", &mut rng), SYMPTOM_REPLY);
    }

    #[test]
    fn test_greeting_matches_whole_words() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(canned_reply("Hi there!", &mut rng), GREETING_REPLY);
        assert_ne!(canned_reply("this is odd", &mut rng), GREETING_REPLY);
    }

    #[test]
    fn test_generic_reply_comes_from_table() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let reply = canned_reply("what about the weather", &mut rng);
            assert!(GENERIC_REPLIES.contains(&reply));
        }
    }

    #[test]
    fn test_validate_message() {
        assert_eq!(validate_message("  \n "), Err(CoreError::EmptyMessage));
        assert_eq!(validate_message(" hello "), Ok("hello"));
    }

    #[test]
    fn test_same_seed_same_reply() {
        let first = canned_reply("tell me something", &mut StdRng::seed_from_u64(3));
        let second = canned_reply("tell me something", &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }
}
