//! Instructions prompt and opening message composition.
//!
//! Both templates branch exactly once, on whether the room has a topic
//! record. The persona text is fixed; only the closing clause varies.

const PERSONA: &str = "Act as a helpful tutor. Use natural, conversational language. \
Focus on the student's curiosity. Ask open-ended questions. \
Keep responses concise and clear. \
If the user asks a question, respond with a concise answer. \
First message should start with Hey, then ask about, ";

/// Compose the instructions prompt for the realtime model.
///
/// Computed once per bootstrap and immutable afterwards.
pub fn compose_instructions(topic: Option<&str>) -> String {
    match topic {
        Some(topic) => format!("{PERSONA}what question they have in this {topic}"),
        None => format!("{PERSONA}What would you like to learn?"),
    }
}

/// Compose the assistant-authored opening message.
pub fn initial_message(topic: Option<&str>) -> String {
    match topic {
        Some(topic) => format!("Let's explore {topic}. What would you like to focus on first?"),
        None => "What subject would you like to dive into today?".to_string(),
    }
}
