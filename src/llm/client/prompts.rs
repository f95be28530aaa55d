//! Prompt text for rescue plan generation.

/// System preamble sent ahead of every prompt.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Rescue plan prompt. `{location}` and `{disaster}` are substituted verbatim.
pub const RESCUE_PLAN_PROMPT: &str = r#"
You are an emergency response assistant. Generate a concise and actionable rescue plan for a user located in "{location}" facing a "{disaster}".
Include 3-5 steps, mention communication, medical help, safety zones, and local resources.
"#;

/// Fill the rescue plan template in a single pass.
///
/// Substituted values are never rescanned, so a location that itself
/// contains `{disaster}` reaches the model unchanged.
pub fn rescue_plan_prompt(disaster: &str, location: &str) -> String {
    let mut prompt = String::with_capacity(RESCUE_PLAN_PROMPT.len() + location.len());
    let mut rest = RESCUE_PLAN_PROMPT;

    while let Some(start) = rest.find('{') {
        prompt.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{location}") {
            prompt.push_str(location);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{disaster}") {
            prompt.push_str(disaster);
            rest = after;
        } else {
            prompt.push('{');
            rest = &tail[1..];
        }
    }
    prompt.push_str(rest);
    prompt
}
