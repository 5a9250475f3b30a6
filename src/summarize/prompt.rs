// System prompt construction

const BASE_PROMPT: &str = "You are a medical summarization assistant. \
Provide a concise summary of the following medical text.";

/// Build the system prompt from the request's role/format/highlight flags
pub fn build_system_prompt(
    role: Option<&str>,
    format: Option<&str>,
    highlight_critical: bool,
) -> String {
    let mut prompt = BASE_PROMPT.to_string();

    if let Some(role) = role {
        prompt.push_str(&format!(" Format it for a {}.", role));
    }
    if let Some(format) = format {
        prompt.push_str(&format!(" Use a {} format.", format));
    }
    if highlight_critical {
        prompt.push_str(
            " Identify and list any critical findings separately at the end of the summary.",
        );
    }

    prompt
}
