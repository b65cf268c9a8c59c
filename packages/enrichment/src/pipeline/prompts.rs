//! LLM prompts for the extraction step.

/// System message for the extraction exchange.
pub const EXTRACT_SYSTEM_PROMPT: &str =
    "You are an assistant that extracts specific information from context.";

/// Prompt wrapping the user's question, the entity, and the search
/// context into a single extraction instruction.
pub const EXTRACT_PROMPT: &str = r#"You are an AI assistant specialized in extracting specific information from any data.
From the context and question provided, extract only the feature which is asked in the question.
Respond only with the asked feature, without any verbosity. Clean and exact answers only.

Question: {question}
Company: {company}
Context: {context}"#;

/// Fill the extraction prompt with the per-entity values.
pub fn format_extract_prompt(question: &str, entity: &str, context: &str) -> String {
    EXTRACT_PROMPT
        .replace("{question}", question)
        .replace("{company}", entity)
        .replace("{context}", context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_all_three_slots() {
        let prompt = format_extract_prompt(
            "Find the CEO of {column_name}",
            "Acme Corp",
            "Acme Corp\nCEO: Jane Doe\n",
        );

        assert!(prompt.contains("Question: Find the CEO of {column_name}"));
        assert!(prompt.contains("Company: Acme Corp"));
        assert!(prompt.contains("Context: Acme Corp\nCEO: Jane Doe\n"));
        assert!(!prompt.contains("{question}"));
        assert!(!prompt.contains("{context}"));
    }

    #[test]
    fn question_keeps_its_own_placeholder() {
        // The user's template goes in verbatim; only the outer slots
        // are substituted.
        let prompt = format_extract_prompt("CEO of {column_name}?", "Acme", "ctx");
        assert!(prompt.contains("{column_name}"));
    }
}
