//! User-authored prompt templates with entity substitution.

/// Primary placeholder token users put in their prompt.
pub const PLACEHOLDER: &str = "{column_name}";

/// Alternate spelling accepted for convenience.
pub const ALT_PLACEHOLDER: &str = "{col_name}";

/// A natural-language instruction with an optional entity placeholder.
///
/// The template serves two roles per entity: substituted, it becomes
/// the web search query; unsubstituted, it is passed to the extractor
/// verbatim as the question. A template without any placeholder is
/// used as-is, which degrades the search to one identical query per
/// entity but is deliberately not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    raw: String,
}

impl PromptTemplate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The template text exactly as the user wrote it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when the template contains a recognized placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.raw.contains(PLACEHOLDER) || self.raw.contains(ALT_PLACEHOLDER)
    }

    /// Substitute the entity into every recognized placeholder.
    ///
    /// Unrecognized `{...}` tokens are left untouched.
    pub fn render(&self, entity: &str) -> String {
        self.raw
            .replace(PLACEHOLDER, entity)
            .replace(ALT_PLACEHOLDER, entity)
    }
}

impl From<&str> for PromptTemplate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for PromptTemplate {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_primary_placeholder() {
        let template = PromptTemplate::new("Find the CEO of {column_name}");
        assert_eq!(template.render("Acme Corp"), "Find the CEO of Acme Corp");
    }

    #[test]
    fn substitutes_alternate_placeholder() {
        let template = PromptTemplate::new("Find the CEO of {col_name}");
        assert_eq!(template.render("Acme Corp"), "Find the CEO of Acme Corp");
    }

    #[test]
    fn substitutes_every_occurrence() {
        let template = PromptTemplate::new("{column_name} HQ; {column_name} revenue");
        assert_eq!(template.render("Acme"), "Acme HQ; Acme revenue");
    }

    #[test]
    fn template_without_placeholder_passes_through() {
        let template = PromptTemplate::new("Find the CEO of the company");
        assert!(!template.has_placeholder());
        assert_eq!(template.render("Acme"), "Find the CEO of the company");
    }

    #[test]
    fn unrecognized_tokens_are_left_alone() {
        let template = PromptTemplate::new("Find {feature} of {column_name}");
        assert_eq!(template.render("Acme"), "Find {feature} of Acme");
    }

    #[test]
    fn detects_placeholder_presence() {
        assert!(PromptTemplate::new("x {column_name} y").has_placeholder());
        assert!(PromptTemplate::new("x {col_name} y").has_placeholder());
        assert!(!PromptTemplate::new("x {col} y").has_placeholder());
    }
}
