//! # Templates
//!
//! Text templates for the generated documents and the renderer that fills
//! their `{{PLACEHOLDER}}` slots.

pub const REPORT_TEMPLATE: &str = include_str!("../../templates/strategy.txt");

pub const POSITIONING_TEMPLATE: &str = "For {{TARGET_MARKET}} who need {{DIFFERENTIATOR}}, our {{NOUN}} delivers exceptional value by solving their key challenges in a way that no other solution can match.";

/// A builder for rendering templates with context.
///
/// Substitution is a single pass over the template, so placeholder-like text
/// inside a value is copied through untouched.
pub struct TemplateRenderer<'a> {
    template: &'a str,
    replacements: Vec<(&'a str, String)>,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new(template: &'a str) -> Self {
        Self {
            template,
            replacements: Vec::new(),
        }
    }

    pub fn set(mut self, key: &'a str, value: impl Into<String>) -> Self {
        self.replacements.push((key, value.into()));
        self
    }

    pub fn render(self) -> String {
        let mut result = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let tail = &rest[start..];
            let Some(end) = tail.find("}}") else {
                // Unterminated, copy the remainder as-is.
                result.push_str(tail);
                return result;
            };
            let placeholder = &tail[..end + 2];
            match self.replacements.iter().find(|(key, _)| *key == placeholder) {
                Some((_, value)) => result.push_str(value),
                None => {
                    tracing::error!("[TEMPLATE RENDER ERROR] Unreplaced placeholder: {}", placeholder);
                    result.push_str(placeholder);
                }
            }
            rest = &tail[end + 2..];
        }

        result.push_str(rest);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_renderer_basic() {
        let renderer = TemplateRenderer::new("Hello {{NAME}}").set("{{NAME}}", "World");
        assert_eq!(renderer.render(), "Hello World");
    }

    #[test]
    fn test_template_renderer_missing_key() {
        let renderer = TemplateRenderer::new("Hello {{MISSING}}");
        assert_eq!(renderer.render(), "Hello {{MISSING}}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let rendered = TemplateRenderer::new("{{A}} and {{B}}")
            .set("{{A}}", "{{B}}")
            .set("{{B}}", "Banana")
            .render();
        assert_eq!(rendered, "{{B}} and Banana");
    }

    #[test]
    fn test_unterminated_placeholder_is_kept() {
        let rendered = TemplateRenderer::new("{{A}} then {{oops").set("{{A}}", "x").render();
        assert_eq!(rendered, "x then {{oops");
    }
}
