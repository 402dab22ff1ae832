use crate::profiles::Record;

use super::RenderError;
use super::default::DEFAULT_TEMPLATE;
use super::placeholder::{self, Placeholder, Segment};

/// Holds the editable template and fills it per record.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TemplateRenderer {
    template: String,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl TemplateRenderer {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Replaces the template wholesale. Placeholder problems surface at render time.
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    /// Placeholders referenced by the template, in order of appearance.
    pub fn placeholders(&self) -> Result<Vec<Placeholder>, RenderError> {
        let placeholders = placeholder::parse(&self.template)?
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(placeholder) => Some(placeholder),
                Segment::Text(_) => None,
            })
            .collect();
        Ok(placeholders)
    }

    /// Substitutes every placeholder and returns the body text untouched otherwise.
    pub fn render(&self, record: &Record, source_name: &str) -> Result<String, RenderError> {
        let segments = placeholder::parse(&self.template)?;
        let mut out = String::with_capacity(self.template.len());

        for segment in segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder(placeholder) => {
                    out.push_str(placeholder.resolve(record, source_name));
                }
            }
        }

        Ok(out)
    }
}

/// Full email text as shown to the user: recipient line, blank line, body.
pub fn compose(record: &Record, body: &str) -> String {
    format!("{}\n\n{}", record.email, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::Field;

    fn record() -> Record {
        Record {
            first_name: "Alex".to_string(),
            last_name: "Lee".to_string(),
            email: "alex@example.com".to_string(),
            username: "alee".to_string(),
            password: "p@ss".to_string(),
        }
    }

    #[test]
    fn default_template_fills_credentials() {
        let renderer = TemplateRenderer::default();
        let body = renderer.render(&record(), "2026cohort").expect("render");

        assert!(body.starts_with(
            "UPEI Off-Campus Student Credentials - IB 2026cohort class of 2026\n\nHi Alex,"
        ));
        assert!(body.contains("\nusername: alee\n"));
        assert!(body.contains("\npassword: p@ss\n"));
        assert!(body.ends_with("Thank you,\nSpencer"));
    }

    #[test]
    fn default_template_uses_four_placeholders() {
        let placeholders = TemplateRenderer::default().placeholders().expect("valid");
        assert_eq!(
            placeholders,
            [
                Placeholder::SourceFileName,
                Placeholder::Field(Field::FirstName),
                Placeholder::Field(Field::Username),
                Placeholder::Field(Field::Password),
            ]
        );
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let renderer = TemplateRenderer::new("  {Last Name}\n\n");
        assert_eq!(renderer.render(&record(), "x").expect("render"), "  Lee\n\n");
    }

    #[test]
    fn unknown_placeholder_fails_only_at_render() {
        let mut renderer = TemplateRenderer::default();
        renderer.set_template("Hi {Nickname}");

        assert_eq!(renderer.template(), "Hi {Nickname}");
        assert_eq!(
            renderer.render(&record(), "x"),
            Err(RenderError::UnknownPlaceholder("Nickname".to_string()))
        );
    }

    #[test]
    fn compose_prefixes_recipient() {
        assert_eq!(compose(&record(), "body"), "alex@example.com\n\nbody");
    }
}
