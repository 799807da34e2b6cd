use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("prompt template is empty")]
    Empty,

    #[error("unclosed template variable: {{{{{0}")]
    Unclosed(String),

    #[error("config variable not found: {{{{config.{0}}}}}")]
    MissingConfigValue(String),

    #[error("unknown template variable: {{{{{name}}}}}. Allowed runtime vars: {allowed:?}")]
    UnknownVariable { name: String, allowed: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Var(String),
}

/// A prompt template parsed once at load time.
///
/// `{{config.a.b}}` placeholders are resolved from the TOML tree while parsing.
/// Remaining `{{name}}` placeholders must be in the caller's allowed set and
/// are filled by [`PromptTemplate::render`]. `\{{` produces a literal `{{`.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    pub fn parse(
        source: &str,
        toml_value: &toml::Value,
        allowed_runtime: &[&str],
    ) -> Result<Self, TemplateError> {
        if source.trim().is_empty() {
            return Err(TemplateError::Empty);
        }

        let mut segments = Vec::new();
        let mut text = String::with_capacity(source.len());
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\\' && chars.peek() == Some(&'{') {
                chars.next();
                if chars.peek() == Some(&'{') {
                    chars.next();
                    text.push_str("{{");
                } else {
                    text.push_str("\\{");
                }
            } else if c == '{' && chars.peek() == Some(&'{') {
                chars.next();

                let mut raw = String::new();
                loop {
                    match chars.next() {
                        Some('}') if chars.peek() == Some(&'}') => {
                            chars.next();
                            break;
                        }
                        Some(ch) => raw.push(ch),
                        None => return Err(TemplateError::Unclosed(raw)),
                    }
                }
                let name = raw.trim();

                if let Some(path) = name.strip_prefix("config.") {
                    let value = lookup_toml_path(toml_value, path)
                        .ok_or_else(|| TemplateError::MissingConfigValue(path.to_string()))?;
                    text.push_str(&toml_value_to_string(value));
                } else if allowed_runtime.contains(&name) {
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Var(name.to_string()));
                } else {
                    return Err(TemplateError::UnknownVariable {
                        name: name.to_string(),
                        allowed: allowed_runtime.iter().map(|s| s.to_string()).collect(),
                    });
                }
            } else {
                text.push(c);
            }
        }

        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(Self { segments })
    }

    /// Runtime variable names in order of first appearance.
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Var(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute runtime variables. Values are inserted verbatim and never
    /// re-scanned for placeholders. A variable without a value is left as
    /// `{{name}}`.
    pub fn render(&self, vars: &HashMap<&str, &str>) -> String {
        let mut result = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => result.push_str(text),
                Segment::Var(name) => match vars.get(name.as_str()) {
                    Some(value) => result.push_str(value),
                    None => {
                        result.push_str("{{");
                        result.push_str(name);
                        result.push_str("}}");
                    }
                },
            }
        }
        result
    }
}

/// Walk the TOML value tree by dotted path (e.g., "batch.window_size").
fn lookup_toml_path<'a>(value: &'a toml::Value, path: &str) -> Option<&'a toml::Value> {
    let mut current = value;
    for key in path.split('.') {
        current = current.get(key)?;
    }
    Some(current)
}

fn toml_value_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Array(arr) => arr
            .iter()
            .map(toml_value_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        toml::Value::Table(_) => "[table]".to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_toml() -> toml::Value {
        toml::from_str(
            r#"
            [batch]
            window_size = 7

            [newsroom]
            name = "Headline Desk"
            languages = ["en", "nl"]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn resolves_config_vars_at_parse_time() {
        let template = PromptTemplate::parse(
            "You work at {{config.newsroom.name}} ({{ config.newsroom.languages }}).",
            &test_toml(),
            &[],
        )
        .unwrap();

        assert!(template.variables().is_empty());
        assert_eq!(
            template.render(&HashMap::new()),
            "You work at Headline Desk (en, nl)."
        );
    }

    #[test]
    fn renders_runtime_vars() {
        let template = PromptTemplate::parse(
            "Headline: {{headline}}\nDescription: {{description}}",
            &test_toml(),
            &["headline", "description"],
        )
        .unwrap();

        let rendered = template.render(&HashMap::from([
            ("headline", "Bank raises interest rates again"),
            ("description", ""),
        ]));
        assert_eq!(
            rendered,
            "Headline: Bank raises interest rates again\nDescription: "
        );
        assert_eq!(template.variables(), vec!["headline", "description"]);
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let template =
            PromptTemplate::parse("H: {{headline}}", &test_toml(), &["headline"]).unwrap();
        let rendered = template.render(&HashMap::from([("headline", "{{config.batch}}")]));
        assert_eq!(rendered, "H: {{config.batch}}");
    }

    #[test]
    fn escapes_literal_braces() {
        let template =
            PromptTemplate::parse(r#"JSON: \{{"score": "1"}}"#, &test_toml(), &[]).unwrap();
        assert_eq!(template.render(&HashMap::new()), r#"JSON: {{"score": "1"}}"#);
    }

    #[test]
    fn missing_runtime_value_is_left_in_place() {
        let template =
            PromptTemplate::parse("{{headline}}", &test_toml(), &["headline"]).unwrap();
        assert_eq!(template.render(&HashMap::new()), "{{headline}}");
    }

    #[test]
    fn errors_on_missing_config_var() {
        let err = PromptTemplate::parse("{{config.nonexistent.field}}", &test_toml(), &[])
            .unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingConfigValue("nonexistent.field".to_string())
        );
    }

    #[test]
    fn errors_on_unknown_runtime_var() {
        let err = PromptTemplate::parse("{{taxonomy}}", &test_toml(), &["headline"]).unwrap_err();
        assert!(matches!(err, TemplateError::UnknownVariable { ref name, .. } if name == "taxonomy"));
    }

    #[test]
    fn errors_on_unclosed_var_and_empty_source() {
        assert!(matches!(
            PromptTemplate::parse("Rate {{headline", &test_toml(), &["headline"]),
            Err(TemplateError::Unclosed(_))
        ));
        assert_eq!(
            PromptTemplate::parse(" \n ", &test_toml(), &[]),
            Err(TemplateError::Empty)
        );
    }
}
