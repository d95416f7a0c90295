//! URL templates with `:name` placeholders.
//!
//! A template is a `/`-separated relative path such as `rest/user/:id`.
//! Expanding it against a set of [`Params`] substitutes the placeholder,
//! drops the placeholder segment when no value is supplied, and returns
//! every other parameter as a query-string pair.

use reqwest::Url;
use thiserror::Error;

use super::Params;

/// Errors from parsing or resolving a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("url template is empty")]
    Empty,

    #[error("url template {template:?} has more than one placeholder (:{first}, :{second})")]
    MultiplePlaceholders {
        template: String,
        first: String,
        second: String,
    },

    #[error("url template {template:?} has an invalid placeholder {segment:?}")]
    InvalidPlaceholder { template: String, segment: String },

    #[error("base url {0} cannot hold a path")]
    CannotBeBase(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed resource path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    raw: String,
    segments: Vec<Segment>,
}

/// The outcome of expanding a template: unencoded path segments plus the
/// parameters that had no placeholder to land in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
}

impl UrlTemplate {
    /// Parse a template. Empty segments are ignored, so leading, trailing
    /// and doubled slashes are harmless.
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut placeholder: Option<String> = None;

        for part in raw.split('/').filter(|s| !s.is_empty()) {
            let Some(name) = part.strip_prefix(':') else {
                segments.push(Segment::Literal(part.to_string()));
                continue;
            };

            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(TemplateError::InvalidPlaceholder {
                    template: raw.to_string(),
                    segment: part.to_string(),
                });
            }

            if let Some(first) = &placeholder {
                return Err(TemplateError::MultiplePlaceholders {
                    template: raw.to_string(),
                    first: first.clone(),
                    second: name.to_string(),
                });
            }

            placeholder = Some(name.to_string());
            segments.push(Segment::Placeholder(name.to_string()));
        }

        if segments.is_empty() {
            return Err(TemplateError::Empty);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The template as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Name of the substitutable placeholder, if the template has one.
    pub fn placeholder(&self) -> Option<&str> {
        self.segments.iter().find_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute `params` into the template.
    pub fn expand(&self, params: &Params) -> Expansion {
        let mut segments = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => segments.push(text.clone()),
                Segment::Placeholder(name) => {
                    if let Some(value) = params.get(name) {
                        segments.push(value.to_string());
                    }
                }
            }
        }

        let placeholder = self.placeholder();
        let query = params
            .iter()
            .filter(|(key, _)| Some(*key) != placeholder)
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Expansion { segments, query }
    }

    /// Expand the template and append it to `base`.
    ///
    /// Path segments are percent-encoded individually, so a substituted
    /// value can never introduce extra path components.
    pub fn resolve(&self, base: &Url, params: &Params) -> Result<Url, TemplateError> {
        let expansion = self.expand(params);
        let mut url = base.clone();

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| TemplateError::CannotBeBase(base.to_string()))?;
            path.pop_if_empty();
            path.extend(expansion.segments.iter());
        }

        if !expansion.query.is_empty() {
            url.query_pairs_mut().extend_pairs(expansion.query.iter());
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base() -> Url {
        Url::parse("http://localhost:8080/").unwrap()
    }

    #[test]
    fn parses_static_template() {
        let template = UrlTemplate::parse("rest/user").unwrap();
        assert_eq!(template.placeholder(), None);
        assert_eq!(template.as_str(), "rest/user");
    }

    #[test]
    fn parses_single_placeholder() {
        let template = UrlTemplate::parse("rest/user/:id").unwrap();
        assert_eq!(template.placeholder(), Some("id"));
    }

    #[test]
    fn rejects_two_placeholders() {
        let err = UrlTemplate::parse("rest/:group/:id").unwrap_err();
        assert_eq!(
            err,
            TemplateError::MultiplePlaceholders {
                template: "rest/:group/:id".to_string(),
                first: "group".to_string(),
                second: "id".to_string(),
            }
        );
    }

    #[test]
    fn rejects_empty_and_unnamed() {
        assert_eq!(UrlTemplate::parse("").unwrap_err(), TemplateError::Empty);
        assert_eq!(UrlTemplate::parse("//").unwrap_err(), TemplateError::Empty);
        assert!(matches!(
            UrlTemplate::parse("rest/user/:").unwrap_err(),
            TemplateError::InvalidPlaceholder { .. }
        ));
        assert!(matches!(
            UrlTemplate::parse("rest/user/:i-d").unwrap_err(),
            TemplateError::InvalidPlaceholder { .. }
        ));
    }

    #[test]
    fn expand_substitutes_id() {
        let template = UrlTemplate::parse("rest/user/:id").unwrap();
        let expansion = template.expand(&Params::id(5));
        assert_eq!(expansion.segments, vec!["rest", "user", "5"]);
        assert!(expansion.query.is_empty());
    }

    #[test]
    fn expand_drops_unfilled_placeholder() {
        let template = UrlTemplate::parse("rest/user/:id").unwrap();
        let expansion = template.expand(&Params::new());
        assert_eq!(expansion.segments, vec!["rest", "user"]);
    }

    #[test]
    fn expand_moves_extra_params_to_query() {
        let template = UrlTemplate::parse("rest/user/:id").unwrap();
        let params = Params::id(3).with("view", "full").with("lang", "en");
        let expansion = template.expand(&params);
        assert_eq!(expansion.segments, vec!["rest", "user", "3"]);
        assert_eq!(
            expansion.query,
            vec![
                ("view".to_string(), "full".to_string()),
                ("lang".to_string(), "en".to_string()),
            ]
        );
    }

    #[test]
    fn resolve_appends_to_base_path() {
        let template = UrlTemplate::parse("rest/user/:id").unwrap();
        let base = Url::parse("http://example.com/app/").unwrap();
        let url = template.resolve(&base, &Params::id(5)).unwrap();
        assert_eq!(url.as_str(), "http://example.com/app/rest/user/5");
    }

    #[test]
    fn resolve_base_without_trailing_slash() {
        let template = UrlTemplate::parse("rest/user").unwrap();
        let base = Url::parse("http://example.com/app").unwrap();
        let url = template.resolve(&base, &Params::new()).unwrap();
        assert_eq!(url.as_str(), "http://example.com/app/rest/user");
    }

    #[test]
    fn resolve_never_leaves_placeholder_text() {
        let template = UrlTemplate::parse("rest/user/:id").unwrap();
        let url = template.resolve(&base(), &Params::id(5)).unwrap();
        assert_eq!(url.path(), "/rest/user/5");
        assert!(!url.as_str().contains(":id"));
    }

    #[test]
    fn resolve_percent_encodes_values() {
        let template = UrlTemplate::parse("rest/user/:id").unwrap();
        let url = template.resolve(&base(), &Params::id("a/b c")).unwrap();
        assert_eq!(url.path(), "/rest/user/a%2Fb%20c");
    }

    #[test]
    fn resolve_adds_query_string() {
        let template = UrlTemplate::parse("rest/user").unwrap();
        let url = template
            .resolve(&base(), &Params::new().with("name", "a"))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/rest/user?name=a");
    }

    #[test]
    fn resolve_rejects_cannot_be_base() {
        let template = UrlTemplate::parse("rest/user").unwrap();
        let base = Url::parse("mailto:someone@example.com").unwrap();
        assert!(matches!(
            template.resolve(&base, &Params::new()),
            Err(TemplateError::CannotBeBase(_))
        ));
    }
}
