//! `%s`-style URL templates for feed links.
//!
//! A template holds exactly one `%s` placeholder; `%%` stands for a literal
//! percent sign. Templates are parsed once at start-up so expansion itself
//! cannot fail.

use crate::utils::error::{PublishError, Result};
use crate::utils::validation::validate_url;

const PLACEHOLDER_SAMPLE: &str = "sample-ident";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    prefix: String,
    suffix: String,
}

impl UrlTemplate {
    pub fn parse(field_name: &str, template: &str) -> Result<Self> {
        let invalid = |reason: String| PublishError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason,
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut placeholders = 0usize;
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            let out = if placeholders == 0 {
                &mut prefix
            } else {
                &mut suffix
            };
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('%') => out.push('%'),
                Some('s') => placeholders += 1,
                Some(other) => {
                    return Err(invalid(format!("Unsupported directive %{}", other)));
                }
                None => return Err(invalid("Dangling % at end of template".to_string())),
            }
        }

        match placeholders {
            1 => Ok(Self { prefix, suffix }),
            0 => Err(invalid("Template has no %s placeholder".to_string())),
            n => Err(invalid(format!(
                "Template has {} %s placeholders, expected exactly one",
                n
            ))),
        }
    }

    pub fn expand(&self, ident: &str) -> String {
        format!("{}{}{}", self.prefix, ident, self.suffix)
    }
}

/// The two link templates a feed payload needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplates {
    channel_link: UrlTemplate,
    channel_image_url: UrlTemplate,
}

impl UrlTemplates {
    /// Parses both templates and checks that each expands to an http(s) URL.
    pub fn parse(channel_link_template: &str, channel_image_url_template: &str) -> Result<Self> {
        let channel_link =
            UrlTemplate::parse("publisher.channel_link_template", channel_link_template)?;
        validate_url(
            "publisher.channel_link_template",
            &channel_link.expand(PLACEHOLDER_SAMPLE),
        )?;

        let channel_image_url = UrlTemplate::parse(
            "publisher.channel_image_url_template",
            channel_image_url_template,
        )?;
        validate_url(
            "publisher.channel_image_url_template",
            &channel_image_url.expand(PLACEHOLDER_SAMPLE),
        )?;

        Ok(Self {
            channel_link,
            channel_image_url,
        })
    }

    pub fn channel_link(&self, transport_ident: &str) -> String {
        self.channel_link.expand(transport_ident)
    }

    pub fn channel_image_url(&self, image_transport_ident: &str) -> String {
        self.channel_image_url.expand(image_transport_ident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_substitutes_transport_ident() {
        let template = UrlTemplate::parse("link", "https://x/%s").unwrap();
        assert_eq!(template.expand("abc"), "https://x/abc");
    }

    #[test]
    fn test_placeholder_in_middle_with_escaped_percent() {
        let template = UrlTemplate::parse("link", "https://x/%s/feed.json?q=100%%").unwrap();
        assert_eq!(template.expand("t1"), "https://x/t1/feed.json?q=100%");
    }

    #[test]
    fn test_missing_placeholder_is_rejected() {
        let err = UrlTemplate::parse("link", "https://x/").unwrap_err();
        assert!(err.to_string().contains("no %s placeholder"));
    }

    #[test]
    fn test_multiple_placeholders_are_rejected() {
        assert!(UrlTemplate::parse("link", "https://x/%s/%s").is_err());
    }

    #[test]
    fn test_foreign_directives_are_rejected() {
        assert!(UrlTemplate::parse("link", "https://x/%d").is_err());
        assert!(UrlTemplate::parse("link", "https://x/%s%").is_err());
    }

    #[test]
    fn test_templates_must_expand_to_http_urls() {
        assert!(UrlTemplates::parse("https://x/%s", "https://img/%s").is_ok());
        assert!(UrlTemplates::parse("%s", "https://img/%s").is_err());
        assert!(UrlTemplates::parse("https://x/%s", "ftp://img/%s").is_err());
    }

    #[test]
    fn test_channel_urls() {
        let templates = UrlTemplates::parse("https://x/%s", "https://img/%s.png").unwrap();
        assert_eq!(templates.channel_link("abc"), "https://x/abc");
        assert_eq!(templates.channel_image_url("logo"), "https://img/logo.png");
    }
}
