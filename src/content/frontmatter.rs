//! Front-matter parsing

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use super::ContentError;

/// An empty value (`wip:` with nothing after it) counts as false; anything
/// other than a boolean or null is still rejected.
fn bool_or_null<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

/// Front-matter data from a blog post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Work in progress: only visible in development builds.
    /// Also accepted as `private`.
    #[serde(alias = "private", deserialize_with = "bool_or_null")]
    pub wip: bool,

    /// Additional custom fields, in source order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let content = content.trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str), ContentError> {
        let rest = &content[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing fence: the leading --- is a thematic break
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        // A --- pair around prose is a pair of markdown separators, not YAML.
        if !yaml_content.lines().any(looks_like_yaml_key) {
            return Ok((FrontMatter::default(), content));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content).map_err(|e| {
            ContentError::FrontMatter {
                format: "YAML",
                message: e.to_string(),
            }
        })?;

        Ok((fm, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str), ContentError> {
        if let Some(rest) = content.strip_prefix(";;;") {
            if let Some(end_pos) = rest.find(";;;") {
                let json_content = &rest[..end_pos];
                let remaining = &rest[end_pos + 3..];
                let remaining = remaining.trim_start_matches(['\n', '\r']);

                return Ok((from_json(json_content)?, remaining));
            }
        }

        if content.starts_with('{') {
            // serde_json knows where the object ends, braces in strings included
            let mut stream =
                serde_json::Deserializer::from_str(content).into_iter::<FrontMatter>();
            return match stream.next() {
                Some(Ok(fm)) => {
                    let remaining = &content[stream.byte_offset()..];
                    Ok((fm, remaining.trim_start_matches(['\n', '\r'])))
                }
                Some(Err(e)) => Err(ContentError::FrontMatter {
                    format: "JSON",
                    message: e.to_string(),
                }),
                None => Err(ContentError::FrontMatter {
                    format: "JSON",
                    message: "empty front-matter block".to_string(),
                }),
            };
        }

        Err(ContentError::FrontMatter {
            format: "JSON",
            message: "unterminated front-matter block".to_string(),
        })
    }
}

fn from_json(json: &str) -> Result<FrontMatter, ContentError> {
    serde_json::from_str(json).map_err(|e| ContentError::FrontMatter {
        format: "JSON",
        message: e.to_string(),
    })
}

/// `key:` followed by a space or end of line, where key is a plain ASCII
/// identifier and not a URL scheme.
fn looks_like_yaml_key(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return false;
    }

    let Some(colon_pos) = trimmed.find(':') else {
        return false;
    };

    let key = &trimmed[..colon_pos];
    let is_valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !matches!(key, "http" | "https" | "ftp");

    let after_colon = &trimmed[colon_pos + 1..];
    is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
}
