//! Front-matter parsing

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use super::ContentError;

/// Deserialize any YAML scalar into a string, keeping `None` for null
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| !v.is_null())
        .map(|v| value_to_string(&v)))
}

/// Flatten a YAML value into the string form exposed as post metadata
pub fn value_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => String::new(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Front-matter data from a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub published_at: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub cover: Option<String>,

    /// Every other key, in document order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// The block must open on the very first line with `---` and close with a
    /// `---` (or `...`) line. Without a closing line the whole input is body.
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some(rest) = strip_opening_fence(content) else {
            return Ok((FrontMatter::default(), content));
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            let trimmed = line.trim_end_matches(['\n', '\r']).trim_end();
            if trimmed == "---" || trimmed == "..." {
                let yaml_content = &rest[..offset];
                let remaining = &rest[offset + line.len()..];
                return Ok((Self::from_yaml(yaml_content)?, remaining));
            }
            offset += line.len();
        }

        Ok((FrontMatter::default(), content))
    }

    fn from_yaml(yaml_content: &str) -> Result<Self, ContentError> {
        if yaml_content.trim().is_empty() {
            return Ok(FrontMatter::default());
        }
        Ok(serde_yaml::from_str(yaml_content)?)
    }

    /// Extra keys flattened to strings
    pub fn metadata(&self) -> IndexMap<String, String> {
        self.extra
            .iter()
            .map(|(k, v)| (k.clone(), value_to_string(v)))
            .collect()
    }
}

fn strip_opening_fence(content: &str) -> Option<&str> {
    let line_end = content.find('\n')?;
    let first = content[..line_end].trim_end();
    (first == "---").then(|| &content[line_end + 1..])
}
