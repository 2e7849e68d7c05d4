use serde_yaml::Value;

/// The `tags` key as it was declared in the front matter.
///
/// Older posts declare tags as a comma separated string, newer ones as a
/// YAML list. Both have to keep working, so the raw value is classified
/// here and turned into a plain `Vec<String>` right away.
#[derive(Debug, Clone, PartialEq)]
pub enum TagField {
    Sequence(Vec<String>),
    Delimited(String),
    Absent,
}

impl TagField {
    pub fn from_value(value: Option<&Value>) -> TagField {
        match value {
            Some(Value::Sequence(items)) => {
                TagField::Sequence(items.iter().filter_map(sequence_item).collect())
            }
            Some(Value::String(s)) => TagField::Delimited(s.clone()),
            _ => TagField::Absent,
        }
    }

    pub fn normalize(self) -> Vec<String> {
        match self {
            TagField::Sequence(tags) => tags,
            TagField::Delimited(tags) => split_tags(&tags),
            TagField::Absent => vec![],
        }
    }
}

/// Canonical tag list for a raw front matter value.
pub fn normalize_tags(value: Option<&Value>) -> Vec<String> {
    TagField::from_value(value).normalize()
}

fn sequence_item(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn split_tags(tags_str: &str) -> Vec<String> {
    tags_str.split(',')
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}
