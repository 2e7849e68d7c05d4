use std::io;
use std::io::ErrorKind;

use lazy_static::lazy_static;
use regex::Regex;
use serde_yaml::{Mapping, Value};

use crate::content::tag_field::normalize_tags;

const DELIMITER: &str = "---";

/// Recognized metadata of a post. Every field is filled, missing keys are
/// empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: String,
    pub description: String,
    pub date: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
}

impl FrontMatter {
    fn from_mapping(data: &Mapping) -> FrontMatter {
        FrontMatter {
            title: scalar_field(data, "title"),
            description: scalar_field(data, "description"),
            date: scalar_field(data, "date"),
            author: scalar_field(data, "author"),
            category: scalar_field(data, "category"),
            tags: normalize_tags(data.get("tags")),
            image: scalar_field(data, "image"),
        }
    }
}

/// Splits a post file into its metadata and its markdown body.
///
/// A file without an opening `---` line has no metadata and the whole text is
/// the body. A block that is never closed runs to the end of the file and
/// leaves an empty body. Invalid YAML or a top level that is not a mapping is
/// reported as `InvalidData`.
pub fn parse_front_matter(raw: &str) -> io::Result<(FrontMatter, &str)> {
    lazy_static! {
        static ref BLOCK_REGEX: Regex = Regex::new(
            r"(?ms)\A---[ \t]*\r?\n(?P<matter>.*?)^---[ \t]*(?:\r?\n|\z)"
        ).unwrap();
    }

    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    if !opens_block(raw) {
        return Ok((FrontMatter::default(), raw));
    }

    let (matter, body) = match BLOCK_REGEX.captures(raw) {
        Some(caps) => {
            let matter = caps.name("matter").map(|m| m.as_str()).unwrap_or("");
            let body_start = caps.get(0).map(|m| m.end()).unwrap_or(raw.len());
            (matter, &raw[body_start..])
        }
        None => {
            let matter_start = raw.find('\n').map(|i| i + 1).unwrap_or(raw.len());
            (&raw[matter_start..], "")
        }
    };

    if matter.trim().is_empty() {
        return Ok((FrontMatter::default(), body));
    }

    let data: Value = serde_yaml::from_str(matter).map_err(|e| {
        io::Error::new(ErrorKind::InvalidData, format!("Invalid front matter: {}", e))
    })?;

    let front_matter = match data {
        Value::Null => FrontMatter::default(),
        Value::Mapping(ref map) => FrontMatter::from_mapping(map),
        _ => return Err(io::Error::new(ErrorKind::InvalidData, "Front matter is not a key/value block")),
    };

    Ok((front_matter, body))
}

fn opens_block(raw: &str) -> bool {
    let first_line = raw.lines().next().unwrap_or("");
    first_line.trim_end() == DELIMITER
}

fn scalar_field(data: &Mapping, key: &str) -> String {
    match data.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
