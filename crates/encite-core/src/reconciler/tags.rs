//! Tag extraction from model text.
//!
//! The model is instructed to write each cited entity as
//! `<entity_type>company</entity_type><name>Microsoft</name>`. Tag names are
//! case-sensitive and their content may span lines.

use once_cell::sync::Lazy;
use regex::Regex;

static ENTITY_TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<entity_type>(.*?)</entity_type>").unwrap());

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<name>(.*?)</name>").unwrap());

/// Entity type and name pulled from one block of model text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedMention {
    pub entity_type: String,
    pub name: String,
}

/// Content of the first `<entity_type>` tag, if present.
pub fn entity_type_tag(text: &str) -> Option<&str> {
    first_capture(&ENTITY_TYPE_RE, text)
}

/// Content of the first `<name>` tag, if present.
pub fn name_tag(text: &str) -> Option<&str> {
    first_capture(&NAME_RE, text)
}

fn first_capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
