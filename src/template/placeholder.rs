use std::fmt;

use crate::profiles::{Field, Record};

use super::RenderError;

pub const SOURCE_FILE_NAME: &str = "csv_filename";

/// A token the renderer knows how to fill.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Placeholder {
    Field(Field),
    SourceFileName,
}

impl Placeholder {
    pub fn from_name(name: &str) -> Option<Self> {
        if name == SOURCE_FILE_NAME {
            return Some(Placeholder::SourceFileName);
        }

        Field::from_column(name).map(Placeholder::Field)
    }

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Field(field) => field.column(),
            Placeholder::SourceFileName => SOURCE_FILE_NAME,
        }
    }

    pub fn resolve<'a>(self, record: &'a Record, source_name: &'a str) -> &'a str {
        match self {
            Placeholder::Field(field) => record.get(field),
            Placeholder::SourceFileName => source_name,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Segment<'a> {
    Text(&'a str),
    Placeholder(Placeholder),
}

/// Splits a template into literal text and placeholders.
///
/// `{{` and `}}` stand for literal braces. The first problem found while
/// scanning left to right is returned.
pub fn parse(template: &str) -> Result<Vec<Segment<'_>>, RenderError> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'{' if bytes.get(index + 1) == Some(&b'{') => {
                push_text(&mut segments, &template[text_start..=index]);
                index += 2;
                text_start = index;
            }
            b'{' => {
                let name_start = index + 1;
                let Some(len) = template[name_start..].find('}') else {
                    return Err(RenderError::UnclosedBrace { offset: index });
                };
                let name = &template[name_start..name_start + len];
                let placeholder = Placeholder::from_name(name)
                    .ok_or_else(|| RenderError::UnknownPlaceholder(name.to_string()))?;

                push_text(&mut segments, &template[text_start..index]);
                segments.push(Segment::Placeholder(placeholder));
                index = name_start + len + 1;
                text_start = index;
            }
            b'}' if bytes.get(index + 1) == Some(&b'}') => {
                push_text(&mut segments, &template[text_start..=index]);
                index += 2;
                text_start = index;
            }
            b'}' => return Err(RenderError::StrayBrace { offset: index }),
            _ => index += 1,
        }
    }

    push_text(&mut segments, &template[text_start..]);
    Ok(segments)
}

fn push_text<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
}
