//! Section parser: splits a report on header lines.

use dr_core::{DrError, Result, Section};
use regex::Regex;

/// A recognized header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub start: usize,
    pub end: usize,
    pub title: String,
}

/// Header-aware section parser.
#[derive(Debug, Clone)]
pub struct SectionParser {
    header_re: Regex,
    fallback_name: String,
}

impl SectionParser {
    /// Compile a header pattern. Capture group 1 must hold the title.
    pub fn new(header_pattern: &str, fallback_name: &str) -> Result<Self> {
        let header_re = Regex::new(header_pattern)?;
        if header_re.captures_len() < 2 {
            return Err(DrError::MissingTitleGroup { pattern: header_pattern.to_string() });
        }
        Ok(Self {
            header_re,
            fallback_name: fallback_name.to_string(),
        })
    }

    /// Title of a single header line, if it is one.
    pub fn title_of(&self, line: &str) -> Option<String> {
        let cap = self.header_re.captures(line)?;
        let title = cap.get(1)?.as_str().trim();
        if title.is_empty() {
            return None;
        }
        Some(title.to_string())
    }

    pub fn is_header(&self, line: &str) -> bool {
        self.title_of(line).is_some()
    }

    /// All header lines in document order.
    pub fn find_headers(&self, content: &str) -> Vec<HeaderMatch> {
        self.header_re
            .captures_iter(content)
            .filter_map(|cap| {
                let m = cap.get(0)?;
                let title = cap.get(1)?.as_str().trim();
                if title.is_empty() {
                    return None;
                }
                Some(HeaderMatch { start: m.start(), end: m.end(), title: title.to_string() })
            })
            .collect()
    }

    /// Split content into sections. Whitespace-only input has no sections;
    /// headerless input becomes a single fallback section.
    pub fn parse(&self, content: &str) -> Vec<Section> {
        if content.trim().is_empty() {
            return Vec::new();
        }

        let headers = self.find_headers(content);
        if headers.is_empty() {
            return vec![Section::new(self.fallback_name.as_str(), content.trim())];
        }

        let mut sections = Vec::with_capacity(headers.len() + 1);

        // Pre-header content
        let pre = content[..headers[0].start].trim();
        if !pre.is_empty() {
            sections.push(Section::new(self.fallback_name.as_str(), pre));
        }

        for (i, header) in headers.iter().enumerate() {
            let end = headers.get(i + 1).map(|next| next.start).unwrap_or(content.len());
            let body = content[header.end..end].trim();
            sections.push(Section::new(header.title.as_str(), body));
        }
        sections
    }
}
