use std::fmt;

use serde::{Deserialize, Serialize};

/// Provenance label for a merged-context section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionLabel {
    TimelineEvents,
    Documents,
    Connections,
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SectionLabel::TimelineEvents => "TIMELINE EVENTS",
            SectionLabel::Documents => "RELEVANT DOCUMENTS",
            SectionLabel::Connections => "KEY CONNECTIONS",
        };
        f.write_str(s)
    }
}

/// One labeled run of context entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextSection {
    pub label: SectionLabel,
    pub entries: Vec<String>,
}

/// The single merged context handed to the Synthesizer: timeline chunks
/// in rank order, then document chunks in rank order, then detected
/// connections, each under a provenance label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedContext {
    pub sections: Vec<ContextSection>,
}

impl MergedContext {
    /// Append a section, skipping it entirely when it has no entries.
    pub fn push_section(&mut self, label: SectionLabel, entries: Vec<String>) {
        if !entries.is_empty() {
            self.sections.push(ContextSection { label, entries });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Render to the prompt string consumed by the Synthesizer.
    pub fn render(&self) -> String {
        let mut parts = Vec::new();
        for section in &self.sections {
            parts.push(format!("=== {} ===", section.label));
            for entry in &section.entries {
                parts.push(entry.clone());
            }
        }
        parts.join("\n\n")
    }
}
