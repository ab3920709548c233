use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum SnippetSegment {
    Text(String),
    LineBreak,
}

/// Summary excerpt split on newlines. `expanded` belongs to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetBlock {
    pub segments: Vec<SnippetSegment>,
    pub expanded: bool,
}

impl SnippetBlock {
    /// One `LineBreak` per `\n`; a `\r` right before it is dropped.
    pub fn from_text(text: &str) -> Self {
        let mut segments = Vec::new();
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                segments.push(SnippetSegment::LineBreak);
            }
            let line = line.strip_suffix('\r').unwrap_or(line);
            if !line.is_empty() {
                segments.push(SnippetSegment::Text(line.to_string()));
            }
        }
        Self { segments, expanded: false }
    }

    pub fn line_breaks(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, SnippetSegment::LineBreak))
            .count()
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}
