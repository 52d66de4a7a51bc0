use std::fmt;

/// Largest value a single reply field may hold
pub const FIELD_LIMIT: usize = 1024;

/// Most fields one long value may be spread across; anything past this is dropped
pub const MAX_FIELD_CHUNKS: usize = 3;

/// A named block of text within a reply
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

/// Transport-neutral rendering of a command result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reply {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    pub footer: Option<String>,
}

impl Reply {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Add `value` under `name`, split across continuation fields when it
    /// exceeds [`FIELD_LIMIT`]. Empty values are skipped.
    pub fn field(mut self, name: &str, value: &str) -> Self {
        for (index, chunk) in chunk_text(value, FIELD_LIMIT, MAX_FIELD_CHUNKS)
            .into_iter()
            .enumerate()
        {
            let name = if index == 0 {
                name.to_string()
            } else {
                format!("{} (cont.)", name)
            };
            self.fields.push(Field { name, value: chunk });
        }
        self
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "{}", description)?;
        }
        for field in &self.fields {
            writeln!(f, "\n{}:\n{}", field.name, field.value)?;
        }
        if let Some(footer) = &self.footer {
            writeln!(f, "\n{}", footer)?;
        }
        Ok(())
    }
}

/// Split `text` into at most `max_chunks` pieces of at most `limit` characters
///
/// Splits happen at line breaks where possible; a single line longer than
/// `limit` is cut at the limit. Text beyond the last chunk is discarded.
pub fn chunk_text(text: &str, limit: usize, max_chunks: usize) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.lines().flat_map(|line| split_long_line(line, limit)) {
        let line_len = line.chars().count();
        let needed = if current.is_empty() {
            line_len
        } else {
            current_len + 1 + line_len
        };

        if needed > limit && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
            if chunks.len() == max_chunks {
                return chunks;
            }
        }

        if !current.is_empty() {
            current.push('\n');
            current_len += 1;
        }
        current.push_str(line);
        current_len += line_len;
    }

    if !current.trim().is_empty() && chunks.len() < max_chunks {
        chunks.push(current);
    }
    chunks
}

fn split_long_line(line: &str, limit: usize) -> Vec<&str> {
    if limit == 0 || line.chars().count() <= limit {
        return vec![line];
    }

    let mut pieces = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(limit)
            .map(|(index, _)| index)
            .unwrap_or(rest.len());
        let (piece, tail) = rest.split_at(cut);
        pieces.push(piece);
        rest = tail;
    }
    pieces
}
