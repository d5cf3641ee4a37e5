//! Free-text command tokenizer

/// A raw input line split into its command keyword and detail chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedInput {
    /// First word of the line, lowercased. Empty for a blank line.
    pub keyword: String,
    /// The rest of the line, split at tag boundaries. Chunk 0 is the task
    /// name or index; later chunks each start with a `/tag`.
    pub details: Vec<String>,
}

/// Tokenize one input line. The keyword is the first whitespace-delimited
/// word; the remainder is split into chunks at every whitespace-preceded
/// `/`, so a tag and its value travel together. Text inside a chunk keeps
/// its spacing; chunks are trimmed at the edges.
pub fn tokenize(input: &str) -> TokenizedInput {
    let trimmed = input.trim();
    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (trimmed, ""),
    };

    TokenizedInput {
        keyword: keyword.to_lowercase(),
        details: split_details(rest),
    }
}

fn split_details(rest: &str) -> Vec<String> {
    if rest.is_empty() {
        return Vec::new();
    }

    // Chunk boundaries sit at each '/' that follows whitespace. A '/' at
    // position 0 starts the first chunk, which the validator rejects as a
    // missing name.
    let mut boundaries = Vec::new();
    let mut prev_was_space = false;
    for (i, c) in rest.char_indices() {
        if c == '/' && prev_was_space {
            boundaries.push(i);
        }
        prev_was_space = c.is_whitespace();
    }

    let mut details = Vec::new();
    let mut start = 0;
    for boundary in boundaries {
        let chunk = rest[start..boundary].trim();
        if !chunk.is_empty() {
            details.push(chunk.to_string());
        }
        start = boundary;
    }
    let last = rest[start..].trim();
    if !last.is_empty() {
        details.push(last.to_string());
    }

    details
}
