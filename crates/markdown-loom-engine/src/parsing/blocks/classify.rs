/// The structural kind of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// Heading level 1 through 6.
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Classifies a normalized block. Total: every string maps to exactly one
/// kind, with [`BlockKind::Paragraph`] as the universal fallback.
///
/// Precedence, first match wins:
/// 1. heading (1-6 `#` then a space)
/// 2. fenced code (opening and closing ```; a lone opening fence is not
///    a code block)
/// 3. quote (every line starts `>`)
/// 4. unordered list (every line starts `- `)
/// 5. ordered list (line *i* starts `"{i}. "`, consecutive from 1)
pub fn classify_block(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }

    if is_code_fence(block) {
        return BlockKind::Code;
    }

    // split('\n') rather than lines(): the empty block must classify over
    // a single empty line, not over no lines at all.
    let lines: Vec<&str> = block.split('\n').collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }

    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }

    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block.as_bytes().get(hashes) == Some(&b' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

fn is_code_fence(block: &str) -> bool {
    let trimmed = block.trim_end();
    // A block of exactly ``` is an unclosed opening fence, not code.
    block.starts_with("```") && trimmed.ends_with("```") && trimmed.len() > 3
}
