/// Split a drafted letter body into exactly three paragraphs.
///
/// The drafting service is instructed to return three paragraphs separated
/// by double line breaks, and when it does those paragraphs pass through
/// unchanged. Any other shape (one block, two paragraphs, four or more) is
/// flattened into a single line and cut into character-count thirds, so the
/// caller can always rely on getting three strings back. Mid-word cuts are
/// accepted in the fallback; no input makes this function fail.
pub fn normalize_paragraphs(body: &str) -> [String; 3] {
    let parts: Vec<&str> = body.split("\n\n").collect();

    if parts.len() == 3 {
        return [
            parts[0].to_string(),
            parts[1].to_string(),
            parts[2].to_string(),
        ];
    }

    // Collapse paragraph breaks and re-cut by character position. Thirds
    // are measured in chars, not bytes, so accented text never splits
    // inside a code point.
    let flat = body.replace("\n\n", " ");
    let chars: Vec<char> = flat.chars().collect();
    let third = chars.len() / 3;

    [
        chars[..third].iter().collect(),
        chars[third..third * 2].iter().collect(),
        chars[third * 2..].iter().collect(),
    ]
}

/// Re-join three paragraphs into the double-line-break representation used
/// by the drafting service and the template filler.
pub fn join_paragraphs(paragraphs: &[String; 3]) -> String {
    paragraphs.join("\n\n")
}
