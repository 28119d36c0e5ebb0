/// Discord's spoiler marker. Text between two of these is hidden.
pub const SPOILER_MARKER: &str = "||";

/// Returns true if every bit of text in `body` is hidden under spoilers.
///
/// That is, after trimming, it has to be nothing but `||spoiler||` segments,
/// optionally with whitespace between them. A segment can't be empty and
/// can't contain `||` itself. An empty body has nothing to hide and is fine.
pub fn is_text_compliant(body: &str) -> bool {
    let body = body.trim();

    if body.is_empty() {
        return true;
    }

    // Empty spoiler. Discord doesn't even render this as one.
    if body == "||||" {
        return false;
    }

    // Splitting on markers should produce, in order:
    // nothing, spoiler, gap, spoiler, gap, ..., spoiler, nothing.
    let pieces: Vec<&str> = body.split(SPOILER_MARKER).collect();

    if pieces.len() < 3 || pieces.len() % 2 == 0 {
        // Unpaired marker, or none at all.
        return false;
    }

    let (first, last) = (pieces[0], pieces[pieces.len() - 1]);
    if !first.is_empty() || !last.is_empty() {
        // Text before the first or after the last spoiler.
        return false;
    }

    pieces[1..pieces.len() - 1]
        .iter()
        .enumerate()
        .all(|(i, piece)| match i % 2 {
            // Inside a spoiler.
            0 => !piece.is_empty(),
            // Between spoilers.
            _ => piece.chars().all(char::is_whitespace),
        })
}
