use crate::types::Attachment;

/// Discord hides attachments whose filename starts with this.
pub const SPOILER_PREFIX: &str = "SPOILER_";

/// Returns true if every attachment is marked as a spoiler.
///
/// Filenames that are too short to even fit the prefix are let through.
pub fn are_attachments_compliant(attachments: &[Attachment]) -> bool {
    attachments
        .iter()
        .all(|attachment| is_attachment_compliant(&attachment.filename))
}

fn is_attachment_compliant(filename: &str) -> bool {
    let prefix_len = SPOILER_PREFIX.chars().count();

    if filename.chars().count() <= prefix_len {
        return true;
    }

    filename.chars().take(prefix_len).eq(SPOILER_PREFIX.chars())
}
