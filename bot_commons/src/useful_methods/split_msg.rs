/// Ways text can be cut up, from the coarsest to the finest.
#[derive(Clone, Copy, Debug)]
enum Cut {
    /// "\n\n\n"
    Section,
    /// "\n\n"
    Paragraph,
    /// "\n"
    Line,
    Word,
    Char,
}

impl Cut {
    const COARSEST_FIRST: [Cut; 5] = [Cut::Section, Cut::Paragraph, Cut::Line, Cut::Word, Cut::Char];

    /// Bytes of separator that follow a piece of this kind.
    fn separator_len(self) -> usize {
        match self {
            Cut::Section => 3,
            Cut::Paragraph => 2,
            Cut::Line | Cut::Word => 1,
            Cut::Char => 0,
        }
    }

    /// Byte length of the next piece of this kind at the start of `text`.
    fn next_piece_len(self, text: &str) -> usize {
        // str::split* would happily eat several separators in a row,
        // but we need to count every single one of them.
        match self {
            Cut::Section => text.find("\n\n\n").unwrap_or(text.len()),
            Cut::Paragraph => text.find("\n\n").unwrap_or(text.len()),
            Cut::Line => text.find('\n').unwrap_or(text.len()),
            Cut::Word => text
                .find(|x: char| x.is_ascii_whitespace())
                .unwrap_or(text.len()),
            Cut::Char => text.chars().next().map_or(0, char::len_utf8),
        }
    }
}

/// Iterator that splits text into pieces, all of which are at most a specified
/// amount of bytes long.
///
/// Splits by sections (separated by 3 newlines), then by paragraphs (2 newlines),
/// then by lines (1 newline), then by word (ASCII whitespace), then character by character,
/// until it fits. Whitespace around pieces is trimmed.
pub struct SplitOverLengthTokens<'a> {
    data: &'a str,
    max_len: usize,
}

impl<'a> SplitOverLengthTokens<'a> {
    /// Create a new splitter with specified max length in bytes.
    ///
    /// # Panics
    /// Panics if a max length less than 4 is specified, as a single
    /// character may be up to 4 bytes in size.
    #[must_use]
    pub fn new(data: &'a str, max_len: usize) -> Self {
        assert!(max_len >= 4, "Max length is too small");
        SplitOverLengthTokens { data, max_len }
    }
}

impl<'a> Iterator for SplitOverLengthTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.data = self.data.trim_start();
        if self.data.is_empty() {
            return None;
        }

        if self.data.len() <= self.max_len {
            return Some(std::mem::take(&mut self.data));
        }

        // Coarsest cut whose first piece fits. Chars always fit.
        let cut = Cut::COARSEST_FIRST
            .into_iter()
            .find(|cut| cut.next_piece_len(self.data) <= self.max_len)
            .unwrap_or(Cut::Char);

        // Now cram as many pieces of that kind as we can.
        let start = self.data;
        let mut taken = 0;
        loop {
            let piece = cut.next_piece_len(self.data);
            let with_separator = if taken > 0 {
                piece + cut.separator_len()
            } else {
                piece
            };

            if taken + with_separator > self.max_len {
                break;
            }
            taken += with_separator;
            self.data = &self.data[with_separator..];
        }

        assert_ne!(taken, 0, "Maximum length is too small");

        Some(start[..taken].trim())
    }
}
