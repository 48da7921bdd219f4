use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text including its newline, if any.
    pub text: String,
}

impl LineRef {
    /// Line text without the trailing `\n`.
    pub fn body(&self) -> &str {
        self.text.strip_suffix('\n').unwrap_or(&self.text)
    }

    /// Span of [`LineRef::body`].
    pub fn body_span(&self) -> Span {
        Span::new(self.span.start, self.span.start + self.body().len())
    }

    /// Whether the line is terminated by `\n` (false only for a final line).
    pub fn has_newline(&self) -> bool {
        self.text.ends_with('\n')
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters; an empty rope yields no
/// lines and a trailing `\n` does not produce an extra empty line.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
