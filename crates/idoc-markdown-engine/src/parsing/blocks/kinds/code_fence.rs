use std::fmt;

/// The character a fence delimiter is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FenceMarker {
    Backtick,
    Tilde,
}

impl FenceMarker {
    pub fn as_char(self) -> char {
        match self {
            FenceMarker::Backtick => '`',
            FenceMarker::Tilde => '~',
        }
    }

    fn as_byte(self) -> u8 {
        self.as_char() as u8
    }

    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'`' => Some(FenceMarker::Backtick),
            b'~' => Some(FenceMarker::Tilde),
            _ => None,
        }
    }
}

/// A fence delimiter: a run of `len` identical marker characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    pub marker: FenceMarker,
    pub len: usize,
}

impl fmt::Display for Fence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.marker.as_char();
        for _ in 0..self.len {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// An opening delimiter line split into its fence and info-string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceOpen<'a> {
    pub fence: Fence,
    /// Everything after the fence run, untrimmed.
    pub info: &'a str,
}

/// Fenced block syntax. All delimiter knowledge lives here.
pub struct CodeFence;

impl CodeFence {
    /// Shortest run that forms a fence.
    pub const MIN_LEN: usize = 3;
    /// Spaces of indentation allowed before a delimiter.
    pub const MAX_INDENT: usize = 3;

    /// Recognizes an opening delimiter line (given without its `\n`).
    ///
    /// A backtick fence whose info-string contains a backtick is not a fence,
    /// so one-line spans like ```` ```code``` ```` stay ordinary text.
    pub fn open(line: &str) -> Option<FenceOpen<'_>> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let rest = Self::strip_indent(line)?;
        let first = *rest.as_bytes().first()?;
        let marker = FenceMarker::from_byte(first)?;
        let len = rest.bytes().take_while(|&b| b == first).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = &rest[len..];
        if marker == FenceMarker::Backtick && info.contains('`') {
            return None;
        }
        Some(FenceOpen {
            fence: Fence { marker, len },
            info,
        })
    }

    /// Whether `line` closes a block opened with `fence`: same marker, a run at
    /// least as long, nothing but whitespace after it.
    pub fn closes(fence: Fence, line: &str) -> bool {
        Self::closing_run(fence.marker, line).is_some_and(|run| run >= fence.len)
    }

    /// Whether no line of `content` would close `fence` early.
    pub fn encloses(fence: Fence, content: &str) -> bool {
        !content.split('\n').any(|line| Self::closes(fence, line))
    }

    /// The shortest fence of `marker` that encloses `content`.
    pub fn fitting(marker: FenceMarker, content: &str) -> Fence {
        let longest = content
            .split('\n')
            .filter_map(|line| Self::closing_run(marker, line))
            .max()
            .unwrap_or(0);
        Fence {
            marker,
            len: (longest + 1).max(Self::MIN_LEN),
        }
    }

    /// Length of the marker run if `line` is shaped like a closing delimiter.
    fn closing_run(marker: FenceMarker, line: &str) -> Option<usize> {
        let rest = Self::strip_indent(line)?.trim_end();
        let ch = marker.as_byte();
        (!rest.is_empty() && rest.bytes().all(|b| b == ch)).then_some(rest.len())
    }

    fn strip_indent(line: &str) -> Option<&str> {
        let indent = line.bytes().take_while(|&b| b == b' ').count();
        (indent <= Self::MAX_INDENT).then(|| &line[indent..])
    }
}
