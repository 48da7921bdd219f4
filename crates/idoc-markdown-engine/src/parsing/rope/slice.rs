use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    if sp.is_empty() {
        return String::new();
    }
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}
