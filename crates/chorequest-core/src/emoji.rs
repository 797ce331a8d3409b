//! Keyword-based emoji lookup for chore names.
//!
//! The table is ordered: the first keyword that appears as a substring of
//! the lowercased chore name wins, so "Wash the dishes" resolves to the
//! glyph for "wash", not "dish". Substring matching is deliberately naive;
//! do not reorder entries to "fix" a perceived mis-match.

/// Glyph used when no keyword matches.
pub const DEFAULT_EMOJI: &str = "✨";

/// Ordered keyword -> glyph table. Declaration order is precedence.
const KEYWORD_GLYPHS: &[(&str, &str)] = &[
    ("wash", "🧼"),
    ("dish", "🍽️"),
    ("laundry", "🧺"),
    ("vacuum", "🧹"),
    ("sweep", "🧹"),
    ("mop", "🪣"),
    ("trash", "🗑️"),
    ("garbage", "🗑️"),
    ("cook", "🍳"),
    ("dinner", "🍳"),
    ("groceries", "🛒"),
    ("shopping", "🛒"),
    ("plant", "🪴"),
    ("water", "💧"),
    ("dog", "🐕"),
    ("cat", "🐈"),
    ("pet", "🐾"),
    ("bed", "🛏️"),
    ("bathroom", "🚿"),
    ("window", "🪟"),
    ("garden", "🌱"),
    ("lawn", "🌿"),
    ("car", "🚗"),
    ("clean", "🧽"),
];

/// Resolve a display glyph for a chore name.
pub fn find_emoji(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    KEYWORD_GLYPHS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, glyph)| *glyph)
        .unwrap_or(DEFAULT_EMOJI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_keyword_in_table_order_wins() {
        // "Wash the dishes" contains both "wash" and "dish"; "wash" is
        // declared first and must win.
        assert_eq!(find_emoji("Wash the dishes"), "🧼");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find_emoji("VACUUM the stairs"), "🧹");
    }

    #[test]
    fn keyword_matches_as_substring() {
        assert_eq!(find_emoji("dishwasher duty"), "🧼");
        assert_eq!(find_emoji("take out garbage"), "🗑️");
    }

    #[test]
    fn unmatched_name_gets_default_glyph() {
        assert_eq!(find_emoji("practice trombone"), DEFAULT_EMOJI);
    }
}
