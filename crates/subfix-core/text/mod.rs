//! Shared text helpers
//!
//! Markup stripping, hearing-impaired pattern matching and greedy line
//! wrapping, shared by the QC evaluator, the lint rules and the fixers.
//! Patterns are compiled once and cached.

use regex::Regex;
use std::sync::OnceLock;

fn override_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{[^}]*\}").unwrap())
}

fn angle_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

fn bracket_note_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[^\]]*\]").unwrap())
}

fn paren_note_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\([^)]*\)").unwrap())
}

/// Whole-text hearing-impaired patterns. Matching the entire trimmed text
/// (not substrings) is intentional: partial bracket use inside dialogue must
/// not trigger false positives.
fn hearing_impaired_res() -> &'static [Regex; 5] {
    static RES: OnceLock<[Regex; 5]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            Regex::new(r"(?s)^\[.*\]$").unwrap(),
            Regex::new(r"(?s)^\(.*\)$").unwrap(),
            Regex::new(r"(?s)^♪.*♪$").unwrap(),
            Regex::new(r"(?s)^-\s*\[.*\]$").unwrap(),
            Regex::new(r"(?s)^-\s*\(.*\)$").unwrap(),
        ]
    })
}

/// Remove inline formatting markup: `<...>` tag syntax and `{...}` ASS
/// override blocks. Bracket annotations stay.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    let stripped = override_block_re().replace_all(text, "");
    angle_tag_re().replace_all(&stripped, "").into_owned()
}

/// Remove `[...]` and `(...)` note substrings, leaving surrounding dialogue.
#[must_use]
pub fn strip_annotations(text: &str) -> String {
    let stripped = bracket_note_re().replace_all(text, "");
    paren_note_re().replace_all(&stripped, "").into_owned()
}

/// Strip everything QC ignores when measuring readability: tag syntax,
/// override blocks and bracket annotations.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    let stripped = strip_tags(text);
    bracket_note_re().replace_all(&stripped, "").into_owned()
}

/// True when the entire trimmed text is a hearing-impaired cue: a bracketed
/// or parenthetical note, a musical-note-delimited line, or a dash-prefixed
/// variant of either.
#[must_use]
pub fn is_hearing_impaired(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    hearing_impaired_res().iter().any(|re| re.is_match(trimmed))
}

/// True when the text carries inline markup: `<...>` tags or `{...}`
/// override blocks.
#[must_use]
pub fn has_formatting_tags(text: &str) -> bool {
    override_block_re().is_match(text) || angle_tag_re().is_match(text)
}

/// Greedy word-wrap at `max_chars` per line, breaking only at whitespace.
///
/// Text whose lines already fit is returned unchanged. Otherwise the whole
/// text is re-flowed: existing breaks collapse and words fill lines
/// greedily. A single word longer than `max_chars` is left intact and
/// over-length rather than split mid-word (documented limitation).
#[must_use]
pub fn wrap_text(text: &str, max_chars: usize) -> String {
    if max_chars == 0 || text.lines().all(|line| line.chars().count() <= max_chars) {
        return text.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(core::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_override_blocks() {
        assert_eq!(strip_tags("<i>Hello</i> {\\b1}world{\\b0}"), "Hello world");
    }

    #[test]
    fn strips_annotations_but_keeps_dialogue() {
        assert_eq!(strip_annotations("[door slams] Who's there?").trim(), "Who's there?");
        assert_eq!(strip_annotations("(sighs) Fine."), " Fine.");
    }

    #[test]
    fn whole_text_hi_matching() {
        assert!(is_hearing_impaired("[Music]"));
        assert!(is_hearing_impaired("(distant thunder)"));
        assert!(is_hearing_impaired("♪ la la la ♪"));
        assert!(is_hearing_impaired("- [gunshot]"));
        assert!(!is_hearing_impaired("He said [sic] it was fine"));
        assert!(!is_hearing_impaired("Hello there"));
    }

    #[test]
    fn detects_formatting_tags() {
        assert!(has_formatting_tags("<b>bold</b>"));
        assert!(has_formatting_tags("{\\an8}top"));
        assert!(!has_formatting_tags("plain [note] text"));
    }

    #[test]
    fn wrap_leaves_fitting_text_alone() {
        let text = "short line\nanother";
        assert_eq!(wrap_text(text, 42), text);
    }

    #[test]
    fn wrap_breaks_at_whitespace() {
        let wrapped = wrap_text("the quick brown fox jumps over the lazy dog", 15);
        assert!(wrapped.lines().all(|l| l.chars().count() <= 15));
        assert_eq!(wrapped.replace('\n', " "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_leaves_long_words_intact() {
        let wrapped = wrap_text("hi incomprehensibilities yes", 10);
        assert!(wrapped.lines().any(|l| l == "incomprehensibilities"));
    }
}
