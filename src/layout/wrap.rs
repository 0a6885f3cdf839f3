use crate::metrics::GlyphMetrics;
use crate::units::Fixed;

/// Characters that must not start a line
const NO_BREAK_BEFORE: &str = "，。！？、；：）》」』】〉〕）]}>,.!?;:)";

/// Characters that must not end a line
const NO_BREAK_AFTER: &str = "（《「『【〈〔([{<";

/// Wraps a single line of text (no embedded newlines) so that every resulting
/// line fits within `max_width` when measured with `metrics`.
///
/// Lines are broken after whitespace, after CJK characters and after most
/// punctuation, without ever leaving a closing mark at the start of a line or
/// an opening bracket at the end of one. Whitespace at a break stays at the end
/// of the line it follows. If no break point exists the line is broken before
/// the overflowing character, and a character that is wider than `max_width` on
/// its own is given a line to itself.
///
/// Always returns at least one line; an empty input produces a single empty line.
pub fn wrap_line<M: GlyphMetrics + ?Sized>(
    text: &str,
    max_width: Fixed,
    metrics: &M,
) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = text.chars().collect();
    let mut lines: Vec<String> = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let mut end = start;
        // index one past the most recent breakable character on this line
        let mut last_break: Option<usize> = None;
        let mut width = Fixed::ZERO;

        while end < chars.len() {
            width += metrics.advance_or_fallback(chars[end]);

            if width > max_width && end > start {
                let stop = match last_break {
                    Some(stop) if stop > start => stop,
                    _ => {
                        log::trace!("forced break before {:?} at char {}", chars[end], end);
                        end
                    }
                };
                lines.push(chars[start..stop].iter().collect());
                start = stop;
                break;
            }

            if is_breakable(&chars, end) {
                last_break = Some(end + 1);
            }
            end += 1;
        }

        if end >= chars.len() {
            lines.push(chars[start..].iter().collect());
            break;
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Whether a line may end directly after `chars[i]`. Out of range indices
/// are never breakable
pub fn is_breakable(chars: &[char], i: usize) -> bool {
    let Some(&ch) = chars.get(i) else {
        return false;
    };
    if ch.is_whitespace() {
        return true;
    }
    if is_cjk(ch) {
        return !chars.get(i + 1).is_some_and(|&next| is_no_break_before(next));
    }
    is_punctuation(ch) && !is_no_break_after(ch)
}

/// CJK unified ideographs, extension A, CJK symbols and punctuation, and the
/// halfwidth and fullwidth forms
pub fn is_cjk(ch: char) -> bool {
    matches!(ch,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{3000}'..='\u{303F}'
        | '\u{FF00}'..='\u{FFEF}')
}

/// Closing brackets, quotes and sentence punctuation that may not begin a line
pub fn is_no_break_before(ch: char) -> bool {
    NO_BREAK_BEFORE.contains(ch)
}

/// Opening brackets and quotes that may not end a line
pub fn is_no_break_after(ch: char) -> bool {
    NO_BREAK_AFTER.contains(ch)
}

/// Unicode punctuation (general category P*) for the scripts this crate lays
/// out: ASCII, Latin-1, general and supplemental punctuation, CJK, small and
/// fullwidth forms
pub fn is_punctuation(ch: char) -> bool {
    match ch {
        // ASCII symbols such as `$+<=>^|~` are category S, not P
        '!'..='/' => !matches!(ch, '$' | '+'),
        ':'..='@' => matches!(ch, ':' | ';' | '?' | '@'),
        '['..='`' => !matches!(ch, '^' | '`'),
        '{'..='~' => matches!(ch, '{' | '}'),
        '\u{A1}' | '\u{A7}' | '\u{AB}' | '\u{B6}' | '\u{B7}' | '\u{BB}' | '\u{BF}' => true,
        '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{2043}' | '\u{2045}'..='\u{2051}' => true,
        '\u{2053}'..='\u{205E}' => true,
        // U+2E2F is a modifier letter
        '\u{2E00}'..='\u{2E2E}' | '\u{2E30}'..='\u{2E4F}' | '\u{2E52}'..='\u{2E5D}' => true,
        '\u{3001}'..='\u{3003}' | '\u{3008}'..='\u{3011}' | '\u{3014}'..='\u{301F}' => true,
        '\u{3030}' | '\u{303D}' | '\u{30A0}' | '\u{30FB}' => true,
        '\u{FE10}'..='\u{FE19}' | '\u{FE30}'..='\u{FE4F}' => true,
        '\u{FE50}'..='\u{FE52}' | '\u{FE54}'..='\u{FE61}' | '\u{FE63}' | '\u{FE68}' => true,
        '\u{FE6A}' | '\u{FE6B}' => true,
        '\u{FF01}'..='\u{FF03}' | '\u{FF05}'..='\u{FF0A}' | '\u{FF0C}'..='\u{FF0F}' => true,
        '\u{FF1A}' | '\u{FF1B}' | '\u{FF1F}' | '\u{FF20}' => true,
        '\u{FF3B}'..='\u{FF3D}' | '\u{FF3F}' | '\u{FF5B}' | '\u{FF5D}' => true,
        '\u{FF5F}'..='\u{FF65}' => true,
        _ => false,
    }
}
