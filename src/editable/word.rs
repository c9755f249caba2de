//! Space-delimited word navigation.

const SEPARATOR: char = ' ';

/// Index `steps` words away from `position`.
///
/// Positive `steps` walk forward to the next space (or the end of the
/// text), optionally skipping the run of spaces after it. Negative steps
/// walk backward, optionally skipping the spaces immediately before the
/// position first, then stop just after the previous space (or at 0).
/// Only `content` and `position` are consulted; the result is always in
/// `[0, len]`.
pub fn word_boundary(content: &str, position: usize, steps: isize, skip_whitespace: bool) -> usize {
    let chars: Vec<char> = content.chars().collect();
    let len = chars.len();
    let mut pos = position.min(len);

    for _ in 0..steps.unsigned_abs() {
        let start = pos;
        if steps > 0 {
            match chars[pos..].iter().position(|&c| c == SEPARATOR) {
                None => pos = len,
                Some(offset) => {
                    pos += offset;
                    while skip_whitespace && pos < len && chars[pos] == SEPARATOR {
                        pos += 1;
                    }
                }
            }
        } else {
            while skip_whitespace && pos > 0 && chars[pos - 1] == SEPARATOR {
                pos -= 1;
            }
            while pos > 0 && chars[pos - 1] != SEPARATOR {
                pos -= 1;
            }
        }
        if pos == start {
            break;
        }
    }

    pos
}
