//! Substring primitives and search-text normalization.

/// Characters stripped from queries and rendered sentences before
/// sentence-mode comparison.
pub const SEARCH_IGNORED_CHARACTERS: &str = ";:,#()";

/// Byte range of the first case-insensitive occurrence of `needle` in
/// `haystack` at or after byte offset `start`.
///
/// Matching folds one character against one character, so one-to-many case
/// foldings (for example ß against SS) do not match across lengths. An empty
/// needle matches immediately at `start`.
pub fn find_case_insensitive(
    haystack: &str,
    needle: &str,
    start: usize,
) -> Option<(usize, usize)> {
    let tail = haystack.get(start..)?;
    if needle.is_empty() {
        return Some((start, start));
    }

    let needle_chars: Vec<char> = needle.chars().collect();
    let tail_chars: Vec<(usize, char)> = tail.char_indices().collect();
    if needle_chars.len() > tail_chars.len() {
        return None;
    }

    for begin in 0..=(tail_chars.len() - needle_chars.len()) {
        let matches = needle_chars
            .iter()
            .enumerate()
            .all(|(k, &nc)| chars_eq_ignore_case(tail_chars[begin + k].1, nc));
        if matches {
            let match_start = start + tail_chars[begin].0;
            let match_end = match tail_chars.get(begin + needle_chars.len()) {
                Some(&(offset, _)) => start + offset,
                None => haystack.len(),
            };
            return Some((match_start, match_end));
        }
    }
    None
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Whether `haystack` contains `needle`, honoring the case mode.
pub fn contains(haystack: &str, needle: &str, match_case: bool) -> bool {
    if match_case {
        haystack.contains(needle)
    } else {
        find_case_insensitive(haystack, needle, 0).is_some()
    }
}

/// Case-sensitive replacement: a single left-to-right non-overlapping pass.
pub fn replace_all(input: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return input.to_string();
    }
    input.replace(from, to)
}

/// Case-insensitive replacement.
///
/// After each replacement the scan restarts just after the inserted text,
/// so a replacement that re-introduces the search term ahead of the cursor
/// is found again. With `from` contained in `to` the output grows: `"aaa"`
/// with `"a"` -> `"aa"` yields `"aaaaaa"`. This exact behavior is part of
/// the contract.
pub fn replace_all_case_insensitive(input: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return input.to_string();
    }

    let mut result = input.to_string();
    let mut look_here = 0;
    while let Some((found, end)) = find_case_insensitive(&result, from, look_here) {
        result.replace_range(found..end, to);
        look_here = found + to.len();
    }
    result
}

/// Strip the ignored-character set from `text`.
pub fn strip_ignored_characters(text: &str) -> String {
    text.chars()
        .filter(|c| !SEARCH_IGNORED_CHARACTERS.contains(*c))
        .collect()
}

/// Collapse every run of spaces in `text` to a single space.
pub fn collapse_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_was_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !previous_was_space {
                result.push(c);
            }
            previous_was_space = true;
        } else {
            result.push(c);
            previous_was_space = false;
        }
    }
    result
}

/// Normalize a rendered instruction sentence for comparison: strip ignored
/// characters, then collapse space runs.
pub fn normalize_sentence(sentence: &str) -> String {
    collapse_spaces(&strip_ignored_characters(sentence))
}

/// Normalize a sentence-mode search query, once, up front: strip ignored
/// characters, trim leading/trailing whitespace, collapse space runs.
pub fn normalize_search_query(query: &str) -> String {
    collapse_spaces(strip_ignored_characters(query).trim())
}
