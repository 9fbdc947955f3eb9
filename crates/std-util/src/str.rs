//! Identifier case conversions.
//!
//! All conversions split the input into words first (see [`words`]) and then
//! join the words back following the target convention. Splitting loses the
//! original segment boundaries, so converting `user_id` to pascal case and
//! back is not guaranteed to yield the original string.

/// Splits an identifier into words.
///
/// Any non-alphanumeric character is a separator and is dropped. A new word
/// also starts at an uppercase letter that follows a lowercase letter or a
/// digit, and at the last letter of an uppercase run when it is followed by a
/// lowercase letter, so `HTTPServer` splits into `HTTP` and `Server` while
/// `ID` stays a single word.
pub fn words(src: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = src.char_indices().collect();
    let mut words = vec![];
    let mut start: Option<usize> = None;

    for (i, &(offset, ch)) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if let Some(begin) = start.take() {
                words.push(&src[begin..offset]);
            }
            continue;
        }

        if let Some(begin) = start {
            if is_boundary(&chars, i) {
                words.push(&src[begin..offset]);
                start = Some(offset);
            }
        } else {
            start = Some(offset);
        }
    }

    if let Some(begin) = start {
        words.push(&src[begin..]);
    }

    words
}

fn is_boundary(chars: &[(usize, char)], i: usize) -> bool {
    let ch = chars[i].1;

    if !ch.is_uppercase() {
        return false;
    }

    let prev = chars[i - 1].1;

    if prev.is_lowercase() || prev.is_numeric() {
        return true;
    }

    // Leaving an uppercase run: `HTTPServer` breaks before the `S`.
    prev.is_uppercase()
        && chars
            .get(i + 1)
            .is_some_and(|&(_, next)| next.is_lowercase())
}

/// `UserProfile` → `user_profile`
pub fn snake_case(src: &str) -> String {
    join_lowercase(src, "_")
}

/// `UserProfile` → `user-profile`
pub fn kebab_case(src: &str) -> String {
    join_lowercase(src, "-")
}

/// `user-profile` → `userProfile`
///
/// Only the first character of each word changes case; `UserID` becomes
/// `userID`.
pub fn camel_case(src: &str) -> String {
    let mut out = String::with_capacity(src.len());

    for (i, word) in words(src).into_iter().enumerate() {
        if i == 0 {
            push_with_first(&mut out, word, char::to_lowercase);
        } else {
            push_with_first(&mut out, word, char::to_uppercase);
        }
    }

    out
}

/// `user-profile` → `UserProfile`
///
/// Only the first character of each word changes case; `UserID` is returned
/// unchanged.
pub fn pascal_case(src: &str) -> String {
    let mut out = String::with_capacity(src.len());

    for word in words(src) {
        push_with_first(&mut out, word, char::to_uppercase);
    }

    out
}

/// `user-profile` → `userprofile`
pub fn lower_case(src: &str) -> String {
    lowercase_word(src)
}

/// Lowercases the words of `src` and joins them with `separator`.
///
/// A lowercased word is split again: a few uppercase letters have no
/// lowercase form and would start a new word on the next conversion.
fn join_lowercase(src: &str, separator: &str) -> String {
    let lowered: Vec<String> = words(src).into_iter().map(lowercase_word).collect();

    lowered
        .iter()
        .flat_map(|word| words(word))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Lowercases character by character. Case mapping can produce combining
/// marks (`İ` lowercases to `i` and U+0307); those are dropped.
fn lowercase_word(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| ch.is_alphanumeric())
        .collect()
}

fn push_with_first<I>(out: &mut String, word: &str, first: impl Fn(char) -> I)
where
    I: Iterator<Item = char>,
{
    let mut chars = word.chars();

    if let Some(ch) = chars.next() {
        out.extend(first(ch).filter(|ch| ch.is_alphanumeric()));
        out.push_str(chars.as_str());
    }
}
