//! Title text helpers.

/// Uppercases the first character of every space-separated word.
///
/// The input is split on single spaces, so runs of spaces survive as empty
/// words. Characters after the first in each word are left untouched.
///
/// # Example
///
/// ```
/// use book_data::capitalize;
///
/// assert_eq!(capitalize("hello world"), "Hello World");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(sentence: &str) -> String {
    sentence
        .split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
