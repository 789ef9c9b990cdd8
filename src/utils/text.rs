/// Passing this as `last` to [`between`] reads until the end of the text.
pub const UNTIL_END: &str = "";

/// Returns the text strictly between the first occurrence of `first` and the
/// next occurrence of `last` after it.
///
/// An empty `first` or an absent `last` yields `""`. So does a delimiter that
/// cannot be found. `Some(UNTIL_END)` takes everything after `first`.
pub fn between<'a>(text: &'a str, first: &str, last: Option<&str>) -> &'a str {
    let Some(last) = last else {
        return "";
    };
    if first.is_empty() {
        return "";
    }

    let Some(start) = text.find(first).map(|pos| pos + first.len()) else {
        return "";
    };
    let rest = &text[start..];

    if last == UNTIL_END {
        return rest;
    }

    match rest.find(last) {
        Some(end) => &rest[..end],
        None => "",
    }
}

/// [`between`] with `last` defaulted to [`UNTIL_END`].
pub fn between_until_end<'a>(text: &'a str, first: &str) -> &'a str {
    between(text, first, Some(UNTIL_END))
}
