/// Clean a schema alias into a PascalCase identifier.
///
/// Any character that is not an ASCII letter or digit separates words and is
/// dropped. Words also break on case changes (`myAlias`, `HTMLBody`), so
/// camelCase aliases keep their word boundaries. Leading digits and symbols
/// are stripped so the result is a valid identifier in every target
/// language.
///
/// A word that would start with two capitals after a single-letter word
/// (`a_b`, `aB`, `x_y2`) is folded into that word instead, since `AB` would
/// read back as one word. This keeps the transform idempotent.
///
/// # Examples
/// ```
/// use modelgen_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("home_page"), "HomePage");
/// assert_eq!(to_pascal_case("homePage"), "HomePage");
/// assert_eq!(to_pascal_case("HomePage"), "HomePage");  // idempotent
/// assert_eq!(to_pascal_case("2col-layout!"), "ColLayout");
/// assert_eq!(to_pascal_case("x_y_z"), "Xyz");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let s = s.trim_start_matches(|c: char| !c.is_ascii_alphabetic());

    let mut result = String::with_capacity(s.len());
    // Output currently ends in a word made only of single letters.
    let mut letter_run = false;

    for word in split_words(s) {
        let bytes = word.as_bytes();
        let single_letter = bytes.len() == 1 && bytes[0].is_ascii_alphabetic();
        let fold = letter_run && bytes.get(1).is_none_or(|b| !b.is_ascii_alphabetic());

        if fold {
            result.push_str(&word.to_ascii_lowercase());
            letter_run = single_letter;
            continue;
        }

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
        letter_run = single_letter;
    }
    result
}

/// Split on non-alphanumerics and on case boundaries.
///
/// A boundary sits before an uppercase letter that follows a lowercase letter
/// or digit, or that starts a lowercase run after an uppercase run
/// (`HTMLBody` → `HTML`, `Body`).
fn split_words(s: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if let Some(st) = start.take() {
                words.push(&s[st..pos]);
            }
            continue;
        }

        let Some(st) = start else {
            start = Some(pos);
            continue;
        };

        let prev = chars[i - 1].1;
        let next_is_lower = chars
            .get(i + 1)
            .is_some_and(|&(_, n)| n.is_ascii_lowercase());
        let boundary = c.is_ascii_uppercase()
            && (prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower));

        if boundary {
            words.push(&s[st..pos]);
            start = Some(pos);
        }
    }

    if let Some(st) = start {
        words.push(&s[st..]);
    }
    words
}
