/// Reduce `input` to at most two uppercased word initials.
///
/// Words break on whitespace, underscores, and before any uppercase letter that is not the
/// first character, so `"John Doe"`, `"john_doe"` and `"johnDoe"` all yield `"JD"`.
pub fn initials(input: &str) -> String {
    let mut out = String::new();
    let mut taken = 0;
    let mut word_start = true;

    for (i, c) in input.chars().enumerate() {
        if c == '_' || c.is_whitespace() {
            word_start = true;
            continue;
        }
        if i > 0 && c.is_uppercase() {
            word_start = true;
        }
        if word_start {
            out.extend(c.to_uppercase());
            taken += 1;
            if taken == 2 {
                break;
            }
            word_start = false;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/initials.rs"]
mod tests;
