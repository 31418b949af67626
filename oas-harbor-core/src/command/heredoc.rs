//! Embedding arbitrary text into a POSIX shell command.
//!
//! The text is captured into a shell variable through a heredoc whose
//! delimiter is quoted, so the shell performs no expansion of any kind on the
//! body. Command substitution strips trailing newlines, so a sentinel `x` is
//! printed after the body and removed together with the newline the heredoc
//! itself appends. The result is the original text, byte for byte.

/// Pick a delimiter that does not occur anywhere in `text`.
///
/// Returns `base` when possible, otherwise `base_1`, `base_2`, ... The choice
/// depends only on `text`, so repeated builds produce identical commands.
pub fn choose_delimiter(text: &str, base: &str) -> String {
    if !text.contains(base) {
        return base.to_string();
    }
    (1u64..)
        .map(|n| format!("{base}_{n}"))
        .find(|candidate| !text.contains(candidate.as_str()))
        .unwrap_or_else(|| base.to_string())
}

/// Shell fragment assigning `text` to the shell variable `var`.
///
/// The fragment is two `&&`-joined commands spanning several lines; it
/// leaves `"$var"` holding exactly `text`. `delimiter` must not occur in
/// `text` (see [`choose_delimiter`]).
pub fn assign_heredoc(var: &str, text: &str, delimiter: &str) -> String {
    debug_assert!(!text.contains(delimiter));
    format!(
        "{var}=\"$(cat <<'{delimiter}'\n{text}\n{delimiter}\nprintf x)\" && {var}=\"${{{var}%?x}}\""
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_default_when_absent() {
        assert_eq!(choose_delimiter("fix the bug", "EOF_X"), "EOF_X");
    }

    #[test]
    fn test_delimiter_suffix_on_collision() {
        assert_eq!(choose_delimiter("line\nEOF_X\nmore", "EOF_X"), "EOF_X_1");
        assert_eq!(
            choose_delimiter("EOF_X and EOF_X_1 both", "EOF_X"),
            "EOF_X_2"
        );
    }

    #[test]
    fn test_delimiter_is_deterministic() {
        let text = "mentions EOF_X inline";
        assert_eq!(
            choose_delimiter(text, "EOF_X"),
            choose_delimiter(text, "EOF_X")
        );
    }

    #[test]
    fn test_assign_heredoc_shape() {
        let fragment = assign_heredoc("P", "echo \"$HOME\"", "D");
        assert_eq!(
            fragment,
            "P=\"$(cat <<'D'\necho \"$HOME\"\nD\nprintf x)\" && P=\"${P%?x}\""
        );
    }
}
