// file: src/module/parser.rs
// version: 1.0.0
// guid: e68a05d2-9c31-47bf-a4d6-15f8b3c7e920

//! Parser for a Python list of string literals
//!
//! Handles the subset of Python syntax a literal `CMDS` declaration uses:
//! single- and double-quoted strings with the usual backslash escapes,
//! `#` comments, arbitrary whitespace and a trailing comma.

/// Parse a bracketed list of Python string literals.
///
/// `src` must begin at the opening `[`. Returns the decoded strings or a
/// message describing why the list is not a literal string list.
pub fn parse_string_list(src: &str) -> Result<Vec<String>, String> {
    let mut chars = src.chars().peekable();
    match chars.next() {
        Some('[') => {}
        _ => return Err("expected '[' at start of CMDS list".to_string()),
    }

    let mut items = Vec::new();
    // After an item only a comma or the closing bracket is valid
    let mut expect_separator = false;

    while let Some(&ch) = chars.peek() {
        match ch {
            ']' => {
                chars.next();
                return Ok(items);
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            '#' => {
                // Comment runs to end of line
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            ',' => {
                if !expect_separator {
                    return Err("unexpected ',' in CMDS list".to_string());
                }
                expect_separator = false;
                chars.next();
            }
            '\'' | '"' => {
                if expect_separator {
                    return Err("missing ',' between CMDS entries".to_string());
                }
                chars.next();
                items.push(parse_string(&mut chars, ch)?);
                expect_separator = true;
            }
            other => {
                return Err(format!(
                    "CMDS entry is not a string literal (found '{}')",
                    other
                ));
            }
        }
    }

    Err("unterminated CMDS list".to_string())
}

/// Decode one quoted string, consuming up to and including the closing quote
fn parse_string(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    quote: char,
) -> Result<String, String> {
    let mut out = String::new();

    while let Some(ch) = chars.next() {
        if ch == quote {
            return Ok(out);
        }
        if ch == '\n' {
            return Err("unterminated string literal in CMDS list".to_string());
        }
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            // Python leaves unknown escapes untouched
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => return Err("unterminated string literal in CMDS list".to_string()),
        }
    }

    Err("unterminated string literal in CMDS list".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_list() {
        // Act
        let items = parse_string_list("['ls -la', \"pwd\"]").unwrap();

        // Assert
        assert_eq!(items, vec!["ls -la", "pwd"]);
    }

    #[test]
    fn test_parse_empty_list() {
        // Act
        let items = parse_string_list("[]").unwrap();

        // Assert
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_trailing_comma() {
        // Act
        let items = parse_string_list("['echo hi',]").unwrap();

        // Assert
        assert_eq!(items, vec!["echo hi"]);
    }

    #[test]
    fn test_parse_multiline_with_comments() {
        // Arrange
        let src = "[\n  'echo a',  # first\n  # second below\n  'echo b',\n]";

        // Act
        let items = parse_string_list(src).unwrap();

        // Assert
        assert_eq!(items, vec!["echo a", "echo b"]);
    }

    #[test]
    fn test_parse_escapes() {
        // Act
        let items = parse_string_list(r#"['echo \'x\'', "say \"y\"", 'a\\b', 'tab\there']"#)
            .unwrap();

        // Assert
        assert_eq!(
            items,
            vec!["echo 'x'", "say \"y\"", "a\\b", "tab\there"]
        );
    }

    #[test]
    fn test_parse_unknown_escape_kept() {
        // Act
        let items = parse_string_list(r"['grep \d foo']").unwrap();

        // Assert
        assert_eq!(items, vec![r"grep \d foo"]);
    }

    #[test]
    fn test_parse_rejects_non_literal_entry() {
        // Act
        let result = parse_string_list("[some_var]");

        // Assert
        assert!(result.unwrap_err().contains("not a string literal"));
    }

    #[test]
    fn test_parse_rejects_unterminated_list() {
        // Act
        let result = parse_string_list("['echo a',");

        // Assert
        assert!(result.unwrap_err().contains("unterminated CMDS list"));
    }

    #[test]
    fn test_parse_rejects_unterminated_string() {
        // Act
        let result = parse_string_list("['echo a]");

        // Assert
        assert!(result.unwrap_err().contains("unterminated string"));
    }

    #[test]
    fn test_parse_rejects_missing_comma() {
        // Act
        let result = parse_string_list("['a' 'b']");

        // Assert
        assert!(result.unwrap_err().contains("missing ','"));
    }
}
