pub const GREETING_PREFIX: &str = "Hello, ";

/// Return a friendly greeting for the given name.
///
/// `name` is appended as-is: no trimming and no trailing punctuation.
pub fn greet(name: &str) -> String {
    format!("{}{}", GREETING_PREFIX, name)
}

/// Return a greeting with custom punctuation.
pub fn decorated(name: &str, punctuation: &str) -> String {
    let base = greet(name);
    base + punctuation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_names() {
        let tests = vec![
            ("Ann", "Hello, Ann"),
            ("World", "Hello, World"),
            ("", "Hello, "),
            (" Bob ", "Hello,  Bob "),
            ("\t\n", "Hello, \t\n"),
            ("世界", "Hello, 世界"),
        ];

        for (input, expected) in tests {
            assert_eq!(greet(input), expected);
        }
    }

    #[test]
    fn decorated_greetings() {
        let tests = vec![
            ("Ann", "!!!", "Hello, Ann!!!"),
            ("World", "!", "Hello, World!"),
            ("World", "", "Hello, World"),
            ("", "?", "Hello, ?"),
            (" x", " .", "Hello,  x ."),
        ];

        for (name, punctuation, expected) in tests {
            assert_eq!(decorated(name, punctuation), expected);
        }
    }

    #[test]
    fn decorated_extends_greet() {
        let names = ["Ann", "", "  ", "🦀"];
        let marks = ["!", "", "...", "\n"];

        for name in names.iter() {
            for mark in marks.iter() {
                let result = decorated(name, mark);
                assert_eq!(result, format!("{}{}", greet(name), mark));
                assert!(result.starts_with(GREETING_PREFIX));
            }
        }
    }
}
