//! Field identifier to variable name conversion

/// Convert a field identifier into its `UPPER_SNAKE_CASE` variable name.
///
/// Single-case identifiers (`URL`, `name`, `database_url`) are upper-cased
/// as they are. Camel-case identifiers are split into words first:
///
/// - a word starts at an uppercase letter following a lowercase letter or
///   a digit (`LastName` -> `LAST_NAME`, `b2B` -> `B2_B`)
/// - a run of three or more capitals followed by a lowercase letter ends
///   one letter early, so the last capital starts the next word
///   (`URLEncoding` -> `URL_ENCODING`); shorter runs stay together
///   (`MTime` -> `MTIME`)
/// - a trailing run of capitals is a single word (`loginURL` -> `LOGIN_URL`)
///
/// ```rust
/// assert_eq!(envbind::var_name("SSLPort"), "SSL_PORT");
/// assert_eq!(envbind::var_name("newHomeAddress"), "NEW_HOME_ADDRESS");
/// assert_eq!(envbind::var_name("etc"), "ETC");
/// ```
pub fn var_name(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);

    if !is_camel_case(ident) {
        return ident.to_uppercase();
    }

    split_camel_case(ident)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Report whether `s` is camel case, i.e. whether [`var_name`] splits it.
///
/// True when the letters are of mixed case and a capital appears after the
/// first character. `Url` is therefore not camel case, `myB` is.
pub fn is_camel_case(s: &str) -> bool {
    let has_upper = s.chars().any(char::is_uppercase);
    let has_lower = s.chars().any(char::is_lowercase);

    has_upper && has_lower && s.chars().skip(1).any(char::is_uppercase)
}

fn split_camel_case(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut word = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && !word.is_empty() && starts_word(&chars, i) {
            words.push(std::mem::take(&mut word));
        }
        word.push(c);
    }

    if !word.is_empty() {
        words.push(word);
    }
    words
}

// `chars[i]` is uppercase and not the first character of the current word.
fn starts_word(chars: &[char], i: usize) -> bool {
    let prev = chars[i - 1];
    if prev.is_lowercase() || prev.is_ascii_digit() {
        return true;
    }

    let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
    let capitals_before = chars[..i]
        .iter()
        .rev()
        .take_while(|c| c.is_uppercase())
        .count();

    next_is_lower && capitals_before >= 2
}
