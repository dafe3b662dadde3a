extern crate time;

use std::error::Error;
use std::fmt;

use time::get_time;

/// Current timestamp in microseconds
pub fn ustime() -> i64 {
    let tv = get_time();
    tv.sec * 1000000 + (tv.nsec / 1000) as i64
}

/// Current timestamp in milliseconds
pub fn mstime() -> i64 {
    ustime() / 1000
}

/// A quoted argument was left open, or a closing quote was not followed by
/// whitespace.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SplitArgsError;

impl fmt::Display for SplitArgsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("unbalanced quotes in argument list")
    }
}

impl Error for SplitArgsError {}

/// Splits a configuration line into arguments.
///
/// Arguments are separated by whitespace. Double quoted arguments accept
/// `\n`, `\r`, `\t` and `\xHH` escapes; single quoted arguments only accept
/// `\'`.
///
/// # Examples
///
/// ```
/// use util::splitargs;
/// assert_eq!(splitargs("maxlevel 16").unwrap(), vec!["maxlevel", "16"]);
/// assert_eq!(splitargs("logfile \"my file.log\"").unwrap(), vec!["logfile", "my file.log"]);
/// assert!(splitargs("logfile \"open").is_err());
/// ```
pub fn splitargs(line: &str) -> Result<Vec<String>, SplitArgsError> {
    let mut args = Vec::new();
    let mut chars = line.chars().peekable();
    loop {
        while chars.peek().map_or(false, |c| c.is_whitespace() || *c == '\0') {
            chars.next();
        }
        if chars.peek().is_none() {
            return Ok(args);
        }

        let mut current = String::new();
        let mut quote = None;
        loop {
            let c = match chars.next() {
                Some(c) => c,
                None if quote.is_some() => return Err(SplitArgsError),
                None => break,
            };
            match quote {
                Some(q) if c == q => {
                    // closing quote must be followed by a space or nothing at all
                    if chars.peek().map_or(false, |n| !n.is_whitespace()) {
                        return Err(SplitArgsError);
                    }
                    break;
                }
                Some('"') if c == '\\' => match chars.next() {
                    Some('n') => current.push('\n'),
                    Some('r') => current.push('\r'),
                    Some('t') => current.push('\t'),
                    Some('x') => {
                        let hi = chars.next().and_then(|h| h.to_digit(16));
                        let lo = chars.next().and_then(|l| l.to_digit(16));
                        match (hi, lo) {
                            (Some(hi), Some(lo)) => current.push(char::from((hi * 16 + lo) as u8)),
                            _ => return Err(SplitArgsError),
                        }
                    }
                    Some(other) => current.push(other),
                    None => return Err(SplitArgsError),
                },
                Some('\'') if c == '\\' && chars.peek() == Some(&'\'') => {
                    chars.next();
                    current.push('\'');
                }
                Some(_) => current.push(c),
                None => match c {
                    '"' | '\'' => quote = Some(c),
                    c if c.is_whitespace() || c == '\0' => break,
                    c => current.push(c),
                },
            }
        }
        args.push(current);
    }
}

#[cfg(test)]
mod test_util {
    use super::{mstime, splitargs, ustime};
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn mstime_sleep() {
        let start = mstime();
        sleep(Duration::from_millis(100));
        let end = mstime();
        assert!(start < end && start + 100 <= end && start + 500 > end);
    }

    #[test]
    fn ustime_moves_forward() {
        let start = ustime();
        sleep(Duration::from_millis(1));
        assert!(ustime() > start);
    }

    #[test]
    fn splitargs_simple() {
        assert_eq!(splitargs("").unwrap(), Vec::<String>::new());
        assert_eq!(splitargs("   ").unwrap(), Vec::<String>::new());
        assert_eq!(splitargs("seed 42").unwrap(), vec!["seed", "42"]);
        assert_eq!(splitargs("  seed\t 42  ").unwrap(), vec!["seed", "42"]);
    }

    #[test]
    fn splitargs_quotes() {
        assert_eq!(splitargs("\"\\x9f\"").unwrap(), vec!["\u{9f}"]);
        assert_eq!(splitargs("\"\"").unwrap(), vec![""]);
        assert_eq!(splitargs("\"\\thello\\n\"").unwrap(), vec!["\thello\n"]);
        assert!(splitargs("\"a").is_err());
        assert!(splitargs("\"a\"b").is_err());
        assert!(splitargs("\"\\xzz\"").is_err());
    }

    #[test]
    fn splitargs_singlequotes() {
        assert_eq!(splitargs("'\\x9f'").unwrap(), vec!["\\x9f"]);
        assert_eq!(splitargs("''").unwrap(), vec![""]);
        assert_eq!(splitargs("'\\''").unwrap(), vec!["'"]);
        assert_eq!(splitargs("'\\thello\\n'").unwrap(), vec!["\\thello\\n"]);
        assert!(splitargs("'a").is_err());
    }
}
