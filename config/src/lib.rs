extern crate logger;
extern crate util;

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::Error as IOError;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use logger::Level;
use util::{splitargs, SplitArgsError};

/// Levels above the base level a node may reach when `maxlevel` is not set.
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// Largest `maxlevel` kept; larger bounds are clamped to it, as the skiplist itself does.
pub const MAX_LEVEL_LIMIT: usize = 64;

/// Construction parameters for a skiplist and its logger.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub max_level: usize,
    /// Fixed seed for the level generator; `None` seeds from the clock.
    pub seed: Option<u64>,
    pub loglevel: Level,
    /// Log destination; `None` logs to the standard error.
    pub logfile: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidFormat,
    InvalidParameter,
    UnknownParameter(String),
    IOError(IOError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigError::InvalidFormat => f.write_str("invalid configuration line"),
            ConfigError::InvalidParameter => f.write_str("invalid configuration value"),
            ConfigError::UnknownParameter(ref name) => write!(f, "unknown configuration {:?}", name),
            ConfigError::IOError(ref e) => write!(f, "cannot read configuration: {}", e),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ConfigError::IOError(ref e) => Some(e),
            _ => None,
        }
    }
}

fn read_string(args: &[String]) -> Result<&str, ConfigError> {
    if args.len() != 2 {
        Err(ConfigError::InvalidFormat)
    } else {
        Ok(&*args[1])
    }
}

fn read_parse<T>(args: &[String]) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match read_string(args)?.parse() {
        Ok(f) => Ok(f),
        Err(_) => Err(ConfigError::InvalidParameter),
    }
}

/// Reads a level bound.  The value is parsed signed so that negative bounds are reported as
/// invalid rather than malformed.
fn read_max_level(args: &[String]) -> Result<usize, ConfigError> {
    let level: i64 = read_parse(args)?;
    if level <= 0 {
        return Err(ConfigError::InvalidParameter);
    }
    if level as u64 > MAX_LEVEL_LIMIT as u64 {
        return Ok(MAX_LEVEL_LIMIT);
    }
    Ok(level as usize)
}

impl Config {
    pub fn new() -> Config {
        Config {
            max_level: DEFAULT_MAX_LEVEL,
            seed: None,
            loglevel: Level::Notice,
            logfile: None,
        }
    }

    pub fn parsefile(&mut self, fname: &str) -> Result<(), ConfigError> {
        let path = Path::new(fname);
        let file = BufReader::new(File::open(&path)?);
        for line in file.lines() {
            self.parse_line(&line?)?;
        }
        Ok(())
    }

    /// Applies every directive in `text`, as if it were the contents of a configuration file.
    ///
    /// # Examples
    ///
    /// ```
    /// use config::Config;
    ///
    /// let mut config = Config::new();
    /// config.parse("# tuned for small maps\nmaxlevel 8\nseed 42").unwrap();
    /// assert_eq!(config.max_level, 8);
    /// assert_eq!(config.seed, Some(42));
    /// assert!(config.parse("maxlevel 0").is_err());
    /// ```
    pub fn parse(&mut self, text: &str) -> Result<(), ConfigError> {
        for line in text.lines() {
            self.parse_line(line)?;
        }
        Ok(())
    }

    fn parse_line(&mut self, line: &str) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let args = splitargs(line)?;
        let name = match args.first() {
            Some(name) => name,
            None => return Ok(()),
        };
        match &**name {
            "maxlevel" => self.max_level = read_max_level(&args)?,
            "seed" => self.seed = Some(read_parse(&args)?),
            "loglevel" => self.loglevel = read_parse(&args)?,
            "logfile" => {
                self.logfile = match read_string(&args)? {
                    "" => None,
                    path => Some(path.to_owned()),
                }
            }
            "include" => self.parsefile(read_string(&args)?)?,
            name => return Err(ConfigError::UnknownParameter(name.to_owned())),
        };
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}

impl From<IOError> for ConfigError {
    fn from(e: IOError) -> ConfigError {
        ConfigError::IOError(e)
    }
}

impl From<SplitArgsError> for ConfigError {
    fn from(_: SplitArgsError) -> ConfigError {
        ConfigError::InvalidFormat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::random;
    use std::fs::{create_dir_all, File};
    use std::io::Write;

    use util::mstime;

    macro_rules! config {
        ($str: expr) => {{
            let mut config = Config::new();
            config.parse($str).unwrap();
            config
        }};
    }

    fn write_tmp(contents: &str) -> String {
        let dirpath = std::env::temp_dir().join(format!("config-tests-{}", mstime()));
        create_dir_all(&dirpath).unwrap();
        let filepath = dirpath.join(format!("{}.conf", random::<u64>()));
        File::create(&filepath)
            .unwrap()
            .write_all(contents.as_bytes())
            .unwrap();
        filepath.to_str().unwrap().to_owned()
    }

    #[test]
    fn defaults() {
        let config = config!("");
        assert_eq!(config.max_level, 16);
        assert_eq!(config.seed, None);
        assert_eq!(config.loglevel, Level::Notice);
        assert_eq!(config.logfile, None);
    }

    #[test]
    fn parse_maxlevel() {
        let config = config!("maxlevel 4");
        assert_eq!(config.max_level, 4);
    }

    #[test]
    fn parse_maxlevel_quotes() {
        let config = config!("maxlevel \"12\"");
        assert_eq!(config.max_level, 12);
    }

    #[test]
    fn clamp_huge_maxlevel() {
        assert_eq!(config!("maxlevel 64").max_level, 64);
        assert_eq!(config!("maxlevel 65").max_level, 64);
        assert_eq!(config!("maxlevel 9223372036854775807").max_level, 64);
        assert!(Config::new().parse("maxlevel 9223372036854775808").is_err());
    }

    #[test]
    fn reject_non_positive_maxlevel() {
        for line in &["maxlevel 0", "maxlevel -3", "maxlevel many", "maxlevel", "maxlevel 1 2"] {
            assert!(Config::new().parse(line).is_err(), "{} was accepted", line);
        }
    }

    #[test]
    fn parse_seed() {
        let config = config!("seed 18446744073709551615");
        assert_eq!(config.seed, Some(u64::max_value()));
    }

    #[test]
    fn parse_loglevel() {
        let config = config!("loglevel debug");
        assert_eq!(config.loglevel, Level::Debug);
        assert!(Config::new().parse("loglevel loud").is_err());
    }

    #[test]
    fn parse_logfile() {
        let config = config!("logfile \"/tmp/my skiplist.log\"");
        assert_eq!(config.logfile, Some("/tmp/my skiplist.log".to_owned()));
        let config = config!("logfile \"/tmp/a.log\"\nlogfile \"\"");
        assert_eq!(config.logfile, None);
    }

    #[test]
    fn comments_and_blank_lines() {
        let config = config!("# maxlevel 3\n\n   \nmaxlevel 5\n  # seed 1");
        assert_eq!(config.max_level, 5);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn unknown_parameter() {
        match Config::new().parse("port 6379") {
            Err(ConfigError::UnknownParameter(name)) => assert_eq!(name, "port"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unbalanced_quotes() {
        match Config::new().parse("logfile \"/tmp/a.log") {
            Err(ConfigError::InvalidFormat) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parsefile_with_include() {
        let inner = write_tmp("seed 7\nloglevel verbose");
        let outer = write_tmp(&format!("maxlevel 9\ninclude \"{}\"", inner));
        let mut config = Config::new();
        config.parsefile(&outer).unwrap();
        assert_eq!(config.max_level, 9);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.loglevel, Level::Verbose);
    }

    #[test]
    fn missing_file() {
        match Config::new().parsefile("/nonexistent/skiplist.conf") {
            Err(ConfigError::IOError(_)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
