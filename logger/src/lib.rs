use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::fs::File;
use std::io::{self, stderr, stdout, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::mpsc::{channel, Sender};
use std::thread;

/// Macro to log a message. Uses the `format!` syntax.
/// See `std::fmt` for more information.
///
/// # Examples
///
/// ```
/// # #[macro_use(log)]
/// # extern crate logger;
/// # use logger::{Logger, Level};
/// #
/// # fn main() {
/// # let logger = Logger::new(Level::Warning);
/// log!(logger, Debug, "grew to {} levels", 3);
/// # }
/// ```
#[macro_export]
macro_rules! log {
    ($logger: expr, $level: ident, $($arg:tt)*) => ({
        $logger.log($crate::Level::$level, format!($($arg)*))
    })
}

enum Output {
    /// Sends logs to a channel
    Channel(Sender<Vec<u8>>),
    /// Writes to the standard output
    Stdout,
    /// Writes to the standard error
    Stderr,
    /// Writes to a `File` in `String` path
    File(File, String),
}

impl Debug for Output {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Output::Channel(_) => fmt.write_str("Channel"),
            Output::Stderr => fmt.write_str("Stderr"),
            Output::Stdout => fmt.write_str("Stdout"),
            Output::File(_, ref filename) => write!(fmt, "File: {}", filename),
        }
    }
}

impl Write for Output {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        match *self {
            Output::Channel(ref v) => match v.send(data.to_vec()) {
                Ok(_) => Ok(data.len()),
                Err(_) => Err(io::Error::new(io::ErrorKind::BrokenPipe, "log receiver hung up")),
            },
            Output::Stderr => stderr().write(data),
            Output::Stdout => stdout().write(data),
            Output::File(ref mut v, _) => v.write(data),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match *self {
            Output::Channel(_) => Ok(()),
            Output::Stderr => stderr().flush(),
            Output::Stdout => stdout().flush(),
            Output::File(ref mut v, _) => v.flush(),
        }
    }
}

/// A level that identifies a log message.
/// A lower level includes all higher levels.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Level {
    Debug,
    Verbose,
    Notice,
    Warning,
}

impl Level {
    /// Whether the level is equal or lower than another level.
    /// For example, `Debug` includes all other levels, while `Warning` only
    /// includes itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use logger::Level;
    /// #
    /// assert!(Level::Debug.contains(&Level::Debug));
    /// assert!(!Level::Warning.contains(&Level::Debug));
    /// assert!(Level::Debug.contains(&Level::Warning));
    /// ```
    pub fn contains(&self, other: &Level) -> bool {
        match *self {
            Level::Debug => true,
            Level::Verbose => *other != Level::Debug,
            Level::Notice => *other == Level::Notice || *other == Level::Warning,
            Level::Warning => *other == Level::Warning,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "unknown log level {:?}", self.0)
    }
}

impl Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses the level names used in configuration files, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use logger::Level;
    /// #
    /// assert_eq!("verbose".parse::<Level>().unwrap(), Level::Verbose);
    /// assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warning);
    /// assert!("loud".parse::<Level>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Level, ParseLevelError> {
        match &*s.to_ascii_lowercase() {
            "debug" => Ok(Level::Debug),
            "verbose" => Ok(Level::Verbose),
            "notice" => Ok(Level::Notice),
            "warning" => Ok(Level::Warning),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

enum Message {
    Log(Level, String),
    SetLevel(Level),
    SetOutput(Output),
}

/// A handle to a background writer thread. Cloning the handle shares the
/// writer; the thread exits once every handle is dropped.
#[derive(Clone)]
pub struct Logger {
    tx: Sender<Message>,
}

impl Debug for Logger {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("Logger")
    }
}

impl Logger {
    /// Creates a new `Logger` for a given `Output` and severity `Level`.
    fn create(level: Level, output: Output) -> Logger {
        let (tx, rx) = channel::<Message>();
        thread::spawn(move || {
            let mut level = level;
            let mut output = output;
            for message in rx {
                match message {
                    Message::Log(lvl, msg) => {
                        if !level.contains(&lvl) {
                            continue;
                        }
                        if let Err(e) = output.write_all(format!("{}\n", msg).as_bytes()) {
                            // failing to log a message... will write straight to stderr
                            let _ = writeln!(stderr(), "Failed to log {:?} {}", e, msg);
                        }
                    }
                    Message::SetLevel(lvl) => level = lvl,
                    Message::SetOutput(out) => output = out,
                }
            }
        });

        Logger { tx }
    }

    /// Creates a new logger that writes in the standard output.
    ///
    /// # Examples
    /// ```
    /// # use logger::{Logger, Level};
    /// #
    /// let logger = Logger::new(Level::Warning);
    /// logger.log(Level::Warning, "hello world".to_owned());
    /// ```
    pub fn new(level: Level) -> Self {
        Self::create(level, Output::Stdout)
    }

    /// Creates a new logger that writes in the standard error.
    pub fn new_err(level: Level) -> Self {
        Self::create(level, Output::Stderr)
    }

    /// Creates a new logger that sends log messages to `s`.
    ///
    /// # Examples
    /// ```
    /// # use logger::{Logger, Level};
    /// # use std::sync::mpsc::channel;
    /// #
    /// let (tx, rx) = channel();
    /// let logger = Logger::channel(Level::Debug, tx);
    /// logger.log(Level::Debug, "hello world".to_owned());
    /// assert_eq!(rx.recv().unwrap(), b"hello world\n".to_vec());
    /// ```
    pub fn channel(level: Level, s: Sender<Vec<u8>>) -> Self {
        Self::create(level, Output::Channel(s))
    }

    /// Creates a new logger that writes in a file.
    pub fn file(level: Level, path: &str) -> io::Result<Self> {
        let file = File::create(Path::new(path))?;
        Ok(Self::create(level, Output::File(file, path.to_owned())))
    }

    /// Changes the output to be a file in `path`.
    pub fn set_logfile(&mut self, path: &str) -> io::Result<()> {
        let file = Output::File(File::create(Path::new(path))?, path.to_owned());
        self.send(Message::SetOutput(file));
        Ok(())
    }

    /// Changes the log level.
    pub fn set_loglevel(&mut self, level: Level) {
        self.send(Message::SetLevel(level));
    }

    /// Logs a message with a log level.
    pub fn log(&self, level: Level, msg: String) {
        self.send(Message::Log(level, msg));
    }

    fn send(&self, message: Message) {
        // the writer only stops when every handle is gone
        let _ = self.tx.send(message);
    }
}
