use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

/// Launch settings that can't produce a playable board
#[derive(Debug)]
pub enum ConfigError {
    BoardTooSmall { requested: usize, available: usize },
    Negative(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoardTooSmall { requested, available } => write!(
                f,
                "{} food and obstacle cells requested but only {} are free",
                requested, available
            ),
            Self::Negative(what) => write!(f, "{} must be a non-negative number", what),
        }
    }
}

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    ConfigError(ConfigError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self(ErrorType::ConfigError(e), vec![])
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ErrorType::GameError(e) => writeln!(f, "Error:\n{:?}\nTrace:", e)?,
            ErrorType::ConfigError(e) => writeln!(f, "Error:\n{}\nTrace:", e)?,
        }
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_order() {
    let res: Result = Err(Error::from(ConfigError::Negative("grass amplitude")));
    let err = res
        .with_trace_step("inner")
        .with_trace_step("outer")
        .unwrap_err();
    let text = format!("{:?}", err);
    assert!(text.contains("grass amplitude must be a non-negative number"));
    let outer = text.find("in outer").unwrap();
    let inner = text.find("in inner").unwrap();
    assert!(outer < inner);
}
