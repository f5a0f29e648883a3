use error_stack::Report;
use ron::de::SpannedError;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(thiserror::Error, Debug)]
pub enum RectboxErrorKind {
    #[error("General Error: {0}")]
    General(String),
    #[error("IO Error: {0}")]
    Io(String),
    #[error("Settings Error: {0}")]
    Settings(String),
}

#[derive(Debug)]
pub struct RectboxError(pub Report<RectboxErrorKind>);

impl Display for RectboxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl RectboxError {
    #[track_caller]
    pub fn new(error: RectboxErrorKind) -> RectboxError {
        RectboxError(Report::new(error))
    }

    #[track_caller]
    pub fn change_context<S: Into<String>>(self, message: S) -> Self {
        Self(
            self.0
                .change_context(RectboxErrorKind::General(message.into())),
        )
    }

    pub fn kind(&self) -> &RectboxErrorKind {
        self.0.current_context()
    }
}

pub type RectboxResult<T> = Result<T, RectboxError>;

impl<T> From<T> for RectboxError
where
    for<'a> &'a T: Into<RectboxErrorKind>,
    T: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn from(error: T) -> Self {
        let kind: RectboxErrorKind = (&error).into();
        let report = Report::new(error);
        let report = report.change_context(kind);
        Self(report)
    }
}

impl From<&std::io::Error> for RectboxErrorKind {
    #[track_caller]
    fn from(error: &std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<&SpannedError> for RectboxErrorKind {
    #[track_caller]
    fn from(error: &SpannedError) -> Self {
        Self::Settings(format!("RON Error: {}", error))
    }
}

impl From<String> for RectboxErrorKind {
    #[track_caller]
    fn from(error: String) -> Self {
        Self::General(error)
    }
}

impl From<&str> for RectboxError {
    #[track_caller]
    fn from(error: &str) -> Self {
        Self(Report::new(RectboxErrorKind::General(error.to_string())))
    }
}

#[macro_export]
macro_rules! bail {
    ($($args:tt)+) => {
        return Err($crate::result::RectboxError::new($crate::result::RectboxErrorKind::General(format!($($args)+).into())))
    }
}

#[macro_export]
macro_rules! err {
    ($($args:tt)+) => {
        $crate::result::RectboxError::new($crate::result::RectboxErrorKind::General(format!($($args)+).into()))
    };
}

#[macro_export]
macro_rules! context {
    ($fmt:expr $(, $($args:expr),+)? => $block:block) => {
        {
            $block
        }.map_err(|e: $crate::result::RectboxError| e.change_context(format!(concat!("Failed to ",$fmt) $(, $($args)+)?)))
    };
}
pub use context;
