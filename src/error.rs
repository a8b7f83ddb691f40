use core::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum DuelError {
    InvalidConfiguration { reason: String },
    InvalidViewport { width: f32, height: f32 },
    TuningParse(String),
}

impl DuelError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DuelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport: {width}x{height}")
            }
            Self::TuningParse(msg) => write!(f, "failed to load tuning: {msg}"),
        }
    }
}

impl std::error::Error for DuelError {}
