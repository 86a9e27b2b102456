use crate::constants::MAX_TIME_STEP;
use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum StateErrors {
    InvalidParameter {
        body: String,
        field: &'static str,
        value: f64,
    },
    MissingColorComponent {
        body: String,
        component: &'static str,
    },
    InvalidSunMass(f64),
    InvalidTimeStep(i64),
    DuplicateBody(String),
    ReservedBodyId(String),
    IoError(io::Error),
    CsvError(csv::Error),
    YamlError(serde_yaml::Error),
}

impl fmt::Display for StateErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateErrors::InvalidParameter { body, field, value } => {
                write!(f, "Invalid {} for body '{}': {}", field, body, value)
            }
            StateErrors::MissingColorComponent { body, component } => write!(
                f,
                "Incomplete color for body '{}': {} is missing",
                body, component
            ),
            StateErrors::InvalidSunMass(m) => {
                write!(f, "Invalid Sun mass {}: must be finite and positive", m)
            }
            StateErrors::InvalidTimeStep(t) => {
                write!(f, "Invalid time step {}: must be between 1 and {}", t, MAX_TIME_STEP)
            }
            StateErrors::DuplicateBody(id) => write!(f, "Body '{}' is defined more than once", id),
            StateErrors::ReservedBodyId(id) => {
                write!(f, "Body id '{}' is reserved for the Sun", id)
            }
            StateErrors::IoError(e) => write!(f, "I/O error: {}", e),
            StateErrors::CsvError(e) => write!(f, "CSV error: {}", e),
            StateErrors::YamlError(e) => write!(f, "YAML error: {}", e),
        }
    }
}

impl Error for StateErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StateErrors::IoError(e) => Some(e),
            StateErrors::CsvError(e) => Some(e),
            StateErrors::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for StateErrors {
    fn from(err: io::Error) -> Self {
        StateErrors::IoError(err)
    }
}

impl From<csv::Error> for StateErrors {
    fn from(err: csv::Error) -> Self {
        StateErrors::CsvError(err)
    }
}

impl From<serde_yaml::Error> for StateErrors {
    fn from(err: serde_yaml::Error) -> Self {
        StateErrors::YamlError(err)
    }
}
