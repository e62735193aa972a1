use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub mod events;
pub mod factory;
pub mod file;
pub mod logs;

// RecorderVia selects where ledger events are recorded
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum RecorderVia {
    Logs,
    File,
}

impl From<String> for RecorderVia {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "file" => RecorderVia::File,
            _ => RecorderVia::Logs,
        }
    }
}

impl Display for RecorderVia {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RecorderVia::Logs => write!(f, "logs"),
            RecorderVia::File => write!(f, "file"),
        }
    }
}
