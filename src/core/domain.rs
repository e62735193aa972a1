use serde::{Deserialize, Serialize};
use crate::gateway::RecorderVia;

// The ledger never lets a queue grow beyond this many reservations per medium.
pub const MAX_RESERVATIONS: usize = 3;


// Configuration abstracts config options for the lending ledger
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub max_reservations: usize,
    pub recorder: RecorderVia,
    pub protocol_path: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_reservations: MAX_RESERVATIONS,
            recorder: RecorderVia::Logs,
            protocol_path: "protocol.jsonl".to_string(),
        }
    }

    // reads MEDIATHEK_BRANCH, MEDIATHEK_RECORDER, MEDIATHEK_PROTOCOL_PATH and
    // MEDIATHEK_MAX_RESERVATIONS, falling back to the defaults of `new`
    pub fn from_env() -> Self {
        let branch = std::env::var("MEDIATHEK_BRANCH").unwrap_or_else(|_| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Ok(via) = std::env::var("MEDIATHEK_RECORDER") {
            config.recorder = RecorderVia::from(via);
        }
        if let Ok(path) = std::env::var("MEDIATHEK_PROTOCOL_PATH") {
            config.protocol_path = path;
        }
        if let Some(max) = std::env::var("MEDIATHEK_MAX_RESERVATIONS").ok()
            .and_then(|s| s.parse::<usize>().ok()) {
            config = config.with_max_reservations(max);
        }
        config
    }

    // the queue capacity can be lowered for a branch but never raised above the cap
    pub fn with_max_reservations(mut self, max: usize) -> Self {
        self.max_reservations = max.min(MAX_RESERVATIONS);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, MAX_RESERVATIONS};
    use crate::gateway::RecorderVia;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(3, config.max_reservations);
        assert_eq!(RecorderVia::Logs, config.recorder);
        assert_eq!("protocol.jsonl", config.protocol_path.as_str());
    }

    #[tokio::test]
    async fn test_should_clamp_max_reservations() {
        assert_eq!(MAX_RESERVATIONS, Configuration::new("test").with_max_reservations(10).max_reservations);
        assert_eq!(1, Configuration::new("test").with_max_reservations(1).max_reservations);
    }
}
