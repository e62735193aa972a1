use tracing::info;
use crate::core::events::LedgerEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventRecorder;

// LogEventRecorder writes every ledger event as a structured log line
#[derive(Debug)]
pub struct LogEventRecorder {
    branch_id: String,
}

impl LogEventRecorder {
    pub fn new(branch_id: &str) -> Self {
        Self {
            branch_id: branch_id.to_string(),
        }
    }
}

impl EventRecorder for LogEventRecorder {
    fn record(&self, event: &LedgerEvent) -> LibraryResult<()> {
        info!(branch = %self.branch_id,
            event_id = %event.event_id,
            kind = ?event.kind,
            medium = %event.key,
            customer = %event.customer_id,
            date = %event.event_date,
            data = %event.json_data,
            "ledger event");
        Ok(())
    }
}
