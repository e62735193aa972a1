use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;
use crate::core::events::LedgerEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventRecorder;

// FileEventRecorder appends every ledger event as one JSON line to the branch protocol
#[derive(Debug)]
pub struct FileEventRecorder {
    path: PathBuf,
}

impl FileEventRecorder {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        file.flush()
    }
}

impl EventRecorder for FileEventRecorder {
    fn record(&self, event: &LedgerEvent) -> LibraryResult<()> {
        let line = serde_json::to_string(event)?;
        self.append(line.as_str()).map_err(|err| {
            warn!(path = ?self.path, event_id = %event.event_id, "failed to append ledger event {:?}", err);
            LibraryError::from(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;
    use crate::catalog::Medium;
    use crate::core::events::{LedgerEvent, LedgerEventKind};
    use crate::core::library::{LibraryError, MediumKind};
    use crate::customers::Customer;
    use crate::gateway::events::EventRecorder;
    use crate::gateway::file::recorder::FileEventRecorder;
    use crate::hold::domain::model::ReservationRecord;

    fn build_event() -> LedgerEvent {
        let reservation = ReservationRecord::new(&Customer::new("1", "paul", "panter"),
                                                 &Medium::new("CD1", "baz", MediumKind::Cd),
                                                 NaiveDate::from_ymd_opt(2009, 4, 3).expect("valid date"));
        LedgerEvent::reservation_created(&reservation).expect("build event")
    }

    #[tokio::test]
    async fn test_should_append_events_to_file() {
        let path = std::env::temp_dir().join(format!("protocol-{}.jsonl", Uuid::new_v4()));
        let recorder = FileEventRecorder::new(path.to_str().expect("utf8 path"));
        recorder.record(&build_event()).expect("should record");
        recorder.record(&build_event()).expect("should record");
        let content = std::fs::read_to_string(&path).expect("should read protocol");
        let events: Vec<LedgerEvent> = content.lines()
            .map(|line| serde_json::from_str(line).expect("should parse event"))
            .collect();
        assert_eq!(2, events.len());
        assert_eq!(LedgerEventKind::ReservationCreated, events[0].kind);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_should_fail_recording_to_missing_directory() {
        let path = std::env::temp_dir().join(Uuid::new_v4().to_string()).join("protocol.jsonl");
        let recorder = FileEventRecorder::new(path.to_str().expect("utf8 path"));
        let res = recorder.record(&build_event());
        assert!(matches!(res, Err(LibraryError::Recording { .. })));
    }
}
