use crate::core::events::LedgerEvent;
use crate::core::library::LibraryResult;

/// EventRecorder receives every discrete change of the ledger. A failing recorder does not
/// undo the change that produced the event.
pub trait EventRecorder: Sync + Send {
    fn record(&self, event: &LedgerEvent) -> LibraryResult<()>;
}
