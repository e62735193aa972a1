use crate::core::domain::Configuration;
use crate::gateway::events::EventRecorder;
use crate::gateway::file::recorder::FileEventRecorder;
use crate::gateway::logs::recorder::LogEventRecorder;
use crate::gateway::RecorderVia;

pub fn create_recorder(config: &Configuration) -> Box<dyn EventRecorder> {
    match config.recorder {
        RecorderVia::Logs => {
            Box::new(LogEventRecorder::new(config.branch_id.as_str()))
        }
        RecorderVia::File => {
            Box::new(FileEventRecorder::new(config.protocol_path.as_str()))
        }
    }
}
