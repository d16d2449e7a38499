//! Backend commands queued from UI to backend worker.

use shared::domain::RequestId;

#[derive(Debug)]
pub enum BackendCommand {
    Classify { request_id: RequestId, text: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Classify { .. } => "classify",
        }
    }
}
