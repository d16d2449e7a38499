use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("failed to reach classification service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("classification service returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("malformed classification response: {0}")]
    Contract(String),
    #[error("classification service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyErrorCategory {
    Transport,
    Contract,
}

impl ClassifyError {
    pub fn category(&self) -> ClassifyErrorCategory {
        match self {
            ClassifyError::Contract(_) => ClassifyErrorCategory::Contract,
            ClassifyError::Transport(err) if err.is_decode() => ClassifyErrorCategory::Contract,
            ClassifyError::Transport(_)
            | ClassifyError::Status { .. }
            | ClassifyError::Unavailable(_) => ClassifyErrorCategory::Transport,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown resubmit policy '{0}' (expected 'supersede' or 'ignore_while_pending')")]
pub struct ParsePolicyError(pub String);
