use lt_behavior::BehaviorError;
use lt_core::LtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("line of {line_length} cells cannot seat {agents} agents")]
    LineTooShort {
        line_length: usize,
        agents:      usize,
    },

    #[error("invalid starting layout: {0}")]
    InvalidLayout(String),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Core(#[from] LtError),
}

pub type SimResult<T> = Result<T, SimError>;
