use thiserror::Error;

use ts_network::NetworkError;
use ts_schedule::ScheduleError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("invalid car route: {0}")]
    Network(#[from] NetworkError),

    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
}

pub type SimResult<T> = Result<T, SimError>;
