use thiserror::Error;

#[derive(Error, Debug)]
pub enum TasklistError {
    #[error("Task not found: row {0}")]
    TaskNotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input closed before the session ended")]
    InputClosed,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TasklistError>;
