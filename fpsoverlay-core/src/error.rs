use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Failed to spawn counting thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Counting thread panicked")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, OverlayError>;
