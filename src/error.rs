// Error type for the app shell. Every variant states *where* things went wrong.
// The ray core itself never returns errors: misuse there is a panic.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed

    #[error("Configuration error: {0}")]
    Config(String), // Rejected at startup, before any frame is drawn

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] image::ImageError), // Writing a PNG snapshot failed
}

pub type Result<T> = std::result::Result<T, Error>;
