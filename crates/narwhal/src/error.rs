#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] narwhal_core::Error),
    #[error(transparent)]
    Layout(#[from] narwhal_layout::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
