//! 错误处理

#[allow(unused)]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // 标准库错误处理
    #[error("io error, {0}")]
    Io(std::io::Error),
    #[error("option none, {0}")]
    OptionNone(String),

    #[error("type conversion failed, {0}")]
    TypeConversion(String),

    #[error("py error, {0}")]
    PyErr(#[from] pyo3::PyErr),
    #[error("py downcast error, {0}")]
    PyDowncastError(String),

    #[error("tensor error, {0}")]
    TensorErr(#[from] candle_core::Error),
    #[error("numpy error, {0}")]
    NotContiguousError(#[from] numpy::NotContiguousError),

    #[error("checkpoint not found, {0}")]
    CheckpointNotFound(String),
    #[error("invalid parameter, {0}")]
    InvalidParameter(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
