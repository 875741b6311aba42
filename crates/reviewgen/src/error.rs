use derive_more::From;
use orion_error::{ErrorCode, StructError, UvsReason};

#[derive(Debug, Clone, PartialEq, thiserror::Error, From)]
pub enum GenReason {
    #[error("invalid input")]
    InvalidInput,
    #[error("record encode error")]
    Encode,
    #[error("record decode error")]
    Decode,
    #[error("{0}")]
    Uvs(UvsReason),
}

impl ErrorCode for GenReason {
    fn error_code(&self) -> i32 {
        match self {
            Self::InvalidInput => 3001,
            Self::Encode => 3002,
            Self::Decode => 3003,
            Self::Uvs(u) => u.error_code(),
        }
    }
}

pub type GenError = StructError<GenReason>;
pub type GenResult<T> = Result<T, GenError>;
