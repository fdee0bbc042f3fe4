use crate::{
    args,
    io,
    spiral,
};

/// Error-type enum for the `wgspiral` crate.
/// Wraps the error of each stage, so `main` can report where a run failed.
#[derive(Debug)]
pub enum WgSpiralError {
    ArgError(args::ArgError),
    IoError(io::IoError),
    SpiralError(spiral::SpiralError),
}
impl std::fmt::Display for WgSpiralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WgSpiralError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            WgSpiralError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            WgSpiralError::SpiralError(error) => write!(f, "! SPIRAL ERROR:\n- {}", error),
        }
    }
}
impl From<args::ArgError> for WgSpiralError {
    fn from(error: args::ArgError) -> Self {
        WgSpiralError::ArgError(error)
    }
}
impl From<io::IoError> for WgSpiralError {
    fn from(error: io::IoError) -> Self {
        WgSpiralError::IoError(error)
    }
}
impl From<spiral::SpiralError> for WgSpiralError {
    fn from(error: spiral::SpiralError) -> Self {
        WgSpiralError::SpiralError(error)
    }
}

/// Result type for the `wgspiral` crate.
pub type WgSpiralResult<T> = std::result::Result<T, WgSpiralError>;
