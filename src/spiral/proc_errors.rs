/// Spiral process error type.
#[derive(Debug)]
pub enum SpiralError {
    /// No loop count up to the search cap reaches the requested length.
    LengthTooLong {
        requested: f64,
        min_length: f64,
        max_length: f64,
        tried: usize,
    },
    /// The requested length is below the single-loop minimum.
    LengthTooShort {
        requested: f64,
        minimum: f64,
    },
    /// The height root-find did not converge.
    SolverDiverged {
        iterations: usize,
        estimate: f64,
        residual: f64,
    },
    /// The solved height is larger than the requested footprint.
    FootprintExceeded {
        requested: f64,
        solved: f64,
    },
    /// The solved geometry has no room for its innermost loop.
    DegenerateGeometry(String),
    /// An input parameter is out of range.
    InvalidSpec(String),
    /// The path renderer rejected the waypoints.
    Render(String),
    /// IO error.
    IoError(crate::io::IoError),
    /// Serde JSON error.
    SerdeJson(serde_json::Error),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for SpiralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpiralError::LengthTooLong{requested, min_length, max_length, tried} => write!(f,
                "Unreachable length: {requested} is longer than any spiral fitting the footprint \
                (tried {tried} loop pairs, reachable lengths {min_length:.3} to {max_length:.3}). \
                Specify a larger width/height or a shorter length."),
            SpiralError::LengthTooShort{requested, minimum} => write!(f,
                "Spiral length {requested} is too small for the spiral width/height (minimum {minimum:.3}). \
                Specify a smaller width/height or a larger length."),
            SpiralError::SolverDiverged{iterations, estimate, residual} => write!(f,
                "Height solve did not converge after {iterations} iterations \
                (last estimate {estimate}, residual {residual:e})"),
            SpiralError::FootprintExceeded{requested, solved} => write!(f,
                "Solved height {solved:.3} exceeds the requested height {requested:.3}"),
            SpiralError::DegenerateGeometry(error) => write!(f, "Degenerate spiral geometry: {}", error),
            SpiralError::InvalidSpec(error) => write!(f, "Invalid spiral parameters: {}", error),
            SpiralError::Render(error) => write!(f, "Render Error:\n{}", error),
            SpiralError::IoError(error) => write!(f, "IO Error:\n{}", error),
            SpiralError::SerdeJson(error) => write!(f, "JSON Serialization/Deserialization Error:\n{}", error),
            SpiralError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<crate::io::IoError> for SpiralError {
    fn from(error: crate::io::IoError) -> Self {
        SpiralError::IoError(error)
    }
}
impl From<serde_json::Error> for SpiralError {
    fn from(error: serde_json::Error) -> Self {
        SpiralError::SerdeJson(error)
    }
}
impl From<String> for SpiralError {
    fn from(error: String) -> Self {
        SpiralError::StringOnly(error)
    }
}

/// Result type for the `spiral` module.
pub type ProcResult<T> = std::result::Result<T, SpiralError>;

/// Create a `SpiralError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(SpiralError::StringOnly(error_str.to_string()))
}

/// Create a `SpiralError::InvalidSpec` from a string.
pub fn err_spec<T>(error_str: &str) -> ProcResult<T> {
    Err(SpiralError::InvalidSpec(error_str.to_string()))
}
