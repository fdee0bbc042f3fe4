use std::io::Write;
use serde::{Serialize, de::DeserializeOwned};
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Verbose IO error, carrying the offending file when there is one.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl IoError {
    fn on_file(path: &str, cause: IoErrorType) -> Self {
        IoError{file: Some(path.to_string()), cause}
    }
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Serialization formats accepted for config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, clap::ValueEnum)]
pub enum CfgFormat {
    Yaml,
    Json,
    Toml,
}
impl CfgFormat {
    /// File extensions recognized for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            CfgFormat::Yaml => &["yaml", "yml"],
            CfgFormat::Json => &["json"],
            CfgFormat::Toml => &["toml"],
        }
    }

    /// Pick the format from a file extension.
    pub fn from_path(path: &str) -> IoResult<Self> {
        let extension = path.rsplit('.').next().unwrap_or_default();
        CfgFormat::iter()
            .find(|format| format.extensions().contains(&extension))
            .ok_or_else(|| {
                let supported: Vec<&str> = CfgFormat::iter()
                    .flat_map(|format| format.extensions().iter().copied())
                    .collect();
                IoError::on_file(path, IoErrorType::StringOnly(format!(
                    "Unsupported filetype for config file: {}\nSupported filetypes: {:?}", path, supported
                )))
            })
    }
}

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| IoError::on_file(path, IoErrorType::File(error)))
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path).map_err(|error| IoError::on_file(path, IoErrorType::File(error)))
}

/// Read a whole file with verbose errors.
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| IoError::on_file(path, IoErrorType::File(error)))
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes())
        .map_err(|error| IoError::on_file(path, IoErrorType::File(error)))
}

/// Read in a config file, picking the parser from the file extension.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: DeserializeOwned
{
    let buffer = read_to_string(path)?;
    parse_cfg_str(&buffer, CfgFormat::from_path(path)?)
        .map_err(|error| IoError{file: Some(path.to_string()), ..error})
}

/// Parse a config from a string in the given format.
pub fn parse_cfg_str<T>(buffer: &str, format: CfgFormat) -> IoResult<T>
where T: DeserializeOwned
{
    let cause = match format {
        CfgFormat::Json => match serde_json::from_str(buffer) {
            Ok(cfg) => return Ok(cfg),
            Err(error) => IoErrorType::SerdeJson(error),
        },
        CfgFormat::Toml => match toml::from_str(buffer) {
            Ok(cfg) => return Ok(cfg),
            Err(error) => IoErrorType::TomlDe(error),
        },
        CfgFormat::Yaml => match serde_yaml::from_str(buffer) {
            Ok(cfg) => return Ok(cfg),
            Err(error) => IoErrorType::SerdeYaml(error),
        },
    };
    Err(IoError{file: None, cause})
}

/// Serialize a config to a string in the given format.
pub fn cfg_to_string<T>(cfg: &T, format: CfgFormat) -> IoResult<String>
where T: Serialize
{
    let cause = match format {
        CfgFormat::Json => match serde_json::to_string_pretty(cfg) {
            Ok(buffer) => return Ok(buffer),
            Err(error) => IoErrorType::SerdeJson(error),
        },
        CfgFormat::Toml => match toml::to_string_pretty(cfg) {
            Ok(buffer) => return Ok(buffer),
            Err(error) => IoErrorType::TomlSer(error),
        },
        CfgFormat::Yaml => match serde_yaml::to_string(cfg) {
            Ok(buffer) => return Ok(buffer),
            Err(error) => IoErrorType::SerdeYaml(error),
        },
    };
    Err(IoError{file: None, cause})
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        value: f64,
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(CfgFormat::from_path("a/b.yml").unwrap(), CfgFormat::Yaml);
        assert_eq!(CfgFormat::from_path("cfg.yaml").unwrap(), CfgFormat::Yaml);
        assert_eq!(CfgFormat::from_path("cfg.json").unwrap(), CfgFormat::Json);
        assert_eq!(CfgFormat::from_path("cfg.toml").unwrap(), CfgFormat::Toml);
        assert!(CfgFormat::from_path("cfg.stl").is_err());
    }

    #[test]
    fn every_format_reads_back_what_it_writes() {
        let sample = Sample{name: "spiral".to_string(), value: 2.5};
        for format in CfgFormat::iter() {
            let buffer = cfg_to_string(&sample, format).unwrap();
            let parsed: Sample = parse_cfg_str(&buffer, format).unwrap();
            assert_eq!(parsed, sample);
        }
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = read_cfg_file::<Sample>("does/not/exist.yaml").unwrap_err();
        assert_eq!(error.file.as_deref(), Some("does/not/exist.yaml"));
        assert!(matches!(error.cause, IoErrorType::File(_)));
    }
}
