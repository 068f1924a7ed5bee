#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Cannot read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
}
