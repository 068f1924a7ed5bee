use std::path::PathBuf;

use async_trait::async_trait;

use crate::settings::{settings::Settings, settings_error::SettingsError};

/// Yields the current settings. Called once per inbound request, so a
/// source backed by storage reflects edits on the next call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsSource: Send + Sync {
    async fn load(&self) -> Result<Settings, SettingsError>;
}

pub struct StaticSettingsSource {
    settings: Settings,
}

impl StaticSettingsSource {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl SettingsSource for StaticSettingsSource {
    async fn load(&self) -> Result<Settings, SettingsError> {
        Ok(self.settings.clone())
    }
}

/// Re-reads a TOML file on every call.
pub struct FileSettingsSource {
    path: PathBuf,
}

impl FileSettingsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsSource for FileSettingsSource {
    async fn load(&self) -> Result<Settings, SettingsError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let settings = toml::from_str(&raw)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::settings::{
        settings::Settings,
        settings_error::SettingsError,
        settings_source::{FileSettingsSource, SettingsSource, StaticSettingsSource},
    };

    #[tokio::test]
    async fn should_return_the_static_settings() {
        let settings = Settings {
            printer_url: "http://localhost:5000".to_string(),
            api_key: "secret".to_string(),
            ..Settings::default()
        };

        let loaded = StaticSettingsSource::new(settings.clone())
            .load()
            .await
            .unwrap();

        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn should_reload_the_file_on_every_call() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "printer_url = \"octopi.local\"\napi_key = \"first\"").unwrap();

        let source = FileSettingsSource::new(file.path());
        assert_eq!(source.load().await.unwrap().api_key, "first");

        std::fs::write(
            file.path(),
            "printer_url = \"octopi.local\"\napi_key = \"second\"\nwebcam_stream_url = \"http://cam/stream\"\n",
        )
        .unwrap();

        let reloaded = source.load().await.unwrap();
        assert_eq!(reloaded.api_key, "second");
        assert_eq!(
            reloaded.webcam_stream_url.as_deref(),
            Some("http://cam/stream")
        );
    }

    #[tokio::test]
    async fn should_report_a_missing_file() {
        let source = FileSettingsSource::new("/definitely/not/here/bridge.toml");

        assert!(matches!(
            source.load().await.unwrap_err(),
            SettingsError::Io(_)
        ));
    }

    #[tokio::test]
    async fn should_report_a_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "printer_url = [").unwrap();

        let source = FileSettingsSource::new(file.path());

        assert!(matches!(
            source.load().await.unwrap_err(),
            SettingsError::Parse(_)
        ));
    }
}
