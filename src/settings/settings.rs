use serde::{Deserialize, Serialize};

use crate::settings::connection_config::ConnectionConfig;

/// Values the host persists for the bridge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub printer_url: String,
    pub api_key: String,
    pub webcam_stream_url: Option<String>,
    pub webcam_snapshot_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebcamUrls {
    pub stream_url: String,
    pub snapshot_url: String,
}

impl Settings {
    pub fn connection_config(&self) -> ConnectionConfig {
        ConnectionConfig::new(&self.printer_url, &self.api_key)
    }

    /// Override URLs win; otherwise the printer server's bundled webcam
    /// endpoints are used. `None` when neither is available.
    pub fn webcam_urls(&self) -> Option<WebcamUrls> {
        let config = self.connection_config();
        let base_known = !config.base_url().is_empty();
        let fallback = |action: &str| {
            base_known.then(|| config.endpoint_url(&format!("webcam/?action={}", action)))
        };

        Some(WebcamUrls {
            stream_url: non_blank(&self.webcam_stream_url).or_else(|| fallback("stream"))?,
            snapshot_url: non_blank(&self.webcam_snapshot_url).or_else(|| fallback("snapshot"))?,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use crate::settings::settings::Settings;

    fn settings() -> Settings {
        Settings {
            printer_url: "octopi.local".to_string(),
            api_key: "secret".to_string(),
            ..Settings::default()
        }
    }

    #[test]
    fn should_build_a_normalized_connection_config() {
        let config = settings().connection_config();

        assert_eq!(config.base_url(), "http://octopi.local");
        assert_eq!(config.api_key(), "secret");
    }

    #[test]
    fn should_default_webcam_urls_to_the_printer_server() {
        let urls = settings().webcam_urls().unwrap();

        assert_eq!(urls.stream_url, "http://octopi.local/webcam/?action=stream");
        assert_eq!(
            urls.snapshot_url,
            "http://octopi.local/webcam/?action=snapshot"
        );
    }

    #[test]
    fn should_prefer_webcam_overrides() {
        let urls = Settings {
            webcam_stream_url: Some("http://cam.local:8080/stream".to_string()),
            webcam_snapshot_url: Some("   ".to_string()),
            ..settings()
        }
        .webcam_urls()
        .unwrap();

        assert_eq!(urls.stream_url, "http://cam.local:8080/stream");
        assert_eq!(
            urls.snapshot_url,
            "http://octopi.local/webcam/?action=snapshot"
        );
    }

    #[test]
    fn should_not_resolve_webcam_urls_without_any_url() {
        assert_eq!(Settings::default().webcam_urls(), None);

        let only_stream = Settings {
            webcam_stream_url: Some("http://cam.local/stream".to_string()),
            ..Settings::default()
        };
        assert_eq!(only_stream.webcam_urls(), None);

        let both = Settings {
            webcam_stream_url: Some("http://cam.local/stream".to_string()),
            webcam_snapshot_url: Some("http://cam.local/snap".to_string()),
            ..Settings::default()
        };
        assert_eq!(
            both.webcam_urls().map(|urls| urls.snapshot_url),
            Some("http://cam.local/snap".to_string())
        );
    }
}
