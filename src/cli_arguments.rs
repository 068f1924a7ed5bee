use std::path::PathBuf;

use clap::Parser;
use printer_bridge::settings::settings::Settings;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub(crate) struct CliArguments {
    #[arg(short, long)]
    pub port: u16,

    /// Base URL of the printer server; `http://` is assumed without a scheme
    #[arg(short = 'u', long, default_value = "http://localhost:5000")]
    pub printer_url: String,

    #[arg(short = 'k', long, default_value = "")]
    pub api_key: String,

    #[arg(long)]
    pub webcam_stream_url: Option<String>,

    #[arg(long)]
    pub webcam_snapshot_url: Option<String>,

    /// TOML settings re-read on every request; overrides the flags above
    #[arg(short, long)]
    pub settings_file: Option<PathBuf>,
}

impl CliArguments {
    pub fn settings(&self) -> Settings {
        Settings {
            printer_url: self.printer_url.clone(),
            api_key: self.api_key.clone(),
            webcam_stream_url: self.webcam_stream_url.clone(),
            webcam_snapshot_url: self.webcam_snapshot_url.clone(),
        }
    }
}
