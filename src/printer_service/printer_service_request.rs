use bytes::Bytes;
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Raw command for the printer, e.g. a G-code line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrinterCommand {
    pub command: String,
    #[serde(default, alias = "params")]
    pub parameters: Option<Map<String, Value>>,
}

impl PrinterCommand {
    pub fn to_body(&self) -> Value {
        let mut body = json!({ "command": self.command });

        if let Some(parameters) = self.parameters.as_ref().filter(|p| !p.is_empty()) {
            body["parameters"] = Value::Object(parameters.clone());
        }

        body
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseAction {
    Pause,
    Resume,
    Toggle,
}

impl PauseAction {
    fn as_str(&self) -> &'static str {
        match self {
            PauseAction::Pause => "pause",
            PauseAction::Resume => "resume",
            PauseAction::Toggle => "toggle",
        }
    }
}

/// Job control command. Only `pause` takes an action; one sent alongside
/// any other command is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum JobCommand {
    Start,
    Cancel,
    Restart,
    Pause {
        #[serde(default)]
        action: Option<PauseAction>,
    },
}

impl JobCommand {
    pub fn to_body(&self) -> Value {
        match self {
            JobCommand::Start => json!({ "command": "start" }),
            JobCommand::Cancel => json!({ "command": "cancel" }),
            JobCommand::Restart => json!({ "command": "restart" }),
            JobCommand::Pause { action: None } => json!({ "command": "pause" }),
            JobCommand::Pause {
                action: Some(action),
            } => json!({ "command": "pause", "action": action.as_str() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub filename: String,
    pub data: Bytes,
    pub print: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateFolder {
    pub foldername: String,
    #[serde(default)]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::printer_service::printer_service_request::{
        CreateFolder, JobCommand, PauseAction, PrinterCommand,
    };

    #[test]
    fn should_send_parameters_only_when_present() {
        let bare: PrinterCommand = serde_json::from_value(json!({"command": "G28"})).unwrap();
        assert_eq!(bare.to_body(), json!({"command": "G28"}));

        let empty: PrinterCommand =
            serde_json::from_value(json!({"command": "G28", "params": {}})).unwrap();
        assert_eq!(empty.to_body(), json!({"command": "G28"}));

        let with_params: PrinterCommand =
            serde_json::from_value(json!({"command": "M104", "params": {"S": 200}})).unwrap();
        assert_eq!(
            with_params.to_body(),
            json!({"command": "M104", "parameters": {"S": 200}})
        );
    }

    #[test]
    fn should_deserialize_pause_with_an_action() {
        let command: JobCommand =
            serde_json::from_value(json!({"command": "pause", "action": "resume"})).unwrap();

        assert_eq!(
            command,
            JobCommand::Pause {
                action: Some(PauseAction::Resume)
            }
        );
        assert_eq!(
            command.to_body(),
            json!({"command": "pause", "action": "resume"})
        );
    }

    #[test]
    fn should_drop_the_action_for_other_commands() {
        let command: JobCommand =
            serde_json::from_value(json!({"command": "cancel", "action": "pause"})).unwrap();

        assert_eq!(command, JobCommand::Cancel);
        assert_eq!(command.to_body(), json!({"command": "cancel"}));
    }

    #[test]
    fn should_send_pause_without_action_when_none_given() {
        let command: JobCommand = serde_json::from_value(json!({"command": "pause"})).unwrap();

        assert_eq!(command.to_body(), json!({"command": "pause"}));
    }

    #[test]
    fn should_reject_unknown_job_commands() {
        assert!(serde_json::from_value::<JobCommand>(json!({"command": "explode"})).is_err());
        assert!(
            serde_json::from_value::<JobCommand>(json!({"command": "pause", "action": "stop"}))
                .is_err()
        );
    }

    #[test]
    fn should_make_the_folder_path_optional() {
        let folder: CreateFolder = serde_json::from_value(json!({"foldername": "parts"})).unwrap();

        assert_eq!(folder.path, None);
    }
}
