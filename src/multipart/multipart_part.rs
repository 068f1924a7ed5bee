use bytes::Bytes;

pub const OCTET_STREAM: &str = "application/octet-stream";

/// One named part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        content_type: String,
        data: Bytes,
    },
}

impl MultipartPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        MultipartPart::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn file(name: impl Into<String>, filename: impl Into<String>, data: Bytes) -> Self {
        MultipartPart::File {
            name: name.into(),
            filename: filename.into(),
            content_type: OCTET_STREAM.to_string(),
            data,
        }
    }

    pub(crate) fn content(&self) -> &[u8] {
        match self {
            MultipartPart::Text { value, .. } => value.as_bytes(),
            MultipartPart::File { data, .. } => data,
        }
    }

    pub(crate) fn write_headers(&self, buf: &mut Vec<u8>) {
        match self {
            MultipartPart::Text { name, .. } => {
                buf.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"\r\n",
                        escape_quoted(name)
                    )
                    .as_bytes(),
                );
            }
            MultipartPart::File {
                name,
                filename,
                content_type,
                ..
            } => {
                buf.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        escape_quoted(name),
                        escape_quoted(filename)
                    )
                    .as_bytes(),
                );
                buf.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
            }
        }
    }
}

/// Percent-encodes the characters that would break out of a quoted
/// `Content-Disposition` parameter.
fn escape_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("%22"),
            '\r' => escaped.push_str("%0D"),
            '\n' => escaped.push_str("%0A"),
            other => escaped.push(other),
        }
    }
    escaped
}
