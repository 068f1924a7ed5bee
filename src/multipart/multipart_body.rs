use bytes::Bytes;
use rand::{Rng, distr::Alphanumeric};

use crate::multipart::multipart_part::MultipartPart;

pub const BOUNDARY_LENGTH: usize = 32;

/// Ordered list of form parts encoded as `multipart/form-data`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartBody {
    parts: Vec<MultipartPart>,
}

/// Wire form of a [`MultipartBody`] together with the boundary it was
/// delimited with.
#[derive(Debug, Clone)]
pub struct EncodedMultipart {
    pub boundary: String,
    pub body: Bytes,
}

impl EncodedMultipart {
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn part(mut self, part: MultipartPart) -> Self {
        self.parts.push(part);
        self
    }

    pub fn text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.part(MultipartPart::text(name, value))
    }

    pub fn file(self, name: impl Into<String>, filename: impl Into<String>, data: Bytes) -> Self {
        self.part(MultipartPart::file(name, filename, data))
    }

    pub fn parts(&self) -> &[MultipartPart] {
        &self.parts
    }

    /// Encodes the parts under a fresh random boundary that does not occur
    /// in any part's content.
    pub fn encode(&self) -> EncodedMultipart {
        self.encode_with(random_boundary)
    }

    pub(crate) fn encode_with(&self, mut next_boundary: impl FnMut() -> String) -> EncodedMultipart {
        let boundary = loop {
            let candidate = next_boundary();
            if !self.collides_with(&candidate) {
                break candidate;
            }
        };

        let mut buf: Vec<u8> = Vec::new();
        for part in &self.parts {
            buf.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
            part.write_headers(&mut buf);
            buf.extend_from_slice(b"\r\n");
            buf.extend_from_slice(part.content());
            buf.extend_from_slice(b"\r\n");
        }
        buf.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

        EncodedMultipart {
            boundary,
            body: Bytes::from(buf),
        }
    }

    fn collides_with(&self, boundary: &str) -> bool {
        let needle = boundary.as_bytes();
        if needle.is_empty() {
            return true;
        }

        self.parts.iter().any(|part| {
            part.content()
                .windows(needle.len())
                .any(|window| window == needle)
        })
    }
}

fn random_boundary() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(BOUNDARY_LENGTH)
        .map(char::from)
        .collect()
}
