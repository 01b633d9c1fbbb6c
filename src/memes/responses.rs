use http::StatusCode;
use serde::{Deserialize, Serialize};

pub const IN_CHANNEL: &str = "in_channel";

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// `in_channel` makes the reply visible to everyone in the channel.
    pub response_type: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub text: String,
    pub image_url: String,
}

impl ResponseEnvelope {
    pub fn in_channel(image_url: String) -> Self {
        Self {
            response_type: IN_CHANNEL.to_string(),
            attachments: vec![Attachment {
                text: image_url.clone(),
                image_url,
            }],
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<ErrorInfo>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub status: String,
    pub detail: String,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, detail: String) -> Self {
        Self {
            errors: vec![ErrorInfo {
                status: status.as_u16().to_string(),
                detail,
            }],
        }
    }
}
