use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// A queued email record, owned by the delivery worker once appended.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub to: String,
    pub message: MessageBody,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageBody {
    pub subject: String,
    pub text: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub content: String,
    pub encoding: String,
}

impl OutboundMessage {
    /// Build the ticket email for one recipient, embedding the stamped PDF
    /// as a base64 attachment named after the ticket number.
    pub fn ticket(email: &str, ticket_no: &str, pdf: &[u8]) -> Self {
        Self {
            to: email.to_string(),
            message: MessageBody {
                subject: "Your Ticket".to_string(),
                text: format!("Here is your ticket: {}", ticket_no),
                attachments: vec![Attachment {
                    filename: format!("{}.pdf", ticket_no),
                    content: BASE64.encode(pdf),
                    encoding: "base64".to_string(),
                }],
            },
        }
    }
}
