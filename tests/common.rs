#![allow(dead_code)]

use async_trait::async_trait;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;

use ticket_mailer_server::mail::{MailQueue, OutboundMessage, QueueError};
use ticket_mailer_server::storage::{ObjectStorage, StorageError};

/// In-memory template store for tests.
pub struct MemoryStorage {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, path: &str, bytes: Vec<u8>) {
        self.objects.write().insert(path.to_string(), bytes);
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn download_file(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .read()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }
}

/// In-memory mail queue for tests; can be flipped to fail every append.
pub struct MemoryMailQueue {
    sent: Mutex<Vec<OutboundMessage>>,
    fail: bool,
}

impl MemoryMailQueue {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn messages(&self) -> Vec<OutboundMessage> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl MailQueue for MemoryMailQueue {
    async fn enqueue(&self, message: &OutboundMessage) -> Result<(), QueueError> {
        if self.fail {
            return Err(QueueError::Unavailable("queue store offline".to_string()));
        }
        self.sent.lock().push(message.clone());
        Ok(())
    }
}

/// Build a minimal single-page PDF usable as a ticket template.
pub fn template_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![100.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal("EVENT TICKET")]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("encode template content"),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialize template");
    bytes
}
