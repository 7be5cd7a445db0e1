use mediastore::{MediaOwner, PropertyType};
use uuid::Uuid;

/// Minimal content-item stub: the subsystem only ever reads the key.
pub struct TestContent {
    key: Uuid,
}

impl TestContent {
    pub fn new() -> Self {
        Self {
            key: Uuid::new_v4(),
        }
    }

    pub fn with_key(key: Uuid) -> Self {
        Self { key }
    }
}

impl MediaOwner for TestContent {
    fn key(&self) -> Uuid {
        self.key
    }
}

/// Minimal property-type stub.
pub struct TestPropertyType {
    key: Uuid,
}

impl TestPropertyType {
    pub fn new() -> Self {
        Self {
            key: Uuid::new_v4(),
        }
    }

    pub fn with_key(key: Uuid) -> Self {
        Self { key }
    }
}

impl PropertyType for TestPropertyType {
    fn key(&self) -> Uuid {
        self.key
    }
}
