use uuid::Uuid;

/// Content/media item that owns a stored file.
///
/// Only the identifier is read; no other owner state is touched by the
/// storage subsystem.
pub trait MediaOwner: Send + Sync {
    /// Stable unique identifier of the content item.
    fn key(&self) -> Uuid;
}

/// Property type within a content item that owns a stored file.
pub trait PropertyType: Send + Sync {
    /// Stable unique identifier of the property type.
    fn key(&self) -> Uuid;
}
