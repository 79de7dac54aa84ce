use rds_attrs_core::contract::AttributeSet;

/// Failures surfaced by the snapshot-attribute service boundary. Each
/// variant carries the underlying message verbatim; no local recovery is
/// attempted anywhere above this seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The snapshot does not exist.
    SnapshotNotFound(String),
    /// The caller lacks permission for the operation.
    AccessDenied(String),
    /// The attribute name is not a recognized sharing attribute.
    InvalidAttribute(String),
    /// Any other dispatch or service failure.
    Transport(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            Self::SnapshotNotFound(message)
            | Self::AccessDenied(message)
            | Self::InvalidAttribute(message)
            | Self::Transport(message) => message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiError {}

/// The collaborator contract: one read and one write against the
/// snapshot-attribute service. Both calls block until the service
/// responds or fails; timeouts and retries belong to the implementation.
pub trait SnapshotAttributeApi {
    fn describe(&self, snapshot_identifier: &str) -> Result<AttributeSet, ApiError>;

    fn modify(
        &self,
        snapshot_identifier: &str,
        attribute_name: &str,
        values_to_add: &[String],
        values_to_remove: &[String],
    ) -> Result<AttributeSet, ApiError>;
}
