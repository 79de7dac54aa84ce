use aws_sdk_rds::error::ProvideErrorMetadata;
use aws_sdk_rds::types::DbSnapshotAttributesResult;
use rds_attrs_core::contract::{AttributeSet, SnapshotAttribute};

use crate::adapters::client::{ApiError, SnapshotAttributeApi};

/// `aws-sdk-rds` implementation of the snapshot-attribute boundary.
pub struct RdsSnapshotAttributeApi {
    rds_client: aws_sdk_rds::Client,
}

impl RdsSnapshotAttributeApi {
    pub fn new(rds_client: aws_sdk_rds::Client) -> Self {
        Self { rds_client }
    }
}

impl SnapshotAttributeApi for RdsSnapshotAttributeApi {
    fn describe(&self, snapshot_identifier: &str) -> Result<AttributeSet, ApiError> {
        let client = self.rds_client.clone();
        let identifier = snapshot_identifier.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .describe_db_snapshot_attributes()
                    .db_snapshot_identifier(identifier)
                    .send()
                    .await
                    .map_err(|error| {
                        classify_sdk_error("failed to describe snapshot attributes", &error)
                    })?;
                convert_attributes_result(output.db_snapshot_attributes_result)
            })
        })
    }

    fn modify(
        &self,
        snapshot_identifier: &str,
        attribute_name: &str,
        values_to_add: &[String],
        values_to_remove: &[String],
    ) -> Result<AttributeSet, ApiError> {
        let client = self.rds_client.clone();
        let identifier = snapshot_identifier.to_string();
        let attribute = attribute_name.to_string();
        let to_add = values_to_add.to_vec();
        let to_remove = values_to_remove.to_vec();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .modify_db_snapshot_attribute()
                    .db_snapshot_identifier(identifier)
                    .attribute_name(attribute)
                    .set_values_to_add(if to_add.is_empty() { None } else { Some(to_add) })
                    .set_values_to_remove(if to_remove.is_empty() {
                        None
                    } else {
                        Some(to_remove)
                    })
                    .send()
                    .await
                    .map_err(|error| {
                        classify_sdk_error("failed to modify snapshot attribute", &error)
                    })?;
                convert_attributes_result(output.db_snapshot_attributes_result)
            })
        })
    }
}

fn convert_attributes_result(
    result: Option<DbSnapshotAttributesResult>,
) -> Result<AttributeSet, ApiError> {
    let result = result.ok_or_else(|| {
        ApiError::Transport("response missing DBSnapshotAttributesResult".to_string())
    })?;
    let snapshot_identifier = result.db_snapshot_identifier.ok_or_else(|| {
        ApiError::Transport("response missing DBSnapshotIdentifier".to_string())
    })?;
    let attributes = result
        .db_snapshot_attributes
        .unwrap_or_default()
        .into_iter()
        .map(|attribute| SnapshotAttribute {
            name: attribute.attribute_name.unwrap_or_default(),
            values: attribute.attribute_values.unwrap_or_default(),
        })
        .collect();

    Ok(AttributeSet {
        snapshot_identifier,
        attributes,
    })
}

fn classify_sdk_error<E>(context: &str, error: &E) -> ApiError
where
    E: ProvideErrorMetadata + std::fmt::Display,
{
    let code = error.code().map(str::to_string);
    let message = format!("{context}: {error}");

    match code.as_deref() {
        Some("DBSnapshotNotFound") | Some("DBSnapshotNotFoundFault") => {
            ApiError::SnapshotNotFound(message)
        }
        Some("AccessDenied") | Some("AccessDeniedException") | Some("UnauthorizedOperation") => {
            ApiError::AccessDenied(message)
        }
        Some("InvalidParameterValue") | Some("InvalidParameterCombination") => {
            ApiError::InvalidAttribute(message)
        }
        _ => ApiError::Transport(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_rds::types::DbSnapshotAttribute;

    #[test]
    fn converts_wire_result_into_attribute_set() {
        let result = DbSnapshotAttributesResult::builder()
            .db_snapshot_identifier("snap1")
            .db_snapshot_attributes(
                DbSnapshotAttribute::builder()
                    .attribute_name("restore")
                    .attribute_values("123456789012")
                    .build(),
            )
            .build();

        let converted =
            convert_attributes_result(Some(result)).expect("wire result should convert");
        assert_eq!(converted.snapshot_identifier, "snap1");
        assert_eq!(
            converted.attribute_values("restore"),
            Some(vec!["123456789012".to_string()].as_slice())
        );
    }

    #[test]
    fn missing_result_is_a_transport_error() {
        let error = convert_attributes_result(None).expect_err("missing result should fail");
        assert!(matches!(error, ApiError::Transport(_)));
        assert!(error.message().contains("DBSnapshotAttributesResult"));
    }

    #[test]
    fn attribute_without_values_converts_to_empty_list() {
        let result = DbSnapshotAttributesResult::builder()
            .db_snapshot_identifier("snap1")
            .db_snapshot_attributes(
                DbSnapshotAttribute::builder().attribute_name("restore").build(),
            )
            .build();

        let converted =
            convert_attributes_result(Some(result)).expect("wire result should convert");
        assert_eq!(converted.attribute_values("restore"), Some(&[][..]));
    }
}
