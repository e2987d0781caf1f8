use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Request body of the ticket endpoint.
///
/// Both recipient fields are lenient at the serde level so that malformed
/// entries deserialize and can be skipped individually instead of failing
/// the whole request.
#[derive(Deserialize, Serialize, Debug, Clone, ToSchema)]
pub struct SendTicketsRequest {
    #[serde(default)]
    pub recipients: Option<Vec<RecipientRequest>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, ToSchema)]
pub struct RecipientRequest {
    #[serde(default, deserialize_with = "lenient_field")]
    pub email: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_field")]
    pub category: Option<u8>,
}

/// Treat a field of the wrong JSON type the same as an absent one, so the
/// recipient is skipped like any other invalid entry rather than failing
/// the whole batch.
fn lenient_field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Success summary: every ticket number produced, in input order of the
/// valid recipients.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct SendTicketsResponse {
    pub success: bool,
    pub count: usize,
    pub tickets: Vec<String>,
}
