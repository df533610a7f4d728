// The Firefly III response envelope and the per-kind seam.
//
// Every single-entity response is wrapped as {data: {type, id,
// attributes}}; the identifier lives at the envelope level, never
// inside the attribute object. Request bodies are the bare attribute
// object with no wrapper.

use serde::Serialize;
use serde::de::{Deserialize, DeserializeOwned, Deserializer};

/// Per-kind capabilities the generic [`Client`](crate::Client) needs:
/// the collection URL segment, identifier reattachment, and the
/// free-text normalization hook.
pub trait WireEntity: Serialize + DeserializeOwned {
    /// URL segment under `/api/v1/` (e.g. `"rule-groups"`).
    const COLLECTION: &'static str;

    /// Attach the server-assigned identifier from the envelope.
    fn set_id(&mut self, id: String);

    /// Decode HTML entities in free-text fields returned by the server.
    ///
    /// Firefly III escapes free text on the way out; decoding here keeps
    /// stored values from accumulating re-escaping across round trips.
    /// Default is a no-op — only kinds with escaped fields override it.
    fn decode_entities(&mut self) {}
}

/// Single-entity response envelope.
#[derive(Debug, serde::Deserialize)]
pub struct Single<T> {
    pub data: Payload<T>,
}

/// The `data` member of [`Single`].
#[derive(Debug, serde::Deserialize)]
pub struct Payload<T> {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub attributes: T,
}

/// Deserialize JSON `null` as the type's default value.
///
/// Firefly III returns `null` for unset free-text fields where the
/// write side accepts (and we send) an empty string.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
