// Hand-crafted async HTTP client for the Firefly III API (v1).
//
// Base path: /api/v1/
// Auth: Authorization: Bearer <api-key>
//
// One generic CRUD implementation covers every entity kind; the
// per-kind differences (URL segment, free-text decoding) live behind
// the WireEntity trait.

use secrecy::SecretString;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::wire::{Single, WireEntity};

/// Async client for the Firefly III REST API.
///
/// Holds only immutable configuration (base URL, credential headers);
/// it is safe to share across concurrent lifecycle operations and
/// keeps no cache of remote state.
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an endpoint and API key with default transport settings.
    pub fn new(endpoint: &str, api_key: &SecretString) -> Result<Self, Error> {
        Self::with_transport(endpoint, api_key, &TransportConfig::default())
    }

    /// Build from an endpoint, API key, and explicit transport config.
    pub fn with_transport(
        endpoint: &str,
        api_key: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client(api_key)?;
        let base_url = Self::normalize_base_url(endpoint)?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(endpoint: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(endpoint)?;
        Ok(Self { http, base_url })
    }

    /// Build the base URL ending in `/api/v1/`, whether or not the
    /// configured endpoint already carries the prefix.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;

        let path = url.path().trim_end_matches('/').to_owned();
        if path.ends_with("/api/v1") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/v1/"));
        }

        Ok(url)
    }

    /// Join a relative path (e.g. `"categories/3"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/api/v1/`, so joining is infallible.
        self.base_url
            .join(path)
            .expect("path should be a valid relative URL")
    }

    // ── CRUD over any WireEntity ─────────────────────────────────────

    /// POST the entity to its collection path and return the created
    /// entity with the server-assigned identifier attached.
    pub async fn create<E: WireEntity>(&self, entity: &E) -> Result<E, Error> {
        let url = self.url(E::COLLECTION);
        debug!("POST {url}");

        let body = serde_json::to_vec(entity).map_err(Error::Serialization)?;
        let resp = self.http.post(url).body(body).send().await?;
        unwrap_entity(resp).await
    }

    /// GET one entity by identifier. A remote 404 becomes
    /// [`Error::NotFound`] so callers can tell drift from failure.
    pub async fn get<E: WireEntity>(&self, id: &str) -> Result<E, Error> {
        let url = self.url(&format!("{}/{id}", E::COLLECTION));
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        unwrap_entity(resp).await
    }

    /// PUT the full entity body to its item path (full replacement;
    /// the API has no partial update).
    pub async fn update<E: WireEntity>(&self, id: &str, entity: &E) -> Result<E, Error> {
        let url = self.url(&format!("{}/{id}", E::COLLECTION));
        debug!("PUT {url}");

        let body = serde_json::to_vec(entity).map_err(Error::Serialization)?;
        let resp = self.http.put(url).body(body).send().await?;
        unwrap_entity(resp).await
    }

    /// DELETE one entity by identifier.
    pub async fn delete<E: WireEntity>(&self, id: &str) -> Result<(), Error> {
        let url = self.url(&format!("{}/{id}", E::COLLECTION));
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        handle_empty(resp).await
    }
}

// ── Response handling ────────────────────────────────────────────────

/// Decode the `{data: {type, id, attributes}}` envelope, reattach the
/// envelope-level identifier, and run free-text decoding.
async fn unwrap_entity<E: WireEntity>(resp: reqwest::Response) -> Result<E, Error> {
    let status = resp.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(Error::NotFound);
    }

    let body = resp.text().await?;
    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            body,
        });
    }

    let envelope: Single<E> = serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body: body.clone(),
        }
    })?;

    let mut entity = envelope.data.attributes;
    entity.set_id(envelope.data.id);
    entity.decode_entities();
    Ok(entity)
}

async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
    let status = resp.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(Error::NotFound);
    }
    if status.is_success() {
        return Ok(());
    }

    let body = resp.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        body,
    })
}
