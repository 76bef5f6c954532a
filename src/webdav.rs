/// WebDAV storage backend
///
/// Maps the blob operations onto HTTP verbs (PUT, GET, HEAD, DELETE) plus
/// MKCOL for collection provisioning, over a shared `reqwest` client.
use crate::{
    config::{UploadOverrides, WebDavConfig},
    error::{StoreError, StoreResult},
    path,
    store::{BlobStorage, ByteStream},
};
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{header::AUTHORIZATION, Method, RequestBuilder};
use tokio::sync::OnceCell;

/// MKCOL success range; "already exists" answers up to 301 pass too.
const MKCOL_OK: std::ops::RangeInclusive<u16> = 200..=301;

fn mkcol() -> Method {
    // MKCOL is a valid token, so this cannot fail
    Method::from_bytes(b"MKCOL").expect("MKCOL is a valid HTTP method")
}

/// WebDAV-backed blob store
///
/// The HTTP client is built once at construction and shared by every call
/// on the instance. The configured prefix collection chain is provisioned
/// at most once per instance, guarded by a synchronized once-cell.
pub struct WebDavStore {
    config: WebDavConfig,
    prefixed_host: String,
    client: reqwest::Client,
    prefix_provisioned: OnceCell<()>,
}

impl WebDavStore {
    /// Create a new WebDAV store for `config`.
    pub fn new(config: WebDavConfig) -> StoreResult<Self> {
        if config.host.is_empty() {
            return Err(StoreError::Config("host must not be empty".to_string()));
        }

        // 3xx answers are classified by the caller, never followed; a 301
        // on MKCOL counts as "collection already exists".
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        let prefixed_host = path::compose(&config.host, config.prefix.as_deref().unwrap_or(""));

        Ok(Self {
            config,
            prefixed_host,
            client,
            prefix_provisioned: OnceCell::new(),
        })
    }

    fn request(&self, method: Method, uri: &str) -> RequestBuilder {
        let mut request = self.client.request(method, uri);
        if let Some(credentials) = &self.config.credentials {
            request = request.header(AUTHORIZATION, credentials.basic_header());
        }
        request
    }

    /// Issue a single MKCOL, classifying the response.
    async fn create_collection(&self, uri: &str) -> StoreResult<()> {
        let response = self.request(mkcol(), uri).send().await?;
        let status = response.status();
        if MKCOL_OK.contains(&status.as_u16()) {
            tracing::debug!(%uri, %status, "collection ensured");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::CollectionCreate {
            uri: uri.to_string(),
            status,
            body,
        })
    }

    /// Create every collection of `dir_path` under `base`, parents first.
    async fn create_collection_chain(&self, base: &str, dir_path: &str) -> StoreResult<()> {
        for dir in path::collection_chain(dir_path) {
            self.create_collection(&format!("{}{}", base, dir)).await?;
        }
        Ok(())
    }

    /// Provision the configured prefix chain, at most once per instance.
    ///
    /// A failed attempt leaves the cell empty, so the next upload retries.
    async fn ensure_prefix(&self) -> StoreResult<()> {
        self.prefix_provisioned
            .get_or_try_init(|| async {
                if let Some(prefix) = self.config.prefix.as_deref() {
                    self.create_collection_chain(&self.config.host, prefix)
                        .await?;
                }
                Ok::<(), StoreError>(())
            })
            .await?;
        Ok(())
    }

    /// Ensure every ancestor collection of `id` exists on the server.
    async fn provision_for(&self, id: &str) -> StoreResult<()> {
        self.ensure_prefix().await?;
        for dir in path::ancestor_paths(id) {
            self.create_collection(&format!("{}{}", self.prefixed_host, dir))
                .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStorage for WebDavStore {
    async fn upload(
        &self,
        id: &str,
        data: Vec<u8>,
        overrides: Option<UploadOverrides>,
    ) -> StoreResult<()> {
        let options = self.config.upload.merged(overrides.as_ref());
        if !options.create_full_put_path {
            self.provision_for(id).await?;
        }

        let uri = path::compose(&self.prefixed_host, id);
        let response = self.request(Method::PUT, &uri).body(data).send().await?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!(%uri, %status, "uploaded blob");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Upload { uri, status, body })
    }

    async fn open(&self, id: &str) -> StoreResult<ByteStream> {
        let uri = path::compose(&self.prefixed_host, id);
        let response = self
            .request(Method::GET, &uri)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes_stream().boxed())
    }

    async fn exists(&self, id: &str) -> bool {
        let uri = path::compose(&self.prefixed_host, id);
        match self.request(Method::HEAD, &uri).send().await {
            Ok(response) => response.status().is_success(),
            Err(error) => {
                tracing::debug!(%uri, %error, "existence probe failed, treating as absent");
                false
            }
        }
    }

    async fn delete(&self, id: &str) {
        let uri = path::compose(&self.prefixed_host, id);
        if let Err(error) = self.request(Method::DELETE, &uri).send().await {
            tracing::debug!(%uri, %error, "delete request failed");
        }
    }

    fn url(&self, id: &str) -> String {
        path::compose(&self.prefixed_host, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_composition() {
        let mut config = WebDavConfig::new("https://dav.example");
        config.prefix = Some("files".to_string());
        let store = WebDavStore::new(config).unwrap();

        assert_eq!(store.url(""), "https://dav.example/files");
        assert_eq!(store.url("x/y"), "https://dav.example/files/x/y");
    }

    #[test]
    fn test_url_without_prefix() {
        let store = WebDavStore::new(WebDavConfig::new("https://dav.example")).unwrap();

        assert_eq!(store.url(""), "https://dav.example");
        assert_eq!(store.url("x"), "https://dav.example/x");
    }

    #[test]
    fn test_empty_host_rejected() {
        let result = WebDavStore::new(WebDavConfig::new(""));
        assert!(matches!(result, Err(StoreError::Config(_))));
    }
}
