/// Blob storage seam
///
/// The trait a higher-level attachment layer consumes. Implementations
/// handle the actual transfer of blob data to and from the backing server.
use crate::config::UploadOverrides;
use crate::error::StoreResult;
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;

/// Lazily-read blob body; bytes are pulled only as the caller consumes
/// the stream.
pub type ByteStream = BoxStream<'static, Result<Bytes, reqwest::Error>>;

/// Blob storage backend trait
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Store `data` under `id`, provisioning ancestor collections first
    /// unless the effective options opt out.
    async fn upload(
        &self,
        id: &str,
        data: Vec<u8>,
        overrides: Option<UploadOverrides>,
    ) -> StoreResult<()>;

    /// Retrieve the blob under `id` as a lazy byte stream.
    async fn open(&self, id: &str) -> StoreResult<ByteStream>;

    /// Whether a blob exists under `id`.
    ///
    /// Never fails: any non-2xx status and any transport error map to
    /// `false`.
    async fn exists(&self, id: &str) -> bool;

    /// Remove the blob under `id`. Fire and forget; the response is not
    /// interpreted.
    async fn delete(&self, id: &str);

    /// Public URL for `id`. No network call.
    fn url(&self, id: &str) -> String;
}
