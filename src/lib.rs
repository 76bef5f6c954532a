//! WebDAV-backed blob storage adapter.
//!
//! Exposes a remote WebDAV server as a generic blob store: store a byte
//! payload under an identifier, fetch it back as a lazy byte stream, check
//! whether it exists, delete it, and compute its public URL. Identifiers may
//! contain `/` to denote virtual directories; ancestor collections are
//! provisioned with MKCOL before each upload, and the configured prefix
//! collection is provisioned at most once per store instance.
//!
//! The [`BlobStorage`] trait is the seam a higher-level attachment layer
//! consumes; [`WebDavStore`] is the WebDAV implementation of it.

pub mod config;
pub mod error;
pub mod path;
pub mod store;
pub mod webdav;

pub use config::{Credentials, UploadOptions, UploadOverrides, WebDavConfig};
pub use error::{StoreError, StoreResult};
pub use store::{BlobStorage, ByteStream};
pub use webdav::WebDavStore;
