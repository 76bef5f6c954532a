/// Configuration for the WebDAV blob store
use crate::error::{StoreError, StoreResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::env;

/// Store configuration, immutable after construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebDavConfig {
    /// Base URL prefix for every remote path
    pub host: String,
    /// Optional virtual root collection under the host
    pub prefix: Option<String>,
    /// Default per-upload options; call-time overrides win
    #[serde(default)]
    pub upload: UploadOptions,
    /// Basic-auth credentials; `None` means anonymous access
    pub credentials: Option<Credentials>,
}

/// Username/password pair for HTTP Basic authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub user: String,
    pub pass: String,
}

impl Credentials {
    /// `Authorization` header value for these credentials
    pub fn basic_header(&self) -> String {
        format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", self.user, self.pass))
        )
    }
}

/// Per-upload options
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UploadOptions {
    /// The caller guarantees the full remote path already exists,
    /// so no collections are provisioned before the PUT.
    #[serde(default)]
    pub create_full_put_path: bool,
}

impl UploadOptions {
    /// Overlay call-time overrides onto these defaults.
    ///
    /// Every field set in `overrides` replaces the default; unset fields
    /// keep the default value.
    pub fn merged(&self, overrides: Option<&UploadOverrides>) -> UploadOptions {
        let mut effective = *self;
        if let Some(overrides) = overrides {
            if let Some(create_full_put_path) = overrides.create_full_put_path {
                effective.create_full_put_path = create_full_put_path;
            }
        }
        effective
    }
}

/// Call-time overlay for [`UploadOptions`]; `None` fields keep the default
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadOverrides {
    pub create_full_put_path: Option<bool>,
}

impl WebDavConfig {
    /// Configuration for `host` with no prefix, no credentials and default
    /// upload options.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            prefix: None,
            upload: UploadOptions::default(),
            credentials: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `WEBDAV_HOST` is required. `WEBDAV_PREFIX` is optional;
    /// `WEBDAV_USER` and `WEBDAV_PASS` must be set together.
    /// `WEBDAV_CREATE_FULL_PUT_PATH` accepts `1` or `true`.
    pub fn from_env() -> StoreResult<Self> {
        dotenv::dotenv().ok();

        let host = env::var("WEBDAV_HOST")
            .map_err(|_| StoreError::Config("WEBDAV_HOST is required".to_string()))?;

        let prefix = env::var("WEBDAV_PREFIX").ok().filter(|p| !p.is_empty());

        let credentials = match (env::var("WEBDAV_USER"), env::var("WEBDAV_PASS")) {
            (Ok(user), Ok(pass)) => Some(Credentials { user, pass }),
            (Err(_), Err(_)) => None,
            _ => {
                return Err(StoreError::Config(
                    "WEBDAV_USER and WEBDAV_PASS must be set together".to_string(),
                ))
            }
        };

        let create_full_put_path = env::var("WEBDAV_CREATE_FULL_PUT_PATH")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            host,
            prefix,
            upload: UploadOptions {
                create_full_put_path,
            },
            credentials,
        })
    }
}
