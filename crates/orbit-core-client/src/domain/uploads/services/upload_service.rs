// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

/// Backend boundary for binary blobs: uploads a file and returns the
/// public URL under which it can be fetched.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UploadService: Send + Sync {
    async fn upload(&self, filename: &str, media_type: &str, data: &[u8]) -> Result<Url>;
}
