// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use url::Url;

use crate::app::deps::DynShortIdProvider;
use crate::domain::uploads::services::UploadService as UploadServiceTrait;

const BUCKET: &str = "chat-files";

/// Keeps uploaded blobs in memory and hands out stable public URLs, in
/// place of the hosted storage bucket.
pub struct InMemoryUploadService {
    short_id_provider: DynShortIdProvider,
    files: Mutex<HashMap<Url, Vec<u8>>>,
}

impl InMemoryUploadService {
    pub fn new(short_id_provider: DynShortIdProvider) -> Self {
        Self {
            short_id_provider,
            files: Default::default(),
        }
    }
}

#[async_trait]
impl UploadServiceTrait for InMemoryUploadService {
    async fn upload(&self, filename: &str, _media_type: &str, data: &[u8]) -> Result<Url> {
        let id = self.short_id_provider.new_id();
        let url = Url::parse(&format!(
            "https://storage.orbit-thread.app/{BUCKET}/{id}-{filename}"
        ))?;
        self.files.lock().insert(url.clone(), data.to_vec());
        Ok(url)
    }
}
