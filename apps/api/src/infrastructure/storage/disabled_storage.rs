use super::traits::StorageService;
use async_trait::async_trait;
use bytes::Bytes;

/// Stand-in used when storage credentials are not configured.
pub struct DisabledStorage;

#[async_trait]
impl StorageService for DisabledStorage {
    async fn upload(&self, key: &str, _data: Bytes, _content_type: &str) -> anyhow::Result<String> {
        anyhow::bail!("file storage is not configured; cannot store `{key}`")
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
