use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::automock;

/// Object storage for contribution files.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Stores `data` under `key` and returns its public URL.
    async fn upload(&self, key: &str, data: Bytes, content_type: &str) -> anyhow::Result<String>;

    /// False when no storage backend is configured; uploads then always fail.
    fn is_enabled(&self) -> bool {
        true
    }
}
