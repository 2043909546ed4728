use async_trait::async_trait;
use nd_core::{ConsoleStorage, Error, Result};
use std::sync::Arc;
use tracing::info;

pub mod backends;
pub mod seed;

pub use backends::*;

#[async_trait]
pub trait StorageBackend: Send + Sync {
    fn name() -> &'static str;
    fn get_error_message() -> &'static str;
    async fn new() -> Result<Self> where Self: Sized;
}

pub const AVAILABLE_BACKENDS: &[&str] = &["memory"];

/// Build the storage backend named on the command line.
pub async fn create_storage(kind: &str) -> Result<Arc<dyn ConsoleStorage>> {
    match kind.trim().to_lowercase().as_str() {
        "memory" => {
            let storage = <MemoryStorage as StorageBackend>::new().await.map_err(|e| {
                Error::Storage(format!("{}: {}", MemoryStorage::get_error_message(), e))
            })?;
            info!("💾 Storage ready (using {})", MemoryStorage::name());
            Ok(Arc::new(storage))
        }
        other => Err(Error::Storage(format!(
            "Unknown storage backend: {}. Available: {}",
            other,
            AVAILABLE_BACKENDS.join(", ")
        ))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_storage, StorageBackend};
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_core::SourceStore;

    #[tokio::test]
    async fn test_create_memory_storage() {
        let storage = create_storage("Memory").await.unwrap();
        assert_eq!(storage.list_sources().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_backend_is_rejected() {
        let result = create_storage("qdrant").await;
        assert!(matches!(result, Err(Error::Storage(msg)) if msg.contains("memory")));
    }
}
