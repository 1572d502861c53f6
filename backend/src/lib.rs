pub mod config;
pub mod overrides;
pub mod pipeline;
pub mod storage;

mod error;
pub use error::Error;

pub async fn read_json<T>(path: &std::path::Path) -> Result<T, Error>
where
    T: serde::de::DeserializeOwned,
{
    let data = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&data)?)
}
