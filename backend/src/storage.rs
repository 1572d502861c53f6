use futures::FutureExt;

use common::raw::RawEvent;
use common::tables::Tables;

use crate::Error;

/// Persistence of the raw provider documents and of the computed tables.
pub trait TableStorage: Send + Sync {
    /// Every stored raw event, ordered by event code.
    fn load_raw_events<'f, 'own>(&'own self) -> futures::future::BoxFuture<'f, Result<Vec<RawEvent>, Error>>
    where
        'own: 'f;

    /// Stores `event`, replacing any earlier document of the same event.
    fn store_raw_event<'f, 'own>(
        &'own self,
        event: RawEvent,
    ) -> futures::future::BoxFuture<'f, Result<(), Error>>
    where
        'own: 'f;

    /// Replaces all tables at once, readers see either the old or the new set.
    fn replace_tables<'f, 'own>(
        &'own self,
        tables: &'f Tables,
    ) -> futures::future::BoxFuture<'f, Result<(), Error>>
    where
        'own: 'f;

    fn load_tables<'f, 'own>(&'own self) -> futures::future::BoxFuture<'f, Result<Tables, Error>>
    where
        'own: 'f;
}

/// Stores everything as JSON below one folder:
/// `raw/<EVENT>.json` per event and a single `tables.json`.
pub struct FileStorage {
    folder: std::sync::Arc<std::path::PathBuf>,
}

impl FileStorage {
    pub fn new<P>(folder: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self {
            folder: std::sync::Arc::new(folder.into()),
        }
    }

    fn raw_folder(&self) -> std::path::PathBuf {
        self.folder.join("raw")
    }

    fn tables_path(&self) -> std::path::PathBuf {
        self.folder.join("tables.json")
    }
}

/// Event codes end up as file names, so only plain alphanumeric codes are
/// accepted.
pub fn validate_event_code(event_code: &str) -> Result<(), Error> {
    if event_code.is_empty() || !event_code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidInput(format!(
            "event code {:?} is not alphanumeric",
            event_code
        )));
    }
    Ok(())
}

/// Writes next to `path` first and renames over it afterwards.
async fn write_atomic(path: &std::path::Path, content: Vec<u8>) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !tokio::fs::try_exists(parent).await.unwrap_or(false) {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, content).await?;
    tokio::fs::rename(&tmp_path, path).await?;
    Ok(())
}

impl TableStorage for FileStorage {
    fn load_raw_events<'f, 'own>(&'own self) -> futures::future::BoxFuture<'f, Result<Vec<RawEvent>, Error>>
    where
        'own: 'f,
    {
        async move {
            let raw_folder = self.raw_folder();
            if !tokio::fs::try_exists(&raw_folder).await.unwrap_or(false) {
                return Ok(Vec::new());
            }

            let mut paths = Vec::new();
            let mut entries = tokio::fs::read_dir(&raw_folder).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if path.extension().map(|e| e == "json").unwrap_or(false) {
                    paths.push(path);
                }
            }
            paths.sort();

            let mut events = Vec::with_capacity(paths.len());
            for path in paths {
                tracing::trace!(?path, "Loading raw event");
                let data = tokio::fs::read(&path).await?;
                events.push(serde_json::from_slice(&data)?);
            }
            Ok(events)
        }
        .boxed()
    }

    fn store_raw_event<'f, 'own>(
        &'own self,
        event: RawEvent,
    ) -> futures::future::BoxFuture<'f, Result<(), Error>>
    where
        'own: 'f,
    {
        async move {
            validate_event_code(&event.event_code)?;

            let path = self.raw_folder().join(format!("{}.json", event.event_code));
            write_atomic(&path, serde_json::to_vec(&event)?).await
        }
        .boxed()
    }

    fn replace_tables<'f, 'own>(
        &'own self,
        tables: &'f Tables,
    ) -> futures::future::BoxFuture<'f, Result<(), Error>>
    where
        'own: 'f,
    {
        async move { write_atomic(&self.tables_path(), serde_json::to_vec(tables)?).await }.boxed()
    }

    fn load_tables<'f, 'own>(&'own self) -> futures::future::BoxFuture<'f, Result<Tables, Error>>
    where
        'own: 'f,
    {
        async move {
            let data = tokio::fs::read(self.tables_path()).await?;
            Ok(serde_json::from_slice(&data)?)
        }
        .boxed()
    }
}
