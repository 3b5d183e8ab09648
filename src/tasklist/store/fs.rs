use super::{decode, encode, TaskStore};
use crate::error::{Result, TasklistError};
use crate::model::Task;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TasklistError::Io)?;
            }
        }
        Ok(())
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no backing file, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TasklistError::Io)?;
        let tasks = decode(&content)?;
        info!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        self.ensure_parent()?;
        let content = encode(tasks)?;
        fs::write(&self.path, content).map_err(TasklistError::Io)?;
        info!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::tempdir;

    fn sample(body: &str) -> Task {
        Task::new(
            Priority::Critical,
            NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            vec![format!("{:<44}", body)],
        )
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("tasklist.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("tasklist.json"));
        let tasks = vec![sample("one"), sample("two")];
        store.save(&tasks).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("tasks.json");
        let mut store = FileStore::new(&path);
        store.save(&[]).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "[]");
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasklist.json");
        let mut store = FileStore::new(&path);
        store.save(&[sample("one"), sample("two")]).unwrap();
        store.save(&[]).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "[]");
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasklist.json");
        fs::write(&path, "{not json").unwrap();
        let store = FileStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(TasklistError::Serialization(_))
        ));
    }
}
