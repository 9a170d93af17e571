//! JSON file adapters
//!
//! Questions files are JSON arrays of `{input, domain?, output?}` records.
//! Answer files are JSON arrays of `{output}` records, written pretty-printed
//! with non-ASCII text kept verbatim.

use router_application::ports::answer_store::{AnswerStore, StoreError};
use router_domain::{AnswerRecord, Question};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn read_list(path: &Path) -> Result<Vec<Value>, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let value: Value = serde_json::from_str(&text).map_err(|e| StoreError::Malformed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(StoreError::NotAList {
            path: path.display().to_string(),
        }),
    }
}

/// Load a questions file
pub fn load_questions(path: impl AsRef<Path>) -> Result<Vec<Question>, StoreError> {
    let path = path.as_ref();
    let questions = read_list(path)?
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Question>(item).map_err(|e| StoreError::Malformed {
                path: path.display().to_string(),
                message: format!("question {index}: {e}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// Answer store backed by one JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file that `save` writes before renaming over `path`
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl AnswerStore for JsonFileStore {
    fn load(&self) -> Result<Vec<AnswerRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        read_list(&self.path)?
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item.get("output") {
                Some(Value::String(output)) => Ok(AnswerRecord::new(output.as_str())),
                Some(other) => Err(StoreError::Malformed {
                    path: self.path.display().to_string(),
                    message: format!("answer {index}: 'output' is not a string: {other}"),
                }),
                None => Err(StoreError::MissingOutput { index }),
            })
            .collect()
    }

    fn save(&self, answers: &[AnswerRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }

        let text = serde_json::to_string_pretty(answers).map_err(|e| StoreError::Malformed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        // rename within one directory replaces the file atomically
        let staging = self.staging_path();
        fs::write(&staging, text).map_err(|e| io_error(&staging, e))?;
        fs::rename(&staging, &self.path).map_err(|e| io_error(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_answers_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("answers.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("out/answers.json"));
        let answers = vec![AnswerRecord::new("42"), AnswerRecord::new("café")];

        store.save(&answers).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("café"));
        assert!(text.contains("\n  {"));
        assert_eq!(store.load().unwrap(), answers);
    }

    #[test]
    fn test_save_replaces_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("answers.json"));

        store.save(&[AnswerRecord::new("1")]).unwrap();
        store
            .save(&[AnswerRecord::new("1"), AnswerRecord::new("2")])
            .unwrap();

        assert_eq!(store.load().unwrap().len(), 2);
        assert!(!store.staging_path().exists());
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_stale_staging_file_does_not_affect_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("answers.json"));
        store.save(&[AnswerRecord::new("kept")]).unwrap();

        // an interrupted save leaves a partial staging file behind
        fs::write(store.staging_path(), "[{\"outp").unwrap();

        assert_eq!(store.load().unwrap(), vec![AnswerRecord::new("kept")]);
        store
            .save(&[AnswerRecord::new("kept"), AnswerRecord::new("next")])
            .unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_non_list_answers_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        fs::write(&path, r#"{"output": "x"}"#).unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::NotAList { .. }));
    }

    #[test]
    fn test_entry_without_output_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        fs::write(&path, r#"[{"output": "1"}, {"answer": "2"}]"#).unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::MissingOutput { index: 1 }));
    }

    #[test]
    fn test_load_questions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dev.json");
        fs::write(
            &path,
            r#"[
                {"input": "What is 2+2?", "domain": "math", "output": "4"},
                {"input": "Who wrote Hamlet?"}
            ]"#,
        )
        .unwrap();

        let questions = load_questions(&path).unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].gold(), Some("4"));
        assert_eq!(questions[1].domain(), None);
    }

    #[test]
    fn test_load_questions_with_numeric_gold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dev.json");
        fs::write(
            &path,
            r#"[{"input": "2+2?", "domain": "math", "output": 4}, {"input": "ok?", "output": "yes"}]"#,
        )
        .unwrap();

        let questions = load_questions(&path).unwrap();

        assert_eq!(questions[0].gold(), Some("4"));
        assert_eq!(questions[1].gold(), Some("yes"));
    }

    #[test]
    fn test_question_without_input_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"[{"domain": "math"}]"#).unwrap();

        let err = load_questions(&path).unwrap_err();
        assert!(err.to_string().contains("question 0"));
    }

    #[test]
    fn test_missing_questions_file_is_io_error() {
        let err = load_questions("/nonexistent/questions.json").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
