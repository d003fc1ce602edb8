// src/data.rs

use crate::model::QuestionRecord;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the folder holding one sub-folder per topic.
pub const POOL_DIR_NAME: &str = "pflegepool";
pub const QUESTIONS_FILE: &str = "fragen.txt";
pub const ANSWERS_FILE: &str = "antworten.txt";
pub const SYNONYMS_FILE: &str = "synonyme.txt";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("question pool not found: {0}")]
    NotFound(PathBuf),
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot unpack {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStats {
    pub topics: usize,
    pub questions: usize,
    pub avg_per_topic: f64,
}

/// Every question loaded from a pool, in load order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    questions: Vec<QuestionRecord>,
}

impl Catalog {
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Sorted topic names.
    pub fn topics(&self) -> Vec<String> {
        self.questions
            .iter()
            .map(|q| q.topic.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn questions_for_topic(&self, topic: &str) -> Vec<QuestionRecord> {
        self.questions
            .iter()
            .filter(|q| q.topic == topic)
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let topics = self.topics().len();
        let questions = self.questions.len();
        let avg_per_topic = if topics == 0 {
            0.0
        } else {
            questions as f64 / topics as f64
        };
        CatalogStats {
            topics,
            questions,
            avg_per_topic,
        }
    }
}

/// `pflegepool` next to the executable, or in the working directory.
pub fn default_pool_dir() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .filter(|dir| dir.join(POOL_DIR_NAME).is_dir())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(POOL_DIR_NAME)
}

/// Looks for the pool folder inside `root` or one level below it.
/// `root` itself counts when it is already named like the pool.
pub fn find_pool_dir(root: &Path) -> Option<PathBuf> {
    if root.file_name().is_some_and(|n| n == POOL_DIR_NAME) && root.is_dir() {
        return Some(root.to_path_buf());
    }

    let direct = root.join(POOL_DIR_NAME);
    if direct.is_dir() {
        return Some(direct);
    }

    let mut children: Vec<PathBuf> = fs::read_dir(root)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    children.sort();
    children
        .into_iter()
        .map(|child| child.join(POOL_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}

/// Loads every topic folder of a pool. Broken topics are skipped with a warning.
pub fn load_pool(pool_dir: &Path) -> Result<Catalog, CatalogError> {
    if !pool_dir.is_dir() {
        return Err(CatalogError::NotFound(pool_dir.to_path_buf()));
    }

    let mut topic_dirs: Vec<PathBuf> = fs::read_dir(pool_dir)
        .map_err(|source| CatalogError::Io {
            path: pool_dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    topic_dirs.sort();

    let mut questions = Vec::new();
    for dir in &topic_dirs {
        let Some(topic) = dir.file_name().and_then(|n| n.to_str()) else {
            log::warn!("skipping topic folder with non UTF-8 name: {}", dir.display());
            continue;
        };
        match load_topic(dir, topic) {
            Ok(Some(mut loaded)) => {
                log::debug!("topic '{topic}': {} questions", loaded.len());
                questions.append(&mut loaded);
            }
            Ok(None) => {}
            Err(e) => log::warn!("skipping topic '{topic}': {e}"),
        }
    }

    log::info!(
        "loaded {} questions from {}",
        questions.len(),
        pool_dir.display()
    );
    Ok(Catalog::new(questions))
}

/// Finds the pool under `root` (see [`find_pool_dir`]) and loads it.
pub fn load_from_folder(root: &Path) -> Result<Catalog, CatalogError> {
    let pool = find_pool_dir(root).ok_or_else(|| CatalogError::NotFound(root.join(POOL_DIR_NAME)))?;
    load_pool(&pool)
}

/// Unpacks a `.zip` upload into a temporary folder and loads the pool found
/// inside. The folder is removed again when this returns.
pub fn load_from_zip(archive_path: &Path) -> Result<Catalog, CatalogError> {
    let io_err = |source| CatalogError::Io {
        path: archive_path.to_path_buf(),
        source,
    };
    let file = fs::File::open(archive_path).map_err(io_err)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|source| CatalogError::Archive {
        path: archive_path.to_path_buf(),
        source,
    })?;

    let tmp = tempfile::Builder::new()
        .prefix("care_quiz_upload")
        .tempdir()
        .map_err(io_err)?;
    archive.extract(tmp.path()).map_err(|source| CatalogError::Archive {
        path: archive_path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "unpacked {} entries from {} into {}",
        archive.len(),
        archive_path.display(),
        tmp.path().display()
    );

    let pool = find_pool_dir(tmp.path())
        .ok_or_else(|| CatalogError::NotFound(archive_path.join(POOL_DIR_NAME)))?;
    load_pool(&pool)
}

/// `.zip` files go through [`load_from_zip`], anything else through
/// [`load_from_folder`].
pub fn load_from_path(path: &Path) -> Result<Catalog, CatalogError> {
    if is_zip(path) {
        load_from_zip(path)
    } else {
        load_from_folder(path)
    }
}

fn is_zip(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// `Ok(None)` when the folder has no question/answer files.
fn load_topic(dir: &Path, topic: &str) -> Result<Option<Vec<QuestionRecord>>, CatalogError> {
    let questions_path = dir.join(QUESTIONS_FILE);
    let answers_path = dir.join(ANSWERS_FILE);
    if !questions_path.is_file() || !answers_path.is_file() {
        return Ok(None);
    }

    let prompts = read_lines(&questions_path)?;
    let answers = read_lines(&answers_path)?;
    let synonyms_path = dir.join(SYNONYMS_FILE);
    let synonyms = if synonyms_path.is_file() {
        read_lines(&synonyms_path)?
    } else {
        Vec::new()
    };

    if prompts.len() != answers.len() {
        log::warn!(
            "topic '{topic}': {} questions but {} answers, skipping",
            prompts.len(),
            answers.len()
        );
        return Ok(None);
    }

    let mut records = Vec::with_capacity(prompts.len());
    for (i, (prompt, answer)) in prompts.iter().zip(&answers).enumerate() {
        let line = synonyms.get(i).map(String::as_str).unwrap_or("");
        let keywords: Vec<&str> = line.split(',').collect();
        match QuestionRecord::new(topic, prompt, answer, &keywords) {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("topic '{topic}', line {}: {e}", i + 1),
        }
    }
    Ok(Some(records))
}

fn read_lines(path: &Path) -> Result<Vec<String>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}
