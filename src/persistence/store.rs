use super::document::PipelineDocument;
use super::project::ProjectDocument;
use crate::error::PersistenceError;
use ahash::AHashMap;
use std::fs;
use std::path::{Path, PathBuf};

fn transport(action: &str, path: &Path, e: std::io::Error) -> PersistenceError {
    PersistenceError::Transport(format!("Could not {} '{}': {}", action, path.display(), e))
}

/// Backend that holds projects. Implementations own the transport; the
/// workspace only hands over and receives documents.
pub trait ProjectStore {
    /// Fetches a project (`GET /api/users/getProject`).
    fn load_project(&self, project_id: &str) -> Result<ProjectDocument, PersistenceError>;

    /// Stores the pipeline of a project (`POST /api/users/savePipeline`),
    /// leaving its other contents untouched.
    fn save_pipeline(
        &mut self,
        project_id: &str,
        pipeline: &PipelineDocument,
    ) -> Result<(), PersistenceError>;
}

/// Keeps projects in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectStore {
    projects: AHashMap<String, ProjectDocument>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, project_id: impl Into<String>, project: ProjectDocument) {
        self.projects.insert(project_id.into(), project);
    }

    pub fn get(&self, project_id: &str) -> Option<&ProjectDocument> {
        self.projects.get(project_id)
    }
}

impl ProjectStore for MemoryProjectStore {
    fn load_project(&self, project_id: &str) -> Result<ProjectDocument, PersistenceError> {
        self.projects
            .get(project_id)
            .cloned()
            .ok_or_else(|| PersistenceError::Transport(format!("project '{}' not found", project_id)))
    }

    fn save_pipeline(
        &mut self,
        project_id: &str,
        pipeline: &PipelineDocument,
    ) -> Result<(), PersistenceError> {
        self.projects
            .entry(project_id.to_string())
            .or_insert_with(|| ProjectDocument::new(project_id, PipelineDocument::default()))
            .pipeline = pipeline.clone();
        Ok(())
    }
}

/// Keeps one `<project_id>.json` file per project under a root directory.
#[derive(Debug, Clone)]
pub struct FileProjectStore {
    root: PathBuf,
}

impl FileProjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, project_id: &str) -> Result<PathBuf, PersistenceError> {
        let valid = !project_id.is_empty()
            && project_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PersistenceError::Transport(format!(
                "'{}' is not a valid project id",
                project_id
            )));
        }
        Ok(self.root.join(format!("{}.json", project_id)))
    }
}

impl ProjectStore for FileProjectStore {
    fn load_project(&self, project_id: &str) -> Result<ProjectDocument, PersistenceError> {
        let path = self.path_for(project_id)?;
        let content = fs::read_to_string(&path).map_err(|e| transport("read", &path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save_pipeline(
        &mut self,
        project_id: &str,
        pipeline: &PipelineDocument,
    ) -> Result<(), PersistenceError> {
        let path = self.path_for(project_id)?;
        let mut project = if path.exists() {
            self.load_project(project_id)?
        } else {
            ProjectDocument::new(project_id, PipelineDocument::default())
        };
        project.pipeline = pipeline.clone();

        let json = serde_json::to_string_pretty(&project)?;
        fs::create_dir_all(&self.root).map_err(|e| transport("create", &self.root, e))?;
        fs::write(&path, json).map_err(|e| transport("write", &path, e))
    }
}
