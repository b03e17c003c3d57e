//! In-memory project store.
//!
//! # Responsibilities
//! - Own every project record for the process lifetime
//! - Perform lookups and in-place mutation under one coarse lock
//!
//! # Design Decisions
//! - A single `RwLock` around the whole collection; every operation is a
//!   short critical section, so concurrent handlers see the store as one
//!   shared resource without changing single-threaded behavior
//! - Id assignment and deletion keep the historical scheme: a new id is
//!   `len + 1` at creation time and delete removes the element at index
//!   `id - 1`. Ids are positional, not stable surrogate keys, and can
//!   collide once deletions have happened. Kept as-is.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// A named container of tasks with a numeric identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,

    /// Stored exactly as received; a body without `title` keeps the field
    /// absent in the serialized project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Task titles in append order.
    pub tasks: Vec<String>,
}

/// Single in-memory owner of all project state.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: RwLock<Vec<Project>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new project with an empty task list and return the full
    /// updated collection.
    pub fn create(&self, title: Option<String>) -> Vec<Project> {
        let mut projects = self.write();
        let id = projects.len() as u64 + 1;
        projects.push(Project {
            id,
            title,
            tasks: Vec::new(),
        });
        projects.clone()
    }

    /// All projects in creation order, tasks included.
    pub fn list(&self) -> Vec<Project> {
        self.read().clone()
    }

    /// Whether a live project carries this id. Linear scan.
    pub fn contains(&self, id: u64) -> bool {
        self.read().iter().any(|p| p.id == id)
    }

    /// Set the title of the first project matching `id` in place.
    /// Returns `false` when no project matches.
    pub fn update_title(&self, id: u64, title: Option<String>) -> bool {
        let mut projects = self.write();
        match projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.title = title;
                true
            }
            None => false,
        }
    }

    /// Remove the element at position `id - 1`.
    ///
    /// Positional, not matched against the id field. An out-of-range
    /// index is a silent no-op, like a splice past the end of the array.
    pub fn delete(&self, id: u64) {
        let mut projects = self.write();
        let index = id.saturating_sub(1) as usize;
        if index < projects.len() {
            projects.remove(index);
        }
    }

    /// Append a task title to the first project matching `id`.
    /// Returns `false` when no project matches.
    pub fn add_task(&self, id: u64, task: String) -> bool {
        let mut projects = self.write();
        match projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.tasks.push(task);
                true
            }
            None => false,
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Project>> {
        self.projects.read().expect("project store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Project>> {
        self.projects.write().expect("project store lock poisoned")
    }
}
