use std::sync::Arc;

use doreme_core::DoremeError;
use doreme_core::error::Result;
use doreme_core::now_millis;
use doreme_core::project::{Project, ProjectPatch, sample_projects};
use doreme_core::store::RecordStore;

/// Profile project management: listing, creation and partial updates.
pub struct ProjectService {
    store: Arc<dyn RecordStore>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// All projects in stored order. An empty store is seeded with the samples.
    pub async fn list(&self) -> Vec<Project> {
        let seeded = self
            .store
            .update_projects(Box::new(|projects: &mut Vec<Project>| {
                if !projects.is_empty() {
                    return false;
                }
                *projects = sample_projects();
                true
            }))
            .await;

        seeded.unwrap_or_else(|e| {
            tracing::warn!(
                "[ProjectService] Stored projects unreadable, showing none: {}",
                e
            );
            Vec::new()
        })
    }

    pub async fn public_projects(&self) -> Vec<Project> {
        self.list().await.into_iter().filter(|p| p.is_public).collect()
    }

    pub async fn private_projects(&self) -> Vec<Project> {
        self.list().await.into_iter().filter(|p| !p.is_public).collect()
    }

    /// Appends a new `Idea`-stage project titled `Project <n>`, where `n`
    /// counts projects of the same visibility including the new one.
    pub async fn add_project(&self, is_public: bool) -> Result<Project> {
        let mut project = Project::new(String::new(), is_public);
        let id = project.id.clone();

        let projects = self
            .store
            .update_projects(Box::new(move |projects: &mut Vec<Project>| {
                let same_visibility = projects.iter().filter(|p| p.is_public == is_public).count();
                project.title = format!("Project {}", same_visibility + 1);
                projects.push(project);
                true
            }))
            .await?;

        let project = projects
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DoremeError::internal(format!("Project {} missing after write", id)))?;
        tracing::info!(
            "[ProjectService] Added {} project {}",
            if is_public { "public" } else { "private" },
            project.id
        );
        Ok(project)
    }

    /// Merges `patch` into the project and refreshes its timestamp.
    ///
    /// Unknown ids are a no-op and return `Ok(None)`.
    pub async fn update(&self, project_id: &str, patch: ProjectPatch) -> Result<Option<Project>> {
        let id = project_id.to_string();
        let projects = self
            .store
            .update_projects(Box::new(move |projects: &mut Vec<Project>| {
                match projects.iter_mut().find(|p| p.id == id) {
                    Some(project) => {
                        patch.apply(project, now_millis());
                        true
                    }
                    None => false,
                }
            }))
            .await?;

        let updated = projects.into_iter().find(|p| p.id == project_id);
        if updated.is_none() {
            tracing::debug!("[ProjectService] Update for unknown project {} ignored", project_id);
        }
        Ok(updated)
    }
}
