use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::now_millis;

/// Maturity of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Idea,
    Demo,
    Draft,
    Polished,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Idea, Stage::Demo, Stage::Draft, Stage::Polished];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Idea => "Idea",
            Stage::Demo => "Demo",
            Stage::Draft => "Draft",
            Stage::Polished => "Polished",
        };
        f.write_str(label)
    }
}

/// Reference to an attached video file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub is_public: bool,
    pub stage: Stage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
    /// Last modification time, Unix epoch milliseconds.
    pub updated_at: i64,
}

impl Project {
    /// Creates a fresh project at the `Idea` stage with a generated id.
    pub fn new(title: impl Into<String>, is_public: bool) -> Self {
        Self {
            id: format!("p-{}", Uuid::new_v4()),
            title: title.into(),
            is_public,
            stage: Stage::Idea,
            video: None,
            notes: None,
            lyrics: None,
            updated_at: now_millis(),
        }
    }
}

/// Partial update for a [`Project`].
///
/// Every present field overrides the stored value; absent fields are retained.
/// The attachment fields are doubly optional: `Some(None)` (JSON `null`)
/// removes the value, `None` (field omitted) keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(
        default,
        deserialize_with = "present_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub video: Option<Option<VideoRef>>,
    #[serde(
        default,
        deserialize_with = "present_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub lyrics: Option<Option<String>>,
}

/// A field that is present in the input, `null` included, becomes `Some`.
fn present_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ProjectPatch {
    pub fn stage(stage: Stage) -> Self {
        Self {
            stage: Some(stage),
            ..Default::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn video(video: VideoRef) -> Self {
        Self {
            video: Some(Some(video)),
            ..Default::default()
        }
    }

    pub fn remove_video() -> Self {
        Self {
            video: Some(None),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merges this patch onto `project` and stamps `updated_at`.
    pub fn apply(self, project: &mut Project, updated_at: i64) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(is_public) = self.is_public {
            project.is_public = is_public;
        }
        if let Some(stage) = self.stage {
            project.stage = stage;
        }
        if let Some(video) = self.video {
            project.video = video;
        }
        if let Some(notes) = self.notes {
            project.notes = notes;
        }
        if let Some(lyrics) = self.lyrics {
            project.lyrics = lyrics;
        }
        project.updated_at = updated_at;
    }
}

/// Projects written to an empty store on first visit to the profile.
pub fn sample_projects() -> Vec<Project> {
    let now = now_millis();
    let project = |id: &str, title: &str, is_public: bool, stage: Stage| Project {
        id: id.to_string(),
        title: title.to_string(),
        is_public,
        stage,
        video: None,
        notes: None,
        lyrics: None,
        updated_at: now,
    };

    vec![
        project("p1", "Project 1", true, Stage::Demo),
        project("p2", "Project 2", true, Stage::Idea),
        project("p3", "Private Draft 1", false, Stage::Draft),
    ]
}
