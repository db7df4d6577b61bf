use crate::model::{Note, RawNote, Tag};
use crate::settings::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Seed {
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub notes: Vec<RawNote>,
}

impl Seed {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteStore {
    tags: Vec<Tag>,
    notes: Vec<RawNote>,
    revision: u64,
}

impl NoteStore {
    pub fn new(tags: Vec<Tag>, notes: Vec<RawNote>) -> Self {
        Self {
            tags,
            notes,
            revision: 0,
        }
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self::new(seed.tags, seed.notes)
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Resolves every note's `tag_ids` against the registry. Tags come out in
    /// registry order and ids with no registry entry are skipped.
    pub fn notes_with_tags(&self) -> Vec<Note> {
        self.notes
            .iter()
            .map(|raw| Note {
                id: raw.id.clone(),
                title: raw.title.clone(),
                tags: self
                    .tags
                    .iter()
                    .filter(|tag| raw.tag_ids.contains(&tag.id))
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    pub fn update_tag(&mut self, id: &str, label: &str) -> bool {
        let Some(tag) = self.tags.iter_mut().find(|tag| tag.id == id) else {
            log::warn!("update_tag: unknown tag {id}");
            return false;
        };
        tag.label = label.to_string();
        self.revision += 1;
        log::debug!("tag {id} renamed (revision {})", self.revision);
        true
    }

    pub fn delete_tag(&mut self, id: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|tag| tag.id != id);
        if self.tags.len() == before {
            log::warn!("delete_tag: unknown tag {id}");
            return false;
        }
        self.revision += 1;
        log::debug!("tag {id} deleted (revision {})", self.revision);
        true
    }
}
