use crate::model::{Note, Tag};
use leptos::prelude::*;

pub fn matches_title(title: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&query.to_lowercase())
}

pub fn matches_tags(note: &Note, selected: &[Tag]) -> bool {
    selected.iter().all(|tag| note.has_tag(&tag.id))
}

pub fn matches(note: &Note, query: &str, selected: &[Tag]) -> bool {
    matches_title(&note.title, query) && matches_tags(note, selected)
}

pub fn filter_notes(query: &str, selected: &[Tag], notes: &[Note]) -> Vec<Note> {
    notes
        .iter()
        .filter(|note| matches(note, query, selected))
        .cloned()
        .collect()
}

// Only reads its three inputs, so unrelated signals never rerun the filter.
pub fn filtered_notes_memo(
    title: Signal<String>,
    selected: Signal<TagSelection>,
    notes: Signal<Vec<Note>>,
) -> Memo<Vec<Note>> {
    Memo::new(move |_| {
        let query = title.get();
        selected.with(|selection| {
            notes.with(|notes| filter_notes(&query, selection.as_slice(), notes))
        })
    })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSelection {
    tags: Vec<Tag>,
}

impl TagSelection {
    pub fn contains(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|tag| tag.id == tag_id)
    }

    pub fn toggle(&mut self, tag: &Tag) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| t.id == tag.id) {
            self.tags.remove(pos);
            false
        } else {
            self.tags.push(tag.clone());
            true
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }
}
