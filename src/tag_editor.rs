use crate::model::Tag;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagRow<'a> {
    pub id: &'a str,
    pub label: &'a str,
}

#[derive(Clone, Copy)]
pub struct TagEditor<U, D>
where
    U: Fn(&str, &str),
    D: Fn(&str),
{
    update_tag: U,
    delete_tag: D,
}

impl<U, D> TagEditor<U, D>
where
    U: Fn(&str, &str),
    D: Fn(&str),
{
    pub fn new(update_tag: U, delete_tag: D) -> Self {
        Self {
            update_tag,
            delete_tag,
        }
    }

    // No validation: empty or duplicate labels are the store's call.
    pub fn rename(&self, tag_id: &str, new_label: &str) {
        log::trace!("tag editor rename {tag_id}");
        (self.update_tag)(tag_id, new_label);
    }

    pub fn delete(&self, tag_id: &str) {
        log::trace!("tag editor delete {tag_id}");
        (self.delete_tag)(tag_id);
    }

    pub fn rows<'a>(&self, available: &'a [Tag]) -> impl Iterator<Item = TagRow<'a>> {
        available.iter().map(tag_row)
    }
}

pub fn is_dismiss_key(key: &str, open: bool) -> bool {
    open && key == "Escape"
}

fn tag_row(tag: &Tag) -> TagRow<'_> {
    TagRow {
        id: &tag.id,
        label: &tag.label,
    }
}
