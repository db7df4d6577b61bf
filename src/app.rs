use leptos::ev;
use leptos::prelude::*;

use crate::model::{Note, Tag};
use crate::note_filter::{filtered_notes_memo, TagSelection};
use crate::settings::{self, Routes, Settings, SEED_ELEMENT_ID, SETTINGS_ELEMENT_ID};
use crate::store::{NoteStore, Seed};
use crate::tag_editor::{is_dismiss_key, TagEditor};

pub fn load_settings() -> Settings {
    let Some(json) = settings::load_page_json(SETTINGS_ELEMENT_ID) else {
        return Settings::default();
    };
    Settings::from_json(&json).unwrap_or_else(|err| {
        log::error!("#{SETTINGS_ELEMENT_ID}: {err}; using defaults");
        Settings::default()
    })
}

fn load_store() -> NoteStore {
    let seed = match settings::load_page_json(SEED_ELEMENT_ID) {
        Some(json) => Seed::from_json(&json).unwrap_or_else(|err| {
            log::error!("#{SEED_ELEMENT_ID}: {err}; starting empty");
            Seed::default()
        }),
        None => Seed::default(),
    };
    log::info!(
        "loaded {} notes, {} tags",
        seed.notes.len(),
        seed.tags.len()
    );
    NoteStore::from_seed(seed)
}

#[component]
pub fn App(settings: Settings) -> impl IntoView {
    let store = RwSignal::new(load_store());

    let available_tags = Signal::derive(move || store.with(|s| s.tags().to_vec()));
    let notes = Signal::derive(move || store.with(NoteStore::notes_with_tags));

    let update_tag = Callback::new(move |(id, label): (String, String)| {
        store.update(|s| {
            if s.update_tag(&id, &label) {
                log::trace!("store at revision {}", s.revision());
            }
        });
    });
    let delete_tag = Callback::new(move |id: String| {
        store.update(|s| {
            if s.delete_tag(&id) {
                log::trace!("store at revision {}", s.revision());
            }
        });
    });

    view! {
        <main class="app-layout">
            <NoteList
                available_tags=available_tags
                notes=notes
                update_tag=update_tag
                delete_tag=delete_tag
                routes=settings.routes
            />
        </main>
    }
}

#[component]
pub fn NoteList(
    #[prop(into)] available_tags: Signal<Vec<Tag>>,
    #[prop(into)] notes: Signal<Vec<Note>>,
    update_tag: Callback<(String, String)>,
    delete_tag: Callback<String>,
    routes: Routes,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (selected, set_selected) = signal(TagSelection::default());
    let (edit_tags_open, set_edit_tags_open) = signal(false);

    let filtered_notes = filtered_notes_memo(title.into(), selected.into(), notes);

    let toggle_tag = Callback::new(move |tag: Tag| {
        set_selected.update(|selection| {
            selection.toggle(&tag);
        });
    });

    let clear_tags = Callback::new(move |_: ()| set_selected.update(TagSelection::clear));

    let new_note_href = routes.new_note.clone();

    view! {
        <header class="list-header">
            <h1>"Notes"</h1>
            <div class="list-actions">
                <a class="btn btn-primary" href=new_note_href>"Create"</a>
                <button class="btn btn-outline" on:click=move |_| set_edit_tags_open.set(true)>
                    "Edit Tags"
                </button>
            </div>
        </header>
        <form class="list-filters" on:submit=|ev| ev.prevent_default()>
            <div class="filter-group">
                <label for="title">"Title"</label>
                <input
                    id="title"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div class="filter-group">
                <span class="filter-label">"Tags"</span>
                <TagFilter
                    available_tags=available_tags
                    selected=selected
                    on_toggle=toggle_tag
                    on_clear=clear_tags
                />
            </div>
        </form>
        <div class="note-grid">
            {move || {
                filtered_notes
                    .get()
                    .into_iter()
                    .map(|note| {
                        let href = routes.note_href(&note.id);
                        view! { <NoteCard note=note href=href /> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
        <Show when=move || filtered_notes.with(Vec::is_empty)>
            <p class="empty-list">"No notes match."</p>
        </Show>
        <EditTagsModal
            available_tags=available_tags
            show=edit_tags_open
            on_close=Callback::new(move |_: ()| set_edit_tags_open.set(false))
            update_tag=update_tag
            delete_tag=delete_tag
        />
    }
}

#[component]
fn TagFilter(
    #[prop(into)] available_tags: Signal<Vec<Tag>>,
    #[prop(into)] selected: Signal<TagSelection>,
    on_toggle: Callback<Tag>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="tag-filter">
            <Show when=move || !selected.with(TagSelection::is_empty)>
                <button type="button" class="btn-link" on:click=move |_| on_clear.run(())>
                    "Clear"
                </button>
            </Show>
            {move || {
                available_tags
                    .get()
                    .into_iter()
                    .map(|tag| {
                        let id = tag.id.clone();
                        let label = tag.label.clone();
                        view! {
                            <label class="tag-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected.with(|s| s.contains(&id))
                                    on:change=move |_| on_toggle.run(tag.clone())
                                />
                                {label}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn NoteCard(note: Note, href: String) -> impl IntoView {
    let has_tags = !note.tags.is_empty();
    view! {
        <a class="note-card" href=href>
            <span class="note-card-title">{note.title}</span>
            {has_tags
                .then(|| {
                    view! {
                        <div class="note-card-tags">
                            {note
                                .tags
                                .into_iter()
                                .map(|tag| view! { <span class="badge">{tag.label}</span> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })}
        </a>
    }
}

#[component]
pub fn EditTagsModal(
    #[prop(into)] available_tags: Signal<Vec<Tag>>,
    #[prop(into)] show: Signal<bool>,
    on_close: Callback<()>,
    update_tag: Callback<(String, String)>,
    delete_tag: Callback<String>,
) -> impl IntoView {
    let editor = TagEditor::new(
        move |id: &str, label: &str| update_tag.run((id.to_string(), label.to_string())),
        move |id: &str| delete_tag.run(id.to_string()),
    );

    // Rows are keyed by id; the label is read live so typing keeps focus.
    let label_of = move |id: &str| {
        available_tags.with(|tags| {
            editor
                .rows(tags)
                .find(|row| row.id == id)
                .map(|row| row.label.to_string())
                .unwrap_or_default()
        })
    };
    let row_ids = move || {
        available_tags.with(|tags| {
            editor
                .rows(tags)
                .map(|row| row.id.to_string())
                .collect::<Vec<_>>()
        })
    };

    let escape_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if is_dismiss_key(&ev.key(), show.get_untracked()) {
            on_close.run(());
        }
    });
    on_cleanup(move || escape_handle.remove());

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Edit Tags"</h2>
                        <button class="btn-close" title="Close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">
                        <For
                            each=row_ids
                            key=|id| id.clone()
                            children=move |id: String| {
                                let value_id = id.clone();
                                let rename_id = id.clone();
                                view! {
                                    <div class="tag-row">
                                        <input
                                            type="text"
                                            prop:value=move || label_of(&value_id)
                                            on:input=move |ev| {
                                                editor.rename(&rename_id, &event_target_value(&ev))
                                            }
                                        />
                                        <button
                                            class="btn btn-outline-danger"
                                            on:click=move |_| editor.delete(&id)
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </div>
        </Show>
    }
}
