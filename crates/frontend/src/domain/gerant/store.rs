use contracts::domain::gerant::{CreateGerantDto, Gerant, UpdateGerantDto};
use leptos::prelude::*;

use super::model;

#[derive(Clone, Copy)]
pub struct GerantStore {
    pub items: RwSignal<Vec<Gerant>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl GerantStore {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self) {
        let store = *self;
        store.is_loading.set(true);
        store.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_list().await {
                Ok(items) => store.items.set(items),
                Err(e) => store.error.set(Some(e)),
            }
            store.is_loading.set(false);
        });
    }

    pub fn create(&self, dto: CreateGerantDto) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::create(&dto).await {
                Ok(gerant) => store.items.update(|items| items.push(gerant)),
                Err(e) => store.error.set(Some(e)),
            }
        });
    }

    pub fn update(&self, id: i32, dto: UpdateGerantDto) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::update(id, &dto).await {
                Ok(gerant) => store.items.update(|items| {
                    if let Some(pos) = items.iter().position(|g| g.id == id) {
                        items[pos] = gerant;
                    }
                }),
                Err(e) => store.error.set(Some(e)),
            }
        });
    }

    pub fn delete(&self, id: i32) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::delete(id).await {
                Ok(()) => store.items.update(|items| items.retain(|g| g.id != id)),
                Err(e) => store.error.set(Some(e)),
            }
        });
    }
}

impl Default for GerantStore {
    fn default() -> Self {
        Self::new()
    }
}
