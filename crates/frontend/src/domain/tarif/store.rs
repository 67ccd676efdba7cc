use contracts::domain::tarif::{CreateTarifDto, Tarif, UpdateTarifDto};
use leptos::prelude::*;

use super::model;

#[derive(Clone, Copy)]
pub struct TarifStore {
    pub gerant_id: RwSignal<Option<i32>>,
    pub items: RwSignal<Vec<Tarif>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl TarifStore {
    pub fn new() -> Self {
        Self {
            gerant_id: RwSignal::new(None),
            items: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self, gerant_id: i32, actif: Option<bool>) {
        let store = *self;
        store.gerant_id.set(Some(gerant_id));
        store.is_loading.set(true);
        store.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_list(gerant_id, actif).await {
                Ok(items) => store.items.set(items),
                Err(e) => store.error.set(Some(e)),
            }
            store.is_loading.set(false);
        });
    }

    pub fn create(&self, gerant_id: i32, dto: CreateTarifDto) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::create(gerant_id, &dto).await {
                Ok(item) => store.items.update(|items| items.push(item)),
                Err(e) => store.error.set(Some(e)),
            }
        });
    }

    pub fn update(&self, gerant_id: i32, id: i32, dto: UpdateTarifDto) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::update(gerant_id, id, &dto).await {
                Ok(item) => store.items.update(|items| {
                    if let Some(pos) = items.iter().position(|t| t.id == id) {
                        items[pos] = item;
                    }
                }),
                Err(e) => store.error.set(Some(e)),
            }
        });
    }

    pub fn delete(&self, gerant_id: i32, id: i32) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::delete(gerant_id, id).await {
                Ok(()) => store.items.update(|items| items.retain(|t| t.id != id)),
                Err(e) => store.error.set(Some(e)),
            }
        });
    }
}

impl Default for TarifStore {
    fn default() -> Self {
        Self::new()
    }
}
