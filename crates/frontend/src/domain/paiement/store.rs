use contracts::domain::paiement::{CreatePaiementDto, Paiement, PaiementSummary};
use leptos::prelude::*;

use super::model;

#[derive(Clone, Copy)]
pub struct PaiementStore {
    pub gerant_id: RwSignal<Option<i32>>,
    pub items: RwSignal<Vec<Paiement>>,
    pub summary: RwSignal<Option<PaiementSummary>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl PaiementStore {
    pub fn new() -> Self {
        Self {
            gerant_id: RwSignal::new(None),
            items: RwSignal::new(Vec::new()),
            summary: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self, gerant_id: i32) {
        let store = *self;
        store.gerant_id.set(Some(gerant_id));
        store.is_loading.set(true);
        store.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_list(gerant_id).await {
                Ok(items) => store.items.set(items),
                Err(e) => store.error.set(Some(e)),
            }
            store.is_loading.set(false);
        });
    }

    pub fn create(&self, gerant_id: i32, dto: CreatePaiementDto) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::create(gerant_id, &dto).await {
                Ok(item) => store.items.update(|items| items.insert(0, item)),
                Err(e) => store.error.set(Some(e)),
            }
        });
    }

    pub fn load_summary(&self, gerant_id: i32, annee: i32, mois: u32) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_summary(gerant_id, annee, mois).await {
                Ok(summary) => store.summary.set(Some(summary)),
                Err(e) => store.error.set(Some(e)),
            }
        });
    }
}

impl Default for PaiementStore {
    fn default() -> Self {
        Self::new()
    }
}
