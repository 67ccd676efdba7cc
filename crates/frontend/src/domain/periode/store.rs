use contracts::domain::periode::{
    GeneratePeriodesRequest, Periode, PeriodeStatut, UpdatePeriodeDto,
};
use leptos::prelude::*;

use super::model;

#[derive(Clone, Copy)]
pub struct PeriodeStore {
    pub gerant_id: RwSignal<Option<i32>>,
    pub items: RwSignal<Vec<Periode>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl PeriodeStore {
    pub fn new() -> Self {
        Self {
            gerant_id: RwSignal::new(None),
            items: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn load(
        &self,
        gerant_id: i32,
        annee: Option<i32>,
        mois: Option<u32>,
        statut: Option<PeriodeStatut>,
    ) {
        let store = *self;
        store.gerant_id.set(Some(gerant_id));
        store.is_loading.set(true);
        store.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_list(gerant_id, annee, mois, statut).await {
                Ok(items) => store.items.set(items),
                Err(e) => store.error.set(Some(e)),
            }
            store.is_loading.set(false);
        });
    }

    pub fn update(&self, gerant_id: i32, id: i32, dto: UpdatePeriodeDto) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::update(gerant_id, id, &dto).await {
                Ok(item) => store.items.update(|items| {
                    if let Some(pos) = items.iter().position(|p| p.id == id) {
                        items[pos] = item;
                    }
                }),
                Err(e) => store.error.set(Some(e)),
            }
        });
    }

    pub fn generate(&self, gerant_id: i32, request: GeneratePeriodesRequest) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::generate(gerant_id, &request).await {
                Ok(created) => store.items.update(|items| items.extend(created)),
                Err(e) => store.error.set(Some(e)),
            }
        });
    }
}

impl Default for PeriodeStore {
    fn default() -> Self {
        Self::new()
    }
}
