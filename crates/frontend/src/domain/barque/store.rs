//! Store des barques avec mises à jour optimistes.
//!
//! Les mutations sont appliquées à la liste avant la réponse du serveur, un
//! instantané permettant de revenir en arrière en cas d'échec. Deux actions
//! qui se chevauchent suivent la règle "dernière réponse gagne" : c'est un
//! comportement assumé, pas corrigé ici.

use std::collections::{HashMap, HashSet};

use contracts::domain::barque::{Barque, CreateBarqueDto, UpdateBarqueDto};
use leptos::prelude::*;

use super::model;

#[derive(Clone, Copy)]
pub struct BarqueStore {
    pub items: RwSignal<Vec<Barque>>,
    pub total: RwSignal<u64>,
    pub total_pages: RwSignal<u64>,
    pub current_page: RwSignal<u64>,
    pub search: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Instantanés pré-mutation, indexés par id de barque.
    pub optimistic_updates: RwSignal<HashMap<i32, Barque>>,
    /// Ids dont la suppression est partie au serveur mais pas confirmée.
    pub pending_deletes: RwSignal<HashSet<i32>>,
}

/// Applique un patch partiel sur une barque. Le gérant ne change que si un
/// `gerant_id` est fourni (et dans ce cas il est invalidé, le serveur
/// renverra la version résolue).
pub(crate) fn apply_patch(barque: &Barque, dto: &UpdateBarqueDto) -> Barque {
    let mut next = barque.clone();
    if let Some(nom) = &dto.nom {
        next.nom = nom.clone();
    }
    if let Some(immatriculation) = &dto.immatriculation {
        next.immatriculation = immatriculation.clone();
    }
    if let Some(port) = &dto.port_attache {
        next.port_attache = port.clone();
    }
    if let Some(affiliation) = &dto.affiliation {
        next.affiliation = affiliation.clone();
    }
    if let Some(statut) = dto.statut {
        next.statut = statut;
    }
    if dto.gerant_id.is_some() {
        next.gerant = None;
    }
    next
}

/// Remplace l'élément dans la liste et renvoie l'instantané d'origine.
pub(crate) fn apply_optimistic_update(
    items: &mut Vec<Barque>,
    id: i32,
    dto: &UpdateBarqueDto,
) -> Option<Barque> {
    let pos = items.iter().position(|b| b.id == id)?;
    let snapshot = items[pos].clone();
    items[pos] = apply_patch(&snapshot, dto);
    Some(snapshot)
}

/// Restaure l'instantané pré-mutation (l'élément a pu disparaître entre
/// temps, auquel cas il est réinséré en tête).
pub(crate) fn revert_optimistic_update(items: &mut Vec<Barque>, snapshot: Barque) {
    match items.iter().position(|b| b.id == snapshot.id) {
        Some(pos) => items[pos] = snapshot,
        None => items.insert(0, snapshot),
    }
}

/// Retire l'élément et renvoie sa position et sa valeur pour restauration.
pub(crate) fn apply_optimistic_delete(items: &mut Vec<Barque>, id: i32) -> Option<(usize, Barque)> {
    let pos = items.iter().position(|b| b.id == id)?;
    Some((pos, items.remove(pos)))
}

pub(crate) fn revert_optimistic_delete(items: &mut Vec<Barque>, pos: usize, barque: Barque) {
    let pos = pos.min(items.len());
    items.insert(pos, barque);
}

impl BarqueStore {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            total_pages: RwSignal::new(0),
            current_page: RwSignal::new(1),
            search: RwSignal::new(String::new()),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            optimistic_updates: RwSignal::new(HashMap::new()),
            pending_deletes: RwSignal::new(HashSet::new()),
        }
    }

    pub fn load_page(&self, page: u64) {
        let store = *self;
        store.is_loading.set(true);
        store.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let search = store.search.get_untracked();
            match model::fetch_list(page, 10, &search).await {
                Ok(result) => {
                    store.items.set(result.items);
                    store.total.set(result.total);
                    store.total_pages.set(result.total_pages);
                    store.current_page.set(result.current_page);
                }
                Err(e) => store.error.set(Some(e)),
            }
            store.is_loading.set(false);
        });
    }

    pub fn reload(&self) {
        self.load_page(self.current_page.get_untracked());
    }

    pub fn create(&self, dto: CreateBarqueDto) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::create(&dto).await {
                Ok(_) => store.reload(),
                Err(e) => store.error.set(Some(e)),
            }
        });
    }

    /// Mise à jour optimiste : la liste change tout de suite, retour à
    /// l'instantané si le serveur refuse.
    pub fn update(&self, id: i32, dto: UpdateBarqueDto) {
        let store = *self;
        let snapshot = store
            .items
            .try_update(|items| apply_optimistic_update(items, id, &dto))
            .flatten();
        let Some(snapshot) = snapshot else {
            return;
        };
        store
            .optimistic_updates
            .update(|m| drop(m.insert(id, snapshot.clone())));

        wasm_bindgen_futures::spawn_local(async move {
            match model::update(id, &dto).await {
                Ok(confirmed) => {
                    store.items.update(|items| {
                        if let Some(pos) = items.iter().position(|b| b.id == id) {
                            items[pos] = confirmed;
                        }
                    });
                }
                Err(e) => {
                    store
                        .items
                        .update(|items| revert_optimistic_update(items, snapshot));
                    store.error.set(Some(e));
                }
            }
            store.optimistic_updates.update(|m| drop(m.remove(&id)));
        });
    }

    /// Suppression optimiste, même principe.
    pub fn delete(&self, id: i32) {
        let store = *self;
        let removed = store
            .items
            .try_update(|items| apply_optimistic_delete(items, id))
            .flatten();
        let Some((pos, barque)) = removed else {
            return;
        };
        store.pending_deletes.update(|s| drop(s.insert(id)));

        wasm_bindgen_futures::spawn_local(async move {
            match model::delete(id).await {
                Ok(()) => store.reload(),
                Err(e) => {
                    store
                        .items
                        .update(|items| revert_optimistic_delete(items, pos, barque));
                    store.error.set(Some(e));
                }
            }
            store.pending_deletes.update(|s| drop(s.remove(&id)));
        });
    }
}

impl Default for BarqueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::barque::BarqueStatut;

    fn barque(id: i32, nom: &str) -> Barque {
        let now = chrono::Utc::now();
        Barque {
            id,
            nom: nom.to_string(),
            immatriculation: format!("10/1-200{}", id),
            port_attache: "10/1".to_string(),
            affiliation: String::new(),
            statut: BarqueStatut::Actif,
            gerant: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_apply_patch_only_present_fields() {
        let b = barque(1, "Al Amal");
        let dto = UpdateBarqueDto {
            nom: Some("El Bahr".to_string()),
            ..Default::default()
        };
        let patched = apply_patch(&b, &dto);
        assert_eq!(patched.nom, "El Bahr");
        assert_eq!(patched.immatriculation, b.immatriculation);
        assert_eq!(patched.statut, b.statut);
    }

    #[test]
    fn test_optimistic_update_then_revert_restores_value() {
        let mut items = vec![barque(1, "Al Amal"), barque(2, "El Bahr")];
        let original = items.clone();
        let dto = UpdateBarqueDto {
            statut: Some(BarqueStatut::Suspendu),
            ..Default::default()
        };

        let snapshot = apply_optimistic_update(&mut items, 2, &dto).unwrap();
        assert_eq!(items[1].statut, BarqueStatut::Suspendu);

        revert_optimistic_update(&mut items, snapshot);
        assert_eq!(items, original);
    }

    #[test]
    fn test_optimistic_update_unknown_id_is_noop() {
        let mut items = vec![barque(1, "Al Amal")];
        let dto = UpdateBarqueDto::default();
        assert!(apply_optimistic_update(&mut items, 99, &dto).is_none());
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_optimistic_delete_then_revert_restores_position() {
        let mut items = vec![barque(1, "A"), barque(2, "B"), barque(3, "C")];
        let original = items.clone();

        let (pos, removed) = apply_optimistic_delete(&mut items, 2).unwrap();
        assert_eq!(pos, 1);
        assert_eq!(items.len(), 2);

        revert_optimistic_delete(&mut items, pos, removed);
        assert_eq!(items, original);
    }

    #[test]
    fn test_revert_delete_clamps_position() {
        let mut items = vec![barque(1, "A")];
        // La liste a rétréci entre temps : la position est bornée
        revert_optimistic_delete(&mut items, 5, barque(2, "B"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, 2);
    }
}
