use leptos::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen::JsCast;

use crate::domain::barque::store::BarqueStore;
use crate::domain::barque::ui::import_widget::BarqueImportWidget;

/// Liste paginée des barques, avec recherche débouncée et import Excel.
#[component]
pub fn BarqueListPage() -> impl IntoView {
    let store = use_context::<BarqueStore>().expect("BarqueStore context not found");

    // Premier chargement
    store.load_page(1);

    // Débounce de la recherche : chaque frappe incrémente le jeton, seule la
    // dernière tâche encore valide déclenche le rechargement.
    let search_token = RwSignal::new(0u32);
    let on_search_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        store.search.set(input.value());
        let token = search_token.get_untracked() + 1;
        search_token.set(token);
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(300).await;
            if search_token.get_untracked() == token {
                store.load_page(1);
            }
        });
    };

    let prev_page = move |_| {
        let page = store.current_page.get_untracked();
        if page > 1 {
            store.load_page(page - 1);
        }
    };
    let next_page = move |_| {
        let page = store.current_page.get_untracked();
        if page < store.total_pages.get_untracked() {
            store.load_page(page + 1);
        }
    };

    view! {
        <div class="barque-list-page">
            <h2>"Barques"</h2>

            <div class="toolbar">
                <input
                    type="text"
                    placeholder="Rechercher (nom, immatriculation, port, affiliation)"
                    prop:value=move || store.search.get()
                    on:input=on_search_input
                />
                <BarqueImportWidget />
            </div>

            {move || {
                store
                    .error
                    .get()
                    .map(|e| view! { <p class="error">{e}</p> })
            }}

            <Show
                when=move || !store.is_loading.get()
                fallback=|| view! { <p>"Chargement..."</p> }
            >
                <table>
                    <thead>
                        <tr>
                            <th>"Nom"</th>
                            <th>"Immatriculation"</th>
                            <th>"Port d'attache"</th>
                            <th>"Affiliation"</th>
                            <th>"Statut"</th>
                            <th>"Gérant"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.items.get()
                            key=|barque| barque.id
                            children=move |barque| {
                                let id = barque.id;
                                let gerant_label = barque
                                    .gerant
                                    .as_ref()
                                    .map(|g| format!("{} {}", g.prenom, g.nom))
                                    .unwrap_or_else(|| "—".to_string());
                                view! {
                                    <tr>
                                        <td>{barque.nom.clone()}</td>
                                        <td>{barque.immatriculation.clone()}</td>
                                        <td>{barque.port_attache.clone()}</td>
                                        <td>{barque.affiliation.clone()}</td>
                                        <td>{barque.statut.as_str()}</td>
                                        <td>{gerant_label}</td>
                                        <td>
                                            <button on:click=move |_| store.delete(id)>
                                                "Supprimer"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <div class="pagination">
                <button on:click=prev_page disabled=move || store.current_page.get() <= 1>
                    "Précédent"
                </button>
                <span>
                    {move || {
                        format!(
                            "Page {} / {} ({} barques)",
                            store.current_page.get(),
                            store.total_pages.get().max(1),
                            store.total.get(),
                        )
                    }}
                </span>
                <button
                    on:click=next_page
                    disabled=move || store.current_page.get() >= store.total_pages.get()
                >
                    "Suivant"
                </button>
            </div>
        </div>
    }
}
