use leptos::prelude::*;

use crate::domain::gerant::store::GerantStore;

/// Liste des gérants.
#[component]
pub fn GerantListPage() -> impl IntoView {
    let store = use_context::<GerantStore>().expect("GerantStore context not found");

    store.load();

    view! {
        <div class="gerant-list-page">
            <h2>"Gérants"</h2>

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
                            <th>"Prénom"</th>
                            <th>"CINE"</th>
                            <th>"Téléphone"</th>
                            <th>"Email"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.items.get()
                            key=|gerant| gerant.id
                            children=move |gerant| {
                                let id = gerant.id;
                                view! {
                                    <tr>
                                        <td>{gerant.nom.clone()}</td>
                                        <td>{gerant.prenom.clone()}</td>
                                        <td>{gerant.cine.clone()}</td>
                                        <td>{gerant.telephone.clone()}</td>
                                        <td>{gerant.email.clone()}</td>
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
        </div>
    }
}
