use leptos::prelude::*;

use crate::domain::barque::store::BarqueStore;
use crate::domain::barque::ui::list::BarqueListPage;
use crate::domain::gerant::store::GerantStore;
use crate::domain::gerant::ui::list::GerantListPage;
use crate::domain::paiement::store::PaiementStore;
use crate::domain::periode::store::PeriodeStore;
use crate::domain::responsable::store::ResponsableStore;
use crate::domain::tarif::store::TarifStore;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Barques,
    Gerants,
}

#[component]
pub fn App() -> impl IntoView {
    // Les stores sont fournis à toute l'application via le contexte,
    // aucun singleton global.
    provide_context(BarqueStore::new());
    provide_context(GerantStore::new());
    provide_context(ResponsableStore::new());
    provide_context(TarifStore::new());
    provide_context(PeriodeStore::new());
    provide_context(PaiementStore::new());

    let active_tab = RwSignal::new(Tab::Barques);

    view! {
        <header>
            <h1>"GestMarine"</h1>
            <nav>
                <button
                    class:active=move || active_tab.get() == Tab::Barques
                    on:click=move |_| active_tab.set(Tab::Barques)
                >
                    "Barques"
                </button>
                <button
                    class:active=move || active_tab.get() == Tab::Gerants
                    on:click=move |_| active_tab.set(Tab::Gerants)
                >
                    "Gérants"
                </button>
            </nav>
        </header>
        <main>
            {move || match active_tab.get() {
                Tab::Barques => view! { <BarqueListPage /> }.into_any(),
                Tab::Gerants => view! { <GerantListPage /> }.into_any(),
            }}
        </main>
    }
}
