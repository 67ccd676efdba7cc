use contracts::domain::barque::ImportResult;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::domain::barque::import;
use crate::domain::barque::store::BarqueStore;

/// Bouton d'import Excel : sélection du fichier, envoi du lot, affichage du
/// compte rendu (importées / ignorées / erreurs par ligne).
#[component]
pub fn BarqueImportWidget() -> impl IntoView {
    let store = use_context::<BarqueStore>().expect("BarqueStore context not found");

    let (is_importing, set_is_importing) = signal(false);
    let (result, set_result) = signal(Option::<ImportResult>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Permet de resélectionner le même fichier
        input.set_value("");

        set_is_importing.set(true);
        set_result.set(None);
        set_error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match import::import_file(file).await {
                Ok(outcome) => {
                    if outcome.success {
                        store.load_page(1);
                    }
                    set_result.set(Some(outcome));
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_importing.set(false);
        });
    };

    view! {
        <div class="import-widget">
            <label class="import-button">
                {move || {
                    if is_importing.get() { "Import en cours..." } else { "Importer un fichier Excel" }
                }}
                <input
                    type="file"
                    accept=".xlsx,.xls"
                    style="display: none"
                    disabled=move || is_importing.get()
                    on:change=on_file_change
                />
            </label>

            {move || error.get().map(|e| view! { <p class="error">{e}</p> })}

            {move || {
                result
                    .get()
                    .map(|r| {
                        let summary = format!(
                            "{} lignes : {} importées, {} ignorées (doublons)",
                            r.total, r.imported, r.skipped,
                        );
                        let errors = r.errors;
                        let has_errors = !errors.is_empty();
                        view! {
                            <div class="import-result">
                                <p>{summary}</p>
                                <Show when=move || has_errors>
                                    <ul class="import-errors">
                                        <For
                                            each={
                                                let errors = errors.clone();
                                                move || errors.clone()
                                            }
                                            key=|e| (e.line, e.immatriculation.clone(), e.message.clone())
                                            children=|e| {
                                                let line = e
                                                    .line
                                                    .map(|l| format!("ligne {} : ", l))
                                                    .unwrap_or_default();
                                                view! { <li>{format!("{}{}", line, e.message)}</li> }
                                            }
                                        />
                                    </ul>
                                </Show>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
