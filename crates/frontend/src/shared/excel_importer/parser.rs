//! Lecture d'un fichier Excel côté navigateur.
//!
//! Le décodage du classeur est délégué à SheetJS (chargé dans index.html) ;
//! ici on ne fait que transporter les octets vers JS et ramener la première
//! feuille sous forme de grille `Vec<Vec<String>>`. C'est `import.rs` qui
//! donne un sens aux colonnes.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// `parseExcelFile(bytes)` côté JS : renvoie la première feuille en
    /// tableau de lignes, chaque ligne étant un tableau de cellules.
    #[wasm_bindgen(js_name = parseExcelFile, catch)]
    pub fn parse_excel_file(data: &[u8]) -> Result<JsValue, JsValue>;
}

/// Lit un `File` du DOM et renvoie la grille brute de la première feuille.
pub async fn read_excel_from_file(file: web_sys::File) -> Result<Vec<Vec<String>>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Lecture du fichier impossible : {e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let sheet =
        parse_excel_file(&bytes).map_err(|e| format!("Fichier Excel illisible : {e:?}"))?;
    grid_from_js(sheet)
}

fn grid_from_js(sheet: JsValue) -> Result<Vec<Vec<String>>, String> {
    let rows: js_sys::Array = sheet
        .dyn_into()
        .map_err(|_| "Le parseur n'a pas renvoyé un tableau de lignes".to_string())?;

    let mut grid = Vec::with_capacity(rows.length() as usize);
    for row in rows.iter() {
        match row.dyn_into::<js_sys::Array>() {
            Ok(cells) => grid.push(cells.iter().map(|cell| cell_to_string(&cell)).collect()),
            Err(other) => log::warn!("Ligne non tabulaire ignorée : {other:?}"),
        }
    }
    Ok(grid)
}

/// Aplatit une cellule SheetJS en texte. Les immatriculations et ports sont
/// parfois saisis en numérique dans les fichiers de la coopérative : un
/// Number entier ne doit pas ressortir en `12.0`.
fn cell_to_string(cell: &JsValue) -> String {
    if let Some(s) = cell.as_string() {
        return s;
    }
    if let Some(n) = cell.as_f64() {
        return if n.fract() == 0.0 && n.abs() < 9.0e15 {
            (n as i64).to_string()
        } else {
            n.to_string()
        };
    }
    if let Some(b) = cell.as_bool() {
        return b.to_string();
    }
    // null / undefined / objets : cellule vide.
    String::new()
}
