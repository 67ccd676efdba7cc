use serde::{Deserialize, Serialize};

use crate::domain::gerant::GerantResume;

/// Statut d'une barque. Les valeurs sérialisées correspondent aux valeurs
/// stockées en base (`actif`, `inactif`, `en_maintenance`, `suspendu`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarqueStatut {
    Actif,
    Inactif,
    EnMaintenance,
    Suspendu,
}

impl BarqueStatut {
    pub const ALL: [BarqueStatut; 4] = [
        BarqueStatut::Actif,
        BarqueStatut::Inactif,
        BarqueStatut::EnMaintenance,
        BarqueStatut::Suspendu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BarqueStatut::Actif => "actif",
            BarqueStatut::Inactif => "inactif",
            BarqueStatut::EnMaintenance => "en_maintenance",
            BarqueStatut::Suspendu => "suspendu",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Enregistrement d'une barque tel que renvoyé par l'API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barque {
    pub id: i32,
    pub nom: String,
    pub immatriculation: String,
    #[serde(rename = "portAttache")]
    pub port_attache: String,
    pub affiliation: String,
    pub statut: BarqueStatut,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gerant: Option<GerantResume>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// DTO de création. C'est aussi la forme attendue par l'import en masse :
/// un tableau JSON de `CreateBarqueDto` est posté sur `/api/barques/bulk`.
///
/// `statut` est optionnel ; le défaut diffère selon le chemin (création
/// unitaire : `inactif`, import : `actif`), il est donc résolu côté serveur.
///
/// Les champs texte tolèrent l'absence de clé : une clé manquante devient
/// une chaîne vide et c'est la validation qui la signale, ligne par ligne,
/// au lieu d'un rejet du tableau entier à la désérialisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBarqueDto {
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub immatriculation: String,
    #[serde(rename = "portAttache", default)]
    pub port_attache: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statut: Option<BarqueStatut>,
    #[serde(rename = "gerantId", skip_serializing_if = "Option::is_none")]
    pub gerant_id: Option<i32>,
}

/// DTO de mise à jour partielle : seuls les champs présents sont modifiés.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBarqueDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immatriculation: Option<String>,
    #[serde(rename = "portAttache", skip_serializing_if = "Option::is_none")]
    pub port_attache: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statut: Option<BarqueStatut>,
    #[serde(rename = "gerantId", skip_serializing_if = "Option::is_none")]
    pub gerant_id: Option<i32>,
}

/// Erreur rattachée à un enregistrement lors d'un import en masse.
/// `line` est numérotée à partir de 1 (ordre du tableau soumis).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immatriculation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ImportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            immatriculation: None,
            line: None,
            field: None,
            code: None,
        }
    }
}

/// Résultat agrégé d'un import en masse. Jamais persisté : renvoyé une fois
/// par appel. `success` n'est vrai que si `errors` est vide ; les doublons
/// détectés avant insertion comptent dans `skipped`, pas dans `errors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResult {
    pub success: bool,
    pub total: usize,
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<ImportError>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statut_round_trip() {
        for statut in BarqueStatut::ALL {
            assert_eq!(BarqueStatut::parse(statut.as_str()), Some(statut));
        }
        assert_eq!(BarqueStatut::parse("coulee"), None);
    }

    #[test]
    fn statut_serialise_en_snake_case() {
        let json = serde_json::to_string(&BarqueStatut::EnMaintenance).unwrap();
        assert_eq!(json, "\"en_maintenance\"");
    }

    #[test]
    fn create_dto_accepte_affiliation_absente() {
        let dto: CreateBarqueDto = serde_json::from_str(
            r#"{"nom":"Ma Barque","immatriculation":"12/3-4567","portAttache":"12/3","statut":"actif"}"#,
        )
        .unwrap();
        assert_eq!(dto.affiliation, "");
        assert_eq!(dto.statut, Some(BarqueStatut::Actif));
        assert!(dto.gerant_id.is_none());
    }

    #[test]
    fn create_dto_accepte_cles_requises_absentes() {
        // Un tableau d'import peut contenir des lignes incomplètes : la
        // désérialisation passe, la validation signale la ligne ensuite.
        let lot: Vec<CreateBarqueDto> = serde_json::from_str(
            r#"[{"immatriculation":"12/3","portAttache":"10/1","affiliation":"Coop"}]"#,
        )
        .unwrap();
        assert_eq!(lot[0].nom, "");
        assert_eq!(lot[0].immatriculation, "12/3");
    }

    #[test]
    fn create_dto_accepte_statut_absent() {
        let dto: CreateBarqueDto = serde_json::from_str(
            r#"{"nom":"Ma Barque","immatriculation":"12/3-4567","portAttache":"12/3"}"#,
        )
        .unwrap();
        assert_eq!(dto.statut, None);
    }
}
