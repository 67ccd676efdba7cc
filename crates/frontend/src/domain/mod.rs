pub mod barque;
pub mod gerant;
pub mod paiement;
pub mod periode;
pub mod responsable;
pub mod tarif;
