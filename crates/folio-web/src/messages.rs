//! Visitor-facing texts (French locale).

pub const ALL_CATEGORIES: &str = "Toutes";

pub const REQUIRED_FIELDS: &str = "Tous les champs sont requis.";
pub const MESSAGE_SENT: &str = "Message envoyé avec succès !";
pub const PERSIST_FAILED: &str = "Erreur lors de l'enregistrement dans Strapi";
pub const GENERIC_ERROR: &str = "Une erreur est survenue.";
