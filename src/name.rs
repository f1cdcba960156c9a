//! name.rs — Validation des noms de fichiers PNG
//!
//! Un fichier n'est embarquable que si son nom de base peut servir de
//! constante C : première lettre, point ou underscore, puis lettres, points,
//! chiffres ou underscores, et le suffixe `.png` (casse libre) obligatoire.
//! Aucune autre validation (longueur, mots réservés) n'est faite.

use once_cell::sync::Lazy;
use regex::Regex;

/// Motif complet : groupe identifiant + suffixe `.png` insensible à la casse.
static PNG_IDENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z._][a-zA-Z._0-9]*)[.][pP][nN][gG]$").expect("motif png valide")
});

/// Extrait l'identifiant C d'un nom de base, suffixe `.png` retiré.
///
/// Renvoie `None` si le nom ne correspond pas au motif : l'appelant décide
/// alors d'ignorer l'entrée.
pub fn png_ident(file_name: &str) -> Option<&str> {
    PNG_IDENT
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
