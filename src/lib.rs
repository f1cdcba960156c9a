//! png2c — Embarque des PNG dans des en-têtes C (façon XPM)
//!
//! Chaque fichier `<nom>.png` dont le nom de base forme un identifiant C
//! devient `<nom>.png.h` : un tableau `static const unsigned char <nom>_png[]`
//! contenant les octets bruts du fichier, prêt à être compilé.
//!
//! ## Modules
//! - `name` : validation du nom de base (identifiant C + suffixe `.png`).
//! - `emit` : rendu texte du document (lignes hexadécimales, 8 octets max).
//!
//! ## API publique
//! - [`embed_file`] : valide, lit, rend et écrit `<chemin>.h`.
//! - [`header_path`] : chemin de sortie dérivé d'un chemin d'entrée.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use)]

pub mod emit;
pub mod name;

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Version du crate (lisible, via Cargo).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------- Erreurs & Résultat ----------

#[derive(Debug, Error)]
pub enum Error {
    /// Nom inadapté pour une constante C : l'entrée est à ignorer, pas à
    /// faire échouer la passe.
    #[error("nom inadapté pour une constante C: {0}")]
    BadName(String),

    /// Lecture du fichier d'entrée impossible.
    #[error("lecture de {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    /// Écriture de l'en-tête généré impossible.
    #[error("écriture de {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// ---------- Artefact ----------

/// Résumé d'une conversion réussie (pour les logs et les tests).
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Chemin d'entrée tel que fourni.
    pub input: Utf8PathBuf,
    /// Chemin de l'en-tête écrit (`<input>.h`).
    pub output: Utf8PathBuf,
    /// Nombre d'octets embarqués.
    pub byte_count: usize,
}

// ---------- API publique ----------

/// Chemin de sortie pour une entrée : le suffixe `.h` est ajouté tel quel
/// au chemin complet (`icon.png` → `icon.png.h`).
pub fn header_path(input: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{}{}", input, emit::HEADER_SUFFIX))
}

/// Embarque un fichier : valide le nom de base, lit les octets bruts, rend
/// le document et l'écrit dans `<chemin>.h` (écrasé s'il existe).
///
/// Un chemin sans nom de base (`dir/..`, `dir/`) est validé contre son texte
/// complet, qui ne peut pas correspondre au motif : l'entrée est signalée
/// comme [`Error::BadName`].
pub fn embed_file(input: &Utf8Path) -> Result<Artifact> {
    let file_name = input.file_name().unwrap_or_else(|| input.as_str());
    let ident =
        name::png_ident(file_name).ok_or_else(|| Error::BadName(file_name.to_string()))?;

    let bytes = fs::read(input).map_err(|source| Error::Read {
        path: input.to_owned(),
        source,
    })?;

    let text = emit::render_header(file_name, ident, &bytes);
    let output = header_path(input);
    fs::write(&output, text).map_err(|source| Error::Write {
        path: output.clone(),
        source,
    })?;

    Ok(Artifact {
        input: input.to_owned(),
        output,
        byte_count: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_path_appends_suffix() {
        assert_eq!(header_path(Utf8Path::new("icon.png")), "icon.png.h");
        assert_eq!(header_path(Utf8Path::new("res/a.b.PNG")), "res/a.b.PNG.h");
    }

    #[test]
    fn embed_rejects_bad_name_without_touching_fs() {
        // Le fichier n'existe pas : la validation doit couper avant la lecture.
        let err = embed_file(Utf8Path::new("9bad.png")).unwrap_err();
        match err {
            Error::BadName(n) => assert_eq!(n, "9bad.png"),
            other => panic!("attendu BadName, reçu {other:?}"),
        }
    }

    #[test]
    fn embed_reports_read_failure_with_path() {
        let err = embed_file(Utf8Path::new("absent.png")).unwrap_err();
        match err {
            Error::Read { path, .. } => assert_eq!(path, "absent.png"),
            other => panic!("attendu Read, reçu {other:?}"),
        }
    }
}
