//! emit.rs — Rendu du document en-tête C
//!
//! À partir du nom de base, de l'identifiant validé et des octets bruts,
//! produit le texte complet de `<fichier>.h` :
//!
//! ```text
//! /* icon.png - 4 bytes */
//! static const unsigned char icon_png[] = {
//!   0x00, 0x01, 0xfe, 0xff
//! };
//! /* End Of File */
//! ```
//!
//! Ce module ne touche pas au système de fichiers : il **rend** du texte.

use std::fmt::Write as _;

/// Nombre maximal d'octets par ligne de données.
pub const BYTES_PER_LINE: usize = 8;
/// Indentation des lignes de données.
pub const LINE_INDENT: &str = "  ";
/// Suffixe ajouté au chemin d'entrée pour former le chemin de sortie.
pub const HEADER_SUFFIX: &str = ".h";

/// Rend le document complet.
///
/// `file_name` est le nom de base avec son suffixe `.png` (repris dans le
/// commentaire de tête), `ident` le même nom suffixe retiré. Les octets sont
/// rendus en hexadécimal minuscule `0x??`, séparés par `", "` sur une même
/// ligne ; chaque fin de ligne qui n'est pas la fin de la séquence porte une
/// virgule nue. Une entrée vide produit un tableau sans ligne de données.
pub fn render_header(file_name: &str, ident: &str, bytes: &[u8]) -> String {
    // ~6 caractères par octet rendu, plus l'enrobage.
    let mut out = String::with_capacity(bytes.len() * 6 + 96);
    let _ = writeln!(out, "/* {} - {} bytes */", file_name, bytes.len());
    let _ = writeln!(out, "static const unsigned char {ident}_png[] = {{");

    let total = bytes.len();
    for (row_ix, row) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        out.push_str(LINE_INDENT);
        for (col_ix, byte) in row.iter().enumerate() {
            if col_ix > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "0x{byte:02x}");
        }
        // Virgule de continuation : la séquence se poursuit à la ligne suivante.
        if (row_ix + 1) * BYTES_PER_LINE < total {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("};\n/* End Of File */\n");
    out
}
