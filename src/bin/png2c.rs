//! src/bin/png2c.rs — png2c : PNG -> en-tête C embarquable (façon XPM)
//!
//! Exemples :
//!   png2c icon.png
//!   png2c res/close.png res/open.png
//!   RUST_LOG=warn png2c icons/*.png
//!
//! Notes :
//! - Chaque entrée `<f>.png` produit `<f>.png.h` à côté (écrasé s'il existe).
//! - Un nom de base qui ne forme pas un identifiant C est signalé puis ignoré,
//!   la passe continue avec l'entrée suivante.
//! - La première erreur d'E/S (lecture ou écriture) interrompt la passe
//!   entière (fail-fast), code de sortie 1.
//! - Sans argument : usage + code de sortie non nul.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use log::{info, warn};

use png2c::{embed_file, Error};

#[derive(Parser, Debug)]
#[command(
    name = "png2c",
    version,
    about = "Embarque des PNG dans des en-têtes C (façon XPM)"
)]
struct Cli {
    /// Fichiers .png à convertir (chacun produit `<fichier>.h`)
    #[arg(required = true)]
    files: Vec<Utf8PathBuf>,
}

fn main() {
    if let Err(e) = real_main() {
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    color_eyre::install().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    for input in &cli.files {
        match embed_file(input) {
            Ok(art) => {
                info!("📝 {} -> {} ({} octets)", art.input, art.output, art.byte_count);
            }
            Err(Error::BadName(file_name)) => {
                warn!("⚠️  fichier ignoré (nom inadapté): {file_name}");
            }
            Err(e) => return Err(e).with_context(|| format!("échec sur {input}")),
        }
    }

    Ok(())
}
