//! Build script for the collabnet CLI.
//!
//! Copies the `.env.example` configuration template into the user's local data
//! directory so the file sits next to the `.env` that the binary reads at
//! startup.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root to `<data_local_dir>/collabnet/`.
///
/// # Destination Location
///
/// - Linux: `~/.local/share/collabnet/.env.example`
/// - macOS: `~/Library/Application Support/collabnet/.env.example`
/// - Windows: `%LOCALAPPDATA%/collabnet/.env.example`
///
/// A missing template or an unwritable data directory only produces a cargo
/// warning. The template is a convenience, the build never depends on it.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("collabnet");

    let copied = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::read_to_string(&env_example_path))
        .and_then(|contents| fs::write(out_dir.join(".env.example"), contents));

    if let Err(e) = copied {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
