//! Build script for the developer applications CLI.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory, next to the `.env` file the client loads at startup.

use std::{env, fs, io, path::PathBuf};

fn copy_template(template: &PathBuf, target_dir: &PathBuf) -> io::Result<()> {
    fs::create_dir_all(target_dir)?;
    let contents = fs::read_to_string(template)?;
    fs::write(target_dir.join(".env.example"), contents)
}

/// Copies `.env.example` from the crate root to `<data_local_dir>/devapps/`.
///
/// The template is a convenience only: a missing template or an unwritable
/// data directory produce cargo warnings, never a failed build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");
    if !template.is_file() {
        println!("cargo:warning=.env.example not found at {}", template.display());
        return Ok(());
    }

    let mut target_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    target_dir.push("devapps");

    if let Err(e) = copy_template(&template, &target_dir) {
        println!(
            "cargo:warning=cannot copy .env.example to {}: {}",
            target_dir.display(),
            e
        );
    }

    Ok(())
}
