use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory the backend binary is written to (`target/<profile>`).
/// `OUT_DIR` looks like `target/<profile>/build/backend-<hash>/out`.
fn binary_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR")?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|dir| dir.ends_with(&profile))
        .map(Path::to_path_buf)
}

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let workspace_config = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !workspace_config.exists() {
        println!("cargo:warning=config.toml not found, the embedded default will be used");
        return;
    }

    let Some(target) = binary_dir().map(|dir| dir.join("config.toml")) else {
        println!("cargo:warning=cannot locate the target directory, config.toml not copied");
        return;
    };

    if let Err(e) = fs::copy(&workspace_config, &target) {
        panic!("failed to copy config.toml to {}: {}", target.display(), e);
    }
}
