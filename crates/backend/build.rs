use std::env;
use std::fs;
use std::path::Path;

/// Places the workspace `config.toml` next to the built binary so that
/// `shared::config::load_config` finds it at runtime.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");

    // OUT_DIR is target/<profile>/build/backend-<hash>/out
    let Some(target_dir) = Path::new(&out_dir).ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=target/{} not found, config.toml not copied", profile);
        return;
    };

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("backend lives in <workspace>/crates/backend");
    let source = workspace_root.join("config.toml");

    if source.exists() {
        let dest = target_dir.join("config.toml");
        fs::copy(&source, &dest).unwrap_or_else(|e| panic!("copy config.toml: {}", e));
    } else {
        println!("cargo:warning=no config.toml at {:?}, the embedded default applies", source);
    }
}
