use std::fs;
use std::path::{Path, PathBuf};

use rawgen::{Config, Generator, Outcome};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fixtures = Path::new("fixtures");
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    println!("cargo:rerun-if-changed={}", fixtures.display());

    let generator = Generator::new(Config::default())?;

    for entry in fs::read_dir(fixtures)? {
        let source = entry?.path();
        println!("cargo:rerun-if-changed={}", source.display());

        let Some(name) = source.file_name() else {
            continue;
        };
        let target = out_dir.join(name);
        fs::copy(&source, &target)?;

        generator.process(&target)?;
        // A second pass over our own output must be a no-op.
        if generator.process(&target)? != Outcome::Unchanged {
            return Err(format!("regeneration is not idempotent: {}", target.display()).into());
        }
    }

    Ok(())
}
