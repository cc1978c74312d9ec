use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Write generated modules to the given output directory.
///
/// Module names may contain `/`; missing directories are created.
pub fn write_modules(output_dir: &Path, modules: &HashMap<String, String>) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let mut names: Vec<_> = modules.keys().collect();
    names.sort();

    for filename in names {
        let path = output_dir.join(filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        fs::write(&path, &modules[filename])
            .with_context(|| format!("writing generated file {}", path.display()))?;
    }

    Ok(())
}
