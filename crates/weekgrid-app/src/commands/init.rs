//! `weekgrid init`: write the commented default config.

use std::path::{Path, PathBuf};

use weekgrid_common::{Result, WeekgridError};
use weekgrid_config::toml_loader::{create_default_config, default_config_path};

pub(super) fn run(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };
    write_default(&path, force)?;
    println!("{}", path.display());
    Ok(())
}

pub(super) fn write_default(path: &Path, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        return Err(WeekgridError::Other(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    create_default_config(path)?;
    Ok(path.to_path_buf())
}
