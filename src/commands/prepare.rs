//! Prepare command implementation
//!
//! The build is strictly ordered: base files, then flag-gated fragments,
//! then caller overrides, then the archive. Each stage depends on the full
//! completion of the one before it.

use crate::archive;
use crate::cli::PrepareArgs;
use crate::config::BundleConfig;
use crate::error::Result;
use crate::stage;
use crate::ui;

pub fn run(args: PrepareArgs) -> Result<()> {
    ui::set_quiet(args.quiet);

    let config = BundleConfig::load(&args.config)?;

    stage::stage(&config)?;

    if args.no_archive {
        ui::detail(&format!("Staged bundle at {}", config.bundle_dir().display()));
        return Ok(());
    }

    ui::step("Archiving Bundle");
    let progress = ui::ArchiveProgress::new();
    let result = archive::archive(&config.bundle_dir(), &config.archive_path(), |percent| {
        progress.set_percent(percent);
    });

    match &result {
        Ok(()) => progress.finish(),
        Err(_) => progress.abandon(),
    }
    result?;

    ui::detail(&format!("Wrote {}", config.archive_path().display()));
    Ok(())
}
