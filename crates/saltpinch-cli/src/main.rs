//! `saltpinch` - Salt Pile patcher runner
//!
//! ```text
//! saltpinch run-patcher --data-folder-path Data --load-order-file-path plugins.txt \
//!     --output-path Data/SaltPilePatcher.esp
//! saltpinch check-runnability --data-folder-path Data --load-order-file-path plugins.txt
//! ```

mod cli;
mod logging;

use anyhow::Context;
use cli::Invocation;
use saltpinch_patcher::{PatcherSettings, SaltPilePatcher};

fn main() -> anyhow::Result<()> {
    let invocation = match cli::parse(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(e) => e.exit(),
    };
    logging::init();

    let common = invocation.common();
    tracing::debug!(
        "Patching {:?} data folder {}",
        common.game_release,
        common.data_folder.display()
    );

    let settings = PatcherSettings::discover(common.extra_data_folder.as_deref())
        .context("failed to load patcher settings")?;
    let patcher = SaltPilePatcher::new(settings);

    match &invocation {
        Invocation::CheckRunnability { common } => {
            let target = patcher
                .check_runnability(&common.check_request())
                .context("patch is not runnable")?;
            println!("Runnable: replacement item {}", target);
        }
        Invocation::RunPatcher {
            common,
            output_path,
            source_path,
        } => {
            let request = common.run_request(output_path.clone(), source_path.clone());
            let run = patcher
                .execute(&request)
                .with_context(|| format!("failed to build {}", output_path.display()))?;

            println!("Patch: {}", run.patch.mod_key);
            println!("  Replacement: {}", run.target);
            println!("  Recipes scanned: {}", run.stats.scanned);
            println!("  Recipes patched: {}", run.stats.patched);
            println!("  Records written: {}", run.patch.len());
        }
    }

    Ok(())
}
