//! Fill command

use crate::FillArgs;
use anyhow::{Context, Result};
use pixkit_core::Gray8Image;
use tracing::debug;

pub fn run(args: FillArgs, verbose: bool) -> Result<()> {
    let mut image = Gray8Image::filled(args.width, args.height, args.background)
        .context("Failed to create image")?;
    debug!(width = args.width, height = args.height, rect = %args.rect, "fill");

    if verbose {
        println!(
            "Filling {} of {}x{} with {}",
            args.rect, args.width, args.height, args.value
        );
    }

    image
        .fill(args.rect, args.value)
        .with_context(|| format!("Failed to fill {}", args.rect))?;

    print!("{}", super::format_grid(&image));
    Ok(())
}
