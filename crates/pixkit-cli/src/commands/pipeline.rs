//! Pipeline demo command
//!
//! Builds `Fill -> Crop` (or `Fill -> ApplyMask` with `--mask`), runs a
//! synthetic image through it and prints the chain and the result.

use crate::{DemoFormat, PipelineArgs};
use anyhow::{Context, Result};
use pixkit_core::{Gray8Image, Gray32Image, Image, MASKED, Rect, Rgb, RgbImage, UNMASKED};
use pixkit_pipeline::{ApplyMask, Crop, Fill, Sequence, Stage, Transform};
use tracing::debug;

const FILL_GRAY: i32 = 9;
const FILL_RGB: Rgb = Rgb::new(0xFF, 0x80, 0x00);

pub fn run(args: PipelineArgs, verbose: bool) -> Result<()> {
    let input = build_input(&args).context("Failed to create input image")?;
    let mut seq = build_sequence(&args)?;

    println!("Chain:  {}", seq.describe());
    println!("Input:  {}", input);
    if verbose {
        print!("{}", super::format_image(&input)?);
    }

    debug!(stages = seq.stage_count(), "running sequence");
    seq.push(input).context("Pipeline failed")?;
    let output = seq.pop().context("Pipeline produced no output")?;

    println!("Output: {}", output);
    if let Some(tile) = output.as_offset_gray32() {
        println!("Origin: {:?}", tile.offset());
    } else if let Some(tile) = output.as_offset_rgb() {
        println!("Origin: {:?}", tile.offset());
    }
    print!("{}", super::format_image(&output)?);
    Ok(())
}

fn build_input(args: &PipelineArgs) -> pixkit_core::Result<Image> {
    Ok(match args.format {
        DemoFormat::Gray32 => Gray32Image::new(args.width, args.height)?.into(),
        DemoFormat::Rgb => RgbImage::new(args.width, args.height)?.into(),
    })
}

fn build_sequence(args: &PipelineArgs) -> Result<Sequence> {
    let fill = match args.format {
        DemoFormat::Gray32 => Fill::gray32(args.rect, FILL_GRAY),
        DemoFormat::Rgb => Fill::rgb(args.rect, FILL_RGB),
    };
    let seq = Sequence::new().then(fill.into_stage());

    if args.mask {
        let mask = outside_mask(args.width, args.height, args.rect)?;
        Ok(seq.then(ApplyMask::new(mask).into_stage()))
    } else {
        Ok(seq.then(Crop::new(args.rect).into_stage()))
    }
}

/// Mask that leaves `rect` unmasked and masks everything else.
fn outside_mask(width: i32, height: i32, rect: Rect) -> Result<Gray8Image> {
    let mut mask = Gray8Image::filled(width, height, MASKED)?;
    mask.fill(rect, UNMASKED)
        .with_context(|| format!("Region {} does not fit the image", rect))?;
    Ok(mask)
}
