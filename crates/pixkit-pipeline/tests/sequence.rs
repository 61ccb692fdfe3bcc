//! Chaining behavior of sequences.

use pixkit_core::{Gray8Image, Gray32Image, Image, PixelFormat, Rect, RgbImage};
use pixkit_pipeline::{
    Crop, Fill, FnStage, Identity, PipelineError, PipelineResult, Sequence, Stage, Transform,
};

fn add(name: &'static str, delta: i32) -> impl Stage {
    FnStage::new(name, move |img: Image| -> PipelineResult<Image> {
        let mut g = Gray32Image::try_from(img)?;
        g.map_pixels(|v| v + delta);
        Ok(g.into())
    })
    .into_stage()
}

fn input() -> Image {
    Gray32Image::filled(3, 3, 1).unwrap().into()
}

#[test]
fn test_sequence_matches_manual_chaining() {
    let mut seq = Sequence::new()
        .then(add("A", 1))
        .then(add("B", 10))
        .then(add("C", 100));
    seq.push(input()).unwrap();
    let chained = seq.pop().unwrap();

    let (mut a, mut b, mut c) = (add("A", 1), add("B", 10), add("C", 100));
    a.push(input()).unwrap();
    b.push(a.pop().unwrap()).unwrap();
    c.push(b.pop().unwrap()).unwrap();
    let manual = c.pop().unwrap();

    assert_eq!(chained, manual);
    assert_eq!(manual.expect_gray32().unwrap().pixel(0, 0), 112);
}

#[test]
fn test_sequence_description() {
    let seq = Sequence::new()
        .then(add("A", 0))
        .then(add("B", 0))
        .then(add("C", 0));
    assert_eq!(seq.describe(), "(A (B C))");
    assert_eq!(seq.stage_count(), 3);
    assert_eq!(seq.stage_names().collect::<Vec<_>>(), ["A", "B", "C"]);

    let single = Sequence::new().then(add("A", 0));
    assert_eq!(single.describe(), "(A)");
    assert_eq!(Sequence::new().describe(), "()");
}

#[test]
fn test_nested_sequence() {
    let inner = Sequence::new().then(add("B", 10)).then(add("C", 100));
    let mut outer = Sequence::new().then(add("A", 1)).then(inner);
    assert_eq!(outer.describe(), "(A (B C))");

    outer.push(input()).unwrap();
    assert!(!outer.is_empty());
    assert_eq!(outer.pop().unwrap().expect_gray32().unwrap().pixel(2, 2), 112);
    assert!(outer.is_empty());
}

#[test]
fn test_empty_push() {
    let mut seq = Sequence::new();
    assert!(matches!(
        seq.push(input()),
        Err(PipelineError::PipelineEmptyPush)
    ));
}

#[test]
fn test_failure_aborts_chain() {
    let mut seq = Sequence::new()
        .then(Identity.into_stage())
        .then(Fill::gray8(Rect::new(0, 0, 1, 1), 1).into_stage())
        .then(add("Never", 1));

    let err = seq.push(input()).unwrap_err();
    match err {
        PipelineError::Image(pixkit_core::Error::FormatMismatch { expected, actual }) => {
            assert_eq!(expected, PixelFormat::Gray8);
            assert_eq!(actual, PixelFormat::Gray32);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(seq.is_empty());
}

/// Accepts every push without ever producing output.
struct Swallow;

impl Stage for Swallow {
    fn name(&self) -> &str {
        "Swallow"
    }

    fn push(&mut self, _image: Image) -> PipelineResult<()> {
        Ok(())
    }

    fn is_empty(&self) -> bool {
        true
    }

    fn pop(&mut self) -> PipelineResult<Image> {
        Err(PipelineError::no_result("Swallow"))
    }
}

fn assert_no_result_from(result: PipelineResult<()>, expected: &str) {
    match result {
        Err(PipelineError::NoResultAvailable { stage }) => assert_eq!(stage, expected),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_silent_stage_reports_no_result() {
    let mut seq = Sequence::new().then(Swallow).then(Identity.into_stage());
    assert_no_result_from(seq.push(input()), "Swallow");
}

#[test]
fn test_silent_last_stage_reports_no_result() {
    let mut seq = Sequence::new().then(Identity.into_stage()).then(Swallow);
    assert_no_result_from(seq.push(input()), "Swallow");
    assert!(seq.is_empty());
}

#[test]
fn test_silent_single_stage_reports_no_result() {
    let mut seq = Sequence::new().then(Swallow);
    assert_no_result_from(seq.push(input()), "Swallow");
    assert!(seq.is_empty());
}

#[test]
fn test_append_in_place() {
    let mut seq = Sequence::new();
    seq.append(Fill::gray8(Rect::new(0, 0, 2, 1), 4).into_stage())
        .append(Identity.into_stage());
    seq.push(Gray8Image::new(2, 2).unwrap().into()).unwrap();
    let img = seq.pop().unwrap();
    assert_eq!(img.expect_gray8().unwrap().row(0), &[4, 4]);
    assert_eq!(img.expect_gray8().unwrap().row(1), &[0, 0]);
}

#[test]
fn test_crop_after_fill_rgb() {
    let red = pixkit_core::Rgb::new(255, 0, 0);
    let mut seq = Sequence::new()
        .then(Fill::rgb(Rect::new(2, 0, 2, 2), red).into_stage())
        .then(Crop::new(Rect::new(2, 0, 2, 2)).into_stage());
    seq.push(RgbImage::new(4, 2).unwrap().into()).unwrap();

    let out = seq.pop().unwrap();
    assert_eq!(out.to_string(), "OffsetRgb (2x2)");
    let tile = out.expect_offset_rgb().unwrap();
    assert_eq!(tile.offset(), (2, 0));
    assert!(tile.image().data().iter().all(|&px| px == red));
}
