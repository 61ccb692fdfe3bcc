//! Image data model properties across formats.

use pixkit_core::prelude::*;
use pixkit_core::{UNMASKED, MASKED};

#[test]
fn test_fill_scenario() {
    let mut img = Gray8Image::filled(4, 4, 5).unwrap();
    img.fill(Rect::new(1, 1, 2, 2), 9).unwrap();

    for row in 0..4 {
        for col in 0..4 {
            let inside = (1..3).contains(&row) && (1..3).contains(&col);
            let expected = if inside { 9 } else { 5 };
            assert_eq!(img.pixel(row, col), expected, "pixel ({row}, {col})");
        }
    }
}

#[test]
fn test_every_format_allocates_exactly() {
    let (w, h) = (7, 3);
    let lens = [
        Gray8Image::new(w, h).unwrap().data().len(),
        Gray16Image::new(w, h).unwrap().data().len(),
        Gray32Image::new(w, h).unwrap().data().len(),
        RgbImage::new(w, h).unwrap().data().len(),
        Complex32Image::new(w, h).unwrap().data().len(),
    ];
    assert!(lens.iter().all(|&n| n == 21));
}

#[test]
fn test_negative_dimensions_rejected() {
    assert!(Gray16Image::new(3, -1).unwrap_err().is_bounds_error());
    assert!(Complex32Image::new(-3, 1).is_err());
}

#[test]
fn test_masked_clone_copies_mask() {
    let mut a = MaskedGray32Image::unmasked(Gray32Image::filled(2, 2, 1).unwrap());
    a.set_mask(0, 0);
    let b = a.clone();
    a.unset_mask(0, 0);
    assert!(b.is_masked(0, 0));
    assert_eq!(b.mask().pixel(0, 0), MASKED);
    assert_eq!(a.mask().pixel(0, 0), UNMASKED);
}

#[test]
fn test_rgb_mask_leaves_channels() {
    let color = Rgb::new(9, 8, 7);
    let mut img = MaskedRgbImage::unmasked(RgbImage::filled(3, 1, color).unwrap());
    for col in 0..3 {
        img.set_mask(0, col);
    }
    assert_eq!(img.masked_count(), 3);
    for col in 0..3 {
        let px = img.image().pixel(0, col);
        assert_eq!(px.alpha(), 0);
        assert_eq!(px.to_array(), [9, 8, 7]);
    }
}

#[test]
fn test_dynamic_round_trip_through_union() {
    let img = Gray32OffsetImage::new(Gray32Image::filled(2, 2, 3).unwrap(), 5, 6);
    let dynamic: Image = img.clone().into();
    assert_eq!(dynamic.to_string(), "OffsetGray32 (2x2)");
    assert!(dynamic.expect_gray32().is_err());
    assert_eq!(Gray32OffsetImage::try_from(dynamic).unwrap(), img);
}

#[test]
fn test_complex_image_pixels() {
    let mut img = Complex32Image::new(2, 2).unwrap();
    img.fill(Rect::new(0, 0, 2, 1), Complex::from_int(1, -1)).unwrap();
    assert_eq!(img.real_part().row(0), &[256, 256]);
    assert_eq!(img.imag_part().row(0), &[-256, -256]);
    assert_eq!(img.real_part().row(1), &[0, 0]);
}
