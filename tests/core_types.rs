use fingermatch::{
    Color, FingerMatchError, Fingerprint, FingerprintPoint, ImageView, OwnedImage, Raster,
};

#[test]
fn image_view_rejects_invalid_dimensions() {
    let data = [Color::BLACK; 4];

    let err = ImageView::from_slice(&data, 0, 1).err().unwrap();
    assert_eq!(
        err,
        FingerMatchError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );

    let err = ImageView::from_slice(&data, 1, 0).err().unwrap();
    assert_eq!(
        err,
        FingerMatchError::InvalidDimensions {
            width: 1,
            height: 0,
        }
    );
}

#[test]
fn image_view_rejects_invalid_stride() {
    let data = [Color::BLACK; 8];

    let err = ImageView::new(&data, 4, 1, 3).err().unwrap();
    assert_eq!(
        err,
        FingerMatchError::InvalidStride {
            width: 4,
            stride: 3,
        }
    );
}

#[test]
fn image_view_rejects_small_buffer() {
    let data = [Color::BLACK; 3];

    let err = ImageView::new(&data, 2, 2, 2).err().unwrap();
    assert_eq!(err, FingerMatchError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn image_view_roi_reads_through_raster() {
    let data: Vec<Color> = (0u16..16).map(|v| Color::opaque(v, 0, 0)).collect();
    let view = ImageView::from_slice(&data, 4, 4).unwrap();

    let roi = view.roi(1, 1, 2, 2).unwrap();
    assert_eq!(roi.bounds(), (2, 2));
    assert_eq!(roi.stride(), 4);
    assert_eq!(roi.color_at(0, 0), Some(Color::opaque(5, 0, 0)));
    assert_eq!(roi.color_at(1, 1), Some(Color::opaque(10, 0, 0)));
    assert_eq!(roi.color_at(2, 0), None);

    let err = view.roi(3, 3, 2, 2).err().unwrap();
    assert_eq!(
        err,
        FingerMatchError::RoiOutOfBounds {
            x: 3,
            y: 3,
            width: 2,
            height: 2,
            img_width: 4,
            img_height: 4,
        }
    );
}

#[test]
fn owned_image_requires_exact_length() {
    let err = OwnedImage::new(vec![Color::WHITE; 5], 2, 2).err().unwrap();
    assert_eq!(err, FingerMatchError::BufferTooSmall { needed: 4, got: 5 });
}

#[test]
fn owned_image_converts_rgba8_and_bounds_reads() {
    let raw = [255u8, 0, 0, 255, 0, 0, 255, 128];
    let img = OwnedImage::from_rgba8(&raw, 2, 1).unwrap();
    assert_eq!(img.color_at(0, 0), Some(Color::opaque(0xffff, 0, 0)));
    assert_eq!(img.color_at(1, 0), Some(Color::new(0, 0, 0xffff, 0x8080)));
    assert_eq!(img.color_at(2, 0), None);
    assert_eq!(img.color_at(0, 1), None);
    assert_eq!(img.view().color_at(1, 0), img.color_at(1, 0));
}

#[test]
fn interleaved_samples_must_cover_whole_pixels() {
    let err = OwnedImage::from_rgba8(&[0u8; 7], 1, 1).err().unwrap();
    assert_eq!(err, FingerMatchError::BufferTooSmall { needed: 4, got: 7 });

    let err = OwnedImage::from_rgba16(&[0u16; 9], 2, 1).err().unwrap();
    assert_eq!(err, FingerMatchError::BufferTooSmall { needed: 8, got: 9 });

    assert!(OwnedImage::from_rgba16(&[0u16; 8], 2, 1).is_ok());
}

#[test]
fn fingerprint_from_points_validates_offsets() {
    let ok = Fingerprint::from_points(
        3,
        2,
        vec![FingerprintPoint::new(2, 1, Color::WHITE)],
    )
    .unwrap();
    assert_eq!(ok.len(), 1);
    assert_eq!((ok.template_width(), ok.template_height()), (3, 2));

    let err = Fingerprint::from_points(
        3,
        2,
        vec![
            FingerprintPoint::new(0, 0, Color::WHITE),
            FingerprintPoint::new(3, 0, Color::BLACK),
        ],
    )
    .err()
    .unwrap();
    assert_eq!(
        err,
        FingerMatchError::PointOutOfBounds {
            x: 3,
            y: 0,
            width: 3,
            height: 2,
        }
    );

    let err = Fingerprint::from_points(0, 2, Vec::new()).err().unwrap();
    assert_eq!(
        err,
        FingerMatchError::InvalidDimensions {
            width: 0,
            height: 2,
        }
    );
}
