use image::{Rgb, RgbImage};
use pixel_xor::common::config::{load_config, AppConfig};
use pixel_xor::common::image_io;
use pixel_xor::{compare_images, Comparison, ImageCipher, XorKey};

#[test]
fn test_black_image_encrypts_to_white_and_back() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("black.png");
    image_io::save_png(&RgbImage::from_pixel(2, 2, Rgb([0, 0, 0])), &input).unwrap();

    let cipher = ImageCipher::new(XorKey::new(255, 255, 255));
    let encrypted = cipher.encrypt(&input).unwrap();
    let decrypted = cipher.decrypt(&encrypted.path).unwrap();

    let white = image_io::load_rgb(&encrypted.path).unwrap();
    assert!(white.pixels().all(|p| *p == Rgb([255, 255, 255])));

    assert_eq!(
        compare_images(&input, &encrypted.path).unwrap(),
        Comparison::PixelMismatch {
            x: 0,
            y: 0,
            left: [0, 0, 0],
            right: [255, 255, 255]
        }
    );
    assert!(compare_images(&input, &decrypted.path).unwrap().is_identical());
}

#[test]
fn test_jpeg_input_round_trips_through_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.jpg");
    RgbImage::from_fn(16, 12, |x, y| Rgb([(x * 15) as u8, (y * 20) as u8, 128]))
        .save(&input)
        .unwrap();

    let report = ImageCipher::new(XorKey::new(123, 45, 67))
        .roundtrip(&input)
        .unwrap();

    assert_eq!(report.encrypted, dir.path().join("photo.jpg.encrypted.png"));
    assert_eq!(
        report.decrypted,
        dir.path().join("photo.jpg.encrypted.png.decrypted.png")
    );
    assert!(report.restored());
    assert_eq!(report.encrypt_stats.clamped_channels, 0);
}

#[test]
fn test_out_of_range_key_breaks_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("grey.png");
    image_io::save_png(&RgbImage::from_pixel(3, 3, Rgb([10, 10, 10])), &input).unwrap();

    let report = ImageCipher::new(XorKey::new(300, 45, 67))
        .roundtrip(&input)
        .unwrap();

    assert!(!report.key_in_range);
    assert_eq!(report.encrypt_stats.clamped_channels, 9);
    assert_eq!(
        report.original_vs_decrypted,
        Comparison::PixelMismatch {
            x: 0,
            y: 0,
            left: [10, 10, 10],
            right: [255, 10, 10]
        }
    );
}

#[test]
fn test_different_sizes_do_not_match() {
    let dir = tempfile::tempdir().unwrap();
    let small = dir.path().join("small.png");
    let large = dir.path().join("large.png");
    image_io::save_png(&RgbImage::new(2, 2), &small).unwrap();
    image_io::save_png(&RgbImage::new(4, 2), &large).unwrap();

    let outcome = compare_images(&small, &large).unwrap();
    assert_eq!(
        outcome,
        Comparison::SizeMismatch {
            left: (2, 2),
            right: (4, 2)
        }
    );
    assert!(!outcome.is_identical());
}

#[test]
fn test_example_config_parses() {
    let config: AppConfig =
        load_config(concat!(env!("CARGO_MANIFEST_DIR"), "/config/example.toml")).unwrap();
    assert_eq!(config.resolve_key(None).unwrap(), XorKey::new(123, 45, 67));
}
