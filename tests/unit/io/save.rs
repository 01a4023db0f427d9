use std::path::PathBuf;

use image::{ImageBuffer, Rgba};

use super::*;

fn written_format(path: &Path) -> Option<ImageFormat> {
    image::ImageReader::open(path)
        .unwrap()
        .with_guessed_format()
        .unwrap()
        .format()
}

#[test]
fn output_is_png_regardless_of_extension() {
    let dir = PathBuf::from("target").join("zmerge_unit_save");
    let _ = std::fs::remove_dir_all(&dir);

    let img = DynamicImage::ImageRgba16(ImageBuffer::from_fn(3, 2, |x, y| {
        Rgba([x as u16 * 1000, y as u16 * 1000, 0, u16::MAX])
    }));
    for name in ["merged.png", "merged.bmp", "merged.img"] {
        let path = dir.join("nested").join(name);
        save_image(&img, &path).unwrap();
        assert_eq!(written_format(&path), Some(ImageFormat::Png), "{name}");

        let back = image::ImageReader::open(&path)
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(back.to_rgba16(), img.to_rgba16(), "{name}");
    }
}
