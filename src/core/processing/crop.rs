use image::{RgbaImage, imageops};
use tracing::info;

use super::bbox::compute_opaque_bbox;
use crate::types::BoundingBox;

/// Pixel-exact copy of the sub-rectangle described by `bbox`. No resampling.
pub fn crop_to_bbox(image: &RgbaImage, bbox: &BoundingBox) -> RgbaImage {
    imageops::crop_imm(image, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
}

/// Trim the fully-transparent border of `image`.
///
/// Computes the bounding box of pixels with alpha > 0 and crops to it. A
/// fully transparent image has no box and is returned unmodified, never as
/// an empty raster; a box spanning the full extent means there is nothing
/// to trim and the image passes through as-is.
///
/// The returned box is the computed one, present even when no crop was
/// applied because it already spanned the full extent.
pub fn autocrop_rgba(image: RgbaImage) -> (RgbaImage, Option<BoundingBox>) {
    let bbox = compute_opaque_bbox(&image);
    match bbox {
        Some(b) if !b.is_full_extent(image.width(), image.height()) => {
            info!(
                "Cropping {}x{} to {}x{} at ({}, {})",
                image.width(),
                image.height(),
                b.width(),
                b.height(),
                b.left,
                b.top
            );
            (crop_to_bbox(&image, &b), bbox)
        }
        _ => (image, bbox),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    fn block_image(width: u32, height: u32, block: (u32, u32, u32, u32)) -> RgbaImage {
        let (bx, by, bw, bh) = block;
        ImageBuffer::from_fn(width, height, |x, y| {
            if x >= bx && x < bx + bw && y >= by && y < by + bh {
                Rgba([200, 40, 90, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn crops_to_opaque_block() {
        let image = block_image(100, 100, (10, 20, 40, 30));
        let (cropped, bbox) = autocrop_rgba(image.clone());

        assert_eq!((cropped.width(), cropped.height()), (40, 30));
        let bbox = bbox.expect("block has alpha > 0");
        assert_eq!((bbox.left, bbox.top), (10, 20));
        for (x, y, pixel) in cropped.enumerate_pixels() {
            assert_eq!(
                pixel,
                image.get_pixel(x + bbox.left, y + bbox.top),
                "pixel mismatch at ({x}, {y})"
            );
        }
    }

    #[test]
    fn full_extent_box_passes_image_through() {
        let image: RgbaImage = ImageBuffer::from_pixel(20, 10, Rgba([1, 2, 3, 255]));
        let (out, bbox) = autocrop_rgba(image.clone());

        assert_eq!(out, image);
        assert!(bbox.expect("opaque image has a box").is_full_extent(20, 10));
    }

    #[test]
    fn fully_transparent_image_passes_through_uncropped() {
        let image: RgbaImage = ImageBuffer::from_pixel(20, 10, Rgba([0, 0, 0, 0]));
        let (out, bbox) = autocrop_rgba(image.clone());

        assert_eq!(out, image, "no box found must not produce an empty raster");
        assert_eq!(bbox, None);
    }

    #[test]
    fn partial_alpha_counts_as_content() {
        let mut image: RgbaImage = ImageBuffer::from_pixel(9, 9, Rgba([0, 0, 0, 0]));
        image.put_pixel(2, 2, Rgba([10, 20, 30, 1]));
        image.put_pixel(6, 7, Rgba([10, 20, 30, 254]));

        let (cropped, _) = autocrop_rgba(image);
        assert_eq!((cropped.width(), cropped.height()), (5, 6));
    }
}
