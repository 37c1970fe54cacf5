use image::RgbaImage;

use crate::types::BoundingBox;

/// Calculate the tightest bounding box that contains all non-transparent
/// pixels. Returns `None` if every pixel is fully transparent.
///
/// A pixel participates iff its alpha value is strictly greater than zero;
/// partially transparent pixels count as content.
pub fn compute_opaque_bbox(image: &RgbaImage) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        match bbox.as_mut() {
            None => {
                bbox = Some(BoundingBox {
                    left: x,
                    top: y,
                    right: x,
                    bottom: y,
                });
            }
            Some(b) => {
                if x < b.left {
                    b.left = x;
                }
                if x > b.right {
                    b.right = x;
                }
                // Row-major scan: `top` is fixed by the first hit
                if y > b.bottom {
                    b.bottom = y;
                }
            }
        }
    }

    bbox
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    fn transparent(width: u32, height: u32) -> RgbaImage {
        ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]))
    }

    #[test]
    fn fully_transparent_image_has_no_bbox() {
        assert_eq!(compute_opaque_bbox(&transparent(16, 16)), None);
    }

    #[test]
    fn single_pixel_yields_unit_bbox() {
        let mut image = transparent(8, 8);
        image.put_pixel(3, 5, Rgba([255, 0, 0, 128]));

        let bbox = compute_opaque_bbox(&image).expect("one pixel has alpha > 0");
        assert_eq!(
            bbox,
            BoundingBox {
                left: 3,
                top: 5,
                right: 3,
                bottom: 5
            }
        );
        assert_eq!((bbox.width(), bbox.height()), (1, 1));
    }

    #[test]
    fn bbox_is_tight_around_scattered_content() {
        let mut image = transparent(32, 32);
        image.put_pixel(4, 10, Rgba([0, 255, 0, 1]));
        image.put_pixel(20, 6, Rgba([0, 0, 255, 255]));
        image.put_pixel(11, 25, Rgba([255, 255, 0, 42]));

        let bbox = compute_opaque_bbox(&image).expect("content present");
        assert_eq!(
            bbox,
            BoundingBox {
                left: 4,
                top: 6,
                right: 20,
                bottom: 25
            }
        );
        assert!(!bbox.is_full_extent(32, 32));
    }

    #[test]
    fn fully_opaque_image_spans_full_extent() {
        let image: RgbaImage = ImageBuffer::from_pixel(12, 7, Rgba([9, 9, 9, 255]));
        let bbox = compute_opaque_bbox(&image).expect("everything is opaque");
        assert!(bbox.is_full_extent(12, 7));
        assert_eq!((bbox.width(), bbox.height()), (12, 7));
    }
}
