//! core/crop.rs
//! Pure crop geometry. No IO, no image decoding — just the math,
//! so it's trivial to unit test.

/// A centered square crop region inside a `width` x `height` image.
///
/// `edge` is the side length; `(left, top)` is the top-left corner.
/// Equal margins are trimmed from both sides of the longer dimension
/// (odd leftovers favor the right/bottom, since the division floors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub edge: u32,
}

impl CropBox {
    /// Compute the centered 1:1 crop for an image of the given size.
    pub fn centered(width: u32, height: u32) -> Self {
        let edge = width.min(height);
        Self {
            left: (width - edge) / 2,
            top: (height - edge) / 2,
            edge,
        }
    }

    /// True when the crop would be a no-op (image already square).
    pub fn is_noop(width: u32, height: u32) -> bool {
        width == height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_trims_left_and_right() {
        // 1000x600 -> square of 600, 200px off each side
        let b = CropBox::centered(1000, 600);
        assert_eq!(b, CropBox { left: 200, top: 0, edge: 600 });
        assert_eq!(b.left + b.edge, 800);
    }

    #[test]
    fn tall_image_trims_top_and_bottom() {
        // 600x1000 -> square of 600, 200px off top and bottom
        let b = CropBox::centered(600, 1000);
        assert_eq!(b, CropBox { left: 0, top: 200, edge: 600 });
        assert_eq!(b.top + b.edge, 800);
    }

    #[test]
    fn square_image_crops_to_itself() {
        let b = CropBox::centered(500, 500);
        assert_eq!(b, CropBox { left: 0, top: 0, edge: 500 });
        assert!(CropBox::is_noop(500, 500));
    }

    #[test]
    fn odd_margin_floors() {
        // 7 wide, 4 tall: margin is 3, split 1 / 2
        let b = CropBox::centered(7, 4);
        assert_eq!(b, CropBox { left: 1, top: 0, edge: 4 });
    }

    #[test]
    fn one_pixel_strip() {
        let b = CropBox::centered(1, 300);
        assert_eq!(b, CropBox { left: 0, top: 149, edge: 1 });
    }
}
