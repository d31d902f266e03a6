use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Bounding box representation with format conversion utilities.
///
/// Stored as TLBR corners, the format detectors report, so coordinates pass
/// through selection and interpolation unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left x coordinate
    pub x1: f32,
    /// Top-left y coordinate
    pub y1: f32,
    /// Bottom-right x coordinate
    pub x2: f32,
    /// Bottom-right y coordinate
    pub y2: f32,
}

impl Rect {
    /// Create a new Rect from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_tlbr(x, y, x + width, y + height)
    }

    /// Create a Rect from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn from_tlbr(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a Rect from its center point and dimensions (XYWH format).
    #[inline]
    pub fn from_center(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::from_tlbr(cx - width / 2.0, cy - height / 2.0, cx + width / 2.0, cy + height / 2.0)
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Convert to TLWH format: (x, y, width, height).
    #[inline]
    pub fn to_tlwh(&self) -> [f32; 4] {
        [self.x1, self.y1, self.width(), self.height()]
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Get the center point of the bounding box (mean of the two corners).
    #[inline]
    pub fn center(&self) -> Point2<f32> {
        Point2::new(0.5 * (self.x1 + self.x2), 0.5 * (self.y1 + self.y2))
    }

    /// Get the area of the bounding box.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Width over height. Only meaningful for non-degenerate boxes.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.width() / self.height()
    }

    /// All four coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.to_tlbr().iter().all(|v| v.is_finite())
    }

    /// Non-finite coordinates, or non-positive width or height.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.is_finite() || self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Whether `point` lies inside the box, edges included.
    pub fn contains(&self, point: &Point2<f32>) -> bool {
        (self.x1..=self.x2).contains(&point.x) && (self.y1..=self.y2).contains(&point.y)
    }

    /// Euclidean distance between the centers of two boxes.
    pub fn center_distance(&self, other: &Rect) -> f32 {
        nalgebra::distance(&self.center(), &other.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_conversions() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);

        assert_eq!(rect.to_tlwh(), [10.0, 20.0, 30.0, 40.0]);
        assert_eq!(rect.to_tlbr(), [10.0, 20.0, 40.0, 60.0]);

        let center = rect.center();
        assert_eq!(center.x, 25.0);
        assert_eq!(center.y, 40.0);
        assert!((rect.aspect_ratio() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_from_tlbr() {
        let rect = Rect::from_tlbr(10.0, 20.0, 40.0, 60.0);
        assert_eq!(rect.to_tlwh(), [10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_from_center() {
        let rect = Rect::from_center(25.0, 40.0, 30.0, 40.0);
        assert!((rect.x1 - 10.0).abs() < 1e-6);
        assert!((rect.y1 - 20.0).abs() < 1e-6);
        assert!((rect.width() - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_tlbr_kept_exactly() {
        // Corners come back as given, with no width/height round trip.
        let (x1, y1, x2, y2) = (0.1f32, 0.3f32, 1000.0001f32, 999.7f32);
        let rect = Rect::from_tlbr(x1, y1, x2, y2);
        assert_eq!(rect.to_tlbr(), [x1, y1, x2, y2]);
        assert_eq!(rect.center(), Point2::new(0.5 * (x1 + x2), 0.5 * (y1 + y2)));
    }

    #[test]
    fn test_degenerate() {
        assert!(Rect::from_tlbr(10.0, 10.0, 10.0, 20.0).is_degenerate());
        assert!(Rect::from_tlbr(10.0, 10.0, 20.0, 5.0).is_degenerate());
        assert!(Rect::from_tlbr(f32::NAN, 10.0, 20.0, 20.0).is_degenerate());
        assert!(Rect::from_tlbr(0.0, 0.0, f32::INFINITY, 20.0).is_degenerate());
        assert!(!Rect::from_tlbr(0.0, 0.0, 1.0, 1.0).is_degenerate());
    }

    #[test]
    fn test_contains_edges() {
        let rect = Rect::from_tlbr(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(&Point2::new(10.0, 0.0)));
        assert!(rect.contains(&Point2::new(5.0, 5.0)));
        assert!(!rect.contains(&Point2::new(10.1, 5.0)));
    }

    #[test]
    fn test_center_distance() {
        let a = Rect::from_center(0.0, 0.0, 2.0, 2.0);
        let b = Rect::from_center(3.0, 4.0, 2.0, 2.0);
        assert!((a.center_distance(&b) - 5.0).abs() < 1e-6);
    }
}
