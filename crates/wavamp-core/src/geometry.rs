//! Integer screen geometry.

/// A point in window coordinates (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in window coordinates.
///
/// The left and top edges are inclusive, the right and bottom edges
/// exclusive, so `{x: 0, w: 10}` covers columns `0..10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// True when the rectangle has no area.
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// One past the rightmost column.
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// One past the bottom row.
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Center point (rounded toward the top-left).
    pub const fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Whether `p` lies inside the rectangle.
    ///
    /// Empty rectangles contain nothing.
    pub const fn contains(&self, p: Point) -> bool {
        !self.is_empty() && p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_inclusive_top_left() {
        let r = Rect::new(100, 100, 100, 100);
        assert!(r.contains(Point::new(100, 100)));
        assert!(r.contains(Point::new(199, 199)));
    }

    #[test]
    fn contains_exclusive_bottom_right() {
        let r = Rect::new(100, 100, 100, 100);
        assert!(!r.contains(Point::new(200, 150)));
        assert!(!r.contains(Point::new(150, 200)));
        assert!(!r.contains(Point::new(99, 150)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let r = Rect::new(10, 10, 0, 5);
        assert!(r.is_empty());
        assert!(!r.contains(Point::new(10, 10)));

        let negative = Rect::new(10, 10, -4, 5);
        assert!(!negative.contains(Point::new(8, 12)));
    }

    #[test]
    fn edges_and_center() {
        let r = Rect::new(70, 400, 500, 20);
        assert_eq!(r.right(), 570);
        assert_eq!(r.bottom(), 420);
        assert_eq!(r.center(), Point::new(320, 410));
    }
}
