use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left corner and a size (canvas convention, y grows down)
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_pos_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlapping_boxes() {
        let hit_box = rect(180.0, 270.0, 60.0, 50.0);
        let body = rect(160.0, 250.0, 50.0, 100.0);
        assert!(hit_box.overlaps(&body));
        assert!(body.overlaps(&hit_box));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&rect(10.0, 0.0, 10.0, 10.0)), "right edge");
        assert!(!a.overlaps(&rect(-10.0, 0.0, 10.0, 10.0)), "left edge");
        assert!(!a.overlaps(&rect(0.0, 10.0, 10.0, 10.0)), "bottom edge");
        assert!(!a.overlaps(&rect(0.0, -10.0, 10.0, 10.0)), "top edge");
        assert!(a.overlaps(&rect(9.9, 9.9, 10.0, 10.0)), "corner overlap");
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&rect(5.0, 30.0, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(30.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn test_contains_and_size() {
        let a = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a.size(), Vec2::new(30.0, 40.0));
        assert!(a.contains(Vec2::new(10.0, 20.0)));
        assert!(!a.contains(Vec2::new(41.0, 20.0)));
    }
}
