use ggez::mint::Point2;

/// A more convenient version of mint::Point2<f32>
#[derive(Copy, Clone, Debug, PartialEq, Add, Sub)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2 { x, y }
    }
}

impl Point {
    /// Equal x and y
    pub fn square(side: f32) -> Self {
        Self { x: side, y: side }
    }
}

#[test]
fn test_point_arithmetic() {
    let a = Point { x: 10., y: 10. };
    assert_eq!(a + Point::square(2.5), Point { x: 12.5, y: 12.5 });
    assert_eq!(a - Point::square(10.), Point { x: 0., y: 0. });
}
