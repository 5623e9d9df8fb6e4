use super::Vector2D;

impl From<mint::Vector2<f64>> for Vector2D {
    fn from(v: mint::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for mint::Vector2<f64> {
    fn from(v: Vector2D) -> Self {
        mint::Vector2 { x: v.x, y: v.y }
    }
}

impl From<mint::Point2<f64>> for Vector2D {
    fn from(p: mint::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2D> for mint::Point2<f64> {
    fn from(v: Vector2D) -> Self {
        mint::Point2 { x: v.x, y: v.y }
    }
}
