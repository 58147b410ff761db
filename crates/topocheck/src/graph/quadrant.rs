/// Quadrant of a non-zero direction vector, numbered counter-clockwise from
/// the positive x-axis. Axis directions belong to the quadrant they open
/// (`+x` → NE, `+y` → NE, `-x` → NW, `-y` → SE).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quadrant {
    NE = 0,
    NW = 1,
    SW = 2,
    SE = 3,
}

impl Quadrant {
    /// `None` for the zero vector.
    pub fn of(dx: f64, dy: f64) -> Option<Quadrant> {
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(match (dx >= 0.0, dy >= 0.0) {
            (true, true) => Quadrant::NE,
            (true, false) => Quadrant::SE,
            (false, true) => Quadrant::NW,
            (false, false) => Quadrant::SW,
        })
    }
}
