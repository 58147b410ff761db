//! Locations and labels.

/// Topological location of a point relative to one geometry argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Location {
    #[default]
    None,
    Interior,
    Boundary,
    Exterior,
}

impl Location {
    /// Precedence used when two different locations meet at one insertion site.
    #[inline]
    fn rank(self) -> u8 {
        match self {
            Location::None => 0,
            Location::Exterior => 1,
            Location::Interior => 2,
            Location::Boundary => 3,
        }
    }

    /// Unset takes the other value; equal values stay; otherwise the dominant
    /// one (`Boundary > Interior > Exterior`) wins. Commutative and idempotent.
    #[inline]
    pub fn merge(old: Location, new: Location) -> Location {
        if new.rank() > old.rank() {
            new
        } else {
            old
        }
    }
}

/// Which part of an edge a location refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    On,
    Left,
    Right,
}

/// Location triple for one argument. Side locations are only meaningful when
/// `is_area` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TopologyLocation {
    pub on: Location,
    pub left: Location,
    pub right: Location,
    pub is_area: bool,
}

impl TopologyLocation {
    #[inline]
    pub fn line(on: Location) -> Self {
        Self {
            on,
            ..Self::default()
        }
    }
    #[inline]
    pub fn area(on: Location, left: Location, right: Location) -> Self {
        Self {
            on,
            left,
            right,
            is_area: true,
        }
    }
    #[inline]
    pub fn get(&self, pos: Position) -> Location {
        match pos {
            Position::On => self.on,
            Position::Left => self.left,
            Position::Right => self.right,
        }
    }
    #[inline]
    pub fn set(&mut self, pos: Position, loc: Location) {
        match pos {
            Position::On => self.on = loc,
            Position::Left => self.left = loc,
            Position::Right => self.right = loc,
        }
    }
    #[inline]
    pub fn flip(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            ..self
        }
    }
    pub fn merge(old: Self, new: Self) -> Self {
        Self {
            on: Location::merge(old.on, new.on),
            left: Location::merge(old.left, new.left),
            right: Location::merge(old.right, new.right),
            is_area: old.is_area || new.is_area,
        }
    }
}

/// Topology label for up to two geometry arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Label {
    elt: [TopologyLocation; 2],
}

impl Label {
    /// Node label: `on` location for one argument, nothing for the other.
    pub fn on(arg: usize, loc: Location) -> Self {
        Self::with(arg, TopologyLocation::line(loc))
    }
    pub fn area(arg: usize, on: Location, left: Location, right: Location) -> Self {
        Self::with(arg, TopologyLocation::area(on, left, right))
    }
    fn with(arg: usize, tl: TopologyLocation) -> Self {
        let mut label = Label::default();
        label.elt[arg] = tl;
        label
    }

    #[inline]
    pub fn location(&self, arg: usize) -> Location {
        self.elt[arg].on
    }
    #[inline]
    pub fn side(&self, arg: usize, pos: Position) -> Location {
        self.elt[arg].get(pos)
    }
    #[inline]
    pub fn set_location(&mut self, arg: usize, loc: Location) {
        self.elt[arg].on = loc;
    }
    #[inline]
    pub fn set_side(&mut self, arg: usize, pos: Position, loc: Location) {
        self.elt[arg].set(pos, loc);
    }
    #[inline]
    pub fn is_area(&self) -> bool {
        self.elt[0].is_area || self.elt[1].is_area
    }
    #[inline]
    pub fn is_area_for(&self, arg: usize) -> bool {
        self.elt[arg].is_area
    }
    /// Swap left and right for both arguments (label seen from the reversed edge).
    pub fn flip(self) -> Self {
        Self {
            elt: [self.elt[0].flip(), self.elt[1].flip()],
        }
    }
    /// Pure merge of two labels, argument by argument.
    pub fn merge(old: Label, new: Label) -> Label {
        Label {
            elt: [
                TopologyLocation::merge(old.elt[0], new.elt[0]),
                TopologyLocation::merge(old.elt[1], new.elt[1]),
            ],
        }
    }
}
