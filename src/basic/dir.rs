use std::ops::Neg;

use Dir::*;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    D,
    L,
    R,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    UD, // |
    LR, // -
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            D => U,
            L => R,
            R => L,
        }
    }
}

impl Dir {
    // clockwise order starting from U
    #[cfg(test)]
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    pub fn axis(self) -> Axis {
        match self {
            U | D => Axis::UD,
            L | R => Axis::LR,
        }
    }

    /// Unit step in grid cells, y grows downwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            U => (0, -1),
            D => (0, 1),
            L => (-1, 0),
            R => (1, 0),
        }
    }
}

#[test]
fn test_dir_neg_axis() {
    for dir in Dir::iter() {
        assert_eq!(-(-dir), dir);
        assert_eq!((-dir).axis(), dir.axis());
        let (dx, dy) = dir.delta();
        let (nx, ny) = (-dir).delta();
        assert_eq!((dx + nx, dy + ny), (0, 0));
    }
    assert_ne!(U.axis(), R.axis());
}
