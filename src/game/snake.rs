use std::collections::VecDeque;

use crate::basic::{Cell, Dir, GridDim};

pub struct Snake {
    /// Head first, tail last
    body: VecDeque<Cell>,
    /// Direction the next step will take
    dir: Dir,
    /// Direction of the last step actually taken, turns are
    /// checked against this so that two quick presses within one
    /// movement interval can't fold the head back onto the neck
    last_step: Dir,
}

impl Snake {
    pub fn new(head: Cell, dir: Dir) -> Self {
        Self {
            body: VecDeque::from([head]),
            dir,
            last_step: dir,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Accepts the turn iff it changes the axis of motion,
    /// returns whether it was accepted
    pub fn turn(&mut self, dir: Dir) -> bool {
        if dir.axis() == self.last_step.axis() {
            return false;
        }
        self.dir = dir;
        true
    }

    pub fn next_head(&self, grid: GridDim) -> Cell {
        self.head().wrapping_translate(self.dir, grid)
    }

    /// Prepend `new_head`, the tail is kept when growing
    pub fn step(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
        self.last_step = self.dir;
    }
}
