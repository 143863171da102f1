use quickcheck::{Arbitrary, Gen};

use crate::{Cell, NUM_COLUMNS};

#[derive(Clone, Copy, Debug)]
pub struct PlayedMove {
    /// Mostly valid, but also one past either end of the board.
    pub column: i32,
    /// Never [`Cell::Empty`].
    pub player: Cell,
}

/// Long enough to regularly fill up columns, and sometimes the whole board.
#[derive(Clone, Debug)]
pub struct MoveSequence(pub Vec<PlayedMove>);

impl Arbitrary for PlayedMove {
    fn arbitrary(g: &mut Gen) -> Self {
        let column = (u8::arbitrary(g) % (NUM_COLUMNS as u8 + 2)) as i32 - 1;
        let player = *g.choose(&[Cell::Red, Cell::Black]).unwrap();
        PlayedMove { column, player }
    }
}

impl Arbitrary for MoveSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 80;
        MoveSequence((0..len).map(|_| PlayedMove::arbitrary(g)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(MoveSequence))
    }
}

impl Arbitrary for Cell {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Cell::Empty, Cell::Red, Cell::Black]).unwrap()
    }
}
