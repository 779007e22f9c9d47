use crate::shapes::Shape;
use std::fmt::{Display, Formatter};

/// One upcoming piece. Ids are unique for the lifetime of the generator that made it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub id: u64,
}

impl Piece {
    pub fn new(shape: Shape, id: u64) -> Self {
        Self { shape, id }
    }
}

/// Renders as `[shape id]`, the form used in the queue listing.
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {}]", self.shape, self.id)
    }
}
