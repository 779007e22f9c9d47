use crate::consts;
use derive_more::Display;
use enum_iterator::Sequence;

/// The tetromino shape alphabet, in the order pieces are listed on screen.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash, Sequence)]
pub enum Shape {
    I,
    O,
    T,
    L,
    S,
    Z,
    J,
}

pub const ALL_SHAPES: [Shape; consts::NUM_SHAPES] = [
    Shape::I,
    Shape::O,
    Shape::T,
    Shape::L,
    Shape::S,
    Shape::Z,
    Shape::J,
];
