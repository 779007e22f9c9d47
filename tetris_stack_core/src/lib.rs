pub mod consts;
pub mod piece;
pub mod piece_generator;
pub mod piece_queue;
pub mod shapes;

mod tests;
