use crate::consts;
use crate::piece::Piece;
use crate::shapes::ALL_SHAPES;
use log::{trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GeneratorConfig {
    /// Seed for the shape RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Clamped to `consts::MAX_FIRST_PIECE_ID`.
    pub first_id: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            first_id: consts::FIRST_PIECE_ID,
        }
    }
}

/// Produces pieces with uniformly random shapes and strictly increasing ids.
///
/// The id counter belongs to the generator, so every queue fed by the same generator
/// sees one gap-free id sequence.
pub struct PieceGenerator {
    rng: StdRng,
    next_id: u64,
}

impl PieceGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut next_id = config.first_id;
        if next_id > consts::MAX_FIRST_PIECE_ID {
            warn!("First id {next_id} too large, using {}", consts::MAX_FIRST_PIECE_ID);
            next_id = consts::MAX_FIRST_PIECE_ID;
        }
        Self { rng, next_id }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        })
    }

    /// The id the next call to `generate` will hand out.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn generate(&mut self) -> Piece {
        let shape = ALL_SHAPES[self.rng.gen_range(0..consts::NUM_SHAPES)];
        let piece = Piece::new(shape, self.next_id);
        self.next_id += 1;
        trace!("Generated piece {piece}");
        piece
    }
}

impl Iterator for PieceGenerator {
    type Item = Piece;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}
