use crate::consts;
use crate::piece::Piece;
use crate::piece_generator::PieceGenerator;
use derive_more::{Display, Error};
use log::{debug, warn};
use std::array;
use std::fmt::Formatter;

#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Error)]
pub enum QueueError {
    #[display("Queue is full! Play a piece first.")]
    Full,
    #[display("Queue is empty! No piece to play.")]
    Empty,
}

/// Fixed capacity FIFO of upcoming pieces, stored as a ring over `slots`.
///
/// `tail == (head + count) % N` always holds. Slots outside the live window keep
/// whatever piece last occupied them and are never read.
#[derive(Clone, Debug)]
pub struct PieceQueue<const N: usize = { consts::QUEUE_CAPACITY }> {
    slots: [Piece; N],
    head: usize,
    tail: usize,
    count: usize,
}

impl<const N: usize> PieceQueue<N> {
    /// Build a queue already filled to capacity with `N` freshly generated pieces.
    ///
    /// Filling skips the full check that `enqueue` applies, and advances the
    /// generator's id counter by `N`.
    pub fn initialize(generator: &mut PieceGenerator) -> Self {
        let queue = Self {
            slots: array::from_fn(|_| generator.generate()),
            head: 0,
            tail: 0,
            count: N,
        };
        debug!("Initialized piece queue: {}", queue.listing());
        queue
    }

    /// Generate a piece and append it at the back.
    ///
    /// Capacity is checked before generating, so a rejected enqueue does not
    /// consume an id.
    pub fn enqueue(&mut self, generator: &mut PieceGenerator) -> Result<Piece, QueueError> {
        if self.is_full() {
            warn!("Rejected enqueue, queue at capacity {N}");
            return Err(QueueError::Full);
        }
        let piece = generator.generate();
        self.slots[self.tail] = piece;
        self.tail = (self.tail + 1) % N;
        self.count += 1;
        debug!("Enqueued {piece}, head={} tail={} count={}", self.head, self.tail, self.count);
        Ok(piece)
    }

    /// Remove and return the front piece. The vacated slot is left as is.
    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        if self.is_empty() {
            warn!("Rejected dequeue, queue is empty");
            return Err(QueueError::Empty);
        }
        let piece = self.slots[self.head];
        self.head = (self.head + 1) % N;
        self.count -= 1;
        debug!("Dequeued {piece}, head={} tail={} count={}", self.head, self.tail, self.count);
        Ok(piece)
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Live pieces, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.count).map(move |offset| &self.slots[(self.head + offset) % N])
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn tail(&self) -> usize {
        self.tail
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == N
    }

    fn listing(&self) -> String {
        if self.is_empty() {
            return "[ EMPTY ]".to_string();
        }
        self.iter()
            .map(|piece| piece.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<const N: usize> std::fmt::Display for PieceQueue<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- Current Queue State ({}/{}) ---", self.count, N)?;
        writeln!(f, "Piece queue: {}", self.listing())?;
        writeln!(f, "{}", consts::QUEUE_SEPARATOR)
    }
}
