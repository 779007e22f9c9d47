#![cfg(test)]

use crate::consts;
use crate::piece::Piece;
use crate::piece_generator::PieceGenerator;
use crate::piece_queue::{PieceQueue, QueueError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pretty_assertions::assert_eq;

macro_rules! assert_ring_invariant {
    ($queue:expr) => {{
        let q = &$queue;
        assert!(q.len() <= q.capacity(), "count {} over capacity", q.len());
        assert!(q.head() < q.capacity(), "head {} out of range", q.head());
        assert!(q.tail() < q.capacity(), "tail {} out of range", q.tail());
        assert_eq!(q.tail(), (q.head() + q.len()) % q.capacity(), "tail out of step");
    }};
}

fn ids(queue: &PieceQueue) -> Vec<u64> {
    queue.iter().map(|p| p.id).collect()
}

#[test]
fn scenario_walkthrough() {
    let mut generator = PieceGenerator::seeded(2024);

    // Fresh queue: full, both indices wrapped to zero.
    let mut queue: PieceQueue = PieceQueue::initialize(&mut generator);
    assert_eq!((queue.len(), queue.head(), queue.tail()), (5, 0, 0));
    assert_eq!(ids(&queue), vec![0, 1, 2, 3, 4]);
    assert_ring_invariant!(queue);

    // Play the front piece.
    let played = queue.dequeue().unwrap();
    assert_eq!(played.id, 0);
    assert_eq!((queue.len(), queue.head()), (4, 1));
    assert_eq!(ids(&queue), vec![1, 2, 3, 4]);
    assert_ring_invariant!(queue);

    // Refill the back.
    let tail_before = queue.tail();
    let inserted = queue.enqueue(&mut generator).unwrap();
    assert_eq!(inserted.id, 5);
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.tail(), (tail_before + 1) % consts::QUEUE_CAPACITY);
    assert_eq!(ids(&queue), vec![1, 2, 3, 4, 5]);
    assert_ring_invariant!(queue);

    // Full again: rejected without consuming an id.
    assert_eq!(queue.enqueue(&mut generator), Err(QueueError::Full));
    assert_eq!(queue.len(), 5);
    assert_eq!(generator.next_id(), 6);
    queue.dequeue().unwrap();
    assert_eq!(queue.enqueue(&mut generator).unwrap().id, 6);
}

#[test]
fn draining_a_full_queue() {
    let mut generator = PieceGenerator::seeded(5);
    let mut queue: PieceQueue = PieceQueue::initialize(&mut generator);

    let drained: Vec<u64> = (0..consts::QUEUE_CAPACITY)
        .map(|_| queue.dequeue().unwrap().id)
        .collect();
    assert_eq!(drained, vec![0, 1, 2, 3, 4]);
    assert!(queue.is_empty());
    assert_ring_invariant!(queue);

    let (head, tail) = (queue.head(), queue.tail());
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));
    assert_eq!((queue.len(), queue.head(), queue.tail()), (0, head, tail));
    assert!(queue.render().contains("[ EMPTY ]"));
}

#[test]
fn enqueue_then_dequeue_returns_same_piece() {
    let mut generator = PieceGenerator::seeded(9);
    let mut queue: PieceQueue = PieceQueue::initialize(&mut generator);
    for _ in 0..consts::QUEUE_CAPACITY {
        queue.dequeue().unwrap();
    }

    let inserted = queue.enqueue(&mut generator).unwrap();
    let played = queue.dequeue().unwrap();
    assert_eq!(played, inserted);
}

#[test]
fn render_is_stable_without_mutation() {
    let mut generator = PieceGenerator::seeded(11);
    let mut queue: PieceQueue = PieceQueue::initialize(&mut generator);
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    assert_eq!(queue.render(), queue.render());
    assert!(queue.render().starts_with("--- Current Queue State (3/5) ---\n"));
}

#[test]
fn random_operations_hold_invariants() {
    let mut ops = StdRng::seed_from_u64(77);
    let mut generator = PieceGenerator::seeded(78);
    let mut queue: PieceQueue = PieceQueue::initialize(&mut generator);
    let mut seen: Vec<Piece> = queue.iter().copied().collect();
    let mut played: Vec<Piece> = vec![];

    for _ in 0..2_000 {
        let before = queue.len();
        if ops.gen_bool(0.5) {
            match queue.enqueue(&mut generator) {
                Ok(p) => {
                    assert_eq!(queue.len(), before + 1);
                    seen.push(p);
                }
                Err(e) => {
                    assert_eq!(e, QueueError::Full);
                    assert_eq!(before, consts::QUEUE_CAPACITY);
                }
            }
        } else {
            match queue.dequeue() {
                Ok(p) => {
                    assert_eq!(queue.len(), before - 1);
                    played.push(p);
                }
                Err(e) => {
                    assert_eq!(e, QueueError::Empty);
                    assert_eq!(before, 0);
                }
            }
        }
        assert_ring_invariant!(queue);
    }

    // Ids are generated gap-free and come out in insertion order.
    let seen_ids: Vec<u64> = seen.iter().map(|p| p.id).collect();
    assert_eq!(seen_ids, (0..generator.next_id()).collect::<Vec<u64>>());
    assert_eq!(played[..], seen[..played.len()]);
    assert_eq!(ids(&queue), seen_ids[played.len()..].to_vec());
}
