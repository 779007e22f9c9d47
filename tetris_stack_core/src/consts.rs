/// Number of upcoming pieces held by the preview queue.
pub const QUEUE_CAPACITY: usize = 5;

pub const NUM_SHAPES: usize = 7;

/// Id handed to the first generated piece unless configured otherwise.
pub const FIRST_PIECE_ID: u64 = 0;

/// Largest allowed starting id. Leaves the counter room to grow without wrapping.
pub const MAX_FIRST_PIECE_ID: u64 = u64::MAX / 2;

pub const QUEUE_SEPARATOR: &str = "----------------------------------------------";
