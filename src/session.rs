use crate::selection::Selection;
use anyhow::{Context, Result};
use log::info;
use std::io::{BufRead, Write};
use tetris_stack_core::piece_generator::PieceGenerator;
use tetris_stack_core::piece_queue::PieceQueue;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum SessionState {
    Running,
    Exiting,
}

/// Interactive menu over a single piece queue.
///
/// Generic over its streams so scripted input can drive it.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
    queue: PieceQueue,
    generator: PieceGenerator,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Print the startup banner and fill the queue.
    pub fn start(input: R, mut output: W, mut generator: PieceGenerator) -> Result<Self> {
        writeln!(output, "Initializing the Tetris Stack piece queue...")
            .context("Unable to write banner")?;
        let queue = PieceQueue::initialize(&mut generator);
        info!("Session started with {} pieces queued", queue.len());
        Ok(Self {
            input,
            output,
            queue,
            generator,
        })
    }

    /// Run until the user exits or input ends. Returns the output stream.
    pub fn run(mut self) -> Result<W> {
        while self.step()? == SessionState::Running {}
        info!("Session ended, next piece id {}", self.generator.next_id());
        Ok(self.output)
    }

    fn step(&mut self) -> Result<SessionState> {
        write!(self.output, "\n{}", self.queue)?;
        self.write_menu()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Unable to read selection")?;
        if read == 0 {
            info!("Input closed, exiting");
            return self.farewell();
        }

        match Selection::parse(&line) {
            Ok(Selection::Play) => match self.queue.dequeue() {
                Ok(p) => writeln!(
                    self.output,
                    "\n[ACTION] Piece played (Type: {}, ID: {}) removed from front of queue.",
                    p.shape, p.id
                )?,
                Err(e) => writeln!(self.output, "\n[ERROR] {e}")?,
            },
            Ok(Selection::Insert) => match self.queue.enqueue(&mut self.generator) {
                Ok(p) => writeln!(
                    self.output,
                    "\n[ACTION] New piece generated (Type: {}, ID: {}) and added to back of queue.",
                    p.shape, p.id
                )?,
                Err(e) => writeln!(self.output, "\n[ERROR] {e}")?,
            },
            Ok(Selection::Exit) => return self.farewell(),
            Err(e) => writeln!(self.output, "\n[ERROR] {e}")?,
        }
        Ok(SessionState::Running)
    }

    fn write_menu(&mut self) -> Result<()> {
        write!(
            self.output,
            "\nAction options:\n\
             1. Play piece (dequeue)\n\
             2. Insert new piece (enqueue)\n\
             0. Exit\n\
             Choose your action: "
        )?;
        self.output.flush().context("Unable to flush prompt")
    }

    fn farewell(&mut self) -> Result<SessionState> {
        writeln!(self.output, "\nLeaving Tetris Stack... See you next time!")
            .context("Unable to write farewell")?;
        self.output.flush().context("Unable to flush farewell")?;
        Ok(SessionState::Exiting)
    }
}
