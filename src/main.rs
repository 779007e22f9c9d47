use anyhow::Result;
use clap::Parser;
use cli_options::StackArgs;
use session::Session;
use std::io;
use tetris_stack_core::piece_generator::PieceGenerator;

mod cli_options;
mod logging;
mod selection;
mod session;

fn main() -> Result<()> {
    let args = StackArgs::parse();
    logging::init(args.log_level.into())?;

    let generator = PieceGenerator::new(args.generator_config());
    let session = Session::start(io::stdin().lock(), io::stdout().lock(), generator)?;
    session.run()?;
    Ok(())
}
