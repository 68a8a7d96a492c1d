mod board;
mod cli;
mod error;
mod export;
mod palette;

use board::Board;
use cli::Cli;
use std::path::Path;
use std::process;
use structopt::StructOpt;

fn run(opt: &Cli) -> error::Result<()> {
    let board_path = Path::new(&opt.board);
    let image_path = Path::new(&opt.image);

    let board = Board::load(board_path)?;
    println!("Loaded {} rows from {}", board.size(), board_path.display());

    export::ppm::write_board(&board, image_path)?;
    println!("Wrote {}", image_path.display());

    export::scale::scale_in_place(image_path)?;
    println!("Scaled {} to 1600%", image_path.display());

    Ok(())
}

fn main() {
    let opt = Cli::from_args();

    if let Err(e) = run(&opt) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
