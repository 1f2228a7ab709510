use std::{
    fs::File,
    io::{prelude::*, BufReader},
};

use chessrules::{perft, Chess, Color, Piece, Rules, Setup, Square};

/// Runs a perft suite. A position is given as `position <turn>` followed
/// by 8 board rows, rank 8 first, with `.` for empty squares. Each
/// `perft <depth> <nodes>` line checks the current position.
fn test_perft_file(path: &str, node_limit: u64) {
    let file = File::open(path).expect("failed to open test suite");
    let mut lines = BufReader::new(file).lines().map(|l| l.unwrap());

    let mut pos = Chess::default();

    while let Some(line) = lines.next() {
        println!("{}", line);

        let trimmed = line.trim();
        let mut slices = trimmed.splitn(2, ' ');

        match slices.next() {
            Some("position") => {
                let mut setup = Setup::empty();
                setup.turn = slices
                    .next()
                    .expect("missing turn")
                    .parse::<Color>()
                    .expect("invalid turn");

                for rank in (0..8).rev() {
                    let row = lines.next().expect("missing board row");
                    println!("{}", row);
                    for (file, ch) in (0..).zip(row.chars()) {
                        if let Some(piece) = Piece::from_char(ch) {
                            let sq = Square::from_coords(rank, file).expect("square on board");
                            setup.board.place(sq, piece);
                        }
                    }
                }

                pos = Chess::from_setup(setup, Rules::default()).expect("legal position");
            }
            Some("perft") => {
                let mut params = slices.next().expect("missing perft params").splitn(2, ' ');

                let depth = params
                    .next()
                    .expect("missing perft depth")
                    .parse()
                    .expect("depth not an integer");

                let nodes = params
                    .next()
                    .expect("missing perft nodes")
                    .parse()
                    .expect("nodes not an integer");

                if nodes <= node_limit {
                    assert_eq!(perft(&pos, depth), nodes);
                }
            }
            _ => {}
        }
    }
}

macro_rules! gen_tests {
    ($($fn_name:ident, $path:tt, $num:expr,)+) => {
        $(
            #[test]
            #[cfg_attr(miri, ignore)]
            fn $fn_name() {
                test_perft_file($path, $num);
            }
        )+
    }
}

gen_tests! {
    test_startpos,    "tests/startpos.perft",     10_000,
    test_castling,    "tests/castling.perft",     20_000,
    test_crowded,     "tests/crowded.perft",         1_000,
}

#[test]
#[ignore = "slow without optimizations"]
fn test_startpos_depth_4() {
    assert_eq!(perft(&Chess::default(), 4), 197_281);
}
