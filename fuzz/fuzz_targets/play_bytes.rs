#![no_main]

use chessrules::Chess;
use libfuzzer_sys::fuzz_target;

// Every byte selects one of the legal moves of the side to move.
fuzz_target!(|data: &[u8]| {
    let mut pos = Chess::default();

    for &byte in data {
        let legals = pos.legal_moves();
        if legals.is_empty() {
            assert!(pos.is_game_over());
            assert!(pos.determine_winner().is_ok());
            break;
        }

        let m = legals[usize::from(byte) % legals.len()];
        assert!(pos.is_legal(&m));

        let mut board = pos.board().clone();
        let before = board.render();
        board.apply(&m);
        assert!(!board.king_in_check(pos.turn()));
        board.revert_last();
        assert_eq!(board.render(), before);

        match pos.play(&m) {
            Ok(Some(_)) => {
                assert!(pos.play(&m).is_err());
                break;
            }
            Ok(None) => (),
            Err(err) => panic!("{err}"),
        }
    }
});
