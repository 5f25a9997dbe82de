//! End-to-end session flows through the public registry interface.

use parlor_games::{
    tictactoe, Cell, Difficulty, EngineConfig, EngineError, GameKind, Outcome, PromptKey,
    SessionRegistry, Side,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

fn first_open(board: &[Vec<Cell>]) -> usize {
    board
        .iter()
        .flatten()
        .position(|&cell| cell == Cell::Empty)
        .expect("Board has no open cell")
}

fn count(board: &[Vec<Cell>], side: Side) -> usize {
    board
        .iter()
        .flatten()
        .filter(|&&cell| cell == Cell::Taken(side))
        .count()
}

fn line_winner(board: &[Vec<Cell>]) -> Option<Side> {
    for line in tictactoe::LINES {
        for side in [Side::Human, Side::Machine] {
            if line
                .iter()
                .all(|&pos| board[pos / 3][pos % 3] == Cell::Taken(side))
            {
                return Some(side);
            }
        }
    }
    None
}

#[tokio::test]
async fn test_line_game_runs_to_round_complete_and_quit() {
    init_tracing();
    let registry =
        SessionRegistry::with_config(GameKind::TicTacToe, EngineConfig::new(0, Some(23)));

    // Start renders the menu
    let menu = registry.start_session(4);
    assert_eq!(menu.prompt, PromptKey::ChooseDifficulty);
    assert_eq!(
        menu.choices,
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    );
    assert_eq!(menu.to_move, None);

    // Pick the search opponent and play the first open cell each turn
    let mut state = registry
        .select_difficulty(4, Difficulty::Hard)
        .await
        .expect("Offered difficulty failed");
    let mut moves = 0;
    while !state.terminal {
        moves += 1;
        assert!(moves <= 5, "Round failed to terminate");
        assert_eq!(state.to_move, Some(Side::Human));
        assert_eq!(state.outcome, None);

        // The round must not linger past a completed triple
        assert_eq!(line_winner(&state.board), None);

        // Center first, then whatever is open
        let open = if state.board[1][1] == Cell::Empty {
            4
        } else {
            first_open(&state.board)
        };
        state = registry.apply_move(4, open).await.expect("Open cell failed");
    }

    // Terminal only on a triple or a full board, and never a human win
    let winner = line_winner(&state.board);
    let filled = count(&state.board, Side::Human) + count(&state.board, Side::Machine);
    assert!(winner.is_some() || filled == 9);
    assert_ne!(winner, Some(Side::Human), "Search opponent lost");
    assert_eq!(state.prompt, PromptKey::PlayAgain);
    match winner {
        Some(side) => assert_eq!(state.outcome, Some(Outcome::Winner(side))),
        None => assert_eq!(state.outcome, Some(Outcome::Draw)),
    }

    // The score carries into the rematch and out through quit
    let tally = state.tally;
    let state = registry.play_again(4).await.expect("Rematch failed");
    assert_eq!(state.tally, tally);
    assert!(!state.terminal);
    assert_eq!(state.to_move, Some(Side::Human));

    let stats = registry.quit_session(4).await.expect("Quit failed");
    assert_eq!(stats, tally);
    assert!(!registry.has_session(4));
}

#[tokio::test]
async fn test_capture_game_flow_with_probing_moves() {
    init_tracing();
    let registry =
        SessionRegistry::with_config(GameKind::Reversi, EngineConfig::new(0, Some(31)));

    let menu = registry.start_session(9);
    assert_eq!(menu.choices, vec![Difficulty::Easy]);
    assert_eq!(
        count(&menu.board, Side::Human) + count(&menu.board, Side::Machine),
        4
    );

    // The capture game has no stronger opponents to offer
    assert_eq!(
        registry.select_difficulty(9, Difficulty::Medium).await,
        Err(EngineError::IllegalMove)
    );

    let mut state = registry
        .select_difficulty(9, Difficulty::Easy)
        .await
        .expect("Offered difficulty failed");

    // Probe cells until one is accepted; rejections must not advance
    // the game
    let mut turns = 0;
    while !state.terminal {
        turns += 1;
        assert!(turns <= 70, "Playout failed to terminate");
        assert_eq!(state.to_move, Some(Side::Human));

        let mut played = false;
        for pos in 0..64 {
            match registry.apply_move(9, pos).await {
                Ok(next) => {
                    state = next;
                    played = true;
                    break;
                }
                Err(EngineError::IllegalMove) => continue,
                Err(other) => panic!("unexpected rejection: {}", other),
            }
        }
        assert!(played, "No cell was accepted on the human's turn");
    }

    // Piece counts decide the round
    assert_eq!(state.prompt, PromptKey::PlayAgain);
    let human = count(&state.board, Side::Human);
    let machine = count(&state.board, Side::Machine);
    let expected = match human.cmp(&machine) {
        std::cmp::Ordering::Greater => Outcome::Winner(Side::Human),
        std::cmp::Ordering::Less => Outcome::Winner(Side::Machine),
        std::cmp::Ordering::Equal => Outcome::Draw,
    };
    assert_eq!(state.outcome, Some(expected));
    let wins = state.tally.human_wins + state.tally.machine_wins;
    match expected {
        Outcome::Winner(_) => assert_eq!(wins, 1),
        Outcome::Draw => assert_eq!(wins, 0),
    }

    let stats = registry.quit_session(9).await.expect("Quit failed");
    assert_eq!(stats, state.tally);
    assert!(!registry.has_session(9));
}
