//! End-to-end tests: session and HTTP client against an in-process authority.

use noughts::{AuthorityError, HttpAuthority, Mark, MoveAuthority, Session, Winner};

/// Serves the bundled authority on an ephemeral port and returns its URL.
async fn spawn_authority() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, noughts::router()).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_new_game_returns_nine_empty_playable_cells() {
    let authority = HttpAuthority::new(spawn_authority().await);
    let grid = authority.new_game().await.unwrap();

    assert_eq!(grid.cells.len(), 9);
    assert!(grid.cells.iter().all(|c| c.text.is_empty()));
    assert!(grid.cells.iter().all(|c| c.playable));
    for (i, cell) in grid.cells.iter().enumerate() {
        assert_eq!(cell.index(), i);
    }
}

#[tokio::test]
async fn test_first_play_places_x_and_flips_turn() {
    let mut session = Session::new(HttpAuthority::new(spawn_authority().await));
    session.new_game().await.unwrap();

    session.play(0, 0).await.unwrap();

    let placed = &session.cells()[0];
    assert_eq!(placed.text.mark(), Some(Mark::X));
    assert!(!placed.playable);
    assert!(!session.is_over());
    assert!(session.can_undo());
    assert_eq!(*session.current_player(), Mark::O);
}

#[tokio::test]
async fn test_playing_out_a_win_highlights_the_top_row() {
    let mut session = Session::new(HttpAuthority::new(spawn_authority().await));
    session.new_game().await.unwrap();

    // X takes the top row while O fills the middle.
    session.play(0, 0).await.unwrap();
    session.play(0, 1).await.unwrap();
    session.play(1, 0).await.unwrap();
    session.play(1, 1).await.unwrap();
    session.play(2, 0).await.unwrap();

    assert_eq!(session.winner(), Some(Winner::Mark(Mark::X)));
    assert_eq!(session.winning_cells(), Some([0, 1, 2]));
    assert!(!session.can_undo());
    assert_eq!(session.history().len(), 5);

    // The authority marks every cell unplayable once the game is over.
    assert!(session.cells().iter().all(|c| !c.playable));
}

#[tokio::test]
async fn test_occupied_cell_is_rejected_and_state_is_unchanged() {
    let mut session = Session::new(HttpAuthority::new(spawn_authority().await));
    session.new_game().await.unwrap();
    session.play(1, 1).await.unwrap();

    let before_player = *session.current_player();
    let before_len = session.history().len();

    let result = session.play(1, 1).await;
    assert!(matches!(result, Err(AuthorityError::IllegalMove { .. })));
    assert_eq!(*session.current_player(), before_player);
    assert_eq!(session.history().len(), before_len);
}

#[tokio::test]
async fn test_off_board_coordinates_are_rejected() {
    let mut session = Session::new(HttpAuthority::new(spawn_authority().await));
    session.new_game().await.unwrap();

    let result = session.play(3, 0).await;
    assert!(matches!(result, Err(AuthorityError::IllegalMove { .. })));
    assert_eq!(*session.current_player(), Mark::X);
}

#[tokio::test]
async fn test_play_then_undo_round_trips() {
    let mut session = Session::new(HttpAuthority::new(spawn_authority().await));
    session.new_game().await.unwrap();
    session.play(2, 2).await.unwrap();
    assert_eq!(*session.current_player(), Mark::O);

    session.undo().await.unwrap();

    assert!(session.cells().iter().all(|c| c.text.is_empty()));
    assert_eq!(*session.current_player(), Mark::X);
    assert_eq!(session.history().len(), 0);
    assert!(!session.can_undo());
}

#[tokio::test]
async fn test_undo_with_no_moves_is_rejected_by_the_authority() {
    let authority = HttpAuthority::new(spawn_authority().await);
    authority.new_game().await.unwrap();

    // The session never issues this call; exercise the raw client.
    let result = authority.undo().await;
    assert!(matches!(result, Err(AuthorityError::IllegalMove { .. })));
}

#[tokio::test]
async fn test_playing_out_a_draw() {
    let mut session = Session::new(HttpAuthority::new(spawn_authority().await));
    session.new_game().await.unwrap();

    // X: 0, 1, 5, 6, 8 / O: 2, 3, 4, 7 (indices), reaching
    //   X X O
    //   O O X
    //   X O X
    for (x, y) in [
        (0, 0),
        (2, 0),
        (1, 0),
        (0, 1),
        (2, 1),
        (1, 1),
        (0, 2),
        (1, 2),
        (2, 2),
    ] {
        session.play(x, y).await.unwrap();
    }

    assert_eq!(session.winner(), Some(Winner::Draw));
    assert_eq!(session.winning_cells(), None);
    assert!(session.is_over());
    assert_eq!(session.history().len(), 9);
    assert!(!session.can_undo());
}

#[tokio::test]
async fn test_new_game_resets_a_finished_board() {
    let mut session = Session::new(HttpAuthority::new(spawn_authority().await));
    session.new_game().await.unwrap();
    session.play(0, 0).await.unwrap();
    session.play(0, 1).await.unwrap();

    session.new_game().await.unwrap();

    assert!(session.cells().iter().all(|c| c.text.is_empty()));
    assert_eq!(*session.current_player(), Mark::X);
    assert!(session.history().is_empty());
    assert_eq!(session.winner(), None);
}
