//! Tests for the undo history stack.

use noughts::{Cell, History, Mark, Snapshot, Token};

fn empty_cells() -> Vec<Cell> {
    (0..9)
        .map(|i| Cell {
            x: (i % 3) as u8,
            y: (i / 3) as u8,
            text: Token::Empty,
            playable: true,
        })
        .collect()
}

fn snapshot(player: Mark) -> Snapshot {
    Snapshot {
        cells: empty_cells(),
        player,
    }
}

#[test]
fn test_push_then_pop_restores_length() {
    let mut history = History::new();
    history.push(snapshot(Mark::X));
    assert_eq!(history.len(), 1);

    let remaining = history.pop();
    assert_eq!(history.len(), 0);
    assert!(!remaining);
}

#[test]
fn test_pop_on_empty_is_a_safe_noop() {
    let mut history = History::new();
    assert!(!history.pop());
    assert_eq!(history.len(), 0);
    assert!(history.is_empty());
}

#[test]
fn test_pop_reports_remaining_undo() {
    let mut history = History::new();
    history.push(snapshot(Mark::X));
    history.push(snapshot(Mark::O));
    history.push(snapshot(Mark::X));

    assert!(history.pop());
    assert!(history.pop());
    assert!(!history.pop());
    assert!(history.is_empty());
}

#[test]
fn test_snapshots_are_independent_copies() {
    let mut cells = empty_cells();
    let mut history = History::new();
    history.push(Snapshot {
        cells: cells.clone(),
        player: Mark::X,
    });

    // Mutating the live board must never alter the stored snapshot.
    cells[4].text = Token::X;
    cells[4].playable = false;

    let stored = &history.entries()[0];
    assert_eq!(stored.cells[4].text, Token::Empty);
    assert!(stored.cells[4].playable);
}

#[test]
fn test_entries_are_ordered_oldest_first() {
    let mut history = History::new();
    history.push(snapshot(Mark::X));
    history.push(snapshot(Mark::O));

    let players: Vec<Mark> = history.entries().iter().map(|s| s.player).collect();
    assert_eq!(players, vec![Mark::X, Mark::O]);
}
