//! Rotation, undo and win-check laws over every supported cube size.

use cubik_core::{Axis, Coord3, CubeSize, Direction, RotationCommand, Turn, UndoError};
use cubik_engine::{
    generate_shuffle, generate_shuffle_seeded, is_solved, undo, MoveHistory, RotationEngine,
};
use cubik_grid::{compliance, CubeGrid};
use cubik_test_utils::{
    all_commands, grid_with_swapped_labels, scrambled_grid, solved_grid, ScriptedMoves,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────

fn apply_all(grid: &mut CubeGrid, cmds: &[RotationCommand]) -> MoveHistory {
    let mut engine = RotationEngine::default();
    let mut history = MoveHistory::new();
    for &cmd in cmds {
        engine.apply(grid, &mut history, cmd).unwrap();
    }
    history
}

fn arb_command(n: usize) -> impl Strategy<Value = RotationCommand> {
    (
        prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)],
        0..n,
        prop_oneof![Just(Turn::Positive), Just(Turn::Negative)],
    )
        .prop_map(|(axis, layer, turn)| RotationCommand::new(axis, layer, turn))
}

fn arb_sized_script() -> impl Strategy<Value = (usize, Vec<RotationCommand>)> {
    (2usize..=6).prop_flat_map(|n| (Just(n), prop::collection::vec(arb_command(n), 0..30)))
}

// ── Structural invariants ───────────────────────────────────────

#[test]
fn every_single_command_preserves_structure() {
    for n in 2..=6 {
        for cmd in all_commands(n) {
            let mut grid = solved_grid(n);
            apply_all(&mut grid, &[cmd]);
            compliance::run_full_compliance(&grid);
        }
    }
}

#[test]
fn fresh_grids_are_solved() {
    for size in CubeSize::all() {
        assert!(is_solved(&solved_grid(size.get())));
    }
}

// ── Scripted scenarios ──────────────────────────────────────────

#[test]
fn middle_layer_there_and_back() {
    let mut grid = solved_grid(3);
    let original = grid.clone();
    apply_all(
        &mut grid,
        &[
            RotationCommand::new(Axis::Y, 1, Turn::Positive),
            RotationCommand::new(Axis::Y, 1, Turn::Negative),
        ],
    );
    assert_eq!(grid, original);
}

#[test]
fn shuffle_then_undo_five_times() {
    let mut grid = solved_grid(3);
    let original = grid.clone();
    let mut engine = RotationEngine::default();
    let mut history = MoveHistory::new();
    let size = grid.size();
    for cmd in generate_shuffle(size, 5) {
        engine.apply(&mut grid, &mut history, cmd).unwrap();
    }
    for _ in 0..5 {
        undo(&mut engine, &mut grid, &mut history).unwrap();
    }
    assert_eq!(grid, original);
    assert_eq!(
        undo(&mut engine, &mut grid, &mut history),
        Err(UndoError::EmptyHistory)
    );
}

#[test]
fn scripted_mix_unwinds_in_reverse() {
    let script = ScriptedMoves::mixed_3x3();
    let mut grid = solved_grid(3);
    apply_all(&mut grid, &script);
    assert!(!is_solved(&grid));
    compliance::run_full_compliance(&grid);

    let reverse: Vec<RotationCommand> = script.iter().rev().map(|c| c.inverse()).collect();
    apply_all(&mut grid, &reverse);
    assert_eq!(grid, solved_grid(3));
}

#[test]
fn swapped_labels_break_the_solution() {
    let grid = solved_grid(3);
    assert!(is_solved(&grid));
    let corner = Coord3::new(2, 2, 2);
    let broken = grid_with_swapped_labels(&grid, corner, Direction::Top, Direction::East);
    assert!(!is_solved(&broken));
}

#[test]
fn seeded_scrambles_match() {
    let (a, cmds_a) = scrambled_grid(5, 40, 99);
    let (b, cmds_b) = scrambled_grid(5, 40, 99);
    assert_eq!(cmds_a, cmds_b);
    assert_eq!(a, b);
    let size = a.size();
    let regenerated: Vec<_> = generate_shuffle_seeded(size, 40, 99).collect();
    assert_eq!(regenerated, cmds_a);
}

// ── Algebraic laws ──────────────────────────────────────────────

proptest! {
    #[test]
    fn random_scripts_preserve_structure((n, script) in arb_sized_script()) {
        let mut grid = solved_grid(n);
        apply_all(&mut grid, &script);
        compliance::run_full_compliance(&grid);
    }

    #[test]
    fn four_quarter_turns_are_identity(
        (n, script) in arb_sized_script(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut grid = solved_grid(n);
        apply_all(&mut grid, &script);
        let before = grid.clone();
        let cmds = all_commands(n);
        let cmd = cmds[pick.index(cmds.len())];
        apply_all(&mut grid, &[cmd, cmd, cmd, cmd]);
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn command_then_inverse_is_identity(
        (n, script) in arb_sized_script(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut grid = solved_grid(n);
        apply_all(&mut grid, &script);
        let before = grid.clone();
        let cmds = all_commands(n);
        let cmd = cmds[pick.index(cmds.len())];
        apply_all(&mut grid, &[cmd, cmd.inverse()]);
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn undo_unwinds_any_script((n, script) in arb_sized_script()) {
        let mut grid = solved_grid(n);
        let original = grid.clone();
        let mut engine = RotationEngine::default();
        let mut history = apply_all(&mut grid, &script);
        for _ in 0..script.len() {
            undo(&mut engine, &mut grid, &mut history).unwrap();
        }
        prop_assert!(history.is_empty());
        prop_assert_eq!(grid, original);
    }
}
