use itertools::Itertools;
use log::info;
use rubik_core::{
    Cube, Face, Stage,
    notation::{format_sequence, invert_sequence, parse_sequence},
    solver::{plan, solve, solve_next_step, step},
    utilities::{is_solved, shuffle},
};

#[test_log::test]
fn test_scramble_then_solve() {
    let mut cube = Cube::new();
    shuffle(&mut cube, 50, &mut fastrand::Rng::with_seed(50));
    assert!(!is_solved(&cube));

    let solution = solve(&mut cube, Face::Down).unwrap();
    assert!(is_solved(&cube));
    info!("{}", format_sequence(&solution.moves()));
}

#[test_log::test]
fn test_convergence_over_seeds_and_bases() {
    let mut lengths = vec![];
    for seed in 0..300 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let steps = rng.usize(0..80);
        let base = Face::ALL[rng.usize(..Face::ALL.len())];

        let mut cube = Cube::new();
        shuffle(&mut cube, steps, &mut rng);
        let solution = solve(&mut cube, base)
            .unwrap_or_else(|e| panic!("seed {seed} with base {base}: {e}"));
        assert!(is_solved(&cube), "seed {seed} with base {base}");
        lengths.push(solution.len());
    }
    info!(
        "Longest solution was {} moves",
        lengths.iter().max().copied().unwrap_or_default()
    );
}

#[test_log::test]
fn test_every_base_face() {
    for base in Face::ALL {
        let mut cube = Cube::new();
        shuffle(&mut cube, 30, &mut fastrand::Rng::with_seed(base as u64));
        solve(&mut cube, base).unwrap();
        assert!(is_solved(&cube));
    }
}

#[test_log::test]
fn test_stages_never_regress() {
    let mut cube = Cube::new();
    shuffle(&mut cube, 60, &mut fastrand::Rng::with_seed(99));

    let mut seen = vec![];
    while let Some(stage_moves) = step(&mut cube, Face::Down).unwrap() {
        let reached = Stage::ALL
            .iter()
            .take_while(|stage| stage.is_reached(&cube, Face::Down))
            .count();
        assert!(reached > stage_moves.stage as usize);
        seen.push(stage_moves.stage);
    }
    assert!(seen.iter().tuple_windows().all(|(a, b)| a < b));
    assert_eq!(solve_next_step(&cube, Face::Down), None);
}

#[test_log::test]
fn test_identical_cubes_solve_identically() {
    let mut a = Cube::new();
    shuffle(&mut a, 45, &mut fastrand::Rng::with_seed(3));
    let mut b = a.clone();

    let first = solve(&mut a, Face::Down).unwrap();
    let second = solve(&mut b, Face::Down).unwrap();
    assert_eq!(first, second);
    assert_eq!(plan(&Cube::new(), Face::Down).unwrap().len(), 0);
}

#[test_log::test]
fn test_undoing_a_scramble_with_notation() {
    let scramble = parse_sequence("R2 D' B L' U F2 r x' D2 y").unwrap();
    let mut cube = Cube::new();
    cube.apply_all(&scramble);

    let solution = plan(&cube, Face::Down).unwrap();
    let mut replay = cube.clone();
    replay.apply_all(&solution.moves());
    assert!(is_solved(&replay));

    cube.apply_all(&invert_sequence(&scramble));
    assert_eq!(cube, Cube::new());
}
