use codebreaker::{score, CodeSolver, ColorTable, Error, Feedback, Key, Palette};

fn small_palette() -> Palette {
    "abcde".parse().unwrap()
}

#[test]
fn test_solver_creation() {
    let solver = CodeSolver::new(&small_palette(), 3).unwrap();
    assert_eq!(solver.remaining_count(), 5 * 4 * 3);
    assert!(solver.all_keys().iter().all(|k| !k.has_repeats()));
}

#[test]
fn test_default_palette_key_count() {
    let colors = ColorTable::default();
    let solver = CodeSolver::new(colors.palette(), 3).unwrap();
    assert_eq!(solver.remaining_count(), 7 * 6 * 5);
}

#[test]
fn test_invalid_length() {
    let err = CodeSolver::new(&small_palette(), 6).unwrap_err();
    assert_eq!(err, Error::InvalidLength { length: 6, palette_size: 5 });
}

#[test]
fn test_apply_feedback() {
    let mut solver = CodeSolver::new(&small_palette(), 3).unwrap();
    let secret = Key::from("cab");
    let guess = Key::from("abc");

    let feedback = score(&secret, &guess).unwrap();
    solver.apply_feedback(&guess, feedback).unwrap();

    assert!(solver.remaining_count() < 60);
    assert!(solver.possible_answers().contains(&secret));
    for candidate in solver.possible_answers() {
        assert_eq!(score(candidate, &guess).unwrap(), feedback);
    }
}

#[test]
fn test_apply_feedback_length_mismatch() {
    let mut solver = CodeSolver::new(&small_palette(), 3).unwrap();
    let err = solver
        .apply_feedback(&Key::from("ab"), Feedback::new(0, 0))
        .unwrap_err();
    assert_eq!(err, Error::LengthMismatch { secret: 3, guess: 2 });
}

#[test]
fn test_find_best_guess() {
    let solver = CodeSolver::new(&small_palette(), 3).unwrap();
    let analysis = solver.find_best_guess().unwrap();
    assert_eq!(analysis.key.len(), 3);
    assert!(analysis.entropy > 0.0);
}

#[test]
fn test_entropy_calculation() {
    let solver = CodeSolver::new(&small_palette(), 2).unwrap();
    let entropy = solver.calculate_entropy_for_guess(&Key::from("ab")).unwrap();
    assert!(entropy > 0.0);
    assert!(entropy <= (Feedback::num_patterns(2) as f64).log2());
}

#[test]
fn test_find_best_guesses_sorted() {
    let solver = CodeSolver::new(&small_palette(), 3).unwrap();
    let top = solver.find_best_guesses(5);
    assert_eq!(top.len(), 5);
    for i in 1..top.len() {
        assert!(top[i - 1].entropy >= top[i].entropy);
    }
}

#[test]
fn test_solve_every_secret() {
    let palette = small_palette();
    let mut solver = CodeSolver::new(&palette, 3).unwrap();
    let secrets = solver.all_keys().to_vec();

    for secret in &secrets {
        solver.reset();
        let guesses = solver.solve_for_secret(secret, 10).unwrap();

        let (final_guess, final_feedback) = guesses.last().unwrap();
        assert!(final_feedback.is_win(3), "didn't solve {}", secret);
        assert_eq!(final_guess, secret);
        assert!(guesses.len() <= 10);
    }
}

#[test]
fn test_solve_with_default_colors() {
    let colors = ColorTable::default();
    let mut solver = CodeSolver::new(colors.palette(), 3).unwrap();

    for secret in ["nar", "zpv", "cra"] {
        solver.reset();
        let secret = Key::from(secret);
        let guesses = solver.solve_for_secret(&secret, 10).unwrap();
        assert_eq!(guesses.last().map(|(k, _)| k), Some(&secret));
    }
}

#[test]
fn test_reset() {
    let mut solver = CodeSolver::new(&small_palette(), 3).unwrap();
    solver
        .apply_feedback(&Key::from("abc"), Feedback::new(0, 0))
        .unwrap();
    assert!(solver.remaining_count() < 60);

    solver.reset();
    assert_eq!(solver.remaining_count(), 60);
}

#[test]
fn test_impossible_feedback_empties_candidates() {
    let mut solver = CodeSolver::new(&small_palette(), 3).unwrap();
    // three distinct colors can never score two exact and one color hit
    solver
        .apply_feedback(&Key::from("abc"), Feedback::new(2, 1))
        .unwrap();

    assert_eq!(solver.remaining_count(), 0);
    assert!(solver.find_best_guess().is_none());
}

#[test]
fn test_benchmark_distribution_covers_every_key() {
    let solver = CodeSolver::new(&"abcd".parse().unwrap(), 2).unwrap();
    let distribution = solver.benchmark_guess_distribution(10);
    let total: usize = distribution.iter().map(|(_, c)| c).sum();
    assert_eq!(total, 12);
}

#[test]
fn test_from_history_matches_incremental_pruning() {
    let palette = small_palette();
    let secret = Key::from("dea");
    let history: Vec<(Key, Feedback)> = ["abc", "cde"]
        .iter()
        .map(|g| {
            let guess = Key::from(*g);
            let feedback = score(&secret, &guess).unwrap();
            (guess, feedback)
        })
        .collect();

    let mut incremental = CodeSolver::new(&palette, 3).unwrap();
    for (guess, feedback) in &history {
        incremental.apply_feedback(guess, *feedback).unwrap();
    }
    let replayed = CodeSolver::from_history(&palette, 3, &history).unwrap();

    assert_eq!(replayed.possible_answers(), incremental.possible_answers());
    assert!(replayed.possible_answers().contains(&secret));
}

#[test]
fn test_two_remaining_honors_requested_count() {
    let palette: Palette = "ab".parse().unwrap();
    let solver = CodeSolver::new(&palette, 2).unwrap();
    assert_eq!(solver.remaining_count(), 2);

    assert!(solver.find_best_guesses(0).is_empty());
    assert_eq!(solver.find_best_guesses(5).len(), 1);
    assert!(solver.find_best_guess().unwrap().is_possible_answer);
}
