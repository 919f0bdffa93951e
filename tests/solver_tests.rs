use masterand::solver::MAX_SOLVER_GUESSES;
use masterand::Color::*;
use masterand::{Code, CodeBreaker, ColorPool, FeedbackPattern, GameConfig, Session};

fn get_test_pool() -> ColorPool {
    ColorPool::new(vec![Red, Blue, Green, Yellow, Cyan]).unwrap()
}

#[test]
fn test_breaker_creation() {
    let breaker = CodeBreaker::new(&get_test_pool()).unwrap();
    assert_eq!(breaker.remaining_count(), 120);
    assert_eq!(breaker.all_codes().len(), 120);
}

#[test]
fn test_breaker_needs_four_colors() {
    let pool = ColorPool::new(vec![Red, Blue, Green]).unwrap();
    assert!(CodeBreaker::new(&pool).is_err());
}

#[test]
fn test_apply_feedback() {
    let mut breaker = CodeBreaker::new(&get_test_pool()).unwrap();
    let guess = Code::new([Red, Blue, Green, Yellow]);
    let target = Code::new([Blue, Red, Green, Cyan]);

    breaker.apply_feedback(&guess, FeedbackPattern::calculate(&guess, &target));

    assert!(breaker.remaining_count() < 120);
    assert!(breaker.possible_targets().contains(&target));
    assert!(!breaker.possible_targets().contains(&guess));
}

#[test]
fn test_find_best_guess() {
    let breaker = CodeBreaker::new(&get_test_pool()).unwrap();
    let best = breaker.find_best_guess().unwrap();

    assert!(best.entropy > 0.0);
    assert!(best.code.is_distinct());
    assert!(best.expected_remaining < 120.0);
}

#[test]
fn test_top_guesses_sorted() {
    let breaker = CodeBreaker::new(&get_test_pool()).unwrap();
    let top = breaker.find_best_guesses(5);

    assert_eq!(top.len(), 5);
    for pair in top.windows(2) {
        assert!(pair[0].entropy >= pair[1].entropy);
    }
}

#[test]
fn test_find_best_guess_single_answer() {
    let mut breaker = CodeBreaker::new(&get_test_pool()).unwrap();
    let target = Code::new([Cyan, Yellow, Blue, Red]);
    breaker.apply_feedback(&target, FeedbackPattern::ALL_HIT);

    assert_eq!(breaker.remaining_count(), 1);
    let analysis = breaker.find_best_guess().unwrap();
    assert_eq!(analysis.code, target);
    assert_eq!(analysis.entropy, 0.0);
}

#[test]
fn test_solve_for_target() {
    let mut breaker = CodeBreaker::new(&get_test_pool()).unwrap();
    let target = Code::new([Yellow, Cyan, Red, Blue]);

    let guesses = breaker.solve_for_target(&target);

    assert!(!guesses.is_empty());
    assert!(guesses.len() <= MAX_SOLVER_GUESSES);
    let (final_guess, final_pattern) = guesses.last().unwrap();
    assert!(final_pattern.is_win());
    assert_eq!(*final_guess, target);
}

#[test]
fn test_solve_every_target() {
    let breaker = CodeBreaker::new(&get_test_pool()).unwrap();

    for target in breaker.all_codes() {
        let mut solver = breaker.clone();
        let guesses = solver.solve_for_target(target);
        assert!(
            guesses.last().map(|(_, p)| p.is_win()).unwrap_or(false),
            "failed to solve {target}"
        );
    }
}

#[test]
fn test_guess_distribution_covers_all_targets() {
    let breaker = CodeBreaker::new(&get_test_pool()).unwrap();
    let distribution = breaker.benchmark_guess_distribution();

    let total: usize = distribution.iter().map(|(_, count)| count).sum();
    assert_eq!(total, 120);
    assert!(distribution.iter().all(|(guesses, _)| *guesses >= 1));
    assert!(breaker.benchmark_average_guesses() >= 1.0);
}

#[test]
fn test_history_narrows_candidates() {
    let pool = get_test_pool();
    let target = Code::new([Cyan, Blue, Yellow, Green]);
    let mut session = Session::with_target(GameConfig::default(), pool.clone(), target).unwrap();
    session.submit().unwrap();
    session.rotate_slot(2).unwrap();
    session.submit().unwrap();

    let mut breaker = CodeBreaker::new(&pool).unwrap();
    breaker.apply_history(session.history());

    assert!(breaker.remaining_count() < 120);
    assert!(breaker.possible_targets().contains(&target));
    for (_, entry) in session.history().iter() {
        for candidate in breaker.possible_targets() {
            assert_eq!(FeedbackPattern::calculate(&entry.guess, candidate), entry.feedback);
        }
    }
}
