use prismatch_core::*;
use proptest::prelude::*;

/// Generous ceiling for the cascade depth of a single move under a seeded source.
const CASCADE_CEILING: usize = 50;

fn assert_settled(board: &Board) {
    assert!(board.is_full(), "settled board has an empty cell:\n{board}");
    assert!(find_matches(board).is_empty(), "settled board has a match:\n{board}");
}

fn check_report(report: &TurnReport, rules: ScoringRules) {
    let k = report.steps.len();
    assert!(k >= 1, "accepted move without a cascade");
    assert!(k <= CASCADE_CEILING, "cascade ran {k} iterations");
    assert_eq!(report.combo() as usize, k);

    let bonus: u32 = report.steps.iter().map(|step| step.award.bonus).sum();
    let expected: u32 = (2..=k as u32).map(|level| level * rules.combo_bonus).sum();
    assert_eq!(bonus, expected);

    for step in &report.steps {
        let cleared = step.cleared.iter().filter(|&&hit| hit).count() as u32;
        assert_eq!(step.award.base, cleared * rules.points_per_cell);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_clicks_keep_session_invariants(
        seed in any::<u64>(),
        clicks in prop::collection::vec((0u8..9, 0u8..9), 0..200),
    ) {
        let config = GameConfig::new(8, 12);
        let mut game = GameSession::seeded(config, seed);
        assert_settled(game.board());

        for (row, col) in clicks {
            let before = game.clone();
            let Transition { session, outcome } = game.select(Position::new(row, col));

            prop_assert!(session.score() >= before.score());
            match &outcome {
                SelectOutcome::Accepted { report, game_over } => {
                    prop_assert_eq!(session.moves_remaining() + 1, before.moves_remaining());
                    prop_assert_eq!(session.combo() as usize, report.steps.len());
                    prop_assert_eq!(session.score() - before.score(), report.points());
                    prop_assert_eq!(*game_over, session.moves_remaining() == 0);
                    check_report(report, config.scoring);
                }
                SelectOutcome::Rejected { .. } => {
                    prop_assert_eq!(session.board(), before.board());
                    prop_assert_eq!(session.moves_remaining(), before.moves_remaining());
                    prop_assert_eq!(session.combo(), 0);
                }
                SelectOutcome::Selected(_) | SelectOutcome::Ignored => {
                    prop_assert_eq!(session.board(), before.board());
                    prop_assert_eq!(session.moves_remaining(), before.moves_remaining());
                    prop_assert_eq!(session.score(), before.score());
                }
            }
            if before.is_game_over() {
                prop_assert_eq!(&outcome, &SelectOutcome::Ignored);
            }
            assert_settled(session.board());
            game = session;
        }
    }

    #[test]
    fn reset_always_yields_a_fresh_playable_board(seed in any::<u64>(), size in 3u8..=12) {
        let game = GameSession::seeded(GameConfig::new(size, 5), seed);
        let fresh = game.reset();

        prop_assert_eq!(fresh.board().size(), size);
        prop_assert_eq!(fresh.score(), 0);
        prop_assert_eq!(fresh.moves_remaining(), 5);
        assert_settled(fresh.board());
    }
}

#[test]
fn hinted_games_run_to_completion_within_the_cascade_ceiling() {
    for seed in 0..200 {
        let mut engine = PlayEngine::seeded(GameConfig::default(), seed);

        while !engine.is_game_over() {
            let Some((from, to)) = engine.session().hint() else {
                // dead boards are left to the caller
                break;
            };
            let outcome = engine.swap(from, to);
            let SelectOutcome::Accepted { report, .. } = &outcome else {
                panic!("seed {seed}: hinted swap {from} <-> {to} was not accepted: {outcome:?}");
            };
            check_report(report, ScoringRules::default());
            assert_settled(engine.board());
        }

        if engine.is_game_over() {
            assert_eq!(engine.moves_remaining(), 0);
            assert_eq!(engine.accepted_moves(), u32::from(GameConfig::DEFAULT_MOVES));
            assert_eq!(engine.session().final_score(), Some(engine.score()));
        }
    }
}

#[test]
fn turn_report_serializes_for_the_presentation_layer() {
    let (mut engine, (from, to)) = (0..100)
        .map(|seed| PlayEngine::seeded(GameConfig::default(), seed))
        .find_map(|engine| {
            let hint = engine.session().hint()?;
            Some((engine, hint))
        })
        .expect("some seed starts with a legal move");

    let SelectOutcome::Accepted { report, .. } = engine.swap(from, to) else {
        panic!("hinted swap was rejected");
    };

    let json = serde_json::to_string(&report).unwrap();
    let decoded: TurnReport = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, report);
    assert_eq!(decoded.final_board(), engine.board());
}
