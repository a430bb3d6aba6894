#[cfg(test)]
mod tests {
    use crate::config::game::{CHALLENGE_TIME_BUDGET, CORRECTION_ATTEMPTS};
    use crate::game::challenge::{ChallengeSession, SubmitResult};
    use crate::game::movement::MovementPlan;
    use crate::game::state::{GameState, Phase, RollState};
    use crate::game::track::{TileChallenge, Track, TrackError};
    use crate::game::types::{ChallengeMode, DecisionChoice};
    use crate::game::verify::is_accepted;

    fn answers(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    fn wrong_tile(text: &str, list: &[&str]) -> TileChallenge {
        TileChallenge {
            text: text.to_string(),
            ok: false,
            answers: answers(list),
        }
    }

    fn correct_tile(text: &str) -> TileChallenge {
        TileChallenge {
            text: text.to_string(),
            ok: true,
            answers: vec![],
        }
    }

    #[test]
    fn test_builtin_track_shape() {
        let track = Track::builtin().expect("builtin track must validate");
        assert_eq!(track.len(), 32);
        assert_eq!(track.last_index(), 31);
        // Start and goal are trivially correct.
        assert!(track.challenge_at(0).unwrap().ok);
        assert!(track.challenge_at(31).unwrap().ok);
        // Every incorrect tile carries at least one accepted answer.
        for index in 0..track.len() {
            let tile = track.challenge_at(index).unwrap();
            assert!(tile.ok || !tile.answers.is_empty(), "tile {} has no answers", index);
        }
    }

    #[test]
    fn test_track_out_of_range() {
        let track = Track::builtin().unwrap();
        assert_eq!(
            track.challenge_at(32),
            Err(TrackError::OutOfRange { index: 32, len: 32 })
        );
    }

    #[test]
    fn test_track_rejects_missing_answer_set() {
        let tiles = vec![correct_tile("Inicio"), wrong_tile("Mal frase.", &[])];
        assert_eq!(
            Track::new(tiles).err(),
            Some(TrackError::MissingAnswerSet { index: 1 })
        );
    }

    #[test]
    fn test_verifier_strips_terminal_punctuation() {
        assert!(is_accepted("hola!", &answers(&["Hola"])));
        assert!(is_accepted("  Hola. ", &answers(&["hola"])));
        assert!(is_accepted("¡Hola!", &answers(&["Hola"])));
    }

    #[test]
    fn test_verifier_keeps_embedded_punctuation() {
        // Question marks are not stripped; they must match on both sides.
        assert!(is_accepted("¿dónde vives?", &answers(&["¿Dónde vives?"])));
        assert!(!is_accepted("dónde vives", &answers(&["¿Dónde vives?"])));
    }

    #[test]
    fn test_verifier_is_accent_sensitive() {
        assert!(!is_accepted("donde vives", &answers(&["dónde vives"])));
        assert!(is_accepted("DÓNDE VIVES", &answers(&["dónde vives"])));
    }

    #[test]
    fn test_verifier_matches_any_accepted_answer() {
        let list = answers(&["Yo tengo veintidós años", "Tengo veintidós años"]);
        assert!(is_accepted("tengo veintidós años.", &list));
        assert!(!is_accepted("tengo 22 años", &list));
    }

    #[test]
    fn test_movement_plan_forward() {
        let mut plan = MovementPlan::new(3, 6);
        assert_eq!(plan.advance(), Some(4));
        assert_eq!(plan.advance(), Some(5));
        assert!(!plan.is_done());
        assert_eq!(plan.advance(), Some(6));
        assert!(plan.is_done());
        assert_eq!(plan.advance(), None);
    }

    #[test]
    fn test_movement_plan_backward() {
        let mut plan = MovementPlan::new(5, 3);
        assert_eq!(plan.advance(), Some(4));
        assert_eq!(plan.advance(), Some(3));
        assert!(plan.is_done());
    }

    #[test]
    fn test_movement_plan_zero_length() {
        let mut plan = MovementPlan::new(2, 2);
        assert!(plan.is_done());
        assert_eq!(plan.advance(), None);
    }

    #[test]
    fn test_decision_correct_on_correct_tile() {
        let mut session = ChallengeSession::new(correct_tile("Quiero un café con leche."));
        assert_eq!(session.submit_decision(DecisionChoice::Correct), SubmitResult::Settled);
        let outcome = session.outcome().unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.message, "¡Correcto! La frase está bien.");
    }

    #[test]
    fn test_decision_correct_on_wrong_tile() {
        let mut session = ChallengeSession::new(wrong_tile("No tengo dineros.", &["No tengo dinero"]));
        assert_eq!(session.submit_decision(DecisionChoice::Correct), SubmitResult::Settled);
        let outcome = session.outcome().unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, "¡Error! La frase tenía fallos.");
        // No correction mode was entered.
        assert_eq!(session.mode(), ChallengeMode::Result);
    }

    #[test]
    fn test_decision_has_error_on_correct_tile() {
        let mut session = ChallengeSession::new(correct_tile("El niño está escribiendo."));
        assert_eq!(session.submit_decision(DecisionChoice::HasError), SubmitResult::Settled);
        let outcome = session.outcome().unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, "¡Error! La frase era correcta, no necesitaba corrección.");
    }

    #[test]
    fn test_decision_has_error_enters_correction() {
        let mut session = ChallengeSession::new(wrong_tile("No tengo dineros.", &["No tengo dinero"]));
        assert_eq!(session.submit_decision(DecisionChoice::HasError), SubmitResult::Advanced);
        assert_eq!(session.mode(), ChallengeMode::Correction);
        assert!(session.outcome().is_none());
    }

    #[test]
    fn test_correction_match_succeeds() {
        let mut session = ChallengeSession::new(wrong_tile("No tengo dineros.", &["No tengo dinero"]));
        session.submit_decision(DecisionChoice::HasError);
        assert_eq!(session.submit_correction("no tengo dinero."), SubmitResult::Settled);
        let outcome = session.outcome().unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.message, "¡Muy bien! Has corregido la frase.");
    }

    #[test]
    fn test_correction_attempts_exhaust_and_reveal_first_answer() {
        let mut session = ChallengeSession::new(wrong_tile(
            "Yo sabo hablar español.",
            &["Yo sé hablar español", "Sé hablar español"],
        ));
        session.submit_decision(DecisionChoice::HasError);
        assert_eq!(session.attempts_left(), CORRECTION_ATTEMPTS);

        assert_eq!(session.submit_correction("yo sabo"), SubmitResult::Retry);
        assert_eq!(session.attempts_left(), 1);

        assert_eq!(session.submit_correction("yo sabo otra vez"), SubmitResult::Settled);
        assert_eq!(session.attempts_left(), 0);
        let outcome = session.outcome().unwrap();
        assert!(!outcome.success);
        // The first accepted answer is revealed verbatim.
        assert_eq!(outcome.message, "Has fallado. La respuesta era: \"Yo sé hablar español\"");
    }

    #[test]
    fn test_countdown_timeout_forces_failure() {
        let mut session = ChallengeSession::new(correct_tile("Tengo dolor de piernas."));
        for _ in 0..CHALLENGE_TIME_BUDGET - 1 {
            assert!(!session.tick());
        }
        assert_eq!(session.time_left(), 1);
        assert!(session.tick());
        let outcome = session.outcome().unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, "¡Tiempo agotado!");
        assert_eq!(session.mode(), ChallengeMode::Result);
    }

    #[test]
    fn test_countdown_runs_across_sub_modes() {
        let mut session = ChallengeSession::new(wrong_tile("No tengo dineros.", &["No tengo dinero"]));
        for _ in 0..10 {
            session.tick();
        }
        assert_eq!(session.time_left(), CHALLENGE_TIME_BUDGET - 10);
        // Entering correction does not reset the budget.
        session.submit_decision(DecisionChoice::HasError);
        assert_eq!(session.time_left(), CHALLENGE_TIME_BUDGET - 10);
        session.tick();
        assert_eq!(session.time_left(), CHALLENGE_TIME_BUDGET - 11);
    }

    #[test]
    fn test_settled_session_is_frozen() {
        let mut session = ChallengeSession::new(wrong_tile("No tengo dineros.", &["No tengo dinero"]));
        session.submit_decision(DecisionChoice::Correct);
        let outcome = session.outcome().unwrap().clone();

        // No tick, decision, or correction can change the outcome afterwards.
        assert!(!session.tick());
        assert_eq!(session.submit_decision(DecisionChoice::HasError), SubmitResult::Ignored);
        assert_eq!(session.submit_correction("No tengo dinero"), SubmitResult::Ignored);
        assert_eq!(session.outcome().unwrap(), &outcome);
        assert_eq!(session.time_left(), CHALLENGE_TIME_BUDGET);
    }

    #[test]
    fn test_roll_target_is_capped_at_goal() {
        let mut state = GameState::new();
        state.players[0].position = 29;
        // A 5 from tile 29 lands exactly on the goal of a 32-tile track.
        assert_eq!(state.roll_target(5, 31), 31);
        assert_eq!(state.roll_target(1, 31), 30);
        for roll in 1..=6u8 {
            assert!(state.roll_target(roll, 31) <= 31);
        }
    }

    #[test]
    fn test_penalty_target_never_negative() {
        let mut state = GameState::new();
        state.players[0].position = 1;
        assert_eq!(state.penalty_target(), 0);
        state.players[0].position = 7;
        assert_eq!(state.penalty_target(), 5);
    }

    #[test]
    fn test_turns_alternate_strictly() {
        let mut state = GameState::new();
        assert_eq!(state.active_idx, 0);
        state.advance_turn();
        assert_eq!(state.active_idx, 1);
        state.advance_turn();
        assert_eq!(state.active_idx, 0);
        assert_eq!(state.turn, 3);
    }

    #[test]
    fn test_dice_value_survives_turn_end() {
        let mut state = GameState::new();
        state.dice_value = 5;
        state.advance_turn();
        // The table still shows the previous roll.
        assert_eq!(state.dice_value, 5);
        assert!(matches!(state.phase, Phase::Rolling { roll: RollState::Idle }));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = GameState::new();
        state.players[0].position = 12;
        state.players[1].position = 4;
        state.dice_value = 6;
        state.phase = Phase::Win;
        state.advance_turn();

        state.reset();
        assert!(state.is_pristine());
        assert_eq!(state.active_idx, 0);
        assert_eq!(state.dice_value, 1);
        assert_eq!(state.turn, 1);
        assert!(state.players.iter().all(|p| p.position == 0));
    }

    #[test]
    fn test_pristine_detection() {
        let mut state = GameState::new();
        assert!(state.is_pristine());
        state.players[0].position = 1;
        assert!(!state.is_pristine());
    }
}
