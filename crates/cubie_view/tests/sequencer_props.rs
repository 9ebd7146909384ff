//! Animated twists always end in the same state as applying them directly.

use cgmath as _;
use log as _;
use pretty_assertions as _;
use serde as _;

use cubie_core::*;
use cubie_prefs::DEFAULT_PREFS;
use cubie_view::*;
use proptest::prelude::*;
use web_time::Duration;

fn twist_strategy() -> impl Strategy<Value = Twist> {
    (0..6_usize, any::<bool>(), any::<bool>()).prop_map(|(face, rev, double)| {
        let direction = if rev {
            Direction::Reverse
        } else {
            Direction::Forward
        };
        Twist::new(Face::ALL[face], direction, double)
    })
}

proptest! {
    #[test]
    fn proptest_animated_matches_direct(
        twists in prop::collection::vec(twist_strategy(), 1..15),
        frame_millis in prop::collection::vec(1..200_u64, 1..10),
        scripted: bool,
    ) {
        let prefs = &DEFAULT_PREFS.animation;
        let mut seq = MoveSequencer::new();
        let mut frames = frame_millis.iter().cycle().map(|&ms| Duration::from_millis(ms));
        let mut completed = vec![];

        if scripted {
            prop_assert!(seq.run_script(twists.clone()));
            while seq.step(frames.next().unwrap_or_default(), prefs) {
                prop_assert_eq!(seq.cube().check_invariants(), Ok(()));
            }
        } else {
            for &twist in &twists {
                prop_assert!(seq.request_move(twist, true));
                while seq.step(frames.next().unwrap_or_default(), prefs) {}
            }
        }
        while let Some(event) = seq.poll_event() {
            completed.push(event);
        }

        let mut expected = CubeState::new();
        expected.apply_twists(&twists);
        prop_assert_eq!(seq.cube(), &expected);

        if scripted {
            prop_assert_eq!(completed, vec![SequencerEvent::ScriptFinished]);
        } else {
            prop_assert_eq!(completed.len(), twists.len());
            let last_solved = matches!(
                completed.last(),
                Some(SequencerEvent::MoveCompleted(m)) if m.solved,
            );
            prop_assert_eq!(last_solved, expected.is_solved());
        }
    }
}
