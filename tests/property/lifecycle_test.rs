// tests/property/lifecycle_test.rs

//! Properties of the session lifecycle state machine.

use proptest::prelude::*;
use zkctl::core::SessionEvent;
use zkctl::session::{SessionAction, SessionFault, SessionPhase};

fn event_strategy() -> impl Strategy<Value = SessionEvent> {
    prop::sample::select(vec![
        SessionEvent::Connected,
        SessionEvent::ConnectedReadOnly,
        SessionEvent::Disconnected,
        SessionEvent::Expired,
        SessionEvent::AuthFailed,
        SessionEvent::Closed,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    #[test]
    fn test_at_most_one_dispatch_grant(
        events in prop::collection::vec(event_strategy(), 0..32)
    ) {
        let mut phase = SessionPhase::Connecting;
        let mut grants = 0usize;

        for event in events {
            let (next, action) = phase.transition(event);
            if matches!(action, SessionAction::Proceed(_)) {
                grants += 1;
                prop_assert_eq!(phase, SessionPhase::Connecting);
            }
            phase = next;
        }

        prop_assert!(grants <= 1);
    }

    #[test]
    fn test_lost_is_absorbing(
        events in prop::collection::vec(event_strategy(), 0..32)
    ) {
        let mut phase = SessionPhase::Connecting;
        let mut first_fault: Option<SessionFault> = None;

        for event in events {
            let (next, action) = phase.transition(event);
            if let Some(fault) = first_fault {
                prop_assert_eq!(next, SessionPhase::Lost(fault));
                prop_assert_eq!(action, SessionAction::Observe);
            }
            if let SessionPhase::Lost(fault) = next {
                first_fault.get_or_insert(fault);
            }
            phase = next;
        }
    }

    #[test]
    fn test_fail_action_lands_in_matching_lost_phase(
        events in prop::collection::vec(event_strategy(), 0..32)
    ) {
        let mut phase = SessionPhase::Connecting;

        for event in events {
            let (next, action) = phase.transition(event);
            if let SessionAction::Fail(fault) = action {
                prop_assert_eq!(next, SessionPhase::Lost(fault));
            }
            phase = next;
        }
    }
}
