//! Property-based tests for proposal display ordering.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use roomly_core::proposals::{sort_for_display, Proposal, ProposalStatus};

// =============================================================================
// Generators
// =============================================================================

fn arb_timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    // A narrow window so that identical timestamps are actually generated.
    (0i64..100).prop_map(|secs| Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap())
}

fn arb_proposal() -> impl Strategy<Value = Proposal> {
    ("[a-z0-9]{8}", arb_timestamp(), 1i64..100_000).prop_map(|(id, created_at, cents)| Proposal {
        id,
        request_id: "req-1".to_string(),
        designer_id: "designer-1".to_string(),
        price: Decimal::new(cents, 2),
        estimated_days: 7,
        description: String::new(),
        status: ProposalStatus::Pending,
        created_at,
    })
}

fn arb_proposals(max_count: usize) -> impl Strategy<Value = Vec<Proposal>> {
    proptest::collection::vec(arb_proposal(), 0..=max_count)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The output is ordered by creation time descending, with identical
    /// timestamps broken by id ascending.
    #[test]
    fn prop_order_is_created_desc_then_id_asc(proposals in arb_proposals(30)) {
        let sorted = sort_for_display(proposals);
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.created_at > b.created_at
                    || (a.created_at == b.created_at && a.id <= b.id),
                "out of order: ({}, {}) before ({}, {})",
                a.created_at, a.id, b.created_at, b.id
            );
        }
    }

    /// Sorting is a permutation: nothing is added, dropped, or altered.
    #[test]
    fn prop_sort_preserves_elements(proposals in arb_proposals(30)) {
        let mut before: Vec<String> = proposals.iter().map(|p| p.id.clone()).collect();
        let sorted = sort_for_display(proposals);
        let mut after: Vec<String> = sorted.iter().map(|p| p.id.clone()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// The order is deterministic: shuffling the input does not change the
    /// output as long as ids are distinct.
    #[test]
    fn prop_order_is_input_order_independent(proposals in arb_proposals(20)) {
        let mut deduped = proposals;
        deduped.sort_by(|a, b| a.id.cmp(&b.id));
        deduped.dedup_by(|a, b| a.id == b.id);

        let sorted_once = sort_for_display(deduped.clone());
        deduped.reverse();
        let sorted_reversed = sort_for_display(deduped);

        let ids_once: Vec<&str> = sorted_once.iter().map(|p| p.id.as_str()).collect();
        let ids_reversed: Vec<&str> = sorted_reversed.iter().map(|p| p.id.as_str()).collect();
        prop_assert_eq!(ids_once, ids_reversed);
    }
}
