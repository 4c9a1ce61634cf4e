//! Property-based tests for the tip formula and the host page contract

use eth_priority_fee::{
    fees::{calculate_priority_fee, effective_tip_per_gas},
    page::{is_transaction_page, parse_page, transaction_hash},
};
use proptest::prelude::*;

proptest! {
    /// Property: the effective tip is never negative and never above the declared tip
    #[test]
    fn prop_tip_within_bounds(
        tip in 0.0f64..1_000_000.0,
        cap in 0.0f64..1_000_000.0,
        base in 0.0f64..1_000_000.0,
    ) {
        let effective = effective_tip_per_gas(tip, cap, base);
        prop_assert!(effective >= 0.0);
        prop_assert!(effective <= tip);
    }

    /// Property: the effective tip is exactly max(0, min(tip, cap - base))
    #[test]
    fn prop_tip_matches_capping_rule(
        tip in 0.0f64..1_000_000.0,
        cap in 0.0f64..1_000_000.0,
        base in 0.0f64..1_000_000.0,
    ) {
        let expected = f64::max(0.0, f64::min(tip, cap - base));
        prop_assert_eq!(effective_tip_per_gas(tip, cap, base), expected);
    }

    /// Property: a base fee at or above the cap always yields a zero fee
    #[test]
    fn prop_no_headroom_no_fee(
        tip in 0u64..=u64::from(u32::MAX),
        cap in 0u64..=u64::from(u32::MAX),
        extra in 0u64..=u64::from(u32::MAX),
        gas in 0u64..=30_000_000,
    ) {
        let fee = calculate_priority_fee(
            Some(&format!("0x{tip:x}")),
            Some(&format!("0x{cap:x}")),
            Some(&format!("0x{:x}", cap + extra)),
            Some(&format!("0x{gas:x}")),
        );
        prop_assert_eq!(fee, 0.0);
    }

    /// Property: the hash is always the final path segment of a transaction page
    #[test]
    fn prop_hash_is_last_segment(
        subdomain in proptest::option::of("[a-z]{1,8}"),
        hash in "0x[0-9a-f]{64}",
    ) {
        let host = match subdomain {
            Some(sub) => format!("{sub}.etherscan.io"),
            None => "etherscan.io".to_string(),
        };
        let page = parse_page(&format!("https://{host}/tx/{hash}")).unwrap();

        prop_assert!(is_transaction_page(&page));
        prop_assert_eq!(transaction_hash(&page), Some(hash.as_str()));
    }
}
