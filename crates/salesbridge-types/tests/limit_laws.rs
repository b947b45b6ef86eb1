//! Property-based tests for the shared clamping rule.
//!
//! Both surfaces rely on these laws holding exactly.

use proptest::prelude::*;
use salesbridge_types::{effective_limit, Limits, ResolveArgs, SalesReportArgs};

proptest! {
    /// effective_limit(L, M) = L if 0 < L <= M else M.
    #[test]
    fn clamp_law(requested in any::<i64>(), max in 1u32..100_000) {
        let expected = if requested > 0 && requested <= i64::from(max) {
            requested as u32
        } else {
            max
        };
        prop_assert_eq!(effective_limit(requested, max), expected);
    }

    /// The result never exceeds the configured maximum and is never zero.
    #[test]
    fn clamp_bounded(requested in any::<i64>(), max in 1u32..100_000) {
        let got = effective_limit(requested, max);
        prop_assert!(got >= 1 && got <= max);
    }

    /// Resolve args and report args apply the same law to their own maxima.
    #[test]
    fn args_follow_clamp_law(requested in -10i64..20_000, resolve_limit in 1u32..50, max_rows in 1u32..10_000) {
        let limits = Limits { resolve_limit, max_rows };

        let resolve = ResolveArgs { query: "q".into(), limit: Some(requested) }
            .into_request(&limits)
            .expect("valid resolve");
        prop_assert_eq!(resolve.limit, effective_limit(requested, resolve_limit));

        let mut report = SalesReportArgs::default();
        report.period.from = "2024-01-01".into();
        report.period.to = "2024-01-31".into();
        report.top = Some(requested);
        let report = report.into_request(&limits).expect("valid report");
        prop_assert_eq!(report.top, effective_limit(requested, max_rows));
    }
}
