// File: crates/growth-core/tests/projection.rs
// Purpose: Validation gate, monthly sampling and exact end-of-term totals.

use approx::assert_relative_eq;
use growth_core::{
    project, CompoundingFrequency, ContributionFrequency, Projection, ProjectionInput, RawInput, ValidationError,
};
use proptest::prelude::*;

fn raw(principal: &str, rate: &str, years: &str, contribution: &str) -> RawInput {
    RawInput {
        principal: principal.into(),
        rate_percent: rate.into(),
        years: years.into(),
        contribution: contribution.into(),
        contribution_frequency: ContributionFrequency::Monthly,
        compounding: CompoundingFrequency::Monthly,
    }
}

#[test]
fn missing_fields_ask_for_values() {
    for r in [raw("", "7", "10", ""), raw("1000", " ", "10", ""), raw("1000", "7", "", "0"), raw("abc", "7", "10", "")] {
        let err = project(&r).unwrap_err();
        assert_eq!(err, ValidationError::MissingValues);
        assert_eq!(err.to_string(), "Enter values to start");
    }
}

#[test]
fn out_of_range_values_are_unrealistic() {
    let cases = [
        raw("0", "7", "10", ""),
        raw("-5", "7", "10", ""),
        raw("1000", "0", "10", ""),
        raw("1000", "60", "10", "100"),
        raw("1000", "7", "0", ""),
        raw("1000", "7", "101", ""),
        raw("1000", "7", "2.5", ""),
        raw("1000", "7", "10", "-1"),
    ];
    for r in cases {
        let err = project(&r).unwrap_err();
        assert_eq!(err, ValidationError::Unrealistic, "{r:?}");
        assert_eq!(err.to_string(), "Please enter realistic values");
    }
}

#[test]
fn fifty_percent_is_the_inclusive_cap() {
    assert!(project(&raw("1000", "50", "1", "")).is_ok());
}

#[test]
fn empty_contribution_means_zero() {
    let p = project(&raw("10000", "7", "10", "")).unwrap();
    assert_eq!(p.input.contribution, 0.0);
    assert_eq!(p.pmt, 0.0);
}

#[test]
fn annual_compounding_example() {
    let mut r = raw("10000", "7", "10", "0");
    r.compounding = CompoundingFrequency::Annually;
    let p = project(&r).unwrap();
    assert_relative_eq!(p.total, 19_671.513_572_895_66, epsilon = 1e-6);
    assert_relative_eq!(p.growth, 9_671.513_572_895_66, epsilon = 1e-6);
    let h = p.headline();
    assert_eq!(h.prefix, "After 10 years");
    assert_eq!(h.amount, "$19,671.51");
    assert_eq!(h.principal_and_contributions, "Principal & Contributions: $10,000.00");
    assert_eq!(h.growth, "Growth: $9,671.51");
}

#[test]
fn monthly_contribution_example_baseline() {
    let p = project(&raw("1000", "5", "1", "100")).unwrap();
    assert_relative_eq!(p.pmt, 100.0);
    assert_relative_eq!(p.principal_and_contributions, 2_200.0, epsilon = 1e-9);
    assert_relative_eq!(p.total, 2_279.047_447, epsilon = 1e-5);
    assert_eq!(p.series.len(), 13);
    assert_relative_eq!(*p.series.contribution_baseline.last().unwrap(), 2_200.0, epsilon = 1e-9);
}

#[test]
fn interpolate_clamps_and_blends() {
    let p = project(&raw("1000", "5", "1", "100")).unwrap();
    let s = &p.series;
    let (t0, b0) = s.interpolate(-3.0).unwrap();
    assert_eq!((t0, b0), (s.total_value[0], s.contribution_baseline[0]));
    let (t_mid, _) = s.interpolate(2.5).unwrap();
    assert_relative_eq!(t_mid, (s.total_value[2] + s.total_value[3]) / 2.0, epsilon = 1e-9);
    let (t_end, _) = s.interpolate(99.0).unwrap();
    assert_eq!(t_end, s.total_value[12]);
    assert!(growth_core::ProjectionSeries::empty().interpolate(0.0).is_none());
}

fn arb_input() -> impl Strategy<Value = ProjectionInput> {
    (
        1.0f64..1_000_000.0,
        0.001f64..=0.5,
        1u32..=40,
        0.0f64..2_000.0,
        prop::sample::select(ContributionFrequency::ALL.to_vec()),
        prop::sample::select(CompoundingFrequency::ALL.to_vec()),
    )
        .prop_map(|(p, r, t, c, cf, n)| ProjectionInput::try_new(p, r, t, c, cf, n).unwrap())
}

proptest! {
    #[test]
    fn last_sample_matches_exact_total(input in arb_input()) {
        let p = Projection::compute(&input);
        prop_assert_eq!(p.series.len(), input.term_years as usize * 12 + 1);
        prop_assert_eq!(*p.series.total_value.last().unwrap(), p.total);
        prop_assert_eq!(*p.series.contribution_baseline.last().unwrap(), p.principal_and_contributions);
    }

    #[test]
    fn series_start_at_principal_and_never_decrease(input in arb_input()) {
        let p = Projection::compute(&input);
        prop_assert_eq!(p.series.total_value[0], input.principal);
        prop_assert_eq!(p.series.contribution_baseline[0], input.principal);
        for w in p.series.contribution_baseline.windows(2) {
            prop_assert!(w[1] >= w[0]);
        }
        for w in p.series.total_value.windows(2) {
            prop_assert!(w[1] >= w[0]);
        }
    }
}
