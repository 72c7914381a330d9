//! Property tests for the calculation layer.

use finance_engine::calculation::{
    compound_interest, compute_amortization, compute_tax, project_retirement, project_sip,
    yearly_projection,
};
use finance_engine::config::ConfigLoader;
use finance_engine::models::{
    CompoundInterestTerms, FilingStatus, LoanTerms, RetirementPlan, SipPlan, TaxBracket,
    TaxBracketTable,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn single_2023() -> TaxBracketTable {
    TaxBracketTable::new(vec![
        TaxBracket::bounded(10.0, 11_000.0),
        TaxBracket::bounded(12.0, 44_725.0),
        TaxBracket::bounded(22.0, 95_375.0),
        TaxBracket::bounded(24.0, 182_100.0),
        TaxBracket::bounded(32.0, 231_250.0),
        TaxBracket::bounded(35.0, 578_125.0),
        TaxBracket::unbounded(37.0),
    ])
    .expect("valid table")
}

/// Every table shipped in the bundled configuration, slab schedule included.
fn configured_tables() -> Vec<TaxBracketTable> {
    let loader = ConfigLoader::load("./config/us_2023").expect("Failed to load config");
    vec![
        loader.bracket_table(FilingStatus::Single).clone(),
        loader.bracket_table(FilingStatus::Married).clone(),
        loader.slab_schedule().slabs.clone(),
    ]
}

/// Arbitrary valid tables: sorted rates in `0..=100`, positive widths, and
/// an unbounded final bracket.
fn arbitrary_table() -> impl Strategy<Value = TaxBracketTable> {
    (1_usize..8)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(0.0_f64..=100.0, n),
                prop::collection::vec(1.0_f64..500_000.0, n - 1),
            )
        })
        .prop_map(|(mut rates, widths)| {
            rates.sort_by(|a, b| a.total_cmp(b));
            let top_rate = rates[rates.len() - 1];
            let mut limit = 0.0;
            let mut brackets: Vec<TaxBracket> = rates
                .iter()
                .zip(&widths)
                .map(|(rate, width)| {
                    limit += width;
                    TaxBracket::bounded(*rate, limit)
                })
                .collect();
            brackets.push(TaxBracket::unbounded(top_rate));
            TaxBracketTable::new(brackets).expect("generated table is valid")
        })
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn arbitrary_tables_never_tax_more_than_income(
        table in arbitrary_table(),
        income in 0.0_f64..5_000_000.0,
    ) {
        prop_assert_eq!(compute_tax(0.0, &table).unwrap().total_tax, 0.0);

        let result = compute_tax(income, &table).unwrap();
        prop_assert!(result.total_tax >= 0.0);
        prop_assert!(result.total_tax <= income * table.top_rate() / 100.0 + 1e-6);
        prop_assert!(result.total_tax <= income + 1e-6);

        let covered: f64 = result.slices.iter().map(|s| s.taxable_amount).sum();
        prop_assert!((covered - income).abs() < 1e-6);
    }

    #[test]
    fn arbitrary_tables_are_monotonic(
        table in arbitrary_table(),
        a in 0.0_f64..2_000_000.0,
        b in 0.0_f64..2_000_000.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_tax = compute_tax(low, &table).unwrap().total_tax;
        let high_tax = compute_tax(high, &table).unwrap().total_tax;
        prop_assert!(low_tax <= high_tax + 1e-6);
    }

    #[test]
    fn configured_tables_never_tax_more_than_income(income in 0.0_f64..5_000_000.0) {
        for table in configured_tables() {
            let tax = compute_tax(income, &table).unwrap().total_tax;
            prop_assert!(tax >= 0.0);
            prop_assert!(tax <= income + 1e-6);
        }
    }

    #[test]
    fn tax_is_monotonic_in_income(a in 0.0_f64..2_000_000.0, b in 0.0_f64..2_000_000.0) {
        let table = single_2023();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_tax = compute_tax(low, &table).unwrap().total_tax;
        let high_tax = compute_tax(high, &table).unwrap().total_tax;
        prop_assert!(low_tax <= high_tax + 1e-6);
    }

    #[test]
    fn tax_is_bounded_by_top_rate(income in 0.0_f64..5_000_000.0) {
        let table = single_2023();
        let tax = compute_tax(income, &table).unwrap().total_tax;
        prop_assert!(tax >= 0.0);
        prop_assert!(tax <= income * table.top_rate() / 100.0 + 1e-6);
    }

    #[test]
    fn bracket_slices_cover_the_whole_income(income in 0.0_f64..1_000_000.0) {
        let result = compute_tax(income, &single_2023()).unwrap();
        let covered: f64 = result.slices.iter().map(|s| s.taxable_amount).sum();
        let taxed: f64 = result.slices.iter().map(|s| s.tax).sum();
        prop_assert!((covered - income).abs() < 1e-6);
        prop_assert!((taxed - result.total_tax).abs() < 1e-6);
    }

    #[test]
    fn amortization_totals_are_consistent(
        principal in 1_000.0_f64..1_000_000.0,
        rate in 0.0_f64..25.0,
        term in 1_u32..40,
        cap in 0_u32..10,
    ) {
        let terms = LoanTerms {
            principal,
            annual_rate_percent: rate,
            term_years: f64::from(term),
        };
        let result = compute_amortization(&terms, 0.0, cap).unwrap();
        let payments = f64::from(term) * 12.0;

        prop_assert!(result.periodic_payment.is_finite());
        prop_assert!((result.total_payment - result.periodic_payment * payments).abs() < 1e-6);
        prop_assert!(result.total_interest >= -1e-6);
        prop_assert_eq!(result.schedule.len() as u32, cap.min(term) + 1);
    }

    #[test]
    fn compound_interest_over_zero_years_is_principal(
        principal in 0.0_f64..1_000_000.0,
        rate in 0.0_f64..50.0,
        frequency in 1_u32..366,
    ) {
        let result = compound_interest(&CompoundInterestTerms {
            principal,
            annual_rate_percent: rate,
            years: 0.0,
            compounding_frequency_per_year: frequency,
        })
        .unwrap();
        prop_assert_eq!(result.total_amount, principal);
        prop_assert_eq!(result.interest_earned, 0.0);
    }

    #[test]
    fn sip_projection_starts_at_zero_and_grows(
        monthly in 0.0_f64..100_000.0,
        years in 0_u32..40,
        rate in 0.0_f64..30.0,
    ) {
        let plan = SipPlan {
            monthly_investment: monthly,
            years: f64::from(years),
            annual_return_percent: rate,
        };
        let points: Vec<_> = yearly_projection(&plan).unwrap().collect();

        prop_assert_eq!(points.len() as u32, years + 1);
        prop_assert_eq!(points[0].value, 0.0);
        prop_assert_eq!(points[0].invested, 0.0);
        for pair in points.windows(2) {
            prop_assert!(pair[1].value >= pair[0].value);
            prop_assert!(pair[1].value >= pair[1].invested - 1e-6);
        }

        let summary = project_sip(&plan).unwrap();
        prop_assert!(summary.total_returns >= -1e-6);
    }

    #[test]
    fn positive_inflation_never_raises_real_value(
        current_age in 18.0_f64..60.0,
        horizon in 1_u32..40,
        savings in 0.0_f64..500_000.0,
        contribution in 0.0_f64..5_000.0,
        expected_return in 0.0_f64..15.0,
        inflation in 0.0_f64..10.0,
    ) {
        let projection = project_retirement(&RetirementPlan {
            current_age,
            retirement_age: current_age + f64::from(horizon),
            current_savings: savings,
            monthly_contribution: contribution,
            expected_annual_return_percent: expected_return,
            inflation_rate_percent: inflation,
        })
        .unwrap();

        prop_assert!((projection.years_to_retirement - f64::from(horizon)).abs() < 1e-9);
        prop_assert!(projection.real_value <= projection.future_value + 1e-6);
        prop_assert!(projection.future_value >= projection.total_contributions - 1e-6);
    }
}
