//! Compounding factors shared by the annuity formulas.
//!
//! Both factors go through `ln_1p`/`exp_m1`, so rates far below machine
//! epsilon still produce the near-linear result instead of cancelling to
//! zero.

/// `(1 + rate)^periods - 1`.
pub fn growth_minus_one(rate: f64, periods: f64) -> f64 {
    (periods * rate.ln_1p()).exp_m1()
}

/// `((1 + rate)^periods - 1) / rate`, the value of one unit paid at the end
/// of each period. Equals `periods` when there is no growth.
pub fn annuity_factor(rate: f64, periods: f64) -> f64 {
    let growth = growth_minus_one(rate, periods);
    if rate == 0.0 || growth == 0.0 {
        return periods;
    }
    growth / rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_matches_powf_for_ordinary_rates() {
        let expected = 1.01_f64.powf(60.0) - 1.0;
        assert!((growth_minus_one(0.01, 60.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_annuity_factor_without_growth_is_period_count() {
        assert_eq!(annuity_factor(0.0, 240.0), 240.0);
    }

    #[test]
    fn test_annuity_factor_survives_rates_below_epsilon() {
        // 1 + 1e-18 rounds to exactly 1.0
        let factor = annuity_factor(1e-18, 120.0);
        assert!((factor - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_annuity_factor_for_negative_rate() {
        let expected = (0.99_f64.powf(12.0) - 1.0) / -0.01;
        assert!((annuity_factor(-0.01, 12.0) - expected).abs() < 1e-12);
    }
}
