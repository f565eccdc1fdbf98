//! Sample amounts for the transaction form.

use crate::consts::cli_consts::sample::{DECIMALS, MAX_AMOUNT, MIN_AMOUNT};
use rand::Rng;

/// Draws an amount uniformly from the sample range, rounded to cents.
pub fn generate_sample_amount<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let raw = rng.gen_range(MIN_AMOUNT..=MAX_AMOUNT);
    let scale = 10f64.powi(DECIMALS);
    ((raw * scale).round() / scale).clamp(MIN_AMOUNT, MAX_AMOUNT)
}

/// Text written into the amount input.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_stay_in_range_with_two_decimals() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let amount = generate_sample_amount(&mut rng);
            assert!((MIN_AMOUNT..=MAX_AMOUNT).contains(&amount), "{}", amount);

            let text = format_amount(amount);
            let (_, decimals) = text.split_once('.').expect("decimal point");
            assert_eq!(decimals.len(), 2, "{}", text);
            assert!((text.parse::<f64>().unwrap() - amount).abs() < 1e-9);
        }
    }

    #[test]
    fn formats_whole_amounts_with_cents() {
        assert_eq!(format_amount(250.0), "250.00");
        assert_eq!(format_amount(1000.0), "1000.00");
    }
}
