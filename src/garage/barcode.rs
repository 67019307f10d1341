use rand::Rng;

pub const BAR_CODE_LEN: usize = 16;

/// Draws a fresh 16-digit ticket code. Uniqueness among active tickets is
/// enforced by the store, not here.
pub fn generate_bar_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..BAR_CODE_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn bar_code_is_sixteen_decimal_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = generate_bar_code(&mut rng);
            assert_eq!(code.len(), BAR_CODE_LEN);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn successive_codes_differ() {
        let mut rng = StdRng::seed_from_u64(42);
        let codes: HashSet<String> = (0..1_000).map(|_| generate_bar_code(&mut rng)).collect();
        assert_eq!(codes.len(), 1_000);
    }
}
