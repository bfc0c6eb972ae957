//! Join code generation for rooms.
//!
//! Codes are 5-character strings over Crockford's Base32 alphabet, which
//! drops the easily-confused letters so codes can be read out loud.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U

/// Length of a room join code.
pub const JOIN_CODE_LEN: usize = 5;

/// Generate a random join code.
///
/// Uniqueness is not guaranteed here; the caller checks against existing
/// rooms and retries on collision.
pub fn generate_join_code() -> String {
    let mut rng = rand::rng();
    (0..JOIN_CODE_LEN)
        .map(|_| CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_code_has_expected_length() {
        assert_eq!(generate_join_code().len(), JOIN_CODE_LEN);
    }

    #[test]
    fn join_code_stays_inside_the_alphabet() {
        for _ in 0..50 {
            let code = generate_join_code();
            assert!(code.bytes().all(|b| CROCKFORD.contains(&b)), "bad code {code}");
        }
    }

    #[test]
    fn join_codes_vary() {
        let codes: std::collections::HashSet<String> =
            (0..20).map(|_| generate_join_code()).collect();
        assert!(codes.len() > 1);
    }
}
