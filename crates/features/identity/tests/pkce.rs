use proptest::prelude::*;
use sprouts_identity::{PkcePair, code_challenge};

#[test]
fn rfc7636_vector_through_public_api() {
    assert_eq!(
        code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk"),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

proptest! {
    #[test]
    fn challenge_is_43_url_safe_chars(verifier in "[A-Za-z0-9]{43,128}") {
        let pair = PkcePair::from_verifier(verifier);

        prop_assert_eq!(pair.challenge.len(), 43);
        prop_assert!(pair.challenge.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
