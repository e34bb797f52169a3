use crate::error::StellarError;
use crate::spectral::{SpectralCode, SpectralType};

// ============================================================================
// SpectralType
// ============================================================================

#[test]
fn spectral_type_display() {
    assert_eq!(format!("{}", SpectralType::O), "O");
    assert_eq!(format!("{}", SpectralType::G), "G");
    assert_eq!(format!("{}", SpectralType::M), "M");
}

#[test]
fn spectral_type_rank_follows_temperature_sequence() {
    let sequence = [
        SpectralType::O,
        SpectralType::B,
        SpectralType::A,
        SpectralType::F,
        SpectralType::G,
        SpectralType::K,
        SpectralType::M,
    ];

    for (expected, class) in sequence.iter().enumerate() {
        assert_eq!(class.rank() as usize, expected);
    }
    assert!(SpectralType::O < SpectralType::M);
}

#[test]
fn spectral_type_from_letter_is_case_insensitive() {
    assert_eq!(SpectralType::from_letter('k'), Some(SpectralType::K));
    assert_eq!(SpectralType::from_letter('K'), Some(SpectralType::K));
    assert_eq!(SpectralType::from_letter('X'), None);
    assert_eq!(SpectralType::from_letter('L'), None);
}

// ============================================================================
// SpectralCode parsing
// ============================================================================

#[test]
fn parses_class_and_subtype() {
    let code: SpectralCode = "G2".parse().unwrap();
    assert_eq!(code.class, SpectralType::G);
    assert_eq!(code.subtype, 2.0);
    assert_eq!(code.sequence_position(), 42.0);
}

#[test]
fn parses_fractional_subtype_and_dwarf_suffix() {
    let code: SpectralCode = "K1.5V".parse().unwrap();
    assert_eq!(code.class, SpectralType::K);
    assert_eq!(code.subtype, 1.5);

    let code: SpectralCode = "  m4 ".parse().unwrap();
    assert_eq!(code.class, SpectralType::M);
    assert_eq!(code.subtype, 4.0);
}

#[test]
fn parsing_ignores_case_of_class_and_suffix() {
    for code in ["g2v", "G2v", "g2V", "G2V"] {
        let parsed: SpectralCode = code.parse().unwrap();
        assert_eq!(parsed, SpectralCode::new(SpectralType::G, 2.0), "{code:?}");
    }
    assert!("g2iii".parse::<SpectralCode>().is_err());
}

#[test]
fn bare_class_letter_uses_mid_class_subtype() {
    let code: SpectralCode = "F".parse().unwrap();
    assert_eq!(code.subtype, SpectralCode::DEFAULT_SUBTYPE);
}

#[test]
fn rejects_malformed_codes() {
    for bad in ["", "X0", "Z", "G10", "G2III", "G-1", "G2.5.1", "2G"] {
        let result = bad.parse::<SpectralCode>();
        assert_eq!(
            result,
            Err(StellarError::UnknownSpectralType(bad.to_string())),
            "{bad:?} should be rejected"
        );
    }
}
