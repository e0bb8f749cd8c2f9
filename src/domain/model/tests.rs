// Unit tests for domain models

use super::*;

#[test]
fn test_odds_format_parse_case_insensitive() {
    assert_eq!("decimal".parse::<OddsFormat>().unwrap(), OddsFormat::Decimal);
    assert_eq!("AMERICAN".parse::<OddsFormat>().unwrap(), OddsFormat::American);
    assert_eq!("  Fractional ".parse::<OddsFormat>().unwrap(), OddsFormat::Fractional);
}

#[test]
fn test_odds_format_parse_invalid() {
    let err = "moneyline".parse::<OddsFormat>().unwrap_err();
    assert_eq!(err.to_string(), "Unsupported odds format: moneyline");
}

#[test]
fn test_odds_format_parse_with_default() {
    assert_eq!(
        OddsFormat::parse(None, Some(OddsFormat::Decimal)).unwrap(),
        OddsFormat::Decimal
    );
    assert_eq!(
        OddsFormat::parse(Some("fractional"), Some(OddsFormat::Decimal)).unwrap(),
        OddsFormat::Fractional
    );
    assert!(matches!(
        OddsFormat::parse(None, None),
        Err(OddsError::MissingFormat)
    ));
}

#[test]
fn test_odds_format_display_roundtrip() {
    for format in OddsFormat::ALL {
        assert_eq!(format.to_string().parse::<OddsFormat>().unwrap(), format);
    }
}

#[test]
fn test_odds_format_deserialize_lowercase() {
    #[derive(Deserialize)]
    struct Holder {
        format: OddsFormat,
    }
    let holder: Holder = toml::from_str("format = \"fractional\"").unwrap();
    assert_eq!(holder.format, OddsFormat::Fractional);
}

#[test]
fn test_odds_input_as_number() {
    assert_eq!(OddsInput::from(150).as_number().unwrap(), 150.0);
    assert_eq!(OddsInput::from("-110").as_number().unwrap(), -110.0);
    assert_eq!(OddsInput::from("+150").as_number().unwrap(), 150.0);
    assert!(OddsInput::from("5/2").as_number().is_err());
    assert!(OddsInput::from((3, 1)).as_number().is_err());
}

#[test]
fn test_odds_input_as_fraction() {
    let expected = Fraction::new(5, 2).unwrap();
    assert_eq!(OddsInput::from("5/2").as_fraction().unwrap(), expected);
    assert_eq!(OddsInput::from((5, 2)).as_fraction().unwrap(), expected);
    assert_eq!(OddsInput::from(2.5).as_fraction().unwrap(), expected);
    assert_eq!(OddsInput::from(expected).as_fraction().unwrap(), expected);
    assert!(OddsInput::from((1, 0)).as_fraction().is_err());
}

#[test]
fn test_odds_display() {
    assert_eq!(Odds::Decimal(2.5).to_string(), "2.5");
    assert_eq!(Odds::American(150.0).to_string(), "+150");
    assert_eq!(Odds::American(-110.0).to_string(), "-110");
    assert_eq!(
        Odds::Fractional(Fraction::new(11, 10).unwrap()).to_string(),
        "11/10"
    );
}

#[test]
fn test_odds_serialize_untagged() {
    let quotes = vec![
        Odds::Decimal(2.5),
        Odds::American(-200.0),
        Odds::Fractional(Fraction::new(1, 2).unwrap()),
    ];
    let json = serde_json::to_string(&quotes).unwrap();
    assert_eq!(json, "[2.5,-200.0,\"1/2\"]");
}

#[test]
fn test_odds_accessors() {
    let frac = Fraction::new(3, 2).unwrap();
    assert_eq!(Odds::Fractional(frac).format(), OddsFormat::Fractional);
    assert_eq!(Odds::Fractional(frac).as_fraction(), Some(frac));
    assert_eq!(Odds::Fractional(frac).as_f64(), None);
    assert_eq!(Odds::American(150.0).as_f64(), Some(150.0));
}
