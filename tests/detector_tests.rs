//! Language detection tests

use agribot::domain::model::LanguageCode;
use agribot::domain::traits::LanguageDetector;
use agribot::infrastructure::detect::{WhatlangDetector, MIN_DETECT_CHARS};

#[test]
fn test_short_input_is_english() {
    let detector = WhatlangDetector::new();

    assert_eq!(detector.detect(""), LanguageCode::En);
    assert_eq!(detector.detect("   "), LanguageCode::En);
    // Short Hindi greeting, below the threshold
    assert!("नमस्ते".chars().count() < MIN_DETECT_CHARS);
    assert_eq!(detector.detect("नमस्ते"), LanguageCode::En);
    assert_eq!(detector.detect("నమస్కారం"), LanguageCode::En);
}

#[test]
fn test_detects_supported_languages() {
    let detector = WhatlangDetector::new();

    assert_eq!(
        detector.detect("When is the best time to sow wheat in the northern plains?"),
        LanguageCode::En
    );
    assert_eq!(
        detector.detect("मैं अपने खेत में गेहूं की फसल कब बोऊं और कितना पानी दूं?"),
        LanguageCode::Hi
    );
    assert_eq!(
        detector.detect("నా పొలంలో వరి పంటకు ఎంత నీరు పెట్టాలి మరియు ఎప్పుడు?"),
        LanguageCode::Te
    );
}

#[test]
fn test_unsupported_languages_fall_back_to_english() {
    let detector = WhatlangDetector::new();

    assert_eq!(
        detector.detect("Quand faut-il semer le blé dans le nord de la France?"),
        LanguageCode::En
    );
    assert_eq!(
        detector.detect("Когда лучше всего сеять пшеницу на севере страны?"),
        LanguageCode::En
    );
}

#[test]
fn test_clamp_normalizes_codes() {
    assert_eq!(LanguageCode::clamp("hi"), LanguageCode::Hi);
    assert_eq!(LanguageCode::clamp("HIN"), LanguageCode::Hi);
    assert_eq!(LanguageCode::clamp("te-IN"), LanguageCode::Te);
    assert_eq!(LanguageCode::clamp("tel"), LanguageCode::Te);
    assert_eq!(LanguageCode::clamp("en_US"), LanguageCode::En);
    for other in ["fr", "ta", "und", "", "auto", "xx-YY"] {
        assert_eq!(LanguageCode::clamp(other), LanguageCode::En, "{other}");
    }
}
