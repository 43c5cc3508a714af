use rpawogen::strength::*;
use rpawogen::render::strength_bar;

#[test]
fn test_strength_label_mapping() {
    assert_eq!(strength_label(0), "Weak");
    assert_eq!(strength_label(1), "Weak");
    assert_eq!(strength_label(2), "Fair");
    assert_eq!(strength_label(3), "Good");
    assert_eq!(strength_label(4), "Strong");
    assert_eq!(strength_label(5), "N/A");
    assert_eq!(strength_label(u8::MAX), "N/A");
}

#[test]
fn test_strength_color_mapping() {
    assert_eq!(strength_color(1), "red");
    assert_eq!(strength_color(2), "yellow");
    assert_eq!(strength_color(3), "blue");
    assert_eq!(strength_color(4), "green");
    assert_eq!(strength_color(9), "gray");
}

#[test]
fn test_bar_width_percent() {
    let widths: Vec<u32> = (0..=4).map(bar_width_percent).collect();
    assert_eq!(widths, vec![20, 40, 60, 80, 100]);
}

#[test]
fn test_zxcvbn_scorer_on_sample_password() {
    let assessment = ZxcvbnScorer.assess("Ab1!xyz2");
    assert!(assessment.score <= 4);
    assert_eq!(assessment.bar_width(), (u32::from(assessment.score) + 1) * 20);
    assert_ne!(assessment.label(), "N/A");
    assert!(strength_bar(&assessment).contains(&format!("{}%", assessment.bar_width())));
}

#[test]
fn test_common_password_has_feedback() {
    let assessment = assess_password_strength("password123");
    assert!(assessment.score <= 1);
    assert!(!assessment.feedback.is_empty());
}
