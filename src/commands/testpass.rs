use rpawogen::render::{strength_bar, strength_line};
use rpawogen::strength::assess_password_strength;

pub fn test_password(password: String) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password cannot be empty".to_string());
    }
    let assessment = assess_password_strength(&password);
    println!("{} (score: {}/4)", strength_line(&assessment), assessment.score);
    println!("{}", strength_bar(&assessment));
    if !assessment.feedback.is_empty() {
        println!("Suggestions: {}", assessment.feedback);
    }
    Ok(())
}
