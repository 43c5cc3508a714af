//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength

use zxcvbn::Score;
use zxcvbn::zxcvbn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthAssessment {
    pub score: u8,
    pub feedback: String,
}

impl StrengthAssessment {
    pub fn label(&self) -> &'static str {
        strength_label(self.score)
    }

    pub fn color(&self) -> &'static str {
        strength_color(self.score)
    }

    pub fn bar_width(&self) -> u32 {
        bar_width_percent(self.score)
    }
}

/// 强度评估器，默认实现基于 zxcvbn
pub trait StrengthScorer {
    fn assess(&self, password: &str) -> StrengthAssessment;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ZxcvbnScorer;

impl StrengthScorer for ZxcvbnScorer {
    fn assess(&self, password: &str) -> StrengthAssessment {
        assess_password_strength(password)
    }
}

pub fn assess_password_strength(password: &str) -> StrengthAssessment {
    let strength_result = zxcvbn(password, &[]);
    let score = match strength_result.score() {
        Score::Zero => 0,
        Score::One => 1,
        Score::Two => 2,
        Score::Three => 3,
        Score::Four => 4,
        _ => 0,
    };
    let feedback = strength_result.feedback().map_or_else(
        String::new,
        |f| f.suggestions().iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
    );

    StrengthAssessment { score, feedback }
}

pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 | 1 => "Weak",
        2 => "Fair",
        3 => "Good",
        4 => "Strong",
        _ => "N/A",
    }
}

pub fn strength_color(score: u8) -> &'static str {
    match score {
        0 | 1 => "red",
        2 => "yellow",
        3 => "blue",
        4 => "green",
        _ => "gray",
    }
}

/// 强度条宽度百分比：(score + 1) * 20
pub fn bar_width_percent(score: u8) -> u32 {
    (u32::from(score) + 1) * 20
}
