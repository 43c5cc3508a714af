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
// Text rendering of the generator view

use crate::app::{Notice, NoticeKind, State};
use crate::options::{GenerationOptions, MAX_LENGTH, MIN_LENGTH};
use crate::strength::StrengthAssessment;

pub const BAR_CELLS: usize = 20;

pub fn length_line(options: &GenerationOptions) -> String {
    format!("Password Length: {}", options.length)
}

fn checkbox(checked: bool, label: &str) -> String {
    format!("[{}] {}", if checked { "x" } else { " " }, label)
}

/// 强度条，宽度按百分比折算为 20 格
pub fn strength_bar(assessment: &StrengthAssessment) -> String {
    let filled = (assessment.bar_width() as usize / (100 / BAR_CELLS)).min(BAR_CELLS);
    format!(
        "[{}{}] {}% ({})",
        "#".repeat(filled),
        "-".repeat(BAR_CELLS - filled),
        assessment.bar_width(),
        assessment.color()
    )
}

pub fn strength_line(assessment: &StrengthAssessment) -> String {
    format!("Strength: {}", assessment.label())
}

pub fn notice_line(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Success => format!("✅ {}", notice.message),
        NoticeKind::Error => format!("❌ {}", notice.message),
    }
}

/// 渲染完整视图（不包括提示消息）
pub fn render(state: &State) -> String {
    let options = &state.options;
    let mut lines = vec![
        "Password Generator".to_string(),
        format!("{} ({}-{})", length_line(options), MIN_LENGTH, MAX_LENGTH),
        checkbox(options.include_upper, "Uppercase Letters (u)"),
        checkbox(options.include_lower, "Lowercase Letters (l)"),
        checkbox(options.include_numbers, "Numbers (n)"),
        checkbox(options.include_symbols, "Symbols (s)"),
    ];

    if let Some(password) = &state.password {
        lines.push(String::new());
        lines.push(format!("Password: {}", password));
        if let Some(strength) = &state.strength {
            lines.push(strength_line(strength));
            lines.push(strength_bar(strength));
        }
    }
    lines.join("\n")
}
