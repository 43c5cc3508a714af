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
// Password generator client library

pub mod app;
pub mod configtool;
pub mod options;
pub mod render;
pub mod setclip;
pub mod source;
pub mod strength;

pub use app::{Action, App, Notice, NoticeKind, State};
pub use options::{GenerationOptions, MAX_LENGTH, MIN_LENGTH};
pub use source::{GenError, HttpPasswordSource, PasswordSource};
pub use strength::{StrengthAssessment, StrengthScorer, ZxcvbnScorer};
