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
// Generator component: state, actions and dispatch

use log::{info, warn};

use crate::options::GenerationOptions;
use crate::setclip::{ClipboardError, ClipboardSink};
use crate::source::{self, GenError, PasswordSource};
use crate::strength::{StrengthAssessment, StrengthScorer};

pub const MSG_NO_CLASS: &str = "Select at least one character type";
pub const MSG_GENERATE_FAILED: &str = "Error generating password";
pub const MSG_GENERATED: &str = "Password generated!";
pub const MSG_COPIED: &str = "Password copied!";
pub const MSG_COPY_FAILED: &str = "Error copying password";

/// 生成失败时展示给用户的文字；传输和服务错误不区分细节
pub fn generation_error_message(error: &GenError) -> &'static str {
    if error.is_validation() {
        MSG_NO_CLASS
    } else {
        MSG_GENERATE_FAILED
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// 一条提示消息（相当于界面上的 toast）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: &str) -> Self {
        Self { kind: NoticeKind::Success, message: message.to_string() }
    }

    pub fn error(message: &str) -> Self {
        Self { kind: NoticeKind::Error, message: message.to_string() }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub options: GenerationOptions,
    pub password: Option<String>,
    pub strength: Option<StrengthAssessment>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetLength(usize),
    ToggleUpper,
    ToggleLower,
    ToggleNumbers,
    ToggleSymbols,
    Generate,
    Copy,
}

/// 密码生成组件
///
/// 选项类动作只修改本地状态；`Generate` 通过 `PasswordSource` 获取密码，
/// `Copy` 通过 `ClipboardSink` 写入剪贴板。
pub struct App<S, Z, C> {
    state: State,
    source: S,
    scorer: Z,
    clipboard: C,
}

impl<S, Z, C> App<S, Z, C>
where
    S: PasswordSource,
    Z: StrengthScorer,
    C: ClipboardSink,
{
    pub fn new(source: S, scorer: Z, clipboard: C) -> Self {
        Self::with_options(GenerationOptions::default(), source, scorer, clipboard)
    }

    pub fn with_options(options: GenerationOptions, source: S, scorer: Z, clipboard: C) -> Self {
        Self {
            state: State { options, ..State::default() },
            source,
            scorer,
            clipboard,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// 取出最近一条提示
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.state.notice.take()
    }

    pub fn dispatch(&mut self, action: Action) {
        let options = &mut self.state.options;
        match action {
            Action::SetLength(length) => options.set_length(length),
            Action::ToggleUpper => options.toggle_upper(),
            Action::ToggleLower => options.toggle_lower(),
            Action::ToggleNumbers => options.toggle_numbers(),
            Action::ToggleSymbols => options.toggle_symbols(),
            Action::Generate => {
                self.state.notice = Some(match self.generate() {
                    Ok(_) => Notice::success(MSG_GENERATED),
                    Err(e) => Notice::error(generation_error_message(&e)),
                });
            }
            Action::Copy => {
                self.state.notice = match self.copy() {
                    Ok(true) => Some(Notice::success(MSG_COPIED)),
                    Ok(false) => None,
                    Err(_) => Some(Notice::error(MSG_COPY_FAILED)),
                };
            }
        }
    }

    /// 生成新密码并重新评估强度；失败时保留上一次的结果
    pub fn generate(&mut self) -> Result<&str, GenError> {
        let password = source::generate(&self.source, &self.state.options).map_err(|e| {
            warn!("Password generation failed: {}", e);
            e
        })?;
        let strength = self.scorer.assess(&password);
        info!("Generated a {}-character password ({})", password.chars().count(), strength.label());
        self.state.strength = Some(strength);
        Ok(self.state.password.insert(password).as_str())
    }

    /// 复制当前密码；没有密码时不写剪贴板并返回 `Ok(false)`
    pub fn copy(&mut self) -> Result<bool, ClipboardError> {
        let Some(password) = self.state.password.as_deref() else {
            return Ok(false);
        };
        self.clipboard.write_text(password).map_err(|e| {
            warn!("Copy to clipboard failed: {}", e);
            e
        })?;
        Ok(true)
    }
}
