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
// Generation options

use serde::{Deserialize, Serialize};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 50;
pub const DEFAULT_LENGTH: usize = 12;

/// 当前界面上的密码生成选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_upper: true,
            include_lower: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GenerationOptions {
    /// 设置长度，超出 [8, 50] 时取最近的边界
    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    pub fn toggle_upper(&mut self) {
        self.include_upper = !self.include_upper;
    }

    pub fn toggle_lower(&mut self) {
        self.include_lower = !self.include_lower;
    }

    pub fn toggle_numbers(&mut self) {
        self.include_numbers = !self.include_numbers;
    }

    pub fn toggle_symbols(&mut self) {
        self.include_symbols = !self.include_symbols;
    }

    /// 至少选中了一种字符类型
    pub fn has_character_class(&self) -> bool {
        self.include_upper || self.include_lower || self.include_numbers || self.include_symbols
    }

    pub fn to_request(&self) -> GenerateRequest {
        GenerateRequest::from(self)
    }
}

/// 发送给生成服务的请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl From<&GenerationOptions> for GenerateRequest {
    fn from(options: &GenerationOptions) -> Self {
        Self {
            length: options.length,
            upper: options.include_upper,
            lower: options.include_lower,
            numbers: options.include_numbers,
            symbols: options.include_symbols,
        }
    }
}

/// 生成服务的响应体
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub password: Option<String>,
}
