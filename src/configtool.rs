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
// Config Tools

use serde::{Serialize, Deserialize};
use std::{fmt, fs, io::{self, Write}, path::{Path, PathBuf}};
use dirs::config_dir;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/generate/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
const CONFIG_FILE: &str = "config.json";

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    ConfigDirError(String),
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::JsonError(e) => write!(f, "JSON error: {}", e),
            ConfigError::ConfigDirError(msg) => write!(f, "Config directory error: {}", msg),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid config value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 密码生成服务地址
    pub endpoint: String,
    /// 请求超时（秒）
    pub timeout_secs: u64,
    /// 复制后多少秒清空剪贴板，0 表示不清空
    pub clipboard_clear_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            clipboard_clear_secs: 0,
        }
    }
}

impl AppConfig {
    /// 从指定文件读取配置，文件不存在时返回默认配置
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let config_data = fs::read_to_string(path).map_err(ConfigError::IoError)?;
        let config: Self = serde_json::from_str(&config_data).map_err(ConfigError::JsonError)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::IoError)?;
        }
        let config_file = fs::File::create(path).map_err(ConfigError::IoError)?;
        serde_json::to_writer_pretty(config_file, &self).map_err(ConfigError::JsonError)?;
        Ok(())
    }

    /// 读取用户配置目录下的配置
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_path()?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&get_config_path()?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidValue(format!(
                "endpoint must be an http(s) URL, got '{}'", self.endpoint
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue("timeout must be at least 1 second".to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "endpoint: {}", self.endpoint)?;
        writeln!(f, "timeout: {}s", self.timeout_secs)?;
        if self.clipboard_clear_secs == 0 {
            write!(f, "clipboard clear: disabled")
        } else {
            write!(f, "clipboard clear: {}s", self.clipboard_clear_secs)
        }
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpawogen")),
        None => Err(ConfigError::ConfigDirError("Could not determine configuration directory".to_string())),
    }
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// 提示用户输入
pub fn prompt_input(prompt: &str) -> Result<String, String> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input).map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("End of input".to_string());
    }
    Ok(input.trim().to_string())
}
