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
// Remote password source

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use thiserror::Error;

use crate::configtool::AppConfig;
use crate::options::{GenerateRequest, GenerateResponse, GenerationOptions};

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Select at least one character type")]
    NoCharacterClass,

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service responded with status {0}")]
    Status(u16),

    #[error("Service returned no password")]
    EmptyPassword,
}

impl GenError {
    /// 本地校验失败（未发出请求）
    pub fn is_validation(&self) -> bool {
        matches!(self, GenError::NoCharacterClass)
    }
}

/// 密码来源：真正的生成逻辑在外部服务中
pub trait PasswordSource {
    fn fetch(&self, request: &GenerateRequest) -> Result<String, GenError>;
}

/// 校验选项后向密码来源请求一个新密码
///
/// 若四种字符类型都未选中，直接返回 `GenError::NoCharacterClass`，不会调用 `source`。
pub fn generate<S: PasswordSource + ?Sized>(
    source: &S,
    options: &GenerationOptions,
) -> Result<String, GenError> {
    if !options.has_character_class() {
        return Err(GenError::NoCharacterClass);
    }
    source.fetch(&options.to_request())
}

pub struct HttpPasswordSource {
    client: Client,
    endpoint: String,
}

impl HttpPasswordSource {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, GenError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(endpoint, client))
    }

    pub fn with_client(endpoint: &str, client: Client) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, GenError> {
        Self::new(&config.endpoint, Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PasswordSource for HttpPasswordSource {
    fn fetch(&self, request: &GenerateRequest) -> Result<String, GenError> {
        debug!(
            "POST {} length={} upper={} lower={} numbers={} symbols={}",
            self.endpoint, request.length, request.upper, request.lower, request.numbers, request.symbols
        );
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| {
                warn!("Generation request to {} failed: {}", self.endpoint, e);
                GenError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Generation service at {} answered {}", self.endpoint, status);
            return Err(GenError::Status(status.as_u16()));
        }

        let body: GenerateResponse = response.json()?;
        match body.password {
            Some(password) if !password.is_empty() => Ok(password),
            _ => {
                warn!("Generation service at {} returned an empty password", self.endpoint);
                Err(GenError::EmptyPassword)
            }
        }
    }
}
