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
// Clipboard handler

use arboard::Clipboard;
use log::{info, warn};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::{env, process, time::Duration};
use thiserror::Error;

const DAEMON_FLAG: &str = "CLIPBOARD_DAEMON";
const DAEMON_DELAY: &str = "CLIPBOARD_CLEAR_SECS";

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Clipboard helper I/O error: {0}")]
    Helper(#[from] std::io::Error),
}

/// 剪贴板写入端，只写不读
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// 系统剪贴板；`clear_after` 秒后若内容未变则自动清空（0 表示不清空）
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard {
    pub clear_after: u64,
}

impl SystemClipboard {
    pub fn new(clear_after: u64) -> Self {
        Self { clear_after }
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        copy_to_clipboard(text, self.clear_after)
    }
}

// 剪贴板内容通过 stdin 传给后台进程，不出现在环境变量中
fn daemon_command(exe_path: PathBuf, duration: u64) -> process::Command {
    let mut cmd = process::Command::new(exe_path);
    cmd.env(DAEMON_FLAG, "1")
       .env(DAEMON_DELAY, duration.to_string())
       .stdin(process::Stdio::piped())
       .stdout(process::Stdio::null())
       .stderr(process::Stdio::inherit());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
    }

    cmd
}

fn spawn_daemon(secret: &str, duration: u64) -> Result<(), ClipboardError> {
    let mut child = daemon_command(env::current_exe()?, duration).spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(secret.as_bytes())?;
    }
    Ok(())
}

/// X11/Wayland 上剪贴板内容归写入进程所有，进程退出即丢失，
/// 因此 Linux 上总是由后台进程持有内容
fn needs_daemon(duration: u64) -> bool {
    cfg!(target_os = "linux") || duration > 0
}

#[cfg(target_os = "linux")]
fn hold_clipboard(ctx: &mut Clipboard, secret: &str, duration: u64) -> Result<(), ClipboardError> {
    use arboard::SetExtLinux;
    use std::time::Instant;

    let set = ctx.set();
    let set = if duration > 0 {
        set.wait_until(Instant::now() + Duration::from_secs(duration))
    } else {
        set.wait()
    };
    set.text(secret)?;
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn hold_clipboard(_ctx: &mut Clipboard, _secret: &str, duration: u64) -> Result<(), ClipboardError> {
    std::thread::sleep(Duration::from_secs(duration));
    Ok(())
}

fn daemon_task(secret: &str, duration: u64) -> Result<(), ClipboardError> {
    let mut ctx = match Clipboard::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!("[clipboard helper] failed to open clipboard: {}", e);
            return Ok(());
        }
    };

    // 阻塞到期限已到或内容被其他程序替换
    hold_clipboard(&mut ctx, secret, duration)?;
    if duration == 0 {
        return Ok(());
    }

    let current_content = ctx.get_text().unwrap_or_default();
    if current_content == secret {
        ctx.set_text("")?;
        info!("[clipboard helper] clipboard unchanged, cleared");
    } else {
        info!("[clipboard helper] clipboard changed, left untouched");
    }
    Ok(())
}

/// 以纯文本写入剪贴板；`duration` 大于 0 时后台进程到期清空
pub fn copy_to_clipboard(secret: &str, duration: u64) -> Result<(), ClipboardError> {
    let mut ctx = Clipboard::new()?;
    ctx.set_text(secret)?;
    if needs_daemon(duration) {
        spawn_daemon(secret, duration)?;
    }
    Ok(())
}

/// 当前进程是否为清空剪贴板的后台进程；是则执行任务并返回结果
pub fn run_daemon_if_requested() -> Option<Result<(), ClipboardError>> {
    env::var(DAEMON_FLAG).ok()?;
    let duration = env::var(DAEMON_DELAY)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let mut secret = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut secret) {
        return Some(Err(e.into()));
    }
    if secret.is_empty() {
        return Some(Ok(()));
    }
    Some(daemon_task(&secret, duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daemon_command_keeps_secret_out_of_env() {
        let cmd = daemon_command(PathBuf::from("rpawogen"), 30);
        let envs: Vec<(String, Option<String>)> = cmd
            .get_envs()
            .map(|(k, v)| {
                (k.to_string_lossy().into_owned(), v.map(|v| v.to_string_lossy().into_owned()))
            })
            .collect();
        assert!(envs.contains(&(DAEMON_FLAG.to_string(), Some("1".to_string()))));
        assert!(envs.contains(&(DAEMON_DELAY.to_string(), Some("30".to_string()))));
        assert_eq!(envs.len(), 2);
    }

    #[test]
    fn test_needs_daemon() {
        assert!(needs_daemon(15));
        assert_eq!(needs_daemon(0), cfg!(target_os = "linux"));
    }
}
