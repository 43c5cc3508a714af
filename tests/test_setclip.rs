use rpawogen::setclip::{ClipboardSink, SystemClipboard, copy_to_clipboard, run_daemon_if_requested};
use arboard::Clipboard;

// 剪贴板守卫，确保测试后恢复原始内容
struct ClipboardGuard {
    original_content: Option<String>,
    clipboard: Clipboard,
}

impl ClipboardGuard {
    fn new() -> Self {
        let mut clipboard = Clipboard::new().expect("Failed to initialize clipboard");
        let original_content = clipboard.get_text().ok();
        Self { original_content, clipboard }
    }
}

impl Drop for ClipboardGuard {
    fn drop(&mut self) {
        if let Some(original) = &self.original_content {
            let _ = self.clipboard.set_text(original.clone());
        }
    }
}

#[test]
fn test_not_a_daemon_by_default() {
    assert!(run_daemon_if_requested().is_none());
}

#[test]
#[ignore = "needs a desktop clipboard"]
fn test_copy_to_clipboard_plain_text() {
    let mut guard = ClipboardGuard::new();

    assert!(copy_to_clipboard("Ab1!xyz2", 0).is_ok());
    let current_content = guard.clipboard.get_text().expect("Failed to get clipboard content");
    assert_eq!(current_content, "Ab1!xyz2");

    let mut sink = SystemClipboard::new(0);
    sink.write_text("second_password").unwrap();
    assert_eq!(guard.clipboard.get_text().unwrap(), "second_password");
}
