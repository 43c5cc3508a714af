use log::info;
use rpawogen::GenerationOptions;
use rpawogen::app::{App, MSG_COPY_FAILED, generation_error_message};
use rpawogen::configtool::AppConfig;
use rpawogen::render::{strength_bar, strength_line};
use rpawogen::setclip::SystemClipboard;
use rpawogen::source::HttpPasswordSource;
use rpawogen::strength::ZxcvbnScorer;

pub fn generate_remote(
    config: &AppConfig,
    options: GenerationOptions,
    copy: bool,
) -> Result<(), String> {
    let source = HttpPasswordSource::from_config(config)
        .map_err(|e| format!("Failed to create HTTP client: {}", e))?;
    info!("Requesting password from {}", source.endpoint());
    let clipboard = SystemClipboard::new(config.clipboard_clear_secs);
    let mut app = App::with_options(options, source, ZxcvbnScorer, clipboard);

    // 细节已由 App::generate 写入日志
    let password = app.generate()
        .map_err(|e| generation_error_message(&e).to_string())?
        .to_string();
    println!("Generated password: {}", password);
    if let Some(strength) = &app.state().strength {
        println!("{}", strength_line(strength));
        println!("{}", strength_bar(strength));
    }

    if copy {
        app.copy().map_err(|_| MSG_COPY_FAILED.to_string())?;
        println!("Password copied!");
        if config.clipboard_clear_secs > 0 {
            println!("Clipboard will be cleared in {} seconds.", config.clipboard_clear_secs);
        }
    }
    Ok(())
}
