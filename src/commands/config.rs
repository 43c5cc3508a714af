use log::info;
use rpawogen::configtool::{AppConfig, get_config_path};

pub fn update_config(
    endpoint: Option<String>,
    timeout: Option<u64>,
    clear_after: Option<u64>,
) -> Result<(), String> {
    let path = get_config_path().map_err(|e| e.to_string())?;
    let mut config = AppConfig::load_from(&path).map_err(|e| e.to_string())?;

    let changed = endpoint.is_some() || timeout.is_some() || clear_after.is_some();
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }
    if let Some(timeout) = timeout {
        config.timeout_secs = timeout;
    }
    if let Some(clear_after) = clear_after {
        config.clipboard_clear_secs = clear_after;
    }

    if changed {
        config.save_to(&path).map_err(|e| format!("Failed to save config: {}", e))?;
        info!("Configuration saved to {}", path.display());
    }
    println!("Config file: {}", path.display());
    println!("{}", config);
    Ok(())
}
