use log::debug;
use rpawogen::app::{Action, App};
use rpawogen::configtool::{AppConfig, prompt_input};
use rpawogen::render::{notice_line, render};
use rpawogen::setclip::SystemClipboard;
use rpawogen::source::HttpPasswordSource;
use rpawogen::strength::ZxcvbnScorer;

const HELP: &str = "Commands: <number> set length | u/l/n/s toggle uppercase/lowercase/numbers/symbols | g generate | c copy | h help | q quit";

enum Input {
    Act(Action),
    Redraw,
    Help,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    if let Ok(length) = line.parse::<usize>() {
        return Input::Act(Action::SetLength(length));
    }
    match line.to_ascii_lowercase().as_str() {
        "u" => Input::Act(Action::ToggleUpper),
        "l" => Input::Act(Action::ToggleLower),
        "n" => Input::Act(Action::ToggleNumbers),
        "s" => Input::Act(Action::ToggleSymbols),
        "g" => Input::Act(Action::Generate),
        "" => Input::Redraw,
        "c" => Input::Act(Action::Copy),
        "h" | "?" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        other => Input::Unknown(other.to_string()),
    }
}

pub fn run_interactive(config: &AppConfig) -> Result<(), String> {
    let source = HttpPasswordSource::from_config(config)
        .map_err(|e| format!("Failed to create HTTP client: {}", e))?;
    let clipboard = SystemClipboard::new(config.clipboard_clear_secs);
    let mut app = App::new(source, ZxcvbnScorer, clipboard);

    println!("{}", HELP);
    loop {
        println!();
        println!("{}", render(app.state()));
        if let Some(notice) = app.take_notice() {
            println!("{}", notice_line(&notice));
        }

        let line = match prompt_input("> ") {
            Ok(line) => line,
            Err(_) => break, // EOF
        };
        match parse_input(&line) {
            Input::Act(action) => {
                debug!("Dispatching {:?}", action);
                app.dispatch(action);
            }
            Input::Redraw => {}
            Input::Help => println!("{}", HELP),
            Input::Quit => break,
            Input::Unknown(cmd) => println!("Unknown command '{}'. {}", cmd, HELP),
        }
    }
    Ok(())
}
