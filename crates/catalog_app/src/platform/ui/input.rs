use catalog_core::{Msg, PageViewModel};

use super::constants::RELOAD_LABEL;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Invalid(String),
}

/// Turns one line of user input into a command. Blank lines yield `None`.
///
/// `next` and `prev` are resolved against the pagination currently on screen.
pub fn parse_command(line: &str, view: &PageViewModel) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "sort" if !rest.is_empty() => Command::Dispatch(Msg::SortSelected {
            value: rest.to_string(),
        }),
        "per-page" | "perpage" if !rest.is_empty() => Command::Dispatch(Msg::PerPageSelected {
            value: rest.to_string(),
        }),
        "page" => match rest.parse::<usize>() {
            Ok(page) if page >= 1 => Command::Dispatch(Msg::PageSelected(page)),
            _ => Command::Invalid(format!("not a page number: {rest:?}")),
        },
        "next" => step_page(view, 1),
        "prev" => step_page(view, -1),
        "search" => Command::Dispatch(Msg::SearchQueryChanged(rest.to_string())),
        "reload" => {
            if view.show_error {
                Command::Dispatch(Msg::ReloadClicked)
            } else {
                Command::Invalid(format!("{RELOAD_LABEL} is only offered after a failed load"))
            }
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Invalid(format!("unknown command: {line}")),
    };
    Some(command)
}

fn step_page(view: &PageViewModel, delta: isize) -> Command {
    let Some(pagination) = &view.pagination else {
        return Command::Invalid("all items are on one page".to_string());
    };
    match pagination.current_page.checked_add_signed(delta) {
        Some(page) if page >= 1 && page <= pagination.page_count => {
            Command::Dispatch(Msg::PageSelected(page))
        }
        _ => Command::Invalid("no page in that direction".to_string()),
    }
}
