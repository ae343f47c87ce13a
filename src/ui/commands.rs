use crate::app::{Catalog, Message, Variant, View};

/// Turn one line typed on the current screen into a message.
///
/// Row numbers and menu numbers are 1-based as shown on screen.
pub fn parse_command(line: &str, view: View, catalog: &Catalog) -> Result<Message, String> {
    let line = line.trim();
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    // Available everywhere
    match cmd {
        "quit" | "q" | "exit" => return Ok(Message::Quit),
        "theme" => return Ok(Message::ToggleTheme),
        _ => {}
    }

    match view {
        View::Setup => match cmd {
            "+" => Ok(Message::AdjustPeople(1)),
            "-" => Ok(Message::AdjustPeople(-1)),
            "people" | "p" => parse_int(rest).map(Message::SetPeople),
            "start" | "s" => Ok(Message::StartOrder),
            "settings" => Ok(Message::OpenSettings),
            _ => Err(unknown(cmd)),
        },
        View::Order => match cmd {
            "add" | "a" => Ok(Message::AddRow),
            "rm" => parse_row(rest).map(Message::RemoveRow),
            "+" => parse_row(rest).map(|row| Message::StepQuantity(row, 1)),
            "-" => parse_row(rest).map(|row| Message::StepQuantity(row, -1)),
            "qty" => {
                let (row, value) = split_row(rest)?;
                Ok(Message::SetQuantity(row, value.to_string()))
            }
            "item" => {
                let (row, value) = split_row(rest)?;
                Ok(Message::SelectItem(row, resolve_item(value, catalog)))
            }
            "dough" => {
                let (row, value) = split_row(rest)?;
                let variant = value.parse::<Variant>().map_err(|e| e.to_string())?;
                Ok(Message::SelectVariant(row, variant))
            }
            "next" | "n" => Ok(Message::NextPerson),
            "restart" => Ok(Message::Restart),
            _ => Err(unknown(cmd)),
        },
        View::Summary => match cmd {
            "restart" | "r" => Ok(Message::Restart),
            "home" => Ok(Message::BackHome),
            _ => Err(unknown(cmd)),
        },
        View::Settings => match cmd {
            "add" if !rest.is_empty() => Ok(Message::AddSpecialty(rest.to_string())),
            "del" | "rm" if !rest.is_empty() => Ok(Message::RemoveSpecialty(rest.to_string())),
            "add" | "del" | "rm" => Err(format!("usage: {} <name>", cmd)),
            "back" | "b" => Ok(Message::CloseSettings),
            _ => Err(unknown(cmd)),
        },
    }
}

fn unknown(cmd: &str) -> String {
    if cmd.is_empty() {
        "type a command".to_string()
    } else {
        format!("unknown command '{}'", cmd)
    }
}

fn parse_int(text: &str) -> Result<i64, String> {
    text.parse::<i64>().map_err(|_| format!("'{}' is not a number", text))
}

fn parse_row(text: &str) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("'{}' is not a row number", text)),
    }
}

fn split_row(text: &str) -> Result<(usize, &str), String> {
    let (row, value) = text
        .split_once(char::is_whitespace)
        .ok_or_else(|| "expected <row> <value>".to_string())?;
    Ok((parse_row(row)?, value.trim()))
}

/// A menu number picks from the catalog; anything else is taken as a name.
fn resolve_item(value: &str, catalog: &Catalog) -> String {
    value
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| catalog.get(i))
        .unwrap_or(value)
        .to_string()
}
