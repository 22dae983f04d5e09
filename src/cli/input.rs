//! Parsing of shell lines into intents and view commands.

use crate::core::Intent;
use crate::errors::{AppError, AppResult};
use crate::models::{EventField, EventId, FieldValue};
use crate::utils::time::require_timestamp;

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Something for the board to apply.
    Intent(Intent),
    List,
    Show,
    Json,
    Log,
    Help,
    Quit,
    /// Blank line or comment.
    Nothing,
}

pub fn parse_line(line: &str) -> AppResult<ShellCommand> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(ShellCommand::Nothing);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((v, r)) => (v, r.trim()),
        None => (line, ""),
    };
    let verb = verb.to_lowercase();

    let cmd = match verb.as_str() {
        "add" => ShellCommand::Intent(Intent::Add),
        "del" | "delete" | "rm" => ShellCommand::Intent(Intent::Delete(parse_id(&verb, rest)?)),
        "edit" => ShellCommand::Intent(Intent::Edit(parse_id(&verb, rest)?)),
        "new" => ShellCommand::Intent(Intent::New),
        "set" => {
            let (field, value) = parse_set(rest)?;
            ShellCommand::Intent(Intent::SetField(field, value))
        }
        "save" => ShellCommand::Intent(Intent::Save),
        "cancel" => ShellCommand::Intent(Intent::Cancel),
        "list" | "ls" => ShellCommand::List,
        "show" => ShellCommand::Show,
        "json" => ShellCommand::Json,
        "log" => ShellCommand::Log,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        _ => return Err(AppError::UnknownCommand(verb.clone())),
    };

    Ok(cmd)
}

fn parse_id(verb: &str, arg: &str) -> AppResult<EventId> {
    if arg.is_empty() {
        return Err(AppError::MissingArgument(verb.to_string()));
    }
    arg.parse::<u32>()
        .map(EventId)
        .map_err(|_| AppError::InvalidId(arg.to_string()))
}

/// `set <field> <value...>`; the title keeps the rest of the line verbatim.
fn parse_set(rest: &str) -> AppResult<(EventField, FieldValue)> {
    if rest.is_empty() {
        return Err(AppError::MissingArgument("set".into()));
    }

    let (name, value) = match rest.split_once(char::is_whitespace) {
        Some((n, v)) => (n, v.trim_start()),
        None => (rest, ""),
    };
    let field = EventField::ef_from_str(name).ok_or_else(|| AppError::InvalidField(name.into()))?;

    if field.is_time() {
        if value.is_empty() {
            return Err(AppError::MissingArgument(format!("set {}", field.ef_as_str())));
        }
        Ok((field, FieldValue::Time(require_timestamp(value)?)))
    } else {
        Ok((field, FieldValue::Text(value.to_string())))
    }
}

pub const HELP: &str = "\
Commands:
  add                 add a placeholder event
  del <id>            delete an event
  edit <id>           open the edit dialog on an event
  new                 open the edit dialog for a new event
  set title <text>    change the draft title
  set start <time>    change the draft start (RFC 3339 or YYYY-MM-DD HH:MM, UTC)
  set end <time>      change the draft end
  save                save the draft and close the dialog
  cancel              close the dialog without saving
  list                show the event list
  show                show the edit dialog
  json                print the event list as JSON
  log                 print the activity log
  help                show this help
  quit                leave the shell";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parses_intents() {
        assert_eq!(parse_line("add").unwrap(), ShellCommand::Intent(Intent::Add));
        assert_eq!(
            parse_line("  DEL 2 ").unwrap(),
            ShellCommand::Intent(Intent::Delete(EventId(2)))
        );
        assert_eq!(
            parse_line("edit 1").unwrap(),
            ShellCommand::Intent(Intent::Edit(EventId(1)))
        );
        assert_eq!(parse_line("save").unwrap(), ShellCommand::Intent(Intent::Save));
        assert_eq!(parse_line("cancel").unwrap(), ShellCommand::Intent(Intent::Cancel));
    }

    #[test]
    fn set_title_keeps_rest_of_line() {
        assert_eq!(
            parse_line("set title  Team   sync #3").unwrap(),
            ShellCommand::Intent(Intent::SetField(
                EventField::Title,
                FieldValue::Text("Team   sync #3".into())
            ))
        );
        // an empty title is allowed
        assert_eq!(
            parse_line("set title").unwrap(),
            ShellCommand::Intent(Intent::SetField(EventField::Title, FieldValue::Text(String::new())))
        );
    }

    #[test]
    fn set_start_parses_timestamp() {
        assert_eq!(
            parse_line("set start 2025-03-20 15:30").unwrap(),
            ShellCommand::Intent(Intent::SetField(
                EventField::StartTime,
                FieldValue::Time(Utc.with_ymd_and_hms(2025, 3, 20, 15, 30, 0).unwrap())
            ))
        );
    }

    #[test]
    fn comments_and_blanks_do_nothing() {
        assert_eq!(parse_line("").unwrap(), ShellCommand::Nothing);
        assert_eq!(parse_line("   # add").unwrap(), ShellCommand::Nothing);
    }

    #[test]
    fn reports_bad_input() {
        assert!(matches!(parse_line("frobnicate"), Err(AppError::UnknownCommand(v)) if v == "frobnicate"));
        assert!(matches!(parse_line("del"), Err(AppError::MissingArgument(_))));
        assert!(matches!(parse_line("del two"), Err(AppError::InvalidId(_))));
        assert!(matches!(parse_line("set colour red"), Err(AppError::InvalidField(_))));
        assert!(matches!(parse_line("set end soon"), Err(AppError::InvalidTimestamp(_))));
        assert!(matches!(parse_line("set end"), Err(AppError::MissingArgument(_))));
    }
}
