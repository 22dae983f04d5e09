//! Text rendering of the board: event list, edit dialog, activity log.
//! Everything returns a String; printing is up to the caller.

use crate::config::Config;
use crate::core::activity::{ActivityLog, Operation};
use crate::core::{EditSession, IgnoreReason, Outcome};
use crate::errors::AppResult;
use crate::models::Event;
use crate::utils::colors::{self, GREY, visible_width};
use crate::utils::formatting::{pad_right, truncate};
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::{DateTime, Utc};

const TITLE_MAX: usize = 48;
const DIALOG_WIDTH: usize = 44;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub time_format: String,
    pub separator_char: char,
    pub color: bool,
}

impl RenderOptions {
    pub fn from_config(cfg: &Config, color: bool) -> Self {
        Self {
            time_format: cfg.time_format.clone(),
            separator_char: cfg.separator_char.chars().next().unwrap_or('-'),
            color: color && cfg.color,
        }
    }

    fn time(&self, t: &DateTime<Utc>) -> String {
        t.format(&self.time_format).to_string()
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&Config::default(), false)
    }
}

pub fn render_list(events: &[Event], opts: &RenderOptions) -> String {
    if events.is_empty() {
        return "No events.\n".to_string();
    }

    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("Title"),
        Column::new("Start"),
        Column::new("End"),
    ])
    .with_separator(opts.separator_char);

    for ev in events {
        table.add_row(vec![
            ev.id.to_string(),
            colors::colorize_optional(&truncate(&ev.title, TITLE_MAX), opts.color),
            ev.start_str(&opts.time_format),
            ev.end_str(&opts.time_format),
        ]);
    }

    table.render()
}

/// The edit dialog, or None while it is closed.
pub fn render_dialog(session: &EditSession, opts: &RenderOptions) -> Option<String> {
    let draft = session.draft()?;
    let heading = match session.target() {
        Some(t) => format!(" Edit event #{} ", t.id),
        None => " New event ".to_string(),
    };

    let inner = DIALOG_WIDTH - 4;
    let label_w = "Title : ".len();
    let mut lines: Vec<String> = Vec::new();

    // Title, wrapped
    let title = draft.title.as_deref().unwrap_or("");
    if title.is_empty() {
        lines.push(format!("Title : {}", colors::paint("(empty)", GREY, opts.color)));
    } else {
        let wrapped = textwrap::wrap(title, inner - label_w);
        for (i, part) in wrapped.iter().enumerate() {
            let label = if i == 0 { "Title : " } else { "        " };
            lines.push(format!("{label}{part}"));
        }
    }

    let time_or_now = |t: Option<&DateTime<Utc>>| match t {
        Some(t) => opts.time(t),
        None => colors::paint("(now, on save)", GREY, opts.color),
    };
    lines.push(format!("Start : {}", time_or_now(draft.start_time.as_ref())));
    lines.push(format!("End   : {}", time_or_now(draft.end_time.as_ref())));

    let width = lines
        .iter()
        .map(|l| visible_width(l))
        .max()
        .unwrap_or(0)
        .max(inner)
        .max(heading.len() + 2);

    let mut out = String::new();
    out.push_str(&format!(
        "+--{}{}+\n",
        heading,
        "-".repeat(width - heading.len())
    ));
    for l in &lines {
        out.push_str(&format!("| {} |\n", pad_right(l, width)));
    }
    out.push_str(&format!("+{}+\n", "-".repeat(width + 2)));
    out.push_str("  [save] [cancel]\n");
    Some(out)
}

pub fn render_json(events: &[Event]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(events)?)
}

fn color_for_operation(op: Operation) -> Colour {
    match op {
        Operation::Add => Colour::Green,
        Operation::Del => Colour::Red,
        Operation::Edit | Operation::New => Colour::Yellow,
        Operation::Set => Colour::Cyan,
        Operation::Save => Colour::Blue,
        Operation::Cancel => Colour::Purple,
    }
}

pub fn render_activity(log: &ActivityLog, opts: &RenderOptions) -> String {
    if log.is_empty() {
        return "No activity yet.\n".to_string();
    }

    let entries = log.entries();
    let num_w = entries.len().to_string().len();
    let op_targets: Vec<String> = entries
        .iter()
        .map(|e| {
            if e.target.is_empty() {
                e.operation.as_str().to_string()
            } else {
                format!("{} ({})", e.operation.as_str(), e.target)
            }
        })
        .collect();
    let op_w = op_targets.iter().map(|s| s.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (i, (entry, op_target)) in entries.iter().zip(&op_targets).enumerate() {
        let padded = format!("{:<op_w$}", op_target);
        let shown = if opts.color {
            // only the operation word is colored
            let (op, rest) = padded.split_at(entry.operation.as_str().len());
            format!("{}{}", color_for_operation(entry.operation).paint(op), rest)
        } else {
            padded
        };

        out.push_str(&format!(
            "{:>num_w$}: {} | {} => {}\n",
            i + 1,
            entry.at.format("%FT%T%:z"),
            shown,
            entry.message,
        ));
    }
    out
}

/// Status line for an outcome, or None when the outcome speaks for itself.
pub fn describe_outcome(outcome: &Outcome) -> Option<String> {
    let msg = match outcome {
        Outcome::Added(id) => format!("Added event #{id}"),
        Outcome::Removed(id) => format!("Deleted event #{id}"),
        Outcome::Created(id) => format!("Created event #{id}"),
        Outcome::Replaced(id) => format!("Saved event #{id}"),
        Outcome::Dropped(id) => format!("Event #{id} no longer exists, changes discarded"),
        Outcome::Cancelled => "Edit cancelled".to_string(),
        Outcome::Ignored(IgnoreReason::UnknownEvent(id)) => format!("No event with id {id}"),
        Outcome::Ignored(IgnoreReason::NoOpenSession) => {
            "No edit dialog is open (use 'edit <id>' or 'new')".to_string()
        }
        Outcome::Ignored(IgnoreReason::FieldMismatch(f)) => {
            format!("Value does not fit field '{}'", f.ef_as_str())
        }
        Outcome::Opened(_) | Outcome::FieldChanged(_) => return None,
    };
    Some(msg)
}
