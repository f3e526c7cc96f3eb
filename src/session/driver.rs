use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use super::{Presenter, Session, SessionError};
use crate::debounce::Debouncer;
use crate::nav::Key;
use crate::state::Filter;

pub const HELP: &str = "commands: <text> | /search <text> | /filter <name|all> | /more | /esc | /up /down /left /right | /enter /space | /focus <n> | /tab <n> | /show | /help | /quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Search box input; goes through the debouncer.
    Search(String),
    Filter(Filter),
    More,
    Key(Key),
    /// Zero-based card index.
    Focus(usize),
    /// Zero-based filter control index.
    FocusFilter(usize),
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Lines starting with `/` are commands, anything else is typed into the
    /// search box.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.strip_prefix('/') else {
            return Command::Search(line.to_string());
        };
        let (name, arg) = rest.split_once(' ').unwrap_or((rest, ""));
        match name.to_lowercase().as_str() {
            "search" | "s" => Command::Search(arg.to_string()),
            "filter" | "f" if !arg.trim().is_empty() => Command::Filter(Filter::parse(arg.trim())),
            "more" | "m" => Command::More,
            "esc" | "escape" | "clear" => Command::Key(Key::Escape),
            "up" | "down" | "left" | "right" | "enter" | "space" => match Key::parse(name) {
                Some(key) => Command::Key(key),
                None => Command::Unknown(line.to_string()),
            },
            "focus" => match arg.trim().parse::<usize>() {
                Ok(n) if n >= 1 => Command::Focus(n - 1),
                _ => Command::Unknown(line.to_string()),
            },
            "tab" => match arg.trim().parse::<usize>() {
                Ok(n) if n >= 1 => Command::FocusFilter(n - 1),
                _ => Command::Unknown(line.to_string()),
            },
            "show" => Command::Show,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriveSummary {
    pub commands: usize,
    pub searches: usize,
}

/// Runs a session off line-based input until the input ends or `/quit`.
///
/// Search text is debounced by `window`; everything else applies as soon as
/// its line is read. A search still waiting when the input ends is applied
/// before returning.
pub async fn drive<R, P>(
    session: &mut Session<P>,
    input: R,
    window: Duration,
) -> Result<DriveSummary, SessionError>
where
    R: AsyncBufRead + Unpin,
    P: Presenter,
{
    let (fired_tx, mut fired_rx) = mpsc::unbounded_channel::<String>();
    let mut debouncer = Debouncer::new(window, fired_tx);
    let mut lines = input.lines();
    let mut input_open = true;
    let mut summary = DriveSummary::default();

    loop {
        tokio::select! {
            biased;
            Some(text) = fired_rx.recv() => {
                summary.searches += 1;
                session.search_changed(text);
            }
            line = lines.next_line(), if input_open => {
                let line = line.map_err(|source| SessionError::Input { source })?;
                let Some(line) = line else {
                    input_open = false;
                    debouncer.close();
                    continue;
                };
                summary.commands += 1;
                match Command::parse(&line) {
                    Command::Search(text) => {
                        debouncer.schedule(text);
                    }
                    Command::Filter(filter) => session.filter_changed(filter),
                    Command::More => {
                        if session.reveal_more().is_none() && !session.selection().has_more {
                            session.notice("nothing more to load");
                        }
                    }
                    Command::Key(Key::Escape) => {
                        debouncer.cancel();
                        session.navigate(Key::Escape);
                    }
                    Command::Key(key) => {
                        if session.navigate(key).is_none() {
                            let hint = if key.activates() {
                                "no filter focused, use /tab <n>"
                            } else {
                                "no card focused, use /focus <n>"
                            };
                            session.notice(hint);
                        }
                    }
                    Command::Focus(index) => {
                        if !session.focus(index) {
                            session.notice(&format!("no card #{}", index + 1));
                        }
                    }
                    Command::FocusFilter(index) => {
                        if !session.focus_filter(index) {
                            session.notice(&format!("no filter #{}", index + 1));
                        }
                    }
                    Command::Show => session.refresh(),
                    Command::Help => session.notice(HELP),
                    Command::Quit => break,
                    Command::Unknown(raw) => session.notice(&format!("unknown command '{raw}'")),
                }
            }
            else => break,
        }
    }

    Ok(summary)
}
