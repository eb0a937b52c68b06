//! codepad: line-oriented front end over a workspace session.

mod logging;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use codepad::core::Command;
use codepad::kernel::services::settings::{load_user_settings, parse_keybinding};
use codepad::kernel::{Action, KeyDispatch, LanguageId};
use codepad::models::FileId;
use codepad::runtime::{OpenGate, Session};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

const HELP: &str = "\
commands:
  ls                      list files (* marks the active one)
  show                    print the active file and the run panel
  new <lang> [name]       create a file (python | java | cpp)
  new <name.ext>          create a file, language from the extension
  open <file>             make a file active
  edit <file> <text>      replace content (\\n and \\t are unescaped)
  rename <file> <name>    rename a file
  rm <file>               delete a file
  dup <file>              duplicate a file
  save                    save the active file
  key <combo>             press a key combination, e.g. ctrl+enter
  stdin <text>            set program input
  run | stop | clear      control the run panel
  wait                    block until the current run settles
  shortcuts               toggle the shortcut overlay
  quit
<file> is a 1-based index from `ls` or a file name.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum FileRef {
    Index(usize),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    List,
    Show,
    New {
        language: LanguageId,
        name: Option<String>,
    },
    Open(FileRef),
    Edit(FileRef, String),
    Rename(FileRef, String),
    Remove(FileRef),
    Duplicate(FileRef),
    Save,
    Key(String),
    Stdin(String),
    Run,
    Stop,
    Clear,
    Wait,
    Shortcuts,
    Help,
    Quit,
}

fn parse_file_ref(value: &str) -> FileRef {
    match value.parse::<usize>() {
        Ok(index) if index > 0 => FileRef::Index(index),
        _ => FileRef::Name(value.to_string()),
    }
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(pos) => (&text[..pos], text[pos..].trim_start()),
        None => (text, ""),
    }
}

fn parse_line(line: &str) -> Result<Option<Line>, String> {
    let (verb, rest) = split_word(line.trim_end());
    if verb.is_empty() {
        return Ok(None);
    }

    let require = |value: &str, what: &str| -> Result<(), String> {
        if value.is_empty() {
            Err(format!("{verb}: missing {what}"))
        } else {
            Ok(())
        }
    };

    let parsed = match verb {
        "ls" => Line::List,
        "show" => Line::Show,
        "new" => {
            let (first, name) = split_word(rest);
            require(first, "language or file name")?;
            match LanguageId::from_name(&first.to_ascii_lowercase()) {
                Some(language) => {
                    let name = (!name.is_empty()).then(|| name.to_string());
                    Line::New { language, name }
                }
                // `new solver.java` picks the language from the extension.
                None if first.contains('.') => Line::New {
                    language: LanguageId::from_file_name(first),
                    name: Some(rest.to_string()),
                },
                None => return Err(format!("new: unknown language `{first}`")),
            }
        }
        "open" | "rm" | "dup" => {
            require(rest, "file")?;
            let file = parse_file_ref(rest);
            match verb {
                "open" => Line::Open(file),
                "rm" => Line::Remove(file),
                _ => Line::Duplicate(file),
            }
        }
        "edit" | "rename" => {
            let (file, text) = split_word(rest);
            require(file, "file")?;
            let file = parse_file_ref(file);
            if verb == "edit" {
                Line::Edit(file, unescape(text))
            } else {
                require(text, "name")?;
                Line::Rename(file, text.to_string())
            }
        }
        "save" => Line::Save,
        "key" => {
            require(rest, "key combination")?;
            Line::Key(rest.to_string())
        }
        "stdin" => Line::Stdin(unescape(rest)),
        "run" => Line::Run,
        "stop" => Line::Stop,
        "clear" => Line::Clear,
        "wait" => Line::Wait,
        "shortcuts" => Line::Shortcuts,
        "help" | "?" => Line::Help,
        "quit" | "exit" => Line::Quit,
        other => return Err(format!("unknown command `{other}`, try `help`")),
    };
    Ok(Some(parsed))
}

fn resolve(session: &Session, file: &FileRef) -> Result<FileId, String> {
    let workspace = &session.state().workspace;
    match file {
        FileRef::Index(index) => workspace
            .ids()
            .get(index - 1)
            .copied()
            .ok_or_else(|| format!("no file at index {index}")),
        FileRef::Name(name) => workspace
            .files()
            .find(|record| record.name() == name)
            .map(|record| record.id())
            .ok_or_else(|| format!("no file named `{name}`")),
    }
}

fn print_listing(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let workspace = &session.state().workspace;
    if workspace.is_empty() {
        return writeln!(out, "(no files)");
    }
    let active = workspace.active_id();
    for (index, record) in workspace.files().enumerate() {
        let marker = if Some(record.id()) == active { '*' } else { ' ' };
        writeln!(
            out,
            "{marker} {:>2}  {:<24} {}",
            index + 1,
            record.name(),
            record.language().display_name()
        )?;
    }
    Ok(())
}

fn print_panel(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let state = session.state();
    match state.workspace.active() {
        Some(record) => {
            writeln!(out, "--- {} ---", record.name())?;
            writeln!(out, "{}", record.content().unwrap_or_default())?;
        }
        None => writeln!(out, "(no active file)")?,
    }
    writeln!(out, "--- output [{}] ---", state.execution.status().label())?;
    write!(out, "{}", state.execution.transcript())?;
    if state.ui.shortcuts_visible {
        writeln!(out, "--- shortcuts ---")?;
        for hint in session.dispatcher().keybindings().shortcut_hints() {
            writeln!(out, "{:<28} {}", hint.keys, hint.description)?;
        }
    }
    Ok(())
}

fn flush_notifications(out: &mut impl Write, session: &mut Session) -> io::Result<()> {
    for notification in session.take_notifications() {
        writeln!(out, "[{}] {}", notification.title, notification.description)?;
    }
    Ok(())
}

fn report(out: &mut impl Write, outcome: &KeyDispatch) -> io::Result<()> {
    match outcome {
        KeyDispatch::Handled { .. } => Ok(()),
        KeyDispatch::Ignored { command } => writeln!(out, "({} ignored)", command.name()),
        KeyDispatch::PassThrough => writeln!(out, "(not bound)"),
    }
}

fn apply(
    session: &mut Session,
    file: &FileRef,
    make: impl FnOnce(FileId) -> Action,
) -> Result<(), String> {
    let id = resolve(session, file)?;
    session.dispatch(make(id));
    Ok(())
}

/// Returns `false` once the user asks to quit.
fn execute(out: &mut impl Write, session: &mut Session, line: Line) -> io::Result<bool> {
    let result: Result<(), String> = match line {
        Line::List => {
            print_listing(out, session)?;
            Ok(())
        }
        Line::Show => {
            print_panel(out, session)?;
            Ok(())
        }
        Line::New { language, name } => {
            match name {
                Some(name) => {
                    session.dispatch(Action::CreateFile { name, language });
                }
                None => {
                    session.trigger(Command::NewFile(language));
                }
            }
            Ok(())
        }
        Line::Open(file) => apply(session, &file, Action::SelectFile),
        Line::Edit(file, content) => {
            apply(session, &file, |id| Action::UpdateContent { id, content })
        }
        Line::Rename(file, name) => apply(session, &file, |id| Action::RenameFile { id, name }),
        Line::Remove(file) => apply(session, &file, Action::DeleteFile),
        Line::Duplicate(file) => apply(session, &file, Action::DuplicateFile),
        Line::Save => {
            let outcome = session.trigger(Command::SaveFile);
            report(out, &outcome)?;
            Ok(())
        }
        Line::Key(combo) => match parse_keybinding(&combo) {
            Some(key) => {
                let outcome = session.handle_key(key);
                report(out, &outcome)?;
                Ok(())
            }
            None => Err(format!("cannot parse key combination `{combo}`")),
        },
        Line::Stdin(text) => {
            session.dispatch(Action::SetStdin(text));
            Ok(())
        }
        Line::Run => {
            let outcome = session.trigger(Command::RunCode);
            report(out, &outcome)?;
            Ok(())
        }
        Line::Stop => {
            session.trigger(Command::StopRun);
            Ok(())
        }
        Line::Clear => {
            session.trigger(Command::ClearOutput);
            Ok(())
        }
        Line::Wait => {
            while session.state().execution.is_running() {
                thread::sleep(POLL_INTERVAL);
                session.pump();
            }
            write!(out, "{}", session.state().execution.transcript())?;
            Ok(())
        }
        Line::Shortcuts => {
            session.trigger(Command::ToggleShortcuts);
            Ok(())
        }
        Line::Help => {
            writeln!(out, "{HELP}")?;
            Ok(())
        }
        Line::Quit => return Ok(false),
    };

    if let Err(message) = result {
        writeln!(out, "error: {message}")?;
    }
    Ok(true)
}

fn main() -> io::Result<()> {
    let logging = logging::init();
    let settings = load_user_settings();
    let mut session = Session::open(&mut OpenGate, settings).map_err(io::Error::other)?;

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "codepad, type `help` for commands")?;
    if let Some(guard) = &logging {
        writeln!(out, "logs: {}", guard.log_dir().display())?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        session.pump();
        flush_notifications(&mut out, &mut session)?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        session.pump();
        match parse_line(&line) {
            Ok(Some(parsed)) => {
                if !execute(&mut out, &mut session, parsed)? {
                    break;
                }
            }
            Ok(None) => {}
            Err(message) => writeln!(out, "error: {message}")?,
        }
    }

    session.teardown();
    flush_notifications(&mut out, &mut session)?;
    tracing::info!("codepad exited");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/cli_commands.rs"]
mod tests;
