// Line-oriented front end: turns typed commands into UI events and prints the page
use std::fmt::Write;

use crate::ui::memory::ElementKind;
use crate::ui::{EventKind, MemorySurface, Surface};
use crate::viewer::Viewer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Hover(String),
    Leave(String),
    Open(String),
    Close,
    Backdrop,
    List,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  search <text>   filter bodies by name (empty text shows all)
  hover <name>    move the pointer onto a body
  leave <name>    move the pointer off a body
  open <name>     show details for a body
  close           close the details with the close control
  backdrop        click outside the details to close them
  list            print the page
  help            show this help
  quit            exit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };

        let needs_name = |rest: &str, cmd: &str| -> Result<String, String> {
            let name = rest.trim();
            if name.is_empty() {
                Err(format!("usage: {} <name>", cmd))
            } else {
                Ok(name.to_string())
            }
        };

        match word.to_lowercase().as_str() {
            // Keep the raw text; the filter does its own normalization
            "search" | "s" => Ok(Command::Search(rest.trim_end_matches(['\r', '\n']).to_string())),
            "hover" => needs_name(rest, "hover").map(Command::Hover),
            "leave" => needs_name(rest, "leave").map(Command::Leave),
            "open" | "o" => needs_name(rest, "open").map(Command::Open),
            "close" => Ok(Command::Close),
            "backdrop" => Ok(Command::Backdrop),
            "list" | "ls" | "" => Ok(Command::List),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("unknown command {:?}, type 'help'", other)),
        }
    }
}

/// Apply one command to the viewer. Returns a note for the user, if any.
pub fn execute(viewer: &mut Viewer<MemorySurface>, command: &Command) -> Option<String> {
    let container = viewer.container();
    match command {
        Command::Search(text) => {
            let input = viewer.search_input();
            viewer.surface_mut().set_input_value(input, text);
            viewer.dispatch(input, EventKind::Input);
            None
        }
        Command::Hover(name) | Command::Leave(name) | Command::Open(name) => {
            let Some(item) = viewer.surface().item_by_name(container, name) else {
                return Some(format!("no body named {:?}", name));
            };
            let kind = match command {
                Command::Hover(_) => EventKind::PointerEnter,
                Command::Leave(_) => EventKind::PointerLeave,
                _ => EventKind::Activate,
            };
            viewer.dispatch(item, kind);
            None
        }
        Command::Close | Command::Backdrop => {
            let Some(modal) = viewer.surface().find_modal() else {
                return Some("no details open".to_string());
            };
            let target = if *command == Command::Close { modal.close } else { modal.overlay };
            viewer.dispatch(target, EventKind::Activate);
            None
        }
        Command::Help => Some(HELP.to_string()),
        Command::List | Command::Quit => None,
    }
}

/// Text rendering of the page: visible items, any message, and the open modal.
pub fn render_page(viewer: &Viewer<MemorySurface>) -> String {
    let surface = viewer.surface();
    let container = viewer.container();
    let mut out = String::new();

    let query = surface.input_value(viewer.search_input());
    if !query.is_empty() {
        let _ = writeln!(out, "🔍 {}", query);
    }

    for child in surface.children(container) {
        let Some(element) = surface.element(child) else {
            continue;
        };
        match element.kind {
            ElementKind::Paragraph if surface.is_visible(child) => {
                let _ = writeln!(out, "{}", element.text);
            }
            ElementKind::Button if surface.is_visible(child) => {
                let marker = if element.style.glow.is_some() { "✨" } else { "🪐" };
                let _ = writeln!(out, "  {} [{}]", marker, element.text);
            }
            _ => {}
        }
    }

    if let Some(modal) = surface.find_modal().filter(|m| surface.is_visible(m.overlay)) {
        if let Some(view) = surface.details(modal.details) {
            let _ = writeln!(out, "\n┌ {}", view.heading);
            for (label, value) in &view.rows {
                let _ = writeln!(out, "│ {}: {}", label, value);
            }
            let _ = writeln!(out, "└ [×] close");
        }
    }

    out
}
