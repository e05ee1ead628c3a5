//! Interactive option menu
//!
//! An explicit state machine instead of a re-prompting recursion:
//!
//! ```text
//! Prompting ──line──> Validating ──id──────> Selected
//!    ^   │                │ ──"c"/"C"──> Cancelled
//!    │   └──EOF──> Cancelled
//!    └──────invalid───────┘
//! ```
//!
//! Input comes from a [`ChoiceSource`], so tests can feed a script.

use inquire::{InquireError, Text};
use std::io::{self, BufRead, Write};
use xdtemplates_core::catalog::{CatalogOption, CANCEL_ID};

const PROMPT: &str = "Make your choice";

/// Supplies one line of user input per prompt; `None` means end of input
pub trait ChoiceSource {
    fn next_choice(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Terminal input through inquire
pub struct TerminalSource;

impl ChoiceSource for TerminalSource {
    fn next_choice(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match Text::new(prompt).prompt() {
            Ok(line) => Ok(Some(line)),
            // Esc and Ctrl-C both leave the menu
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(InquireError::IO(e)) => Err(e),
            Err(other) => Err(io::Error::other(other.to_string())),
        }
    }
}

/// Line-by-line input from any reader (piped stdin, scripts)
pub struct LineSource<R, W> {
    reader: R,
    out: W,
}

impl<R: BufRead, W: Write> LineSource<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }
}

impl<R: BufRead, W: Write> ChoiceSource for LineSource<R, W> {
    fn next_choice(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}: ", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    /// Show the options and wait for input; `rejected` holds the last bad entry
    Prompting { rejected: Option<String> },
    Validating(String),
    Selected(String),
    Cancelled,
}

/// Final result of a menu run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Option(String),
    Cancelled,
}

pub struct Menu<'a> {
    options: &'a [CatalogOption],
}

impl<'a> Menu<'a> {
    pub fn new(options: &'a [CatalogOption]) -> Self {
        Self { options }
    }

    /// Drive the state machine until an option is selected or the user cancels
    pub fn run(&self, source: &mut dyn ChoiceSource, out: &mut dyn Write) -> io::Result<Selection> {
        let mut state = MenuState::Prompting { rejected: None };

        loop {
            state = match state {
                MenuState::Prompting { rejected } => {
                    self.render(rejected.is_some(), out)?;
                    match source.next_choice(PROMPT)? {
                        Some(line) => MenuState::Validating(line),
                        None => MenuState::Cancelled,
                    }
                }
                MenuState::Validating(input) => self.step(&input),
                MenuState::Selected(id) => return Ok(Selection::Option(id)),
                MenuState::Cancelled => return Ok(Selection::Cancelled),
            };
        }
    }

    /// Classify one line of input
    pub fn step(&self, input: &str) -> MenuState {
        let choice = input.trim();

        if choice.eq_ignore_ascii_case(CANCEL_ID) {
            return MenuState::Cancelled;
        }

        match self.options.iter().find(|o| o.id == choice) {
            Some(option) => MenuState::Selected(option.id.clone()),
            None => MenuState::Prompting {
                rejected: Some(input.to_string()),
            },
        }
    }

    fn render(&self, after_invalid: bool, out: &mut dyn Write) -> io::Result<()> {
        if after_invalid {
            writeln!(out)?;
            writeln!(out, "That option isn't valid...")?;
            writeln!(out)?;
        }

        writeln!(out)?;
        writeln!(out, "What action would you like to take?")?;
        for option in self.options {
            writeln!(out, "\t[{}]. {}", option.id, option.name)?;
        }
        writeln!(out, "\t[{}]. Cancel", CANCEL_ID)?;
        writeln!(out)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::path::PathBuf;

    struct Scripted {
        lines: VecDeque<&'static str>,
        prompts: usize,
    }

    impl Scripted {
        fn new(lines: &[&'static str]) -> Self {
            Self {
                lines: lines.iter().copied().collect(),
                prompts: 0,
            }
        }
    }

    impl ChoiceSource for Scripted {
        fn next_choice(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            self.prompts += 1;
            Ok(self.lines.pop_front().map(str::to_string))
        }
    }

    fn options() -> Vec<CatalogOption> {
        ["1", "2"]
            .iter()
            .map(|id| CatalogOption {
                id: id.to_string(),
                name: format!("Job {}", id),
                template_folder: PathBuf::from("t"),
                output_folder: PathBuf::from("o"),
                variable_file: PathBuf::from("v"),
                search_pattern: "*".to_string(),
            })
            .collect()
    }

    fn run(lines: &[&'static str]) -> (Selection, usize, String) {
        let options = options();
        let mut source = Scripted::new(lines);
        let mut out = Vec::new();
        let selection = Menu::new(&options).run(&mut source, &mut out).unwrap();
        (selection, source.prompts, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_select_first_try() {
        let (selection, prompts, out) = run(&["2"]);
        assert_eq!(selection, Selection::Option("2".to_string()));
        assert_eq!(prompts, 1);
        assert!(out.contains("\t[1]. Job 1"));
        assert!(out.contains("\t[2]. Job 2"));
        assert!(out.contains("\t[C]. Cancel"));
        assert!(!out.contains("isn't valid"));
    }

    #[test]
    fn test_cancel_either_case() {
        assert_eq!(run(&["c"]).0, Selection::Cancelled);
        assert_eq!(run(&["C"]).0, Selection::Cancelled);
        assert_eq!(run(&[" c "]).0, Selection::Cancelled);
    }

    #[test]
    fn test_invalid_then_valid() {
        let (selection, prompts, out) = run(&["9", "", "abc", "1"]);
        assert_eq!(selection, Selection::Option("1".to_string()));
        assert_eq!(prompts, 4);
        assert_eq!(out.matches("That option isn't valid...").count(), 3);
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (selection, prompts, _) = run(&["nope"]);
        assert_eq!(selection, Selection::Cancelled);
        assert_eq!(prompts, 2);
    }

    #[test]
    fn test_long_invalid_script_does_not_grow_stack() {
        let mut lines = vec!["x"; 10_000];
        lines.push("2");
        let (selection, prompts, _) = run(&lines);
        assert_eq!(selection, Selection::Option("2".to_string()));
        assert_eq!(prompts, 10_001);
    }

    #[test]
    fn test_step_transitions() {
        let options = options();
        let menu = Menu::new(&options);
        assert_eq!(menu.step("1"), MenuState::Selected("1".to_string()));
        assert_eq!(menu.step("c"), MenuState::Cancelled);
        assert_eq!(
            menu.step("3"),
            MenuState::Prompting {
                rejected: Some("3".to_string())
            }
        );
    }

    #[test]
    fn test_line_source_reads_until_eof() {
        let input = io::Cursor::new("9\r\n1\n");
        let mut prompts = Vec::new();
        let mut source = LineSource::new(input, &mut prompts);

        assert_eq!(source.next_choice("Pick").unwrap(), Some("9".to_string()));
        assert_eq!(source.next_choice("Pick").unwrap(), Some("1".to_string()));
        assert_eq!(source.next_choice("Pick").unwrap(), None);
        drop(source);
        assert_eq!(String::from_utf8(prompts).unwrap(), "Pick: Pick: Pick: ");
    }
}
