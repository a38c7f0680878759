//! The presentation seam between game logic and whatever shows it.
//!
//! Game code never prints. It talks to a [`View`], which the runtime backs
//! with the input pipeline and tests back with a scripted recorder.

/// Result of [`View::select_or_enter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The player picked the listed option at this zero-based index.
    Listed(usize),
    /// The player typed free text instead.
    Entered(String),
    /// Input ended or was empty.
    Cancelled,
}

/// Output and prompted input for a running game.
pub trait View {
    /// Shows an ordinary message.
    fn present_message(&mut self, message: &str);

    /// Shows a message that must stand out.
    fn present_urgent(&mut self, message: &str);

    /// Shows an error.
    fn present_error(&mut self, message: &str);

    /// Changes the prompt shown for the next line of input.
    fn present_prompt(&mut self, prompt: &str);

    /// Blocks for the next line of input. `None` means input is over.
    fn read_line(&mut self) -> Option<String>;

    /// Lists `options` numbered from 1 and asks for one of them.
    ///
    /// Returns the zero-based index, or `None` if the answer was unusable.
    fn select(&mut self, options: &[String]) -> Option<usize> {
        if options.is_empty() {
            self.present_message("There is nothing to choose from.");
            return None;
        }
        self.present_message(&numbered(options));
        self.present_prompt(&format!("Choose an option (1-{}): ", options.len()));
        let line = self.read_line()?;
        let Ok(number) = line.trim().parse::<usize>() else {
            self.present_urgent("Input was not a number.");
            return None;
        };
        if (1..=options.len()).contains(&number) {
            Some(number - 1)
        } else {
            self.present_urgent("Invalid selection number.");
            None
        }
    }

    /// Lists `options` and accepts either a number or free text.
    ///
    /// A number in range selects that option; anything else non-empty is
    /// returned verbatim (trimmed).
    fn select_or_enter(&mut self, options: &[String], prompt: &str) -> Selection {
        if options.is_empty() {
            self.present_prompt(&format!("{prompt}: "));
        } else {
            self.present_message(&numbered(options));
            self.present_prompt(&format!(
                "Choose an option (1-{}) or {prompt}: ",
                options.len()
            ));
        }
        let Some(line) = self.read_line() else {
            return Selection::Cancelled;
        };
        let text = line.trim();
        if text.is_empty() {
            return Selection::Cancelled;
        }
        match text.parse::<usize>() {
            Ok(number) if (1..=options.len()).contains(&number) => Selection::Listed(number - 1),
            _ => Selection::Entered(text.to_string()),
        }
    }
}

fn numbered(options: &[String]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}) {option}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A [`View`] that records output and replays scripted input.
///
/// Handy for driving game logic without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedView {
    input: std::collections::VecDeque<String>,
    /// Everything presented, in order, tagged by channel.
    pub output: Vec<Presented>,
}

/// One thing shown through a [`ScriptedView`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Presented {
    /// From [`View::present_message`].
    Message(String),
    /// From [`View::present_urgent`].
    Urgent(String),
    /// From [`View::present_error`].
    Error(String),
    /// From [`View::present_prompt`].
    Prompt(String),
}

impl ScriptedView {
    /// Creates a view that will answer reads with `lines`, in order.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Text of every ordinary message.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.output
            .iter()
            .filter_map(|p| match p {
                Presented::Message(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text of every urgent message.
    #[must_use]
    pub fn urgent(&self) -> Vec<&str> {
        self.output
            .iter()
            .filter_map(|p| match p {
                Presented::Urgent(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text of every error.
    #[must_use]
    pub fn errors(&self) -> Vec<&str> {
        self.output
            .iter()
            .filter_map(|p| match p {
                Presented::Error(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The most recent message of any channel except prompts.
    #[must_use]
    pub fn last_text(&self) -> Option<&str> {
        self.output.iter().rev().find_map(|p| match p {
            Presented::Message(m) | Presented::Urgent(m) | Presented::Error(m) => Some(m.as_str()),
            Presented::Prompt(_) => None,
        })
    }

    /// Forgets recorded output.
    pub fn clear(&mut self) {
        self.output.clear();
    }
}

impl View for ScriptedView {
    fn present_message(&mut self, message: &str) {
        self.output.push(Presented::Message(message.to_string()));
    }

    fn present_urgent(&mut self, message: &str) {
        self.output.push(Presented::Urgent(message.to_string()));
    }

    fn present_error(&mut self, message: &str) {
        self.output.push(Presented::Error(message.to_string()));
    }

    fn present_prompt(&mut self, prompt: &str) {
        self.output.push(Presented::Prompt(prompt.to_string()));
    }

    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }
}
