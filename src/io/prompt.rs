//! Request/response prompts for the interactive workflow
//!
//! Every question returns either an answer or a cancellation, so the workflow
//! can be written as plain sequential code and driven by a terminal, a script
//! or a test double alike.

use crate::io::error::{Result, prompt_error};
use image::RgbImage;
use std::io::{BufRead, Stdout, StdinLock, Write};

/// Answers that cancel the current question
const CANCEL_WORDS: [&str; 2] = ["q", "cancel"];

/// Source of answers for the workflow's questions
pub trait Prompter {
    /// Ask a free-form question
    ///
    /// `Ok(None)` means the user cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the question cannot be shown or the answer read
    fn ask(&mut self, question: &str) -> Result<Option<String>>;

    /// Show the quantized mosaic and ask whether to keep it
    ///
    /// `Ok(false)` means the user rejected or cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the preview cannot be shown or the answer read
    fn confirm_preview(&mut self, mosaic: &RgbImage) -> Result<bool>;

    /// Report a problem with the last answer before the question is repeated
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be shown
    fn report_error(&mut self, message: &str) -> Result<()>;

    /// Show the final outcome of the workflow
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be shown
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// Line-oriented prompter over any reader/writer pair
///
/// End of input, an empty line, `q` or `cancel` cancel a question.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Create a prompter reading answers from `input` and writing to `output`
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter and return everything written so far
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(prompt_error)?;
        if read == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        if is_cancel(answer) {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").map_err(prompt_error)?;
        self.output.flush().map_err(prompt_error)
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question} ").map_err(prompt_error)?;
        self.output.flush().map_err(prompt_error)?;
        self.read_answer()
    }

    fn confirm_preview(&mut self, mosaic: &RgbImage) -> Result<bool> {
        let preview = render_preview(mosaic);
        self.write_line(&preview)?;

        loop {
            let Some(answer) = self.ask("Okay? [y/n]")? else {
                return Ok(false);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.report_error("Please answer y or n.")?,
            }
        }
    }

    fn report_error(&mut self, message: &str) -> Result<()> {
        self.write_line(message)
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.write_line(message)
    }
}

/// True for answers that cancel a question
pub fn is_cancel(answer: &str) -> bool {
    let answer = answer.trim();
    answer.is_empty()
        || CANCEL_WORDS
            .iter()
            .any(|word| answer.eq_ignore_ascii_case(word))
}

/// Render a mosaic with 24-bit ANSI background colors, two cells per brick
pub fn render_preview(mosaic: &RgbImage) -> String {
    let mut out = String::new();
    for (index, row) in mosaic.rows().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for pixel in row {
            let [r, g, b] = pixel.0;
            out.push_str(&format!("\x1b[48;2;{r};{g};{b}m  "));
        }
        out.push_str("\x1b[0m");
    }
    out
}
