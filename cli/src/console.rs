use std::io::{BufRead, Write};

use anyhow::Result;

/// Line-based prompts over any input and output, so a session can be scripted
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows the question and returns the trimmed, lower-cased answer. Fails once input runs out.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input ended while waiting for an answer to {:?}", question.trim());
        }
        Ok(line.trim().to_lowercase())
    }

    /// Keeps asking until the answer is one of `valid`. Every attempt after the first shows
    /// `rerun_text` instead of the question.
    pub fn choose(&mut self, question: &str, rerun_text: &str, valid: &[&str]) -> Result<String> {
        let mut prompt = question;
        loop {
            let answer = self.ask(prompt)?;
            if valid.contains(&answer.as_str()) {
                return Ok(answer);
            }
            debug!("Rejected {:?}, expected one of {:?}", answer, valid);
            prompt = rerun_text;
        }
    }

    /// Anything besides "yes" is a no
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self.ask(question)? == "yes")
    }
}

#[cfg(test)]
pub mod tests {
    use std::io::Cursor;

    use super::*;

    pub fn scripted(lines: &[&str]) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        let mut input = lines.join("\n");
        input.push('\n');
        Console::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    pub fn printed(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn accepts_valid_answer_in_any_case() {
        let mut console = scripted(&["  New York City "]);
        let answer = console
            .choose("City?\n", "Again?\n", &["chicago", "new york city"])
            .unwrap();
        assert_eq!(answer, "new york city");
        assert_eq!(printed(console), "City?\n");
    }

    #[test]
    fn reprompts_until_valid() {
        let mut console = scripted(&["boston", "", "chicag", "CHICAGO"]);
        let answer = console
            .choose("City?\n", "Again?\n", &["chicago", "washington"])
            .unwrap();
        assert_eq!(answer, "chicago");
        assert_eq!(printed(console), "City?\nAgain?\nAgain?\nAgain?\n");
    }

    #[test]
    fn leaves_later_lines_unread() {
        let mut console = scripted(&["nope", "may", "monday"]);
        assert_eq!(
            console.choose("Month?", "Month!", &["may", "june"]).unwrap(),
            "may"
        );
        assert_eq!(console.ask("Day?").unwrap(), "monday");
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut console = scripted(&["boston"]);
        assert!(console.choose("City?", "Again?", &["chicago"]).is_err());
    }

    #[test]
    fn only_yes_confirms() {
        let mut console = scripted(&["YES", "y", "no", "yes please"]);
        assert!(console.confirm("More?").unwrap());
        assert!(!console.confirm("More?").unwrap());
        assert!(!console.confirm("More?").unwrap());
        assert!(!console.confirm("More?").unwrap());
    }
}
