//! Target Prompts
//!
//! Fills in any coordinate not given on the command line. Uses dialoguer on a
//! terminal and a plain line read otherwise, so piped input keeps working.

use std::io::{self, BufRead, Write};

use dialoguer::console::Term;
use dialoguer::Input;
use is_terminal::IsTerminal;

use crate::domain::value_objects::{Target, TargetField};

/// Prompt text for a field, without the trailing `: `
pub fn prompt_text(field: TargetField) -> &'static str {
    match field {
        TargetField::Repository => "Enter the name of git repository (e.g. github.com)",
        TargetField::Namespace => "Enter the namespace in the repository (e.g. zulily)",
        TargetField::Project => "Enter the name of the project (e.g. fizzbuzz)",
    }
}

/// Read one answer from a line-oriented stream.
///
/// An empty answer falls back to `default`; EOF yields an empty string so the
/// name validator reports it.
pub fn ask_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    field: TargetField,
    default: Option<&str>,
) -> io::Result<String> {
    match default {
        Some(default) => write!(writer, "{} [{}]: ", prompt_text(field), default)?,
        None => write!(writer, "{}: ", prompt_text(field))?,
    }
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let answer = line.trim();

    if answer.is_empty() {
        return Ok(default.unwrap_or_default().to_string());
    }
    Ok(answer.to_string())
}

fn ask_terminal(field: TargetField, default: Option<&str>) -> io::Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(prompt_text(field))
        .allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    input
        .interact_text_on(&Term::stdout())
        .map(|answer| answer.trim().to_string())
        .map_err(io::Error::other)
}

/// Build the target from flags, falling back to prompts field by field.
///
/// `given` returns the command-line value, `default` the configured prefill.
pub fn collect_target<'a>(
    given: impl Fn(TargetField) -> Option<&'a str>,
    default: impl Fn(TargetField) -> Option<&'a str>,
) -> io::Result<Target> {
    let interactive = io::stdin().is_terminal();
    let mut values = Vec::with_capacity(TargetField::ALL.len());

    for field in TargetField::ALL {
        let value = match given(field) {
            Some(value) => value.to_string(),
            None if interactive => ask_terminal(field, default(field))?,
            None => {
                let stdin = io::stdin();
                let mut stdout = io::stdout();
                ask_line(&mut stdin.lock(), &mut stdout, field, default(field))?
            }
        };
        values.push(value);
    }

    let mut values = values.into_iter();
    Ok(Target::new(
        values.next().unwrap_or_default(),
        values.next().unwrap_or_default(),
        values.next().unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str, field: TargetField, default: Option<&str>) -> (String, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut writer = Vec::new();
        let answer = ask_line(&mut reader, &mut writer, field, default).unwrap();
        (answer, String::from_utf8(writer).unwrap())
    }

    #[test]
    fn reads_trimmed_answer() {
        let (answer, prompt) = ask("  widget \n", TargetField::Project, None);
        assert_eq!(answer, "widget");
        assert_eq!(prompt, "Enter the name of the project (e.g. fizzbuzz): ");
    }

    #[test]
    fn empty_answer_uses_default() {
        let (answer, prompt) = ask("\n", TargetField::Repository, Some("github.com"));
        assert_eq!(answer, "github.com");
        assert_eq!(
            prompt,
            "Enter the name of git repository (e.g. github.com) [github.com]: "
        );
    }

    #[test]
    fn eof_without_default_is_empty() {
        let (answer, _) = ask("", TargetField::Namespace, None);
        assert_eq!(answer, "");
    }

    #[test]
    fn answer_is_not_validated_here() {
        let (answer, _) = ask("Widget!\n", TargetField::Project, Some("widget"));
        assert_eq!(answer, "Widget!");
    }
}
