use crate::engine::Resolver;
use crate::error::*;
use crate::types::Resolution;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Interactive resolver: blocks the run on stdin until the operator answers.
///
/// Answer forms: a single canonical token; `m` to be prompted again for a
/// comma-separated list; the literal `SKIP` to discard the line. An empty
/// answer counts as a skip rather than learning an empty token.
pub struct StdinResolver;

impl StdinResolver {
    pub fn new() -> Self {
        Self
    }

    fn read_answer() -> Result<String> {
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }
}

impl Default for StdinResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for StdinResolver {
    fn resolve(&mut self, line: &str) -> Result<Resolution> {
        let mut out = io::stdout();
        writeln!(
            out,
            "What word in here is the ingredient (singular, lowercase, first word), or type 'm' to enter multiple: {line}"
        )?;
        out.flush()?;

        let answer = Self::read_answer()?;
        match answer.as_str() {
            "m" => {
                writeln!(out, "Type all new ingredients, separated with commas:")?;
                out.flush()?;
                let list = Self::read_answer()?;
                Ok(Resolution::Many(
                    list.split(',')
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty())
                        .collect(),
                ))
            }
            "SKIP" | "" => Ok(Resolution::Skip),
            token => Ok(Resolution::One(token.to_string())),
        }
    }
}

/// Scripted resolver for tests and unattended runs: answers come from a
/// queue, prompted lines are recorded, and an exhausted script skips.
pub struct ScriptedResolver {
    answers: VecDeque<Resolution>,
    pub prompted: Vec<String>,
}

impl ScriptedResolver {
    pub fn new<I: IntoIterator<Item = Resolution>>(answers: I) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompted: Vec::new(),
        }
    }
}

impl Resolver for ScriptedResolver {
    fn resolve(&mut self, line: &str) -> Result<Resolution> {
        self.prompted.push(line.to_string());
        Ok(self.answers.pop_front().unwrap_or(Resolution::Skip))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_resolver_replays_answers_then_skips() {
        let mut resolver = ScriptedResolver::new([
            Resolution::One("salt".into()),
            Resolution::Skip,
        ]);

        assert_eq!(
            resolver.resolve("kosher salt").unwrap(),
            Resolution::One("salt".into())
        );
        assert_eq!(resolver.resolve("mystery").unwrap(), Resolution::Skip);
        // script exhausted: further lines skip instead of blocking
        assert_eq!(resolver.resolve("another").unwrap(), Resolution::Skip);
        assert_eq!(resolver.prompted, vec!["kosher salt", "mystery", "another"]);
    }
}
