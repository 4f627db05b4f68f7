//! Output formatting for command results

use aoc_http_client::{AnswerResponse, Url, extract_main_text};
use aoc_kit::SubmitOutcome;
use chrono::Local;
use std::path::Path;

/// Output formatter for command results
///
/// Progress lines of test and submit runs are printed by the library while
/// it works; this only adds the closing line of each command.
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Puzzle input goes out untouched so it can be piped
    pub fn print_input(&self, input: &str) {
        print!("{}", input);
    }

    pub fn print_opened(&self, url: &Url) {
        if !self.quiet {
            println!("Opened {}", url);
        }
    }

    pub fn print_written(&self, what: &str, path: &Path) {
        if self.quiet {
            println!("{}", path.display());
        } else {
            println!("{} written to {}", what, path.display());
        }
    }

    /// In quiet mode the library printed nothing, so the verdict is shown here
    pub fn print_test(&self, passed: bool) {
        if self.quiet {
            println!("{}", if passed { "passed" } else { "failed" });
        }
    }

    pub fn print_submission(&self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Aborted => {
                eprintln!("Submission aborted: the test did not pass");
            }
            SubmitOutcome::Submitted {
                puzzle,
                part,
                answer,
                reply,
            } => {
                if self.quiet {
                    println!("{}", reply_text(reply));
                } else {
                    println!(
                        "Submitted {} part {} answer {} at {} (HTTP {})",
                        puzzle,
                        part,
                        answer,
                        Local::now().format("%H:%M:%S"),
                        reply.status.as_u16()
                    );
                }
            }
        }
    }
}

/// Readable part of the site's reply, the raw body when it has none
fn reply_text(reply: &AnswerResponse) -> String {
    extract_main_text(&reply.body).unwrap_or_else(|| reply.body.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_http_client::StatusCode;

    #[test]
    fn test_reply_text_prefers_main() {
        let reply = AnswerResponse {
            status: StatusCode::OK,
            body: "<html><main><p>You gave an answer too recently.</p></main></html>".to_string(),
        };
        assert_eq!(reply_text(&reply), "You gave an answer too recently.");
    }

    #[test]
    fn test_reply_text_falls_back_to_body() {
        let reply = AnswerResponse {
            status: StatusCode::BAD_REQUEST,
            body: "Bad request".to_string(),
        };
        assert_eq!(reply_text(&reply), "Bad request");
    }
}
