//! Line-based transcript parsing

use crate::event::TerminalEvent;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Transcript parse error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("Unknown command at line {line}: {command}")]
    UnknownCommand { line: usize, command: String },

    #[error("Missing argument at line {line}: {what}")]
    MissingArgument { line: usize, what: String },

    #[error("Invalid file size at line {line}: {value}")]
    InvalidFileSize { line: usize, value: String },

    #[error("Unrecognized transcript line {line}: {content}")]
    UnrecognizedLine { line: usize, content: String },

    #[error("Empty transcript")]
    EmptyTranscript,

    #[error("Failed to read transcript: {0}")]
    Io(String),
}

/// A parsed terminal transcript
///
/// Holds the ordered event sequence produced from the raw session text.
#[derive(Debug, Clone)]
pub struct Transcript {
    events: VecDeque<TerminalEvent>,
}

impl Transcript {
    /// Parses a transcript from text
    pub fn from_text(text: &str) -> Result<Self, TranscriptError> {
        let mut events = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines
            if line.is_empty() {
                continue;
            }

            events.push_back(Self::parse_line(line, line_num + 1)?);
        }

        if events.is_empty() {
            return Err(TranscriptError::EmptyTranscript);
        }

        Ok(Self { events })
    }

    /// Loads and parses a transcript file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, TranscriptError> {
        let text = fs::read_to_string(path.as_ref())
            .map_err(|err| TranscriptError::Io(err.to_string()))?;
        Self::from_text(&text)
    }

    /// Parses a single transcript line
    fn parse_line(line: &str, line_num: usize) -> Result<TerminalEvent, TranscriptError> {
        // Shell command lines start with the prompt
        if let Some(rest) = line.strip_prefix('$') {
            let parts: Vec<&str> = rest.split_whitespace().collect();

            return match parts.split_first() {
                Some((&"cd", args)) => {
                    if args.is_empty() {
                        Err(TranscriptError::MissingArgument {
                            line: line_num,
                            what: "cd target".to_string(),
                        })
                    } else {
                        Ok(TerminalEvent::ChangeDirectory {
                            target: args.join(" "),
                        })
                    }
                }
                Some((&"ls", args)) => {
                    if args.is_empty() {
                        Ok(TerminalEvent::ListDirectory)
                    } else {
                        Err(TranscriptError::UnrecognizedLine {
                            line: line_num,
                            content: line.to_string(),
                        })
                    }
                }
                Some((command, _)) => Err(TranscriptError::UnknownCommand {
                    line: line_num,
                    command: command.to_string(),
                }),
                None => Err(TranscriptError::UnrecognizedLine {
                    line: line_num,
                    content: line.to_string(),
                }),
            };
        }

        // Listing output: "dir <name>"
        if line == "dir" {
            return Err(TranscriptError::MissingArgument {
                line: line_num,
                what: "directory name".to_string(),
            });
        }
        if let Some(rest) = line.strip_prefix("dir ") {
            let name = rest.trim();
            if name.is_empty() {
                return Err(TranscriptError::MissingArgument {
                    line: line_num,
                    what: "directory name".to_string(),
                });
            }
            return Ok(TerminalEvent::ObserveSubdirectory {
                name: name.to_string(),
            });
        }

        // Listing output: "<size> <name>"
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() >= 2 && parts[0].chars().all(|c| c.is_ascii_digit()) {
            let size = parts[0]
                .parse::<u64>()
                .map_err(|_| TranscriptError::InvalidFileSize {
                    line: line_num,
                    value: parts[0].to_string(),
                })?;
            return Ok(TerminalEvent::ObserveFile {
                name: parts[1..].join(" "),
                size,
            });
        }

        Err(TranscriptError::UnrecognizedLine {
            line: line_num,
            content: line.to_string(),
        })
    }

    /// Iterates over the events in replay order
    pub fn events(&self) -> impl Iterator<Item = &TerminalEvent> {
        self.events.iter()
    }

    /// Returns the next event, if any
    pub fn next_event(&mut self) -> Option<TerminalEvent> {
        self.events.pop_front()
    }

    /// Returns true if the transcript has more events
    pub fn has_more(&self) -> bool {
        !self.events.is_empty()
    }

    /// Returns the number of remaining events
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cd() {
        let mut transcript = Transcript::from_text("$ cd /").unwrap();
        assert_eq!(
            transcript.next_event().unwrap(),
            TerminalEvent::ChangeDirectory {
                target: "/".to_string()
            }
        );
    }

    #[test]
    fn test_parse_cd_parent() {
        let mut transcript = Transcript::from_text("$ cd ..").unwrap();
        assert_eq!(
            transcript.next_event().unwrap(),
            TerminalEvent::ChangeDirectory {
                target: "..".to_string()
            }
        );
    }

    #[test]
    fn test_parse_ls() {
        let mut transcript = Transcript::from_text("$ ls").unwrap();
        assert_eq!(
            transcript.next_event().unwrap(),
            TerminalEvent::ListDirectory
        );
    }

    #[test]
    fn test_parse_dir_line() {
        let mut transcript = Transcript::from_text("dir a").unwrap();
        assert_eq!(
            transcript.next_event().unwrap(),
            TerminalEvent::ObserveSubdirectory {
                name: "a".to_string()
            }
        );
    }

    #[test]
    fn test_parse_file_line() {
        let mut transcript = Transcript::from_text("14848514 b.txt").unwrap();
        assert_eq!(
            transcript.next_event().unwrap(),
            TerminalEvent::ObserveFile {
                name: "b.txt".to_string(),
                size: 14848514,
            }
        );
    }

    #[test]
    fn test_parse_session_sequence() {
        let transcript = Transcript::from_text("$ cd /\n$ ls\ndir a\n14848514 b.txt\n$ cd a").unwrap();
        assert_eq!(transcript.remaining(), 5);

        let events: Vec<&TerminalEvent> = transcript.events().collect();
        assert_eq!(
            events[0],
            &TerminalEvent::ChangeDirectory {
                target: "/".to_string()
            }
        );
        assert_eq!(events[1], &TerminalEvent::ListDirectory);
        assert_eq!(
            events[4],
            &TerminalEvent::ChangeDirectory {
                target: "a".to_string()
            }
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let transcript = Transcript::from_text("$ cd /\n\n\n$ ls\n").unwrap();
        assert_eq!(transcript.remaining(), 2);
    }

    #[test]
    fn test_empty_transcript() {
        let result = Transcript::from_text("");
        assert_eq!(result.unwrap_err(), TranscriptError::EmptyTranscript);

        let result = Transcript::from_text("\n  \n");
        assert_eq!(result.unwrap_err(), TranscriptError::EmptyTranscript);
    }

    #[test]
    fn test_cd_missing_target() {
        let result = Transcript::from_text("$ cd");
        assert!(matches!(
            result,
            Err(TranscriptError::MissingArgument { line: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_command() {
        let result = Transcript::from_text("$ cd /\n$ pwd");
        assert_eq!(
            result.unwrap_err(),
            TranscriptError::UnknownCommand {
                line: 2,
                command: "pwd".to_string(),
            }
        );
    }

    #[test]
    fn test_ls_with_arguments_rejected() {
        let result = Transcript::from_text("$ ls -la");
        assert!(matches!(
            result,
            Err(TranscriptError::UnrecognizedLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_bare_prompt_rejected() {
        let result = Transcript::from_text("$");
        assert!(matches!(
            result,
            Err(TranscriptError::UnrecognizedLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_dir_missing_name() {
        let result = Transcript::from_text("dir");
        assert!(matches!(
            result,
            Err(TranscriptError::MissingArgument { line: 1, .. })
        ));
    }

    #[test]
    fn test_oversized_file_size() {
        // 21 digits cannot fit in a u64
        let result = Transcript::from_text("123456789012345678901 big.bin");
        assert_eq!(
            result.unwrap_err(),
            TranscriptError::InvalidFileSize {
                line: 1,
                value: "123456789012345678901".to_string(),
            }
        );
    }

    #[test]
    fn test_unrecognized_line() {
        let result = Transcript::from_text("total 48");
        assert!(matches!(
            result,
            Err(TranscriptError::UnrecognizedLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_file_name_with_spaces() {
        let mut transcript = Transcript::from_text("100 my file.txt").unwrap();
        assert_eq!(
            transcript.next_event().unwrap(),
            TerminalEvent::ObserveFile {
                name: "my file.txt".to_string(),
                size: 100,
            }
        );
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.txt");
        std::fs::write(&path, "$ cd /\n$ ls\ndir a\n").unwrap();

        let transcript = Transcript::load_from_path(&path).unwrap();
        assert_eq!(transcript.remaining(), 3);
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Transcript::load_from_path(dir.path().join("nope.txt"));
        assert!(matches!(result, Err(TranscriptError::Io(_))));
    }
}
