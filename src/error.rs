//! Error type of the generator and its mapping to process exit codes.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::directive::Syntax;
use crate::triplet::CapacityExceeded;

/// Directive phase a command was read in.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Register setup preceding the `start` directive.
    PreLoad,
    /// Patches and register writes following the program image.
    PostLoad,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Phase::PreLoad => f.write_str("pre-load"),
            Phase::PostLoad => f.write_str("post-load"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("I couldn't open {}", path.display())]
    OpenDirectives {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I couldn't open {}", path.display())]
    OpenImage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I couldn't open {}", path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: I could not understand \"{command}\" in the directive file ({kind}, {phase} phase)")]
    Syntax {
        phase: Phase,
        kind: Syntax,
        line: usize,
        command: String,
    },

    #[error(transparent)]
    Capacity(#[from] CapacityExceeded),

    #[error("line {line}: unknown register `{name}`")]
    UnknownSymbol { name: String, line: usize },

    #[error("no `start` directive found")]
    MissingStart,

    #[error("line {line}: `{command}` is not allowed in the {phase} phase")]
    UnexpectedCommand {
        phase: Phase,
        line: usize,
        command: String,
    },

    #[error("memory address {address:#06x} is outside 0x0000..=0x7fff")]
    AddressOutOfRange { address: u32 },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit code identifying the failing step.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::OpenDirectives { .. } => 2,
            Error::OpenImage { .. } => 3,
            Error::OpenOutput { .. } => 4,
            Error::Syntax { phase, kind, .. } => match (phase, kind) {
                (Phase::PreLoad, Syntax::MissingName) => 5,
                (Phase::PreLoad, Syntax::BadValue) => 6,
                (Phase::PostLoad, Syntax::MissingName) => 7,
                (Phase::PostLoad, Syntax::BadValue) => 8,
                (_, Syntax::BadPatchValue) => 9,
            },
            Error::Capacity(_) => 10,
            Error::UnknownSymbol { .. } => 11,
            Error::MissingStart => 12,
            Error::UnexpectedCommand { .. } => 13,
            Error::AddressOutOfRange { .. } => 14,
            Error::Io(_) => 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax(phase: Phase, kind: Syntax) -> Error {
        Error::Syntax {
            phase,
            kind,
            line: 1,
            command: String::new(),
        }
    }

    #[test]
    fn syntax_exit_codes_depend_on_phase() {
        assert_eq!(syntax(Phase::PreLoad, Syntax::MissingName).exit_code(), 5);
        assert_eq!(syntax(Phase::PreLoad, Syntax::BadValue).exit_code(), 6);
        assert_eq!(syntax(Phase::PostLoad, Syntax::MissingName).exit_code(), 7);
        assert_eq!(syntax(Phase::PostLoad, Syntax::BadValue).exit_code(), 8);
        assert_eq!(syntax(Phase::PostLoad, Syntax::BadPatchValue).exit_code(), 9);
    }

    #[test]
    fn capacity_message_names_limit() {
        let error = Error::from(CapacityExceeded { capacity: 512 });
        assert_eq!(error.exit_code(), 10);
        assert_eq!(error.to_string(), "boot loader would exceed 512 bytes");
    }

    #[test]
    fn syntax_message_echoes_command() {
        let error = Error::Syntax {
            phase: Phase::PreLoad,
            kind: Syntax::BadValue,
            line: 7,
            command: "GOCR zz".into(),
        };
        assert!(error.to_string().contains("\"GOCR zz\""));
        assert!(error.to_string().starts_with("line 7:"));
    }
}
