//! Command-line boundary for the `convert` binary
//!
//! ```text
//! convert <input-path> <output-path>
//! ```
//!
//! Arguments are checked before any file is touched: with fewer than two
//! positionals nothing is opened, and when the input is not an existing
//! regular file the output path is never created or truncated. Positionals
//! beyond the second are ignored.

use crate::converter::{ConversionStats, HtmlConverter};
use crate::error::ConversionError;
use log::debug;
use std::ffi::OsString;
use std::path::PathBuf;

/// Program name used in the usage line when `argv[0]` is absent
const DEFAULT_PROGRAM: &str = "convert";

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Markdown source file
    pub input: PathBuf,
    /// HTML destination file, overwritten if it exists
    pub output: PathBuf,
}

impl Invocation {
    /// Parse `argv`, including the program name in first position
    ///
    /// Arguments are taken as OS strings, so paths that are not valid UTF-8
    /// are accepted unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use markdown_html_converter::cli::Invocation;
    ///
    /// let args = ["convert", "README.md", "README.html"].map(String::from);
    /// let invocation = Invocation::from_args(args).expect("two paths given");
    /// assert_eq!(invocation.input.to_str(), Some("README.md"));
    ///
    /// let err = Invocation::from_args(["convert".to_string()]).unwrap_err();
    /// assert_eq!(err.code(), 1);
    /// ```
    pub fn from_args<I, T>(args: I) -> Result<Self, ConversionError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let program = args
            .next()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

        match (args.next(), args.next()) {
            (Some(input), Some(output)) => Ok(Self {
                input: PathBuf::from(input),
                output: PathBuf::from(output),
            }),
            _ => Err(ConversionError::Usage { program }),
        }
    }

    /// Ensure the input path refers to an existing regular file
    pub fn validate(&self) -> Result<(), ConversionError> {
        if self.input.is_file() {
            Ok(())
        } else {
            Err(ConversionError::MissingInput(self.input.clone()))
        }
    }
}

/// Parse `args`, validate the input and convert it
pub fn run<I, T>(args: I) -> Result<ConversionStats, ConversionError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let invocation = Invocation::from_args(args)?;
    invocation.validate()?;
    debug!(
        "converting {} into {}",
        invocation.input.display(),
        invocation.output.display()
    );

    HtmlConverter::new().convert_file(&invocation.input, &invocation.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_paths() {
        let invocation = Invocation::from_args(args(&["convert", "in.md", "out.html"]))
            .expect("valid invocation");
        assert_eq!(invocation.input, PathBuf::from("in.md"));
        assert_eq!(invocation.output, PathBuf::from("out.html"));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let invocation = Invocation::from_args(args(&["convert", "a", "b", "c"]))
            .expect("valid invocation");
        assert_eq!(invocation.output, PathBuf::from("b"));
    }

    #[test]
    fn test_too_few_arguments() {
        for list in [&["convert"][..], &["convert", "in.md"][..]] {
            match Invocation::from_args(args(list)) {
                Err(ConversionError::Usage { program }) => assert_eq!(program, "convert"),
                other => panic!("Expected Usage error, got: {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_argv_uses_default_program_name() {
        let err = Invocation::from_args(Vec::<String>::new()).unwrap_err();
        assert_eq!(err.to_string(), "Usage: convert README.md README.html");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_paths_are_accepted() {
        use std::os::unix::ffi::OsStringExt;

        let input = OsString::from_vec(b"/tmp/\xff.md".to_vec());
        let invocation = Invocation::from_args([
            OsString::from("convert"),
            input.clone(),
            OsString::from("out.html"),
        ])
        .expect("valid invocation");
        assert_eq!(invocation.input, PathBuf::from(input));

        match invocation.validate() {
            Err(ConversionError::MissingInput(path)) => assert_eq!(path, invocation.input),
            other => panic!("Expected MissingInput error, got: {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_not_a_valid_input() {
        let invocation = Invocation {
            input: std::env::temp_dir(),
            output: PathBuf::from("unused.html"),
        };
        assert!(matches!(
            invocation.validate(),
            Err(ConversionError::MissingInput(_))
        ));
    }

    #[test]
    fn test_run_reports_missing_input() {
        let result = run(args(&[
            "convert",
            "/definitely/not/here.md",
            "/definitely/not/here.html",
        ]));
        match result {
            Err(err) => assert_eq!(err.to_string(), "Missing /definitely/not/here.md"),
            Ok(_) => panic!("Expected MissingInput error"),
        }
    }
}
