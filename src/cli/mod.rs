//! CLI argument parsing and validation.

mod args;

pub use args::{Invocation, ListArgs, UsageError, program_name, usage};

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Result<Invocation, UsageError> {
        let argv = std::iter::once("quick-tts").chain(args.iter().copied());
        Invocation::parse_from(argv)
    }

    // ===========================================
    // List mode
    // ===========================================

    #[test]
    fn test_parse_long_list_flag() {
        assert_eq!(parse(&["--list"]), Ok(Invocation::List));
    }

    #[test]
    fn test_parse_short_list_flag() {
        assert_eq!(parse(&["-l"]), Ok(Invocation::List));
    }

    #[test]
    fn test_parse_list_with_extra_argument() {
        assert_eq!(parse(&["--list", "lj_vits"]), Err(UsageError));
        assert_eq!(parse(&["-l", "-l"]), Err(UsageError));
    }

    // ===========================================
    // Synthesize mode
    // ===========================================

    #[test]
    fn test_parse_three_arguments() {
        let invocation = parse(&["vctk_p284", "Hello world", "~/out/hello.wav"]).unwrap();

        assert_eq!(
            invocation,
            Invocation::Synthesize {
                voice_id: "vctk_p284".to_string(),
                text: "Hello world".to_string(),
                output: PathBuf::from("~/out/hello.wav"),
            }
        );
    }

    #[test]
    fn test_parse_text_starting_with_hyphen() {
        let invocation = parse(&["lj_vits", "-5 degrees outside", "out.wav"]).unwrap();

        assert!(matches!(
            invocation,
            Invocation::Synthesize { ref text, .. } if text == "-5 degrees outside"
        ));
    }

    #[test]
    fn test_parse_list_flag_as_text() {
        let invocation = parse(&["lj_vits", "--list", "out.wav"]).unwrap();

        assert!(matches!(
            invocation,
            Invocation::Synthesize { ref text, .. } if text == "--list"
        ));
    }

    // ===========================================
    // Usage errors
    // ===========================================

    #[test]
    fn test_parse_no_arguments() {
        assert_eq!(parse(&[]), Err(UsageError));
    }

    #[test]
    fn test_parse_single_non_flag_argument() {
        assert_eq!(parse(&["lj_vits"]), Err(UsageError));
    }

    #[test]
    fn test_parse_two_arguments() {
        assert_eq!(parse(&["lj_vits", "Hello"]), Err(UsageError));
    }

    #[test]
    fn test_parse_four_arguments() {
        assert_eq!(
            parse(&["lj_vits", "Hello", "out.wav", "extra"]),
            Err(UsageError)
        );
    }

    #[test]
    fn test_parse_escape_does_not_change_argument_count() {
        assert_eq!(parse(&["--", "lj_vits", "hi", "out.wav"]), Err(UsageError));
        assert_eq!(parse(&["--list", "--"]), Err(UsageError));
        assert_eq!(parse(&["--"]), Err(UsageError));
    }

    #[test]
    fn test_parse_three_arguments_are_taken_verbatim() {
        let invocation = parse(&["--list", "a", "b"]).unwrap();

        assert_eq!(
            invocation,
            Invocation::Synthesize {
                voice_id: "--list".to_string(),
                text: "a".to_string(),
                output: PathBuf::from("b"),
            }
        );
    }

    #[test]
    fn test_parse_list_flag_with_value_is_usage_error() {
        assert_eq!(parse(&["--list=yes"]), Err(UsageError));
        assert_eq!(parse(&["-x"]), Err(UsageError));
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_non_utf8_output_path() {
        use std::os::unix::ffi::OsStringExt;

        let output = OsString::from_vec(b"/tmp/caf\xe9.wav".to_vec());
        let argv = [
            OsString::from("quick-tts"),
            OsString::from("lj_vits"),
            OsString::from("Hello"),
            output.clone(),
        ];

        let invocation = Invocation::parse_from(argv).unwrap();
        assert!(matches!(
            invocation,
            Invocation::Synthesize { output: ref path, .. } if path.as_os_str() == output.as_os_str()
        ));
    }

    #[test]
    fn test_parse_help_is_usage_error() {
        assert_eq!(parse(&["--help"]), Err(UsageError));
        assert_eq!(parse(&["--version"]), Err(UsageError));
    }

    // ===========================================
    // Usage text
    // ===========================================

    #[test]
    fn test_usage_two_lines() {
        let text = usage("quick-tts");
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Usage: quick-tts <voice_id>"));
        assert!(lines[1].contains("quick-tts --list"));
    }

    #[test]
    fn test_program_name_strips_directories() {
        let argv0 = OsString::from("/usr/local/bin/quick-tts");
        assert_eq!(program_name(Some(&argv0)), "quick-tts");
    }

    #[test]
    fn test_program_name_fallback() {
        assert_eq!(program_name(None), "quick-tts");
    }
}
