use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-d" | "--default" => flags.default = true,
            "-U" | "--uppercase" => flags.uppercase = Some(take_value(args, &mut i)?),
            "-L" | "--lowercase" => flags.lowercase = Some(take_value(args, &mut i)?),
            "-N" | "--numbers" => flags.numbers = Some(take_value(args, &mut i)?),
            "-S" | "--symbols" => flags.symbols = Some(take_value(args, &mut i)?),
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn take_value(args: &[String], i: &mut usize) -> Result<String, ParseError> {
    let flag = args[*i].clone();
    *i += 1;
    if *i < args.len() {
        Ok(args[*i].clone())
    } else {
        Err(ParseError::MissingValue(flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("randchars")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_gives_defaults() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn test_field_flags_take_values() {
        let flags = parse(&args(&["--uppercase", "ABC", "-N", "123"])).unwrap();
        assert_eq!(flags.uppercase.as_deref(), Some("ABC"));
        assert_eq!(flags.numbers.as_deref(), Some("123"));
        assert_eq!(flags.lowercase, None);
    }

    #[test]
    fn test_empty_value_is_accepted() {
        let flags = parse(&args(&["--symbols", ""])).unwrap();
        assert_eq!(flags.symbols.as_deref(), Some(""));
    }

    #[test]
    fn test_bool_flags() {
        let flags = parse(&args(&["-b", "-q", "--saved"])).unwrap();
        assert!(flags.clipboard);
        assert!(flags.quiet);
        assert!(flags.saved);
        assert!(!flags.help);
    }

    #[test]
    fn test_unknown_arg_rejected() {
        let err = parse(&args(&["--bogus"])).unwrap_err();
        assert_eq!(err, ParseError::UnknownArg("--bogus".to_string()));
    }

    #[test]
    fn test_missing_value_rejected() {
        let err = parse(&args(&["--lowercase"])).unwrap_err();
        assert_eq!(err, ParseError::MissingValue("--lowercase".to_string()));
    }
}
