use std::{
    fs::OpenOptions,
    io::{stdin, stdout, Read, Write},
};

use clap::{builder::PossibleValue, value_parser, Arg, ArgAction, Command, ValueEnum};

use cssattr::{from_path, parse_declarations, Mode, Options};

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum CliMode {
    Strict,
    Lenient,
}

impl ValueEnum for CliMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Strict, Self::Lenient]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Strict => PossibleValue::new("strict"),
            Self::Lenient => PossibleValue::new("lenient"),
        })
    }
}

fn cli() -> Command {
    Command::new("cssattr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate CSS declarations and print the attributes that would be stored")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .action(ArgAction::Version)
                .long("version")
                .short('v')
                .global(true)
        )
        .arg(
            Arg::new("STDIN")
                .action(ArgAction::SetTrue)
                .long("stdin")
                .help("Read the declarations from stdin"),
        )
        .arg(
            Arg::new("MODE")
                .short('m')
                .long("mode")
                .help("Drop invalid values, or store a fallback for them")
                .default_value("strict")
                .ignore_case(true)
                .num_args(1)
                .value_parser(value_parser!(CliMode)),
        )
        .arg(
            Arg::new("NO_UNICODE")
                .action(ArgAction::SetTrue)
                .long("no-unicode")
                .help("Whether to use Unicode characters for messages.")
        )
        .arg(
            Arg::new("QUIET")
                .action(ArgAction::SetTrue)
                .short('q')
                .long("quiet")
                .help("Don't print warnings."),
        )
        .arg(
            Arg::new("INPUT")
                .value_parser(value_parser!(String))
                .required_unless_present("STDIN")
                .help("File containing a declaration block"),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("Output file")
        )
}

fn main() -> std::io::Result<()> {
    let matches = cli().get_matches();

    let mode = match matches.get_one::<CliMode>("MODE") {
        Some(CliMode::Lenient) => Mode::Lenient,
        Some(CliMode::Strict) | None => Mode::Strict,
    };

    let options = &Options::default()
        .mode(mode)
        .quiet(matches.get_flag("QUIET"))
        .unicode_error_messages(!matches.get_flag("NO_UNICODE"));

    let (mut stdout_write, mut file_write);
    let buf_out: &mut dyn Write = if let Some(path) = matches.get_one::<String>("OUTPUT") {
        file_write = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        &mut file_write
    } else {
        stdout_write = stdout();
        &mut stdout_write
    };

    let attributes = if let Some(name) = matches.get_one::<String>("INPUT") {
        from_path(name, options)
    } else {
        let mut buffer = String::new();
        stdin().read_to_string(&mut buffer)?;
        parse_declarations(buffer, options)
    }
    .unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1)
    });

    for (property, value) in &attributes {
        writeln!(buf_out, "{}: {};", property, value)?;
    }

    Ok(())
}
