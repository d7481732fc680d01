use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::core::parse_canonical;

#[derive(Parser, Debug)]
#[command(name = "todofmt")]
#[command(about = "Format and route a sectioned todo.txt file")]
#[command(long_about = "todofmt - a canonical formatter for sectioned todo.txt files

Reads a todo file, routes entries into sections by their tags and dates,
and prints the canonical form on stdout.

ROUTING:
  x ...               completed entries go to # Logged
  due:t, s:today      entries due or scheduled today (or earlier) go to # Today
  move:next, s:someday
                      manual routing to Next, Someday, Waiting or Evening
  s:fri, s:nextmon    other scheduled entries go to # Scheduled

DATES:
  today, tod, tomorrow, tom, weekday names (mon, tues, friday, ...),
  a next prefix (nextmon, next-fri) and YYYY-MM-DD

The input is never modified. On a parse error the input is echoed to stderr
and the exit status is 1.")]
#[command(version)]
pub struct Cli {
    /// Todo file to read, `-` for stdin
    ///
    /// Defaults to `general.file` from the config file, then stdin.
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print the grammar in EBNF and exit
    #[arg(long)]
    pub ebnf: bool,

    /// Dump the parsed document as JSON to stderr before formatting
    #[arg(short, long)]
    pub verbose: bool,

    /// Reference date for relative dates (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE", value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Config file to use instead of ~/.todofmt/config.yaml
    #[arg(long, value_name = "PATH", env = "TODOFMT_CONFIG")]
    pub config: Option<PathBuf>,
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    parse_canonical(value).ok_or_else(|| format!("expected YYYY-MM-DD, got {value:?}"))
}
