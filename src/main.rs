//! rift-nav - run one navigation query against a file
//! Main entry point
//!
//! Prints an offset, a `start end` pair, a flag, or `none`.

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use rift_nav::buffer::{TextBuffer, TextView};
use rift_nav::movement::{Direction, TextRange, WordObject, WordOptions};
use rift_nav::navigator::Navigator;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "rift-nav", version)]
#[command(about = "Run one structural navigation query against a file")]
struct Args {
    /// File to navigate
    file: PathBuf,

    /// Cursor position, in characters from the start of the file
    offset: usize,

    /// Option assignment such as `mps=(:),[:]` (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", global = true)]
    assignments: Vec<String>,

    /// Trace query decisions on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    query: Query,
}

/// Arguments shared by `iw` and `aw`
#[derive(clap::Args, Debug, Clone, Copy, PartialEq, Eq)]
struct WordObjectArgs {
    #[arg(default_value_t = 1)]
    count: usize,

    /// WORD instead of word
    #[arg(long)]
    big: bool,

    /// Extend towards the start of the buffer
    #[arg(long)]
    back: bool,

    /// Extend an active selection
    #[arg(long)]
    selection: bool,
}

impl WordObjectArgs {
    fn object(self, outer: bool) -> WordObject {
        let mut obj = if outer {
            WordObject::outer(self.count)
        } else {
            WordObject::inner(self.count)
        };
        if self.big {
            obj = obj.big();
        }
        if self.back {
            obj = obj.backward();
        }
        obj.with_selection(self.selection)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Query {
    /// Word start (`w`, `b` with a negative count)
    #[command(name = "w")]
    WordStart {
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        count: isize,
        /// WORD motion
        #[arg(long)]
        big: bool,
    },
    /// Word end (`e`, `ge` with a negative count)
    #[command(name = "e")]
    WordEnd {
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        count: isize,
        /// WORD motion
        #[arg(long)]
        big: bool,
    },
    /// camelCase hump start
    Camel {
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        count: isize,
    },
    /// camelCase hump end
    CamelEnd {
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        count: isize,
    },
    /// Word under the cursor, as searched by `*`
    Word,
    /// Inner word object
    Iw(WordObjectArgs),
    /// Outer word object
    Aw(WordObjectArgs),
    /// Partner of the next delimiter on the line (`%`)
    Match,
    /// Enclosing unmatched delimiter (`[(`, `])`)
    Unmatched {
        delimiter: char,
        #[arg(default_value_t = 1)]
        count: usize,
    },
    /// Enclosing block (`i(`, `a(` with `--outer`)
    Block {
        delimiter: char,
        #[arg(default_value_t = 1)]
        count: usize,
        #[arg(long)]
        outer: bool,
    },
    /// Number under or after the cursor
    Number,
    /// Paragraph motion (`}`, `{` with a negative count)
    Paragraph {
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        count: isize,
    },
    /// Inner paragraph lines
    Ip {
        #[arg(default_value_t = 1)]
        count: usize,
    },
    /// Outer paragraph lines
    Ap {
        #[arg(default_value_t = 1)]
        count: usize,
    },
    /// Section boundary (`]]`, `[[` with `--back`)
    Section {
        marker: char,
        #[arg(default_value_t = 1)]
        count: usize,
        #[arg(long)]
        back: bool,
    },
    /// Character on the current line (`f`, `F` with a negative count)
    Find {
        target: char,
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        count: isize,
    },
    /// Anything but whitespace after the cursor on its line
    NonblankAfter,
    /// Anything but whitespace before the cursor on its line
    NonblankBefore,
}

/// Result of a query, printed on stdout
#[derive(Debug, PartialEq, Eq)]
enum Answer {
    Offset(usize),
    Range(TextRange),
    Flag(bool),
    Nothing,
}

impl From<Option<usize>> for Answer {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Answer::Nothing, Answer::Offset)
    }
}

impl From<Option<TextRange>> for Answer {
    fn from(value: Option<TextRange>) -> Self {
        value.map_or(Answer::Nothing, Answer::Range)
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Offset(n) => write!(f, "{n}"),
            Answer::Range(r) => write!(f, "{} {}", r.start, r.end),
            Answer::Flag(b) => write!(f, "{b}"),
            Answer::Nothing => write!(f, "none"),
        }
    }
}

fn answer(nav: &Navigator, buf: &TextBuffer, query: &Query) -> Answer {
    match *query {
        Query::WordStart { count, big } => {
            Answer::Offset(nav.word_start(buf, count, WordOptions::new(big)))
        }
        Query::WordEnd { count, big } => {
            Answer::Offset(nav.word_end(buf, count, WordOptions::new(big)))
        }
        Query::Camel { count } => nav.camel_start(buf, count).into(),
        Query::CamelEnd { count } => nav.camel_end(buf, count).into(),
        Query::Word => nav.word_under_cursor(buf).into(),
        Query::Iw(args) => nav.word_object(buf, args.object(false)).into(),
        Query::Aw(args) => nav.word_object(buf, args.object(true)).into(),
        Query::Match => nav.match_pair(buf).into(),
        Query::Unmatched { delimiter, count } => nav.match_unmatched(buf, delimiter, count).into(),
        Query::Block {
            delimiter,
            count,
            outer,
        } => nav.block_range(buf, delimiter, count, outer).into(),
        Query::Number => nav.number_under_cursor(buf).into(),
        Query::Paragraph { count } => Answer::Offset(nav.paragraph(buf, count, true)),
        Query::Ip { count } => Answer::Range(nav.paragraph_range(buf, count, false)),
        Query::Ap { count } => Answer::Range(nav.paragraph_range(buf, count, true)),
        Query::Section { marker, count, back } => {
            let direction = if back {
                Direction::Backward
            } else {
                Direction::Forward
            };
            Answer::Offset(nav.section(buf, marker, direction, count))
        }
        Query::Find { target, count } => nav.find_char(buf, count, target).into(),
        Query::NonblankAfter => {
            Answer::Flag(nav.any_non_whitespace(buf, buf.cursor(), Direction::Forward))
        }
        Query::NonblankBefore => {
            Answer::Flag(nav.any_non_whitespace(buf, buf.cursor(), Direction::Backward))
        }
    }
}

fn run(args: Args) -> anyhow::Result<Answer> {
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {e}"))?;
    }

    let text = std::fs::read_to_string(&args.file)
        .map_err(rift_nav::error::NavError::from)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let buf = TextBuffer::new(&text).with_cursor(args.offset)?;

    let mut nav = Navigator::new();
    for assignment in &args.assignments {
        nav.settings_mut()
            .apply(assignment)
            .with_context(|| format!("--set {assignment}"))?;
    }

    Ok(answer(&nav, &buf, &args.query))
}

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(answer) => println!("{answer}"),
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("rift-nav").chain(argv.iter().copied()))
    }

    fn query(argv: &[&str]) -> Query {
        parse(argv).unwrap().query
    }

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let argv = ["f.txt", "4", "--set", "mps=(:)", "block", "(", "2", "--outer"];
        let args = parse(&argv).unwrap();
        assert_eq!(args.file, PathBuf::from("f.txt"));
        assert_eq!(args.offset, 4);
        assert_eq!(args.assignments, vec!["mps=(:)".to_string()]);
        assert!(!args.verbose);
        assert_eq!(
            args.query,
            Query::Block {
                delimiter: '(',
                count: 2,
                outer: true
            }
        );
    }

    #[test]
    fn test_flags_do_not_depend_on_position() {
        let expected = Query::Block {
            delimiter: '(',
            count: 2,
            outer: true,
        };
        assert_eq!(query(&["f.txt", "0", "block", "--outer", "(", "2"]), expected);
        assert_eq!(query(&["f.txt", "0", "block", "(", "--outer", "2"]), expected);

        let args = parse(&["f.txt", "0", "w", "-v", "--set", "nf=hex"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.assignments, vec!["nf=hex".to_string()]);
    }

    #[test]
    fn test_negative_counts() {
        assert_eq!(
            query(&["f.txt", "0", "w", "-2"]),
            Query::WordStart {
                count: -2,
                big: false
            }
        );
        assert_eq!(
            query(&["f.txt", "0", "e", "--big"]),
            Query::WordEnd {
                count: 1,
                big: true
            }
        );
        assert_eq!(
            query(&["f.txt", "0", "find", ",", "-1"]),
            Query::Find {
                target: ',',
                count: -1
            }
        );
    }

    #[test]
    fn test_word_object_args() {
        let Query::Aw(args) = query(&["f.txt", "0", "aw", "3", "--back", "--selection"]) else {
            panic!("expected aw");
        };
        let obj = args.object(true);
        assert_eq!(obj.count, 3);
        assert!(obj.outer && obj.has_selection && !obj.big_word);
        assert_eq!(obj.direction, Direction::Backward);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["f.txt", "4"]).is_err());
        assert!(parse(&["f.txt", "x", "w"]).is_err());
        assert!(parse(&["f.txt", "0", "w", "--set"]).is_err());
        assert!(parse(&["f.txt", "0", "block", "()"]).is_err());
        assert!(parse(&["f.txt", "0", "jump"]).is_err());
    }

    #[test]
    fn test_answers() {
        let nav = Navigator::new();
        let buf = TextBuffer::new("foo (bar) 42").with_cursor(5).unwrap();
        let ask = |argv: &[&str]| {
            let mut full = vec!["f.txt", "5"];
            full.extend_from_slice(argv);
            answer(&nav, &buf, &query(&full))
        };

        assert_eq!(ask(&["w"]), Answer::Offset(8));
        assert_eq!(ask(&["word"]).to_string(), "5 8");
        assert_eq!(ask(&["block", "(", "--outer"]), Answer::Range(TextRange::new(4, 8)));
        assert_eq!(ask(&["find", "4"]), Answer::Offset(10));
        assert_eq!(ask(&["camel", "-9"]).to_string(), "none");
        assert_eq!(ask(&["nonblank-after"]), Answer::Flag(true));
    }
}
