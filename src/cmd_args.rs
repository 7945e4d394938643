use std::ffi::OsString;
use std::path::PathBuf;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Start with the tap area split into decrement (left) and increment (right) halves
    #[clap(short = 's', long, help = "start in split mode")]
    split: bool,

    /// Do not ring the terminal bell on increment/decrement
    #[clap(short = 'q', long, help = "silence feedback cues")]
    quiet: bool,

    /// Append tracing output to this file.
    /// The terminal belongs to the UI, so logging is off unless a file is given
    /// here or through TAPCOUNTER_LOG_FILE.
    #[clap(long, value_name = "PATH", help = "log file path")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    split: bool,
    quiet: bool,
    log_file: Option<PathBuf>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from(ClapArgs::parse_from(itr))
    }

    pub fn split(&self) -> bool {
        self.split
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            split: args.split,
            quiet: args.quiet,
            log_file: args.log_file,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert!(!args.split());
        assert!(!args.quiet());
        assert_eq!(args.log_file(), None);
    }

    #[test]
    fn test_parse_args_long_flags() {
        let args = CommandLineArgs::parse_from([
            "program",
            "--split",
            "--quiet",
            "--log-file",
            "/tmp/counter.log",
        ]);
        assert!(args.split());
        assert!(args.quiet());
        assert_eq!(args.log_file(), Some(&PathBuf::from("/tmp/counter.log")));
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-s", "-q"]);
        assert!(args.split());
        assert!(args.quiet());
    }
}
