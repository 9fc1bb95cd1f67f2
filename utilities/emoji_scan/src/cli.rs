use std::{
    io::{self, Read},
    path::PathBuf,
};

#[derive(Debug, argh::FromArgs)]
/// Find emoji sequences in text
pub struct CliArgs {
    /// files to scan, reads stdin if none are given
    #[argh(positional)]
    pub files: Vec<PathBuf>,

    /// only print the number of sequences found in each input, not with --json
    #[argh(switch, short = 'c')]
    pub count: bool,

    /// print one JSON object per sequence
    #[argh(switch, short = 'j')]
    pub json: bool,

    /// print the pattern source and exit
    #[argh(switch)]
    pub pattern: bool,

    /// log verbosity, 0 to 3 (falls back to EMOJI_SCAN_VERBOSE)
    #[argh(option, short = 'v')]
    pub verbose: Option<u8>,
}

impl CliArgs {
    pub fn verbose(&self) -> Option<u8> {
        self.verbose
            .or_else(|| std::env::var("EMOJI_SCAN_VERBOSE").ok().and_then(|s| s.parse().ok()))
    }

    pub fn inputs(&self) -> Vec<Input> {
        if self.files.is_empty() {
            return vec![Input::Stdin];
        }

        self.files.iter().cloned().map(Input::File).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn name(&self) -> String {
        match self {
            Input::Stdin => "-".to_owned(),
            Input::File(path) => path.display().to_string(),
        }
    }

    /// Reads the whole input as raw bytes, it does not need to be UTF-8
    pub fn read(&self) -> io::Result<Vec<u8>> {
        match self {
            Input::Stdin => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf)?;
                Ok(buf)
            }
            Input::File(path) => std::fs::read(path),
        }
    }
}
