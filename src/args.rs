use clap::Parser;

/// This program turns the roll-call sheets of parliamentary sessions into per-member voting records.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON configuration file. All the settings have defaults, see the documentation
    /// of the `roll_call` crate for the list of options.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (directory, default data/) The archive of downloaded sessions. Every session is a directory holding the
    /// JSON description of the transcript and its attachments. Setting this option overrides the directory
    /// that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub data: Option<String>,

    /// (directory, optional) If specified, only this session directory is processed.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (extract, transform or all; default all) The stage to run. 'extract' converts the roll-call attachments
    /// to CSV files, 'transform' builds the voting records from these CSV files.
    #[clap(long, value_parser)]
    pub stage: Option<String>,

    /// (file path) A reference file containing the voting records of the session given with --input, in JSON
    /// format. If provided, rollcall will check that the records it builds match the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the voting records of the session given with --input will
    /// also be written in JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
