use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// URL to resolve (scheme optional, https assumed)
    pub url: String,

    /// Overall resolution timeout in seconds
    #[arg(short, long, default_value_t = 15)]
    pub timeout: u64,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}
