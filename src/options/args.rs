//! Argument parsing via clap.

use std::path::PathBuf;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}
    {author}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "hoststats [OPTIONS]";

/// The arguments for hoststats.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    author = crate_authors!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub metric_args: MetricArgs,

    #[command(flatten)]
    pub output_args: OutputArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Metrics")]
pub struct MetricArgs {
    #[arg(
        short = 'c',
        long,
        help = "Samples CPU utilization.",
        long_help = "Samples CPU utilization as a percentage over a half-second interval. This is \
                    the only metric that blocks the invocation while it measures."
    )]
    pub cpu: bool,

    #[arg(
        short = 'm',
        long,
        help = "Samples memory usage.",
        long_help = "Reports used memory in whole megabytes, where \"used\" excludes free memory, \
                    buffers, page cache, and reclaimable slab."
    )]
    pub memory: bool,

    #[arg(
        short = 'p',
        long,
        help = "Counts running processes.",
        long_help = "Counts the number of currently running processes. If no metric flag is given \
                    at all, every metric is collected."
    )]
    pub processes: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Output Options")]
pub struct OutputArgs {
    #[arg(
        short = 'f',
        long,
        value_name = "PATH",
        help = "Also appends the report line to a file.",
        long_help = "Also appends the report line to the given file, creating it if it does not \
                    exist. Existing contents are never overwritten."
    )]
    pub file: Option<PathBuf>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(long, help = "Enables debug logging to hoststats.log.")]
    pub debug: bool,

    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use '--help'.)")]
    help: Option<bool>,

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: Option<bool>,
}
