use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::debug;

use pathstat_meta::{
    FileTypeInfo, FormattedTimestamps, Report, fetch, group_name, read_target, user_name,
};
use pathstat_runtime::{PROGRAM_NAME, logging};

#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "Report filesystem metadata for one or more paths"
)]
pub struct Cli {
    /// Follow symbolic links when fetching metadata
    #[arg(short = 'L', long)]
    pub dereference: bool,

    /// Paths to report on
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();

    if cli.paths.is_empty() {
        eprintln!("[error] no paths provided\n");
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::from(libc::EINVAL as u8);
    }

    // One stat flavor for the whole run, fixed before the loop.
    let follow = cli.dereference;

    for path in &cli.paths {
        match stat_one(path, follow) {
            Ok(report) => print!("{report}"),
            Err(e) => {
                eprintln!("[error] unable to stat `{}': {e}", path.display());
                // The run stops at the first failed lookup; its errno is the
                // process exit status.
                let code = e.raw_os_error().unwrap_or(libc::EIO);
                return ExitCode::from(code as u8);
            }
        }
    }

    ExitCode::SUCCESS
}

/// Run the whole pipeline for a single path operand: fetch, classify,
/// resolve identities, format timestamps, render.
fn stat_one(path: &Path, follow: bool) -> io::Result<String> {
    debug!("[stat] {} follow={follow}", path.display());
    let meta = fetch(path, follow)?;

    // Only an lstat-style fetch can ever see a symlink here; with --dereference
    // the metadata already describes the target.
    let link = FileTypeInfo::from_mode(meta.mode)
        .is_symlink
        .then(|| read_target(path));

    let owner = user_name(meta.uid);
    let group = group_name(meta.gid);
    let times = FormattedTimestamps::for_meta(&meta);

    let report = Report {
        path,
        meta: &meta,
        link: link.as_ref(),
        owner: &owner,
        group: &group,
        times: &times,
    };
    Ok(report.render())
}
