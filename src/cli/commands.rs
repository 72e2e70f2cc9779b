use crate::core::aggregator::aggregate;
use crate::core::tree_walker::walk_tree;
use crate::domain::errors::FlattenError;
use crate::domain::models::{
    DEFAULT_OUTPUT_NAME, ExclusionCriteria, FlattenConfig, IgnoredFolderSet,
    parse_extension_list, parse_name_list,
};
use crate::infra::logger::{print_welcome_message, setup_logger};
use crate::infra::output::{report_excluded, report_summary, write_output};
use crate::infra::prompt::Prompter;
use clap::Parser;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "repo-flatten", version)]
#[command(about = "Flatten a directory tree and its files into one text file", long_about = None)]
pub struct Cli {
    /// Directory to flatten [default: the directory containing this executable]
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output file name, written inside the root
    #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
    pub output: String,

    /// Extra folders to ignore entirely, merged with the prompt answer
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// File names whose content is left out
    #[arg(long, value_delimiter = ',')]
    pub exclude_names: Vec<String>,

    /// Folder names whose files' content is left out
    #[arg(long, value_delimiter = ',')]
    pub exclude_folders: Vec<String>,

    /// File extensions whose content is left out
    #[arg(long, value_delimiter = ',')]
    pub exclude_exts: Vec<String>,

    /// Use only the command-line values and skip all prompts
    #[arg(long)]
    pub no_prompt: bool,

    /// Also copy the result to the clipboard
    #[arg(long)]
    pub clipboard: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn exclusions(&self) -> ExclusionCriteria {
        ExclusionCriteria {
            file_names: parse_name_list(&self.exclude_names.join(",")),
            folder_names: parse_name_list(&self.exclude_folders.join(",")),
            extensions: parse_extension_list(&self.exclude_exts.join(",")),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(&cli, stdin.lock(), stdout.lock())
}

pub fn resolve_root(root: Option<&Path>) -> crate::domain::errors::Result<PathBuf> {
    let candidate = match root {
        Some(path) => path.to_path_buf(),
        None => {
            let exe = std::env::current_exe().map_err(FlattenError::ExecutableLocation)?;
            exe.parent().map(Path::to_path_buf).ok_or_else(|| {
                FlattenError::ExecutableLocation(io::Error::new(
                    io::ErrorKind::NotFound,
                    "executable has no parent directory",
                ))
            })?
        }
    };

    let resolved = candidate
        .canonicalize()
        .map_err(|_| FlattenError::RootNotFound {
            path: candidate.clone(),
        })?;
    if !resolved.is_dir() {
        return Err(FlattenError::RootNotDirectory { path: resolved });
    }
    Ok(resolved)
}

/// Runs the whole pipeline against the given operator input and output.
pub fn run_with_io<R: BufRead, W: Write>(cli: &Cli, input: R, output: W) -> anyhow::Result<()> {
    info!("Starting flatten");
    debug!("Command parameters: {:?}", cli);

    let root = resolve_root(cli.root.as_deref())?;
    let mut prompter = Prompter::new(input, output);
    print_welcome_message(prompter.output())?;

    let mut extra_ignored = parse_name_list(&cli.ignore.join(","));
    if !cli.no_prompt {
        extra_ignored.extend(prompter.prompt_ignored_folders()?);
    }

    let mut config = FlattenConfig::new(&root);
    config.output_name = cli.output.clone();
    config.ignored_folders = IgnoredFolderSet::with_extra(extra_ignored);
    debug!(
        "Ignored folders: {:?}",
        config.ignored_folders.iter().collect::<Vec<_>>()
    );

    info!("Scanning for files in {}", root.display());
    let walk = walk_tree(&config.root, &config.ignored_folders, &config.output_name);

    if walk.files.is_empty() {
        info!("No files found under {}", root.display());
        writeln!(prompter.output(), "No files were found under the root directory.")?;
        return Ok(());
    }

    prompter.list_files(&walk.files)?;

    config.exclusions = cli.exclusions();
    if cli.no_prompt {
        prompter.confirm_exclusions(&config.exclusions)?;
    } else {
        let answered = prompter.prompt_exclusions()?;
        config.exclusions.merge(answered);
    }

    info!("Building aggregate output");
    let result = aggregate(&config, &walk);
    info!(
        "Aggregated {} files ({} words), excluded {}",
        result.sections.len(),
        result.word_count,
        result.excluded.len()
    );

    let out = prompter.output();
    write_output(out, &result.text, &config.output_path(), cli.clipboard)?;
    report_summary(out, result.sections.len(), result.word_count)?;
    report_excluded(out, &result.excluded)?;
    out.flush()?;
    Ok(())
}
