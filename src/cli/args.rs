//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::{EntryKind, PayloadSchema};

/// Teacher profile form client: build, randomize and submit profiles for a course score prediction
#[derive(Parser, Debug)]
#[command(name = "profpredict")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Directory holding a local .profpredict.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Edit a form file
    Form {
        #[command(subcommand)]
        command: FormCommands,
    },

    /// Generate a random demo profile
    Random {
        /// Seed for a reproducible profile
        #[arg(long)]
        seed: Option<u64>,
        /// Force the profile's subject domain (e.g. informatique)
        #[arg(long)]
        domain: Option<String>,
        /// Save the form here instead of printing it
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
        /// Overwrite an existing output file
        #[arg(long)]
        force: bool,
    },

    /// Print the JSON request body for a form
    Payload {
        /// Form file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Request shape (default: from config)
        #[arg(long, value_enum)]
        schema: Option<SchemaArg>,
        /// Compact single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Submit a form and show the predicted score
    Predict {
        /// Form file (omit with --random)
        #[arg(value_hint = ValueHint::FilePath, required_unless_present = "random")]
        file: Option<PathBuf>,
        /// Submit a freshly generated random profile
        #[arg(long, conflicts_with = "file")]
        random: bool,
        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,
        /// Request shape (default: from config)
        #[arg(long, value_enum)]
        schema: Option<SchemaArg>,
        /// Full endpoint URL (default: base_url + predict_path from config)
        #[arg(long, value_hint = ValueHint::Url)]
        url: Option<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum FormCommands {
    /// Create a form with one default entry per list
    Init {
        /// Form file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print a form
    Show {
        /// Form file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Set singular fields
    Set {
        /// Form file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        course_title: Option<String>,
        #[arg(long)]
        course_description: Option<String>,
    },

    /// Append an entry
    Add {
        /// Form file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        #[command(subcommand)]
        entry: AddEntry,
    },

    /// Remove an entry by its position
    Remove {
        /// Form file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Entry kind
        #[arg(value_enum)]
        kind: KindArg,
        /// 1-based position as shown by `form show`
        position: usize,
    },
}

/// Entry to append; omitted fields take the catalog defaults.
#[derive(Subcommand, Debug)]
pub enum AddEntry {
    /// Diploma
    Diploma {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        level: Option<String>,
    },
    /// Professional experience
    Experience {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        duration: Option<String>,
    },
    /// Course already taught
    PastCourse {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Average rating in [1, 5]
        #[arg(long)]
        stars: Option<f64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Diploma,
    Experience,
    PastCourse,
}

impl From<KindArg> for EntryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Diploma => EntryKind::Diploma,
            KindArg::Experience => EntryKind::Experience,
            KindArg::PastCourse => EntryKind::PastCourse,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaArg {
    /// {teacher_profile, course_to_predict} -> predicted_score
    TeacherProfile,
    /// {professor, course} -> gradeAverage
    Professor,
}

impl From<SchemaArg> for PayloadSchema {
    fn from(schema: SchemaArg) -> Self {
        match schema {
            SchemaArg::TeacherProfile => PayloadSchema::TeacherProfile,
            SchemaArg::Professor => PayloadSchema::Professor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_predict_without_file_or_random_when_parsing_then_error() {
        let result = Cli::try_parse_from(["profpredict", "predict"]);

        assert!(result.is_err());
    }

    #[test]
    fn given_remove_args_when_parsing_then_kind_and_position_read() {
        let cli =
            Cli::try_parse_from(["profpredict", "form", "remove", "f.toml", "past-course", "2"])
                .unwrap();

        match cli.command {
            Some(Commands::Form {
                command: FormCommands::Remove { kind, position, .. },
            }) => {
                assert_eq!(kind, KindArg::PastCourse);
                assert_eq!(position, 2);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }
}
