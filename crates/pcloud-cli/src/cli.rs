//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// PartitionCloud mirror - Download and publish scores on a PartitionCloud server
#[derive(Parser, Debug)]
#[command(name = "pcloud")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, env = "PCLOUD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Answer every confirmation with its default
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Mirror every visible album and group to the storage directory
    ///
    /// Documents already present locally are never downloaded again.
    Sync {
        /// Put every document directly in the storage directory
        #[arg(long)]
        flat: bool,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Attach audio files to a partition
    ///
    /// Names come from the alias rules in the configuration, or from the
    /// file name. Append `:<name>` to a file to force its name.
    ///
    /// Examples:
    ///   pcloud attach 3f2a piano.mp3 drums.mid
    ///   pcloud attach 3f2a take3.mp3:Soprano
    Attach {
        /// Identifier of the partition
        partition_id: String,

        /// Files to attach, as `<file>` or `<file>:<name>`
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Upload a score to an album
    Upload {
        /// Identifier of the album
        album_id: String,

        /// PDF file to upload
        file: PathBuf,

        /// Title of the score
        #[arg(short, long)]
        name: String,

        /// Composer or arranger
        #[arg(short, long, default_value = "")]
        author: String,

        /// Lyrics or notes shown with the score
        #[arg(short, long, default_value = "")]
        body: String,
    },

    /// Create a new album
    CreateAlbum {
        /// Name of the album
        name: String,
    },

    /// List the attachments of a partition
    Attachments {
        /// Identifier of the partition
        partition_id: String,
    },
}
