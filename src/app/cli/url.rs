use clap::Subcommand;

use crate::domain::url_path::{parse_url, resolve};
use crate::domain::{AppError, Badge, Repository, maven};

#[derive(Subcommand)]
pub enum UrlCommands {
    /// shields.io static badge
    Badge {
        #[arg(long)]
        label: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        color: String,
        #[arg(long, default_value = Badge::DEFAULT_LABEL_COLOR)]
        label_color: String,
        #[arg(long, default_value = Badge::DEFAULT_STYLE)]
        style: String,
    },
    /// GitHub repository or pages URL
    #[clap(visible_alias = "gh")]
    Github {
        owner: String,
        name: String,
        /// Use the GitHub Pages host
        #[arg(long)]
        pages: bool,
        /// Path segments appended to the URL; blank ones are skipped
        path: Vec<String>,
    },
    /// Sonatype snapshot repository URL of an artifact version
    Snapshot { group: String, id: String, version: String },
    /// Append path segments to a URL
    Resolve { base: String, segment: String, other: Vec<String> },
}

pub fn run_url(command: UrlCommands) -> Result<(), AppError> {
    let url = match command {
        UrlCommands::Badge { label, message, color, label_color, style } => {
            Badge::new(label, message, color).with_label_color(label_color).with_style(style).url()?
        }
        UrlCommands::Github { owner, name, pages, path } => {
            let repository = Repository::new(owner, name)?;
            let base = if pages { repository.pages()? } else { repository.url()? };
            match path.split_first() {
                Some((segment, other)) => resolve(&base, segment, &as_strs(other))?,
                None => base,
            }
        }
        UrlCommands::Snapshot { group, id, version } => maven::snapshot_url(&group, &id, &version)?,
        UrlCommands::Resolve { base, segment, other } => resolve(&parse_url(&base)?, &segment, &as_strs(&other))?,
    };
    println!("{}", url);
    Ok(())
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}
