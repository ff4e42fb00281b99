// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    sync::mpsc,
};

use clap::{Parser, Subcommand, ValueEnum};
use directories::ProjectDirs;
use log::LevelFilter;
use readlist::{
    Segment,
    desktop_app::{
        Environment,
        book::shelf::{Event, ScrollPosition, Shelf},
        settings,
    },
};

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Info;

/// Reduce log verbosity for release builds.
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Parser)]
#[command(name = "readlist", about = "Manage your reading list")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the books of a segment
    List {
        /// The segment to show instead of the configured initial segment
        #[arg(long, value_enum)]
        segment: Option<SegmentArg>,

        /// Only show books with a title that contains this text
        #[arg(long)]
        search: Option<String>,

        /// Import books from this catalog file instead of the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Update and save the settings
    Configure {
        /// The segment that is shown initially
        #[arg(long, value_enum)]
        initial_segment: Option<SegmentArg>,

        /// The catalog file that is imported on startup
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Forget the configured catalog file
        #[arg(long, conflicts_with = "catalog")]
        reset_catalog: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SegmentArg {
    ToRead,
    Finished,
}

impl From<SegmentArg> for Segment {
    fn from(from: SegmentArg) -> Self {
        match from {
            SegmentArg::ToRead => Self::ToRead,
            SegmentArg::Finished => Self::Finished,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(DEFAULT_LOG_FILTER_LEVEL)
        // Parse environment variables after configuring all default option(s).
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let Some(config_dir) = app_config_dir() else {
        log::error!("Config directory is unavailable");
        return ExitCode::FAILURE;
    };
    log::info!(
        "Config directory: {dir_path}",
        dir_path = config_dir.display()
    );
    let settings = settings::State::restore_from_parent_dir(&config_dir);

    let result = match cli.command {
        Command::List {
            segment,
            search,
            catalog,
        } => {
            let segment = segment.map(Into::into);
            list(settings, segment, search.as_deref(), catalog)
        }
        Command::Configure {
            initial_segment,
            catalog,
            reset_catalog,
        } => {
            configure(
                settings,
                config_dir,
                initial_segment.map(Into::into),
                catalog.as_deref(),
                reset_catalog,
            )
            .await
        }
    };
    if let Err(err) = result {
        log::error!("{err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn list(
    mut settings: settings::State,
    segment: Option<Segment>,
    search_text: Option<&str>,
    catalog_file: Option<PathBuf>,
) -> anyhow::Result<()> {
    if catalog_file.is_some() {
        settings.catalog_file = catalog_file;
    }
    let initial_segment = segment.unwrap_or(settings.initial_segment);
    let env = Environment::commission(settings)?;
    let (event_tx, event_rx) = mpsc::channel();
    let shelf = Shelf::new(env.handle().clone(), initial_segment, event_tx);
    shelf.did_appear(ScrollPosition::TOP);
    if let Some(search_text) = search_text {
        shelf.activate_search();
        shelf.update_search_text(search_text);
    }
    shelf.refresh();
    for event in event_rx.try_iter() {
        log::debug!("Received {event:?}");
        debug_assert!(matches!(event, Event::StateChanged));
    }

    let state = shelf.read();
    if let Some(err_msg) = state.fetch().err_msg() {
        anyhow::bail!("failed to query books: {err_msg}");
    }
    if let Some(empty_state) = state.empty_state() {
        println!("{}", empty_state.title());
        println!("{}", empty_state.description());
        return Ok(());
    }
    let Some(sections) = state.sections() else {
        return Ok(());
    };
    for (index, section) in sections.sections().iter().enumerate() {
        if let Some(title) = state.section_title(index) {
            println!("{title}");
        }
        for entity in section.entities() {
            let book = &entity.body;
            match &book.author {
                Some(author) => println!("  {} by {}", book.title, author.display_first_last()),
                None => println!("  {}", book.title),
            }
        }
    }
    Ok(())
}

async fn configure(
    mut settings: settings::State,
    config_dir: PathBuf,
    initial_segment: Option<Segment>,
    catalog_file: Option<&Path>,
    reset_catalog: bool,
) -> anyhow::Result<()> {
    let mut modified = false;
    if let Some(initial_segment) = initial_segment {
        modified |= settings.update_initial_segment(initial_segment);
    }
    if catalog_file.is_some() || reset_catalog {
        modified |= settings.update_catalog_file(catalog_file);
    }
    if !modified {
        log::info!("Settings unchanged");
        return Ok(());
    }
    settings.save_spawn_blocking(config_dir).await
}

#[must_use]
const fn app_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

#[must_use]
fn app_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", app_name())
}

fn init_app_dir(app_dir: &Path) {
    if let Err(err) = std::fs::create_dir_all(app_dir) {
        log::error!(
            "Failed to create app directory '{dir}': {err}",
            dir = app_dir.display(),
        );
    } else {
        debug_assert!(app_dir.exists());
    }
}

#[must_use]
fn app_config_dir() -> Option<PathBuf> {
    let app_dirs = app_dirs()?;
    let app_config_dir = app_dirs.config_local_dir();
    init_app_dir(app_config_dir);
    Some(app_config_dir.to_path_buf())
}
