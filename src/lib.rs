// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::collections::BTreeSet;
use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use application::{
    Background, MenuClick, NoteCapturer, NoteExporter, NoteListView, NoteRepository, NoteStore,
};
use domain::DomainError;
use infrastructure::{export_writer, Config, JsonFileStore};
use ports::ListPresenter;
use tokio::io::{AsyncBufRead, AsyncReadExt};
use tracing::{debug, error, info};

use crate::cli::args::{Args, Command};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting noteclip with arguments");

    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(path) = args.store {
        debug!(?path, "Using provided store path");
        config.storage.path = path;
    }

    let store = JsonFileStore::with_key(&config.storage.path, config.storage.key.clone());
    let repository = Arc::new(NoteRepository::new(store));

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    execute(args.command, &config, repository, stdin, &mut stdout).await
}

/// Run one command against `repository`.
///
/// `input` feeds `add` without a TEXT argument and `listen`; results are
/// written to `out`. Storage failures are logged and the command ends
/// without error; empty input or an empty export selection is returned as
/// an error for the caller to show.
pub async fn execute<S, R, W>(
    command: Command,
    config: &Config,
    repository: Arc<NoteRepository<S>>,
    mut input: R,
    out: &mut W,
) -> Result<()>
where
    S: NoteStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match command {
        Command::Capture { url, selection } => {
            let capturer = NoteCapturer::new(repository, config.menu.id.clone());
            let click = MenuClick {
                menu_item_id: config.menu.id.clone(),
                page_url: url,
                selection_text: Some(selection),
            };
            match abandon_on_storage_error(capturer.capture_selection(&click).await)? {
                Some(Some(note)) => writeln!(out, "{}", note.id)?,
                Some(None) => debug!("Empty selection, nothing captured"),
                None => {}
            }
        }
        Command::Add { url, text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    input
                        .read_to_string(&mut buf)
                        .await
                        .context("Failed to read note text from stdin")?;
                    buf
                }
            };
            let capturer = NoteCapturer::new(repository, config.menu.id.clone());
            let result = capturer.capture_manual(&url, &text).await;
            if let Some(note) = abandon_on_storage_error(result)? {
                writeln!(out, "{}", note.id)?;
            }
        }
        Command::List {
            search,
            limit,
            all,
            select,
            json,
        } => {
            let limit = if all {
                None
            } else {
                Some(limit.unwrap_or(config.display.recent_limit))
            };
            let Some(mut view) =
                abandon_on_storage_error(NoteListView::load(repository.as_ref(), limit).await)?
            else {
                return Ok(());
            };
            if let Some(query) = search.as_deref() {
                view.set_query(query);
            }
            for id in select {
                view.toggle(id);
            }

            let presenter = ListPresenter::new();
            if json {
                let rendered = presenter
                    .render_json(&view)
                    .context("Failed to serialize notes to JSON")?;
                writeln!(out, "{rendered}")?;
            } else {
                write!(out, "{}", presenter.render(&view))?;
            }
        }
        Command::Delete { note_id } => {
            info!(note_id, "Deleting note");
            match abandon_on_storage_error(repository.delete_note(note_id).await)? {
                Some(true) => writeln!(out, "Deleted note {note_id}")?,
                Some(false) => writeln!(out, "No note with id {note_id}")?,
                None => {}
            }
        }
        Command::Export { note_ids, output } => {
            let selected: BTreeSet<i64> = note_ids.into_iter().collect();
            let today = repository.clock().now().date_naive();
            let exporter = NoteExporter::with_prefix(repository, config.export.file_prefix.clone());
            let Some(file) =
                abandon_on_storage_error(exporter.export_selected(&selected, today).await)?
            else {
                return Ok(());
            };
            let directory = output.unwrap_or_else(|| config.export.directory.clone());
            let path = export_writer::write_export(&directory, &file).await?;
            writeln!(out, "{}", path.display())?;
        }
        Command::Listen => {
            let capturer = NoteCapturer::new(repository, config.menu.id.clone());
            let mut background = Background::new(capturer, config.menu.title.clone());
            let captured = background
                .run(input)
                .await
                .context("Failed to read events from stdin")?;
            info!(captured, "Event stream closed");
        }
    }

    Ok(())
}

/// Storage failures end the operation quietly after logging; anything else
/// is passed up to be shown to the user.
fn abandon_on_storage_error<T>(result: Result<T, DomainError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_storage() => {
            error!(error = %e, "Storage operation failed, nothing was changed");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
