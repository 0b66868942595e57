use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use clap::Parser;
use log::warn;

use iconmap::{
    probe::{CatalogGlyphProbe, GlyphSourceProbe},
    rebuild_symbol_mappings,
    serde::MappingRecord,
    MappingList,
};

use crate::args::{Args, Command, GenerateArgs, IdentityArgs, MergeArgs, ReconcileArgs};
use crate::error::Error;

mod args;
mod error;

fn file_io(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    |source| Error::FileIo {
        path: path.to_path_buf(),
        source,
    }
}

fn load_list(path: &Path) -> Result<MappingList, Error> {
    let raw = fs::read_to_string(path).map_err(file_io(path))?;
    let records: Vec<MappingRecord> = serde_json::from_str(&raw)?;
    let (list, errors) = MappingList::from_records(records);
    for (index, error) in errors {
        warn!("skipping record {index} of {path:?}: {error}");
    }
    Ok(list)
}

fn load_optional(path: Option<&PathBuf>) -> Result<MappingList, Error> {
    path.map(|p| load_list(p))
        .transpose()
        .map(Option::unwrap_or_default)
}

fn save_list(path: &Path, list: &MappingList) -> Result<(), Error> {
    let mut json = serde_json::to_string_pretty(&list.to_records())?;
    json.push('\n');
    fs::write(path, json).map_err(file_io(path))
}

fn generate(cmd: GenerateArgs) -> Result<(), Error> {
    let bases = cmd
        .base
        .iter()
        .map(|path| load_list(path))
        .collect::<Result<Vec<_>, _>>()?;
    let base_refs: Vec<&MappingList> = bases.iter().collect();
    let list = MappingList::init_from_catalog(cmd.destination_set, cmd.source_set, &base_refs);
    save_list(&cmd.output, &list)
}

fn identity(cmd: IdentityArgs) -> Result<(), Error> {
    save_list(&cmd.output, &MappingList::init_identity(cmd.icon_set))
}

fn merge(cmd: MergeArgs) -> Result<(), Error> {
    let incoming = load_list(&cmd.incoming)?;
    let mut dest = load_list(&cmd.dest)?;
    incoming.merge_into(&mut dest);
    save_list(&cmd.output, &dest)
}

fn reconcile(cmd: ReconcileArgs) -> Result<(), Error> {
    let composite = load_list(&cmd.composite)?;
    let redirects = load_optional(cmd.redirects.as_ref())?;
    let translations = load_optional(cmd.translations.as_ref())?;
    let catalog_probe = CatalogGlyphProbe;
    let probe: Option<&dyn GlyphSourceProbe> = if cmd.no_probe {
        None
    } else {
        Some(&catalog_probe)
    };
    let rebuilt = rebuild_symbol_mappings(&composite, &redirects, &translations, probe)?;
    save_list(&cmd.output, &rebuilt)
}

fn main() -> Result<(), Error> {
    env_logger::builder()
        .format(|buf, record| {
            let ts = buf.timestamp_micros();
            writeln!(buf, "{}: {}: {}", ts, record.level(), record.args())
        })
        .init();

    match Args::parse().command {
        Command::Generate(cmd) => generate(cmd),
        Command::Identity(cmd) => identity(cmd),
        Command::Merge(cmd) => merge(cmd),
        Command::Reconcile(cmd) => reconcile(cmd),
    }
}
