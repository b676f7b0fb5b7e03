#![allow(missing_docs)]

mod fmt;

use std::{borrow::Cow, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use env_logger::Env;
use log::{debug, error, info};
use sample_sentences::{Language, SentenceList, romaji};

use crate::fmt::{FormatList, View};

fn main() -> ExitCode {
    match _main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why}");
            ExitCode::FAILURE
        },
    }
}

// Default to debug logs on debug builds, info otherwise
#[cfg(debug_assertions)]
type SentencesVerbosity = Verbosity<clap_verbosity_flag::DebugLevel>;
#[cfg(not(debug_assertions))]
type SentencesVerbosity = Verbosity<clap_verbosity_flag::InfoLevel>;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: SentencesVerbosity,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the built-in languages and how many sentences each has
    Languages,
    /// Print every sentence in a list, numbered from 0
    List {
        #[command(flatten)]
        source: Source,

        /// Print the phonetic reading where a sentence has one
        #[arg(short, long)]
        reading: bool,
    },
    /// Print the sentence at INDEX (counting from 0)
    Show {
        #[command(flatten)]
        source: Source,

        index: usize,

        /// Print the phonetic reading if the sentence has one
        #[arg(short, long)]
        reading: bool,
    },
    /// Convert romaji autocomplete input to hiragana
    Romaji {
        #[arg(required = true)]
        input: Vec<String>,
    },
}

/// Where to take sentences from
#[derive(Debug, clap::Args)]
#[group(required = true, multiple = false)]
struct Source {
    /// Code of a built-in list: en, it or ja
    #[arg(short, long = "lang")]
    language: Option<String>,

    /// A TOML sentence list to read instead of the built-in ones
    #[arg(long)]
    catalog: Option<PathBuf>,
}

impl Source {
    fn resolve(&self) -> anyhow::Result<Cow<'static, SentenceList>> {
        // The clap group requires exactly one of --lang and --catalog
        debug_assert!(self.language.is_some() != self.catalog.is_some());
        match &self.catalog {
            Some(path) => Ok(Cow::Owned(SentenceList::load(path)?)),
            None => {
                let code = self.language.as_deref().unwrap_or_default();
                Ok(Cow::Borrowed(sample_sentences::get(code)?))
            },
        }
    }
}

fn pick_sentence(
    list: &SentenceList,
    index: usize,
    view: View,
) -> anyhow::Result<&str> {
    let sentence = list.sentences().get(index).with_context(|| {
        format!(
            "{} has no sentence {index}, it has {}",
            list.name(),
            list.len(),
        )
    })?;
    Ok(view.pick(sentence))
}

fn _main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.verbosity.into())
        .parse_env(Env::new().filter("SAMPLE_SENTENCES_LOG"))
        .init();

    match args.command {
        Command::Languages => {
            Language::ALL.into_iter().for_each(|language| {
                println!(
                    "{}\t{}\t{}",
                    language.code(),
                    language.name(),
                    language.sentences().len(),
                );
            });
        },
        Command::List { source, reading } => {
            let list = source.resolve()?;
            info!("{} has {} sentences", list.name(), list.len());
            println!("{}", list.format(View::from_flag(reading)));
        },
        Command::Show {
            source,
            index,
            reading,
        } => {
            let list = source.resolve()?;
            let sentence =
                pick_sentence(&list, index, View::from_flag(reading))?;
            println!("{sentence}");
        },
        Command::Romaji { input } => {
            input.iter().for_each(|input| {
                let normalized = romaji::normalize_japanese_input(input);
                if !romaji::is_romaji(input) {
                    debug!("{input:?} is not romaji, leaving it as-is");
                }
                println!("{input} => {normalized}");
            });
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::CommandFactory;
    use sample_sentences::CatalogError;
    use tempfile::TempDir;

    use super::*;

    fn parse_source(args: &[&str]) -> Source {
        let args = Args::try_parse_from(
            ["sample-sentences", "list"].iter().chain(args),
        )
        .unwrap();
        let Command::List { source, .. } = args.command else {
            panic!("parsed the wrong subcommand");
        };
        source
    }

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn source_needs_exactly_one_origin() {
        assert!(Args::try_parse_from(["sample-sentences", "list"]).is_err());
        assert!(
            Args::try_parse_from([
                "sample-sentences",
                "list",
                "--lang",
                "en",
                "--catalog",
                "x.toml",
            ])
            .is_err()
        );
        let args =
            Args::try_parse_from(["sample-sentences", "show", "-l", "ja", "2"])
                .unwrap();
        let Command::Show { source, index, .. } = args.command else {
            panic!("parsed the wrong subcommand");
        };
        assert_eq!(index, 2);
        assert_eq!(
            &source.resolve().unwrap()[index],
            "関数を確認させてください。",
        );
    }

    #[test]
    fn unknown_language_is_an_error() {
        let source = Source {
            language: Some(String::from("fr")),
            catalog: None,
        };
        let err = source.resolve().unwrap_err();
        assert_eq!(err.to_string(), r#"language not found: "fr""#);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let list = parse_source(&["--lang", "en"]).resolve().unwrap();
        assert_eq!(
            pick_sentence(&list, 14, View::Text).unwrap(),
            "I need more information about this.",
        );
        let err = pick_sentence(&list, 15, View::Text).unwrap_err();
        assert_eq!(err.to_string(), "en has no sentence 15, it has 15");
    }

    #[test]
    fn show_reading_of_built_in_sentence() {
        let list = parse_source(&["--lang", "ja"]).resolve().unwrap();
        assert_eq!(
            pick_sentence(&list, 2, View::Reading).unwrap(),
            "かんすうをかくにんさせてください。",
        );
    }

    #[test]
    fn catalog_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "name = \"custom\"\n\n[[sentences]]\ntext = \"Hello there.\"\n",
        )
        .unwrap();
        let path = path.to_str().unwrap();

        let list = parse_source(&["--catalog", path]).resolve().unwrap();
        assert_eq!(list.name(), "custom");
        assert_eq!(
            pick_sentence(&list, 0, View::Reading).unwrap(),
            "Hello there.",
        );
        let err = pick_sentence(&list, 1, View::Text).unwrap_err();
        assert_eq!(err.to_string(), "custom has no sentence 1, it has 1");
    }

    #[test]
    fn missing_catalog_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let source = parse_source(&["--catalog", path.to_str().unwrap()]);
        let err = source.resolve().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::FailedToRead(err_path, _)) if *err_path == path,
        ));
    }
}
