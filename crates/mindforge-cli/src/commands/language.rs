use clap::Subcommand;
use mindforge_core::i18n::{load_language, save_language, Language};
use mindforge_core::storage::Database;

use super::CmdResult;

#[derive(Subcommand)]
pub enum LanguageAction {
    /// Print the stored language code
    Get,
    /// Store the UI language
    Set {
        /// Language code: en, da, de or lt
        code: String,
    },
    /// List supported languages
    List,
}

pub fn run(action: LanguageAction) -> CmdResult {
    match action {
        LanguageAction::Get => {
            let db = Database::open()?;
            match load_language(&db) {
                Some(language) => println!("{language}"),
                None => println!("none"),
            }
        }
        LanguageAction::Set { code } => {
            let language: Language = code.parse()?;
            let mut db = Database::open()?;
            save_language(&mut db, language);
            println!("{} {}", language.flag(), language.native_name());
        }
        LanguageAction::List => {
            for language in Language::ALL {
                println!("{}  {} {}", language.code(), language.flag(), language.native_name());
            }
        }
    }
    Ok(())
}
