mod types;

pub use types::{
    Definition, Example, Language, LookupResult, Pronunciation, UnknownLanguage, VerbForm,
};
