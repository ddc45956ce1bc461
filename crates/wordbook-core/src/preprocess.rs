use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Canonical form of a word before it is put into a URL
    fn process(&self, word: &str) -> String {
        let word = word.trim();

        if word.is_empty() {
            return String::new();
        }

        // NFKC folds full-width and compatibility forms
        let word: String = word.nfkc().filter(|c| !c.is_control()).collect();

        word.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
