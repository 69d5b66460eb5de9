use crate::runtime::{
    data_structures::contextual_data::ContextualData, interpreter::WordHandler,
};
use log::warn;
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    rc::Rc,
};

/// The type of a word in the dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Hash)]
pub enum WordType {
    /// The word is a native word written in Rust.
    Native,

    /// The word was compiled from a colon definition.
    Scripted,
}

/// The information stored in the dictionary for each word.
#[derive(Clone)]
pub struct WordInfo {
    /// The name of the word.
    pub name: String,

    /// What kind of word is it?
    pub word_type: WordType,

    /// A simple description of the word.
    pub description: String,

    /// The stack signature of the word.
    pub signature: String,

    /// The handler run when the word executes.  Compiled words hold their own clones of the
    /// handlers they reference, so replacing this entry never changes them.
    pub handler: Rc<dyn WordHandler>,
}

/// One layer of the dictionary.
type SubDictionary = HashMap<String, WordInfo>;

/// Layers, oldest first.
type DictionaryStack = Vec<SubDictionary>;

/// The word dictionary used by the interpreter.  Names map to exactly one current word, inserting
/// an existing name replaces it for every later lookup.
///
/// The dictionary is contextual so that everything defined after a marked context can be
/// forgotten in one step, which is how a session is reset back to the standard library.
pub struct Dictionary {
    stack: DictionaryStack,
}

impl ContextualData for Dictionary {
    /// Words inserted from now on go into a new layer.
    fn mark_context(&mut self) {
        self.stack.push(SubDictionary::new());
    }

    /// Drop the newest layer of words.  The root layer always stays.
    fn release_context(&mut self) {
        if self.stack.len() <= 1 {
            warn!("Ignoring release of the root dictionary context.");
            return;
        }

        let _ = self.stack.pop();
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorted listing of every visible word, newest definitions only.
impl Display for Dictionary {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let merged = self.get_merged();
        let max_size = merged.keys().map(|name| name.len()).max().unwrap_or(0);

        writeln!(formatter, "{} words defined.\n", merged.len())?;

        let mut keys: Vec<&String> = merged.keys().collect();
        keys.sort();

        for key in keys {
            let word = &merged[key];
            let word_type = match word.word_type {
                WordType::Native => "native",
                WordType::Scripted => "scripted",
            };

            writeln!(
                formatter,
                "{:width$}  {:8}  --  {}",
                key,
                word_type,
                word.description,
                width = max_size
            )?;
        }

        Ok(())
    }
}

impl Dictionary {
    /// An empty dictionary holding just the root layer.
    pub fn new() -> Dictionary {
        let mut new_dictionary = Dictionary { stack: Vec::new() };

        new_dictionary.mark_context();

        new_dictionary
    }

    /// Insert a word into the top context, replacing any word of the same name.
    pub fn insert(&mut self, name: String, info: WordInfo) {
        let top = self.top_mut();
        let _ = top.insert(name, info);
    }

    /// Flatten the layers into one map holding the newest binding of every name.
    pub fn get_merged(&self) -> SubDictionary {
        let mut merged = SubDictionary::new();

        for sub_dictionary in self.stack.iter() {
            for (name, info) in sub_dictionary.iter() {
                let _ = merged.insert(name.clone(), info.clone());
            }
        }

        merged
    }

    /// Exact-match lookup, newest context first.
    pub fn try_get(&self, name: &str) -> Option<&WordInfo> {
        self.stack
            .iter()
            .rev()
            .find_map(|sub_dictionary| sub_dictionary.get(name))
    }

    /// The number of distinct words currently visible.
    pub fn len(&self) -> usize {
        self.get_merged().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.iter().all(|sub_dictionary| sub_dictionary.is_empty())
    }

    fn top_mut(&mut self) -> &mut SubDictionary {
        if self.stack.is_empty() {
            self.mark_context();
        }

        let index = self.stack.len() - 1;
        &mut self.stack[index]
    }
}
