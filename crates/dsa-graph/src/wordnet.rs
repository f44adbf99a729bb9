//! The WordNet noun hierarchy as a rooted DAG.
//!
//! Two CSV inputs describe the graph. The synsets file holds one line per
//! synset, `id,nouns,gloss`, where `nouns` is a space-separated synonym
//! list and ids are dense starting at zero. The hypernyms file holds one
//! line per synset, `id,h1,h2,...`, naming the synsets `id` is an instance
//! of; edges point from each synset toward its hypernyms. After parsing,
//! the graph must be a DAG with exactly one root, a synset with no
//! hypernyms that every path leads to.

use crate::digraph::Digraph;
use crate::directed_cycle::DirectedCycle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::BufRead;
use tracing::debug;

/// One set of synonymous nouns and the gloss describing them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synset {
    pub nouns: Vec<String>,
    pub gloss: String,
}

fn suggestion_note(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(word) => format!(" (did you mean {word:?}?)"),
        None => String::new(),
    }
}

/// Failures while reading or validating the WordNet inputs.
#[derive(Debug, thiserror::Error)]
pub enum WordNetError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("synsets line {line}: expected \"id,nouns,gloss\", found {found:?}")]
    MalformedSynset { line: usize, found: String },
    #[error("synsets line {line}: expected id {expected}, found {found}")]
    NonContiguousId {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("hypernyms line {line}: {found:?} is not a synset id")]
    MalformedHypernym { line: usize, found: String },
    #[error("hypernyms line {line}: no synset has id {id}")]
    UnknownId { line: usize, id: usize },
    #[error("found {roots} synsets without hypernyms, expected exactly one root")]
    MultipleRoots { roots: usize },
    #[error("the hypernym graph has a cycle through synset {vertex}")]
    HypernymCycle { vertex: usize },
    #[error("{word:?} is not a noun in the wordnet{}", suggestion_note(.suggestion))]
    UnknownNoun {
        word: String,
        suggestion: Option<String>,
    },
    #[error("no common ancestor joins the query nouns")]
    NoCommonAncestor,
}

fn csv_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, WordNetError> {
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let text = line?;
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            lines.push((index + 1, trimmed.to_string()));
        }
    }
    Ok(lines)
}

/// The synsets, their nouns and the hypernym relation.
#[derive(Debug, Clone)]
pub struct WordNet {
    synsets: Vec<Synset>,
    nouns: BTreeMap<String, Vec<usize>>,
    hypernyms: Digraph,
}

impl WordNet {
    /// Reads and validates the two CSV inputs.
    pub fn from_readers<S, H>(synsets: S, hypernyms: H) -> Result<Self, WordNetError>
    where
        S: BufRead,
        H: BufRead,
    {
        let mut wordnet = Self {
            synsets: Vec::new(),
            nouns: BTreeMap::new(),
            hypernyms: Digraph::new(0),
        };
        for (line, text) in csv_lines(synsets)? {
            wordnet.add_synset(line, &text)?;
        }

        wordnet.hypernyms = Digraph::new(wordnet.synsets.len());
        for (line, text) in csv_lines(hypernyms)? {
            wordnet.add_hypernyms(line, &text)?;
        }

        wordnet.check_rooted_dag()?;
        debug!(
            synsets = wordnet.synsets.len(),
            nouns = wordnet.nouns.len(),
            "wordnet loaded"
        );
        Ok(wordnet)
    }

    /// Parses both inputs from in-memory strings.
    pub fn from_strs(synsets: &str, hypernyms: &str) -> Result<Self, WordNetError> {
        Self::from_readers(synsets.as_bytes(), hypernyms.as_bytes())
    }

    fn add_synset(&mut self, line: usize, text: &str) -> Result<(), WordNetError> {
        let malformed = || WordNetError::MalformedSynset {
            line,
            found: text.to_string(),
        };
        let mut fields = text.splitn(3, ',');
        let (Some(id), Some(words), Some(gloss)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed());
        };
        let id: usize = id.parse().map_err(|_| malformed())?;
        if id != self.synsets.len() {
            return Err(WordNetError::NonContiguousId {
                line,
                expected: self.synsets.len(),
                found: id,
            });
        }

        let nouns: Vec<String> = words.split_whitespace().map(str::to_string).collect();
        for noun in &nouns {
            self.nouns.entry(noun.clone()).or_default().push(id);
        }
        self.synsets.push(Synset {
            nouns,
            gloss: gloss.to_string(),
        });
        Ok(())
    }

    fn add_hypernyms(&mut self, line: usize, text: &str) -> Result<(), WordNetError> {
        let parse_id = |token: &str| -> Result<usize, WordNetError> {
            let id: usize = token.parse().map_err(|_| WordNetError::MalformedHypernym {
                line,
                found: token.to_string(),
            })?;
            if id < self.synsets.len() {
                Ok(id)
            } else {
                Err(WordNetError::UnknownId { line, id })
            }
        };

        let mut fields = text.split(',');
        let Some(first) = fields.next() else {
            return Ok(());
        };
        let id = parse_id(first)?;
        for token in fields {
            let hypernym = parse_id(token)?;
            self.hypernyms.add_edge(id, hypernym);
        }
        Ok(())
    }

    fn check_rooted_dag(&self) -> Result<(), WordNetError> {
        if let Some(cycle) = DirectedCycle::new(&self.hypernyms).cycle() {
            return Err(WordNetError::HypernymCycle { vertex: cycle[0] });
        }
        let roots = (0..self.hypernyms.v())
            .filter(|&v| self.hypernyms.outdegree(v) == 0)
            .count();
        if roots != 1 {
            return Err(WordNetError::MultipleRoots { roots });
        }
        Ok(())
    }

    /// Every noun, in alphabetical order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.nouns.keys().map(String::as_str)
    }

    /// Number of distinct nouns.
    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    /// Does some synset list `word` among its nouns?
    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains_key(word)
    }

    /// Ids of the synsets naming `noun`, ascending; empty when unknown.
    pub fn synsets_of(&self, noun: &str) -> &[usize] {
        self.nouns.get(noun).map_or(&[], Vec::as_slice)
    }

    /// Like [`synsets_of`](Self::synsets_of), but an unknown noun is an
    /// error carrying the closest known spelling, if any comes near.
    pub fn resolve(&self, noun: &str) -> Result<&[usize], WordNetError> {
        match self.nouns.get(noun) {
            Some(ids) => Ok(ids),
            None => Err(WordNetError::UnknownNoun {
                word: noun.to_string(),
                suggestion: self.closest_noun(noun),
            }),
        }
    }

    fn closest_noun(&self, word: &str) -> Option<String> {
        let mut best: Option<(f64, &String)> = None;
        for known in self.nouns.keys() {
            let score = strsim::jaro_winkler(word, known);
            if score < 0.8 {
                continue;
            }
            match &best {
                Some((top, _)) if *top >= score => {}
                _ => best = Some((score, known)),
            }
        }
        best.map(|(_, known)| known.clone())
    }

    /// The synset with the given id.
    pub fn synset(&self, id: usize) -> Option<&Synset> {
        self.synsets.get(id)
    }

    /// Number of synsets.
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    /// Is the wordnet empty?
    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// The root synset, the one without hypernyms.
    pub fn root(&self) -> Option<usize> {
        (0..self.hypernyms.v()).find(|&v| self.hypernyms.outdegree(v) == 0)
    }

    /// Direct hypernyms of the synset `id`.
    pub fn hypernyms_of(&self, id: usize) -> &[usize] {
        self.hypernyms.adj(id)
    }

    /// Direct hyponyms of the synset `id`.
    pub fn hyponyms_of(&self, id: usize) -> &[usize] {
        self.hypernyms.incoming(id)
    }

    /// The hypernym relation as a digraph, edges pointing rootward.
    pub fn hypernym_digraph(&self) -> &Digraph {
        &self.hypernyms
    }
}

// ---------------------------------------------------------------------------
