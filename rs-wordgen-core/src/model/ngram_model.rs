use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::frequency_table::FrequencyTable;
use crate::error::ModelError;
use crate::random::{RandomSource, ThreadRandom};

/// Growth attempts allowed per generated word before giving up.
const MAX_ATTEMPTS: usize = 1000;

fn default_random_source() -> Box<dyn RandomSource> {
	Box::new(ThreadRandom)
}

/// Character-level n-gram model over a corpus of words.
///
/// The model is built in a single pass at construction: the corpus is
/// lowercased, split into whitespace-separated words, and every n-length
/// window of every word is recorded. Each n-gram feeds two frequency
/// tables, keyed by its leading and trailing (n-1)-character m-grams, so
/// that generation can later grow a word on either side.
///
/// # Responsibilities
/// - Extract all n-grams from the corpus, in order, duplicates included
/// - Maintain the m-gram index of `FrequencyTable`s
/// - Generate new words by outward growth from a random seed n-gram
///
/// # Invariants
/// - `n` is always >= 2
/// - `ngrams` is non-empty once construction succeeds
/// - For every extracted n-gram, its leading m-gram's table has a
///   following count for the last character and its trailing m-gram's
///   table has a preceding count for the first character
/// - `ngrams` and `mgrams` are never mutated after construction
#[derive(Serialize, Deserialize, Debug)]
pub struct NGramModel {
	/// Width of the extraction window (number of characters per n-gram).
	n: usize, // must be >= 2

	/// All extracted n-grams, in corpus order, duplicates kept. Seeds are
	/// drawn from this list by index, so frequent n-grams seed more often.
	ngrams: Vec<String>,

	/// Mapping from m-gram (length n-1) to its frequency table.
	mgrams: HashMap<String, FrequencyTable>,

	/// Random source used for seeding and sampling during generation.
	#[serde(skip, default = "default_random_source")]
	rng: Box<dyn RandomSource>,
}

impl NGramModel {
	/// Builds a model from `input` with the default random source.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `n < 2`, or `EmptyCorpus` if the
	/// input yields no n-grams at all.
	pub fn new(input: &str, n: usize) -> Result<Self, ModelError> {
		Self::with_random_source(input, n, default_random_source())
	}

	/// Builds a model from `input` using the provided random source.
	///
	/// The build pass itself consumes no randomness; the source is only
	/// used later by [`Self::generate`].
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `n < 2`, or `EmptyCorpus` if the
	/// input yields no n-grams at all.
	pub fn with_random_source(
		input: &str,
		n: usize,
		rng: Box<dyn RandomSource>,
	) -> Result<Self, ModelError> {
		if n < 2 {
			return Err(ModelError::InvalidConfiguration {
				reason: format!("n must be >= 2, got {n}"),
			});
		}

		let mut model = Self { n, ngrams: Vec::new(), mgrams: HashMap::new(), rng };
		model.analyze(input);

		if model.ngrams.is_empty() {
			return Err(ModelError::EmptyCorpus);
		}
		Ok(model)
	}

	/// Extracts all n-grams from the input and fills the m-gram index.
	///
	/// # Notes
	/// - Converts all characters to lowercase for consistency.
	/// - Words shorter than `n` contribute no n-grams; this is expected.
	fn analyze(&mut self, input: &str) {
		let input = input.to_lowercase();

		for word in input.split_whitespace() {
			let chars: Vec<char> = word.chars().collect();
			if chars.len() < self.n {
				continue;
			}

			// For each n-gram in the word
			for i in 0..=chars.len() - self.n {
				// In bounds by the loop bound, should not panic
				let first = chars[i];
				let last = chars[i + self.n - 1];
				let ngram: String = chars[i..i + self.n].iter().collect();
				let head: String = chars[i..i + self.n - 1].iter().collect();
				let tail: String = chars[i + 1..i + self.n].iter().collect();

				self.ngrams.push(ngram);
				// `head` is followed by the n-gram's last character,
				// `tail` is preceded by its first.
				self.mgram_entry(&head).add_following(last);
				self.mgram_entry(&tail).add_preceding(first);
			}
		}
	}

	/// Get-or-create accessor for the frequency table of an m-gram.
	fn mgram_entry(&mut self, mgram: &str) -> &mut FrequencyTable {
		self.mgrams
			.entry(mgram.to_owned())
			.or_insert_with(|| FrequencyTable::new(mgram))
	}

	/// Generates a word of `length` characters by growing a random seed
	/// n-gram outward.
	///
	/// Each step compares the evidence available on both sides of the
	/// candidate word: the preceding total of its leading m-gram against
	/// the following total of its trailing m-gram. The side with strictly
	/// more evidence is extended by one sampled character; ties extend to
	/// the right. When the model has no evidence on either side the word
	/// is returned as-is, shorter than requested; that is a degraded
	/// result, not an error.
	///
	/// # Errors
	/// - `InvalidConfiguration` if `length < n`.
	/// - `GenerationExhausted` if the attempt cap is hit while the word
	///   is still short of `length`.
	pub fn generate(&mut self, length: usize) -> Result<String, ModelError> {
		if length < self.n {
			return Err(ModelError::InvalidConfiguration {
				reason: format!(
					"requested length {length} is below the n-gram size {n}",
					n = self.n
				),
			});
		}

		// Seed with one of the extracted n-grams, drawn by index.
		let seed_index = self.rng.uniform_int(0, self.ngrams.len() - 1);
		let mut word = match self.ngrams.get(seed_index) {
			Some(seed) => seed.clone(),
			None => {
				return Err(ModelError::InvalidConfiguration {
					reason: format!(
						"random source returned seed index {seed_index}, only {count} n-grams",
						count = self.ngrams.len()
					),
				});
			}
		};

		let mut attempts = 0;
		while word.chars().count() < length {
			attempts += 1;
			if attempts > MAX_ATTEMPTS {
				return Err(ModelError::GenerationExhausted {
					attempts: MAX_ATTEMPTS,
					reached: word.chars().count(),
					requested: length,
				});
			}

			let start_mgram = Self::first_n_chars(&word, self.n - 1);
			let end_mgram = Self::last_n_chars(&word, self.n - 1);

			let start_table = self.mgrams.get(&start_mgram);
			let end_table = self.mgrams.get(&end_mgram);
			if start_table.is_none() && end_table.is_none() {
				// Both sides unknown to the model: stop here and keep
				// the shorter word.
				break;
			}

			let preceding_evidence = start_table.map_or(0, FrequencyTable::preceding_total);
			let following_evidence = end_table.map_or(0, FrequencyTable::following_total);
			if preceding_evidence == 0 || following_evidence == 0 {
				// One side has run dry: stop here and keep the shorter word.
				break;
			}

			// Extend on the side with strictly more evidence; ties go right.
			if preceding_evidence > following_evidence {
				match start_table.and_then(|table| table.sample_preceding(&mut *self.rng)) {
					Some(character) => word.insert(0, character),
					// Should not happen with a positive total, kept for safety
					None => break,
				}
			} else {
				match end_table.and_then(|table| table.sample_following(&mut *self.rng)) {
					Some(character) => word.push(character),
					// Should not happen with a positive total, kept for safety
					None => break,
				}
			}
		}

		Ok(word)
	}

	/// The n-gram width of this model.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Number of extracted n-grams, duplicates included.
	pub fn ngram_count(&self) -> usize {
		self.ngrams.len()
	}

	/// All extracted n-grams, in extraction order.
	pub fn ngrams(&self) -> &[String] {
		&self.ngrams
	}

	/// Frequency table for a single m-gram, if it was ever observed.
	pub fn mgram(&self, mgram: &str) -> Option<&FrequencyTable> {
		self.mgrams.get(mgram)
	}

	/// The full m-gram index.
	pub fn mgrams(&self) -> &HashMap<String, FrequencyTable> {
		&self.mgrams
	}

	/// Returns the first `n` characters of a string (UTF-8 safe).
	fn first_n_chars(s: &str, n: usize) -> String {
		s.chars().take(n).collect()
	}

	/// Returns the last `n` characters of a string (UTF-8 safe).
	///
	/// If `n` is greater than the number of characters in `s`, the entire
	/// string is returned.
	fn last_n_chars(s: &str, n: usize) -> String {
		if n > s.chars().count() {
			return s.to_owned();
		}
		s.chars()
			.rev()
			.take(n)
			.collect::<Vec<_>>()
			.into_iter()
			.rev()
			.collect()
	}
}
