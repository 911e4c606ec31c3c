use thiserror::Error;

/// Errors reported by model construction and word generation.
///
/// All variants are terminal: the model is deterministic over fixed data,
/// so retrying without changing the input or the random source would not
/// help. Running out of model evidence during generation is *not* an
/// error; it ends the growth loop early and yields a shorter word.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ModelError {
	/// A caller-supplied parameter is out of contract (n < 2, or a
	/// requested word length below the n-gram size).
	#[error("invalid configuration: {reason}")]
	InvalidConfiguration {
		/// What was wrong with the parameter.
		reason: String,
	},

	/// Tokenizing the corpus produced no n-grams at all, so there is
	/// nothing to build a model from.
	#[error("no n-grams could be extracted from the corpus")]
	EmptyCorpus,

	/// The generation loop hit its attempt cap while the word was still
	/// shorter than requested.
	#[error("generation gave up after {attempts} attempts ({reached} of {requested} characters)")]
	GenerationExhausted {
		/// Number of growth attempts consumed.
		attempts: usize,
		/// Characters accumulated when the cap was hit.
		reached: usize,
		/// Word length that was asked for.
		requested: usize,
	},
}
