//! Maximal-onset syllabification of IPA transcriptions, with Dutch
//! reference tables.
//!
//! The pipeline runs in one direction:
//! [`tokenizer`] → [`merge`] → [`segmenter`] → [`format`].
//! [`LettergreepHandle`] owns the tables and runs the whole pipeline.
//!
//! ```
//! use lettergreep_nl::LettergreepHandle;
//!
//! let handle = LettergreepHandle::dutch().unwrap();
//! assert_eq!(handle.format("mˈɑŋkə"), "mɑŋ - kə");
//! ```

pub mod config;
pub mod dutch;
pub mod format;
pub mod handle;
pub mod merge;
pub mod segmenter;
pub mod tokenizer;

pub use config::{ConfigError, StressPolicy, SyllabifierConfig};
pub use handle::{LettergreepError, LettergreepHandle, SyllabifyError};
