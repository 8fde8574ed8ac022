// Maximal-onset segmentation.
//
// Works on a merged token stream:
// 1. Stress marks are taken out of the stream (and optionally remembered
//    as annotations on the next nucleus).
// 2. Every vowel token is a nucleus.
// 3. Consonants before the first nucleus open the first syllable and
//    consonants after the last nucleus close the final one.
// 4. Each consonant run between two nuclei is split so that the following
//    syllable gets the longest suffix that is a legal onset.

use lettergreep_core::character::stress_of_text;
use lettergreep_core::enums::Stress;
use lettergreep_core::onset::OnsetTable;
use lettergreep_core::syllable::{SyllabifiedWord, Syllable};
use lettergreep_core::symbol::{Symbol, TokenStream};
use tracing::trace;

use crate::config::StressPolicy;

/// Index within `run` where the onset of the following syllable starts.
///
/// Suffixes are tested longest first, so the first legal one is the maximal
/// onset. Everything before the returned index is coda of the preceding
/// syllable. An empty run yields 0 (empty onset, empty coda).
pub fn maximal_onset(run: &[Symbol], onsets: &OnsetTable) -> usize {
    // Suffixes longer than the longest cluster cannot be members.
    let first_candidate = run.len().saturating_sub(onsets.max_cluster_len());
    (first_candidate..run.len())
        .find(|&i| onsets.permits(&run[i..]))
        .unwrap_or(run.len())
}

/// Partition a token stream into syllables.
pub fn segment(tokens: &TokenStream, onsets: &OnsetTable, policy: StressPolicy) -> SyllabifiedWord {
    let (stream, marks) = remove_stress_marks(tokens, policy);
    let nuclei = stream.nucleus_positions();
    let symbols = stream.into_symbols();

    if nuclei.is_empty() {
        if symbols.is_empty() {
            return SyllabifiedWord::default();
        }
        trace!(len = symbols.len(), "no nucleus, emitting degenerate syllable");
        let syllable = Syllable::degenerate(symbols).with_stress_marks(marks.trailing);
        return SyllabifiedWord::new(vec![syllable]);
    }

    // Syllable boundaries: each syllable ends where the next one's onset starts.
    let mut ends = Vec::with_capacity(nuclei.len());
    for pair in nuclei.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        let run = &symbols[left + 1..right];
        let onset_start = maximal_onset(run, onsets);
        trace!(
            run = %texts(run),
            coda = %texts(&run[..onset_start]),
            onset = %texts(&run[onset_start..]),
            "boundary"
        );
        ends.push(left + 1 + onset_start);
    }
    ends.push(symbols.len());

    let mut remaining = symbols.into_iter();
    let mut start = 0;
    let mut syllables = Vec::with_capacity(nuclei.len());
    for ((&nucleus, &end), leading) in nuclei.iter().zip(&ends).zip(marks.per_nucleus) {
        let onset: Vec<Symbol> = remaining.by_ref().take(nucleus - start).collect();
        let Some(vowel) = remaining.next() else {
            break;
        };
        let coda: Vec<Symbol> = remaining.by_ref().take(end - nucleus - 1).collect();
        syllables.push(Syllable::new(onset, vowel, coda).with_stress_marks(leading));
        start = end;
    }

    if let Some(last) = syllables.pop() {
        syllables.push(last.with_stress_marks(marks.trailing));
    }

    SyllabifiedWord::new(syllables)
}

/// Stress marks removed from a stream, grouped by the syllable they annotate.
#[derive(Debug, Default)]
struct StressMarks {
    /// Marks before each nucleus, in nucleus order.
    per_nucleus: Vec<Vec<Stress>>,
    /// Marks after the last nucleus.
    trailing: Vec<Stress>,
}

/// Drop stress marks from the stream, returning the remaining symbols and
/// the marks to retain under `policy`.
///
/// Under [`StressPolicy::RetainLeading`] every mark is kept, in input order,
/// on the first nucleus at or after it. Marks with no nucleus after them are
/// trailing; they go to the last syllable.
fn remove_stress_marks(tokens: &TokenStream, policy: StressPolicy) -> (TokenStream, StressMarks) {
    let mut symbols = TokenStream::with_capacity(tokens.len());
    let mut marks = StressMarks::default();
    let mut pending = Vec::new();

    for symbol in tokens {
        if symbol.is_stress_marker() {
            if policy == StressPolicy::RetainLeading {
                pending.extend(stress_of_text(&symbol.text));
            }
            continue;
        }
        if symbol.is_vowel() {
            marks.per_nucleus.push(std::mem::take(&mut pending));
        }
        symbols.push(symbol.clone());
    }
    marks.trailing = pending;

    (symbols, marks)
}

fn texts(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.text.as_str()).collect()
}
