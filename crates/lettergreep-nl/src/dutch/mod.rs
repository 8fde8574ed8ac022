// Dutch reference tables.

pub mod constants;

use lettergreep_core::TableError;
use lettergreep_core::character::STRESS_MARKS;
use lettergreep_core::inventory::SymbolInventory;
use lettergreep_core::onset::OnsetTable;
use lettergreep_core::symbol::Symbol;

use constants::{ONSET_CLUSTERS, VOWELS};

/// Build the symbol inventory from a vowel list plus the two stress marks.
pub fn inventory_with<I, S>(vowels: I) -> Result<SymbolInventory, TableError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let vowels = vowels.into_iter().map(|v| Symbol::vowel(v.as_ref()));
    let markers = STRESS_MARKS
        .iter()
        .map(|mark| Symbol::stress_marker(mark.to_string()));
    SymbolInventory::new(vowels.chain(markers))
}

/// The Dutch symbol inventory.
pub fn inventory() -> Result<SymbolInventory, TableError> {
    inventory_with(VOWELS)
}

/// The Dutch onset table.
pub fn onsets() -> Result<OnsetTable, TableError> {
    OnsetTable::new(ONSET_CLUSTERS.iter().map(|cluster| cluster.iter()))
}
