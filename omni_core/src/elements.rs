//! # Element Database
//!
//! Immutable periodic-table lookup used by the molar mass calculator.
//! Standard atomic weights follow the IUPAC abridged values (g/mol).
//!
//! The table covers the elements that appear in common chemistry coursework;
//! looking up anything else returns [`CalcError::ElementNotFound`].
//!
//! ## Example
//!
//! ```rust
//! use omni_core::elements::lookup;
//!
//! let oxygen = lookup("O").unwrap();
//! assert_eq!(oxygen.name, "Oxygen");
//! assert!((oxygen.atomic_mass - 15.999).abs() < 1e-9);
//!
//! // Lookup is case-insensitive
//! assert_eq!(lookup("na").unwrap().name, "Sodium");
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// One periodic-table entry. Serializes for display; the table itself is
/// compiled in, never read back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Element {
    /// Chemical symbol (e.g., "H", "Na")
    pub symbol: &'static str,
    /// Full element name
    pub name: &'static str,
    /// Standard atomic weight (g/mol)
    pub atomic_mass: f64,
}

/// Static element table, ordered by atomic number.
pub static ELEMENTS: &[Element] = &[
    Element { symbol: "H", name: "Hydrogen", atomic_mass: 1.008 },
    Element { symbol: "He", name: "Helium", atomic_mass: 4.0026 },
    Element { symbol: "Li", name: "Lithium", atomic_mass: 6.94 },
    Element { symbol: "Be", name: "Beryllium", atomic_mass: 9.0122 },
    Element { symbol: "B", name: "Boron", atomic_mass: 10.81 },
    Element { symbol: "C", name: "Carbon", atomic_mass: 12.011 },
    Element { symbol: "N", name: "Nitrogen", atomic_mass: 14.007 },
    Element { symbol: "O", name: "Oxygen", atomic_mass: 15.999 },
    Element { symbol: "F", name: "Fluorine", atomic_mass: 18.998 },
    Element { symbol: "Ne", name: "Neon", atomic_mass: 20.180 },
    Element { symbol: "Na", name: "Sodium", atomic_mass: 22.990 },
    Element { symbol: "Mg", name: "Magnesium", atomic_mass: 24.305 },
    Element { symbol: "Al", name: "Aluminium", atomic_mass: 26.982 },
    Element { symbol: "Si", name: "Silicon", atomic_mass: 28.085 },
    Element { symbol: "P", name: "Phosphorus", atomic_mass: 30.974 },
    Element { symbol: "S", name: "Sulfur", atomic_mass: 32.06 },
    Element { symbol: "Cl", name: "Chlorine", atomic_mass: 35.45 },
    Element { symbol: "Ar", name: "Argon", atomic_mass: 39.948 },
    Element { symbol: "K", name: "Potassium", atomic_mass: 39.098 },
    Element { symbol: "Ca", name: "Calcium", atomic_mass: 40.078 },
    Element { symbol: "Ti", name: "Titanium", atomic_mass: 47.867 },
    Element { symbol: "Cr", name: "Chromium", atomic_mass: 51.996 },
    Element { symbol: "Mn", name: "Manganese", atomic_mass: 54.938 },
    Element { symbol: "Fe", name: "Iron", atomic_mass: 55.845 },
    Element { symbol: "Co", name: "Cobalt", atomic_mass: 58.933 },
    Element { symbol: "Ni", name: "Nickel", atomic_mass: 58.693 },
    Element { symbol: "Cu", name: "Copper", atomic_mass: 63.546 },
    Element { symbol: "Zn", name: "Zinc", atomic_mass: 65.38 },
    Element { symbol: "Br", name: "Bromine", atomic_mass: 79.904 },
    Element { symbol: "Ag", name: "Silver", atomic_mass: 107.87 },
    Element { symbol: "Sn", name: "Tin", atomic_mass: 118.71 },
    Element { symbol: "I", name: "Iodine", atomic_mass: 126.90 },
    Element { symbol: "Ba", name: "Barium", atomic_mass: 137.33 },
    Element { symbol: "Pt", name: "Platinum", atomic_mass: 195.08 },
    Element { symbol: "Au", name: "Gold", atomic_mass: 196.97 },
    Element { symbol: "Hg", name: "Mercury", atomic_mass: 200.59 },
    Element { symbol: "Pb", name: "Lead", atomic_mass: 207.2 },
];

/// Symbol index built lazily on first lookup. Keys are canonical symbols.
static SYMBOL_INDEX: Lazy<HashMap<&'static str, &'static Element>> = Lazy::new(|| {
    ELEMENTS.iter().map(|e| (e.symbol, e)).collect()
});

/// Look up an element by symbol.
///
/// Accepts any capitalization ("H", "h", "NA", "na") and normalizes to the
/// canonical symbol form before the index lookup.
pub fn lookup(symbol: &str) -> CalcResult<&'static Element> {
    let canonical = canonicalize(symbol);
    SYMBOL_INDEX
        .get(canonical.as_str())
        .copied()
        .ok_or_else(|| CalcError::element_not_found(symbol))
}

/// Normalize a symbol to canonical form: first letter upper, rest lower.
fn canonicalize(symbol: &str) -> String {
    let trimmed = symbol.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact() {
        let h = lookup("H").unwrap();
        assert_eq!(h.atomic_mass, 1.008);
        assert_eq!(h.name, "Hydrogen");
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup("cl").unwrap().symbol, "Cl");
        assert_eq!(lookup("FE").unwrap().symbol, "Fe");
    }

    #[test]
    fn test_lookup_unknown() {
        let err = lookup("Xx").unwrap_err();
        assert_eq!(err.error_code(), "ELEMENT_NOT_FOUND");
    }

    #[test]
    fn test_table_has_no_duplicate_symbols() {
        let mut seen = std::collections::HashSet::new();
        for element in ELEMENTS {
            assert!(seen.insert(element.symbol), "duplicate symbol {}", element.symbol);
        }
    }
}
