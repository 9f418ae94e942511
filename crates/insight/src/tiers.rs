//! Typed tier vocabularies.
//!
//! Upstream queries attach display labels such as `"🏆 Star Performer"` to each
//! row. Every tier column is a closed enum here; a row's label is parsed once
//! per analysis call into a [`TierIndex`] and rules work with the variants.

use std::any::TypeId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use atelier_core::Row;

/// A closed vocabulary of labels carried in one tier column.
pub trait Tier: Copy + Eq + std::fmt::Debug + 'static {
    /// Column the label is read from.
    const FIELD: &'static str;
    /// Variants in declaration order. Longer labels that contain a shorter one
    /// are declared first so matching picks the most specific.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn ordinal(self) -> usize;

    /// Locate a label phrase inside a display string. Prefixes and suffixes
    /// (emoji, padding) are ignored.
    fn parse(display: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| display.contains(t.label()))
    }

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }
}

/// Declare a tier enum with its column name and label table.
macro_rules! tier {
    (
        $(#[$meta:meta])*
        $name:ident in $field:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $crate::tiers::Tier for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            fn ordinal(self) -> usize {
                self as usize
            }
        }
    };
}
pub(crate) use tier;

pub mod formal_wear;
pub mod franchise;
pub mod inventory;
pub mod store;

// ── TierIndex ───────────────────────────────────────────────────────

type Column = Rc<[Option<usize>]>;

/// Parsed tier columns for one row set. Each column is parsed on first use and
/// reused by every later rule in the same analysis call.
pub struct TierIndex<'r> {
    rows: &'r [Row],
    columns: RefCell<HashMap<TypeId, Column>>,
}

impl<'r> TierIndex<'r> {
    pub fn new(rows: &'r [Row]) -> Self {
        Self {
            rows,
            columns: RefCell::new(HashMap::new()),
        }
    }

    fn column<T: Tier>(&self) -> Column {
        let key = TypeId::of::<T>();
        if let Some(column) = self.columns.borrow().get(&key) {
            return Rc::clone(column);
        }
        let column: Column = self
            .rows
            .iter()
            .map(|row| {
                row.get(T::FIELD)
                    .and_then(|v| T::parse(&v.to_string()))
                    .map(T::ordinal)
            })
            .collect();
        self.columns.borrow_mut().insert(key, Rc::clone(&column));
        column
    }

    /// Tier of the row at `index`, `None` when missing or unrecognised.
    pub fn tier_of<T: Tier>(&self, index: usize) -> Option<T> {
        self.column::<T>()
            .get(index)
            .copied()
            .flatten()
            .and_then(T::from_ordinal)
    }

    /// Rows carrying `tier`, in input order.
    pub fn rows_in<T: Tier>(&self, tier: T) -> Vec<&'r Row> {
        let wanted = tier.ordinal();
        self.column::<T>()
            .iter()
            .zip(self.rows)
            .filter(|(t, _)| **t == Some(wanted))
            .map(|(_, row)| row)
            .collect()
    }

    pub fn count<T: Tier>(&self, tier: T) -> usize {
        let wanted = tier.ordinal();
        self.column::<T>().iter().filter(|t| **t == Some(wanted)).count()
    }

    pub fn rows(&self) -> &'r [Row] {
        self.rows
    }
}
