//! Coded choice columns
//!
//! Several columns store a short code (`F`, `DE`, `M`...) backed by a
//! PostgreSQL enum. Each enum knows its code and a human-readable label so the
//! API can publish the option lists.

/// A closed set of coded options
pub trait Choice: Sized + Copy + 'static {
    /// Every variant, in display order
    const ALL: &'static [Self];

    /// Code stored in the database
    fn code(&self) -> &'static str;

    /// Human-readable label
    fn label(&self) -> &'static str;

    /// Look up a variant by its stored code (case-insensitive)
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// Declares `code`/`label` for a choice enum from one table of variants.
macro_rules! choice_table {
    ($ty:ty { $($variant:ident => ($code:literal, $label:literal)),+ $(,)? }) => {
        impl $crate::models::choice::Choice for $ty {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

pub(crate) use choice_table;
