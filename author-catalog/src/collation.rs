//! Locale-aware ordering of author names
//!
//! Author names are compared with an ICU collator pinned to a configured
//! BCP-47 locale, so ordering is reproducible across hosts regardless of
//! the process locale.

use icu_collator::{
    options::{CollatorOptions, Strength},
    Collator, CollatorBorrowed,
};
use icu_locale_core::Locale;
use std::cmp::Ordering;
use std::fmt;

use crate::{
    error::{Error, Result},
    models::AuthorRecord,
};

/// Locale used when none is configured
pub const DEFAULT_COLLATION_LOCALE: &str = "en";

/// Collator for author names
pub struct NameCollator {
    locale: Locale,
    collator: CollatorBorrowed<'static>,
}

impl NameCollator {
    /// Build a collator for a BCP-47 locale tag such as `"en"` or `"de-AT"`
    ///
    /// Uses tertiary strength: base letters first, then accents, then case.
    pub fn new(locale: &str) -> Result<Self> {
        let locale: Locale = locale
            .parse()
            .map_err(|e| Error::Collation(format!("invalid locale '{}': {:?}", locale, e)))?;

        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Tertiary);

        let collator = Collator::try_new(locale.clone().into(), options).map_err(|e| {
            Error::Collation(format!("no collation data for '{}': {}", locale, e))
        })?;

        Ok(Self { locale, collator })
    }

    /// The pinned locale
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Compare two names
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }

    /// Sort authors ascending by full `name`
    ///
    /// Stable: authors with equal names keep their relative order. Fields are
    /// never modified.
    pub fn sort_authors(&self, authors: &mut [AuthorRecord]) {
        authors.sort_by(|a, b| self.compare(&a.name, &b.name));
    }
}

impl fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameCollator")
            .field("locale", &self.locale.to_string())
            .finish_non_exhaustive()
    }
}
