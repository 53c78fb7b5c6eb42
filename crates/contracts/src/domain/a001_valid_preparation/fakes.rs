//! Fake-data factory for valid preparations

use super::aggregate::{ValidPreparation, ValidPreparationDto, ValidPreparationList};
use crate::domain::common::{DefaultFactories, Pagination};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MIN_WORD_LEN: usize = 3;
const MAX_WORD_LEN: usize = 10;

/// Builds random but well-formed [`ValidPreparation`] values.
///
/// Entity-specific fields come from the factory's own RNG (reproducible with
/// [`ValidPreparationFactory::with_seed`]); identity and timestamps come from the
/// shared [`DefaultFactories`].
pub struct ValidPreparationFactory {
    rng: StdRng,
    defaults: DefaultFactories,
}

impl ValidPreparationFactory {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            defaults: DefaultFactories::default(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            defaults: DefaultFactories::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: DefaultFactories) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn build(&mut self) -> ValidPreparation {
        ValidPreparation {
            id: (self.defaults.id)(),
            name: self.word(),
            description: self.word(),
            icon: self.word(),
            applicable_to_all_ingredients: self.rng.gen(),
            created_on: (self.defaults.created_on)(),
            updated_on: (self.defaults.updated_on)(),
            archived_on: (self.defaults.archived_on)(),
        }
    }

    /// Build, then let the caller pin the fields a test cares about
    pub fn build_with(
        &mut self,
        overrides: impl FnOnce(&mut ValidPreparation),
    ) -> ValidPreparation {
        let mut vp = self.build();
        overrides(&mut vp);
        vp
    }

    pub fn build_list(&mut self, count: usize) -> Vec<ValidPreparation> {
        (0..count).map(|_| self.build()).collect()
    }

    /// Creation input for a not-yet-saved preparation
    pub fn build_dto(&mut self) -> ValidPreparationDto {
        let mut dto = ValidPreparationDto::from(&self.build());
        dto.id = None;
        dto
    }

    pub fn build_page(&mut self, count: usize) -> ValidPreparationList {
        let data = self.build_list(count);
        let mut pagination = Pagination::default();
        pagination.filtered_count = data.len() as u64;
        pagination.total_count = data.len() as u64;
        ValidPreparationList { pagination, data }
    }

    fn word(&mut self) -> String {
        let len = self.rng.gen_range(MIN_WORD_LEN..=MAX_WORD_LEN);
        (0..len)
            .map(|_| char::from(self.rng.gen_range(b'a'..=b'z')))
            .collect()
    }
}

impl Default for ValidPreparationFactory {
    fn default() -> Self {
        Self::new()
    }
}
