use super::Timestamp;
use rand::Rng;

const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;

/// Generators for the fields every entity carries (identity and lifecycle timestamps).
///
/// Entity factories merge these with their own field generators, so swapping a
/// generator here changes every fake built from this set.
pub struct DefaultFactories {
    pub id: Box<dyn Fn() -> u64>,
    pub created_on: Box<dyn Fn() -> Timestamp>,
    pub updated_on: Box<dyn Fn() -> Option<Timestamp>>,
    pub archived_on: Box<dyn Fn() -> Option<Timestamp>>,
}

impl DefaultFactories {
    /// Generators that always return the given values
    pub fn fixed(id: u64, created_on: Timestamp) -> Self {
        Self {
            id: Box::new(move || id),
            created_on: Box::new(move || created_on),
            updated_on: Box::new(|| None),
            archived_on: Box::new(|| None),
        }
    }

    pub fn with_archived_on(
        mut self,
        archived_on: impl Fn() -> Option<Timestamp> + 'static,
    ) -> Self {
        self.archived_on = Box::new(archived_on);
        self
    }

    pub fn with_updated_on(
        mut self,
        updated_on: impl Fn() -> Option<Timestamp> + 'static,
    ) -> Self {
        self.updated_on = Box::new(updated_on);
        self
    }
}

impl Default for DefaultFactories {
    fn default() -> Self {
        Self {
            id: Box::new(|| rand::thread_rng().gen_range(1..=u64::from(u32::MAX))),
            created_on: Box::new(|| {
                let now = now_epoch();
                now - rand::thread_rng().gen_range(0..=SECONDS_PER_YEAR.min(now))
            }),
            updated_on: Box::new(|| None),
            archived_on: Box::new(|| None),
        }
    }
}

fn now_epoch() -> Timestamp {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default()
}
