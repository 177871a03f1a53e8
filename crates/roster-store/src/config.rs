/// Tuning for identifier allocation in [`InMemoryRecordStore`].
///
/// [`InMemoryRecordStore`]: crate::InMemoryRecordStore
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Identifiers are drawn from `1..=id_space`. This is also the maximum
    /// number of live records.
    pub id_space: u64,
    /// Random draws to try before probing linearly for a free id.
    pub max_id_attempts: u32,
    /// Fixed seed for the id generator. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl StoreConfig {
    pub const DEFAULT_ID_SPACE: u64 = 999_999;
    pub const DEFAULT_MAX_ID_ATTEMPTS: u32 = 64;
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id_space: Self::DEFAULT_ID_SPACE,
            max_id_attempts: Self::DEFAULT_MAX_ID_ATTEMPTS,
            seed: None,
        }
    }
}
