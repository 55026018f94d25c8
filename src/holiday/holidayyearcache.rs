use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

use crate::holiday::holidayengine::HolidayEngine;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayrecord::HolidayRecord;

/// Year-keyed memoization of [`HolidayEngine::compute_holidays`].
///
/// Lives beside the engine rather than inside it. Two threads missing the
/// same year at once may both compute it; the results are identical, so the
/// second write is harmless.
pub struct HolidayYearCache {
    cache: RwLock<HashMap<i32, Arc<[HolidayRecord]>>>
}

impl HolidayYearCache {
    pub fn new() -> Self {
        Self { cache: RwLock::new(HashMap::new()) }
    }

    pub fn get_or_compute(&self, engine: &HolidayEngine, year: i32) -> Result<Arc<[HolidayRecord]>, HolidayError> {
        if let Some(records) = self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year) {
            return Ok(Arc::clone(records));
        }

        trace!(year, "holiday cache miss");
        let records: Arc<[HolidayRecord]> = engine.compute_holidays(year)?.into();
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(year, Arc::clone(&records));
        Ok(records)
    }

    pub fn len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Default for HolidayYearCache {
    fn default() -> Self {
        Self::new()
    }
}
