use chrono::{DateTime, Utc};

use crate::config::AllocatorConfig;

/// Fields packed into an ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdComponents {
    /// Milliseconds since the configured epoch
    pub timestamp: i64,
    pub datacenter_id: i64,
    pub worker_id: i64,
    pub sequence: i64,
}

impl IdComponents {
    /// Pack the components using the given layout. Components wider than
    /// their field are truncated to it.
    pub fn compose(&self, config: &AllocatorConfig) -> i64 {
        ((self.timestamp & config.timestamp_mask()) << config.timestamp_shift())
            | ((self.datacenter_id & config.max_datacenter_id()) << config.datacenter_shift())
            | ((self.worker_id & config.max_worker_id()) << config.worker_shift())
            | (self.sequence & config.max_sequence())
    }
}

/// ID component extractor
#[derive(Debug, Copy, Clone)]
pub struct IdExtractor {
    config: AllocatorConfig,
}

impl IdExtractor {
    /// Create an extractor for IDs produced with the given configuration
    pub fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    /// Timestamp component, in milliseconds since the configured epoch
    #[inline(always)]
    pub fn timestamp(&self, id: i64) -> i64 {
        (id >> self.config.timestamp_shift()) & self.config.timestamp_mask()
    }

    #[inline(always)]
    pub fn datacenter_id(&self, id: i64) -> i64 {
        (id >> self.config.datacenter_shift()) & self.config.max_datacenter_id()
    }

    #[inline(always)]
    pub fn worker_id(&self, id: i64) -> i64 {
        (id >> self.config.worker_shift()) & self.config.max_worker_id()
    }

    #[inline(always)]
    pub fn sequence(&self, id: i64) -> i64 {
        id & self.config.max_sequence()
    }

    /// Decompose an ID into all of its components
    #[inline]
    pub fn decompose(&self, id: i64) -> IdComponents {
        IdComponents {
            timestamp: self.timestamp(id),
            datacenter_id: self.datacenter_id(id),
            worker_id: self.worker_id(id),
            sequence: self.sequence(id),
        }
    }

    /// Allocation time in milliseconds since the Unix epoch
    #[inline]
    pub fn unix_millis(&self, id: i64) -> i64 {
        self.timestamp(id) + self.config.epoch()
    }

    /// Allocation time as a UTC date, if representable
    pub fn datetime(&self, id: i64) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.unix_millis(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose() {
        let config = AllocatorConfig::default();
        let extract = IdExtractor::new(config);

        let parts = IdComponents {
            timestamp: 0x1234567,
            datacenter_id: 17,
            worker_id: 9,
            sequence: 123,
        };
        let id = parts.compose(&config);

        assert_eq!(extract.timestamp(id), parts.timestamp);
        assert_eq!(extract.datacenter_id(id), parts.datacenter_id);
        assert_eq!(extract.worker_id(id), parts.worker_id);
        assert_eq!(extract.sequence(id), parts.sequence);
        assert_eq!(extract.decompose(id), parts);
    }

    #[test]
    fn test_component_boundaries() {
        let config = AllocatorConfig::default();
        let extract = IdExtractor::new(config);

        let parts = IdComponents {
            timestamp: (1i64 << 41) - 1,
            datacenter_id: config.max_datacenter_id(),
            worker_id: config.max_worker_id(),
            sequence: config.max_sequence(),
        };
        let id = parts.compose(&config);

        assert_eq!(id, i64::MAX);
        assert_eq!(extract.decompose(id), parts);
    }

    #[test]
    fn test_datetime() {
        let config = AllocatorConfig::default();
        let extract = IdExtractor::new(config);

        // One second after the epoch
        let id = 1000i64 << 22;
        assert_eq!(extract.unix_millis(id), 1420041601000);
        let at = extract.datetime(id).unwrap();
        assert_eq!(at.to_rfc3339(), "2014-12-31T16:00:01+00:00");
    }
}
