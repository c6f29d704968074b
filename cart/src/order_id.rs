use chrono::Utc;
use uuid::Uuid;

/// Strategy for minting order identifiers at checkout. Injected so tests can
/// pin the id; the default scheme is wall-clock based and unique per call.
pub trait OrderIdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default scheme: `ORDER-<unix millis>-<random suffix>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampOrderIds;

impl OrderIdGenerator for TimestampOrderIds {
    fn generate(&self) -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!("ORDER-{}-{}", Utc::now().timestamp_millis(), &suffix[..7])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_the_order_prefix_scheme() {
        let id = TimestampOrderIds.generate();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3, "unexpected id shape: {id}");
        assert_eq!(parts[0], "ORDER");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 7);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn ids_are_unique_across_calls() {
        let a = TimestampOrderIds.generate();
        let b = TimestampOrderIds.generate();
        assert_ne!(a, b);
    }
}
