//! The persisted record and its construction.
//!
//! # Responsibilities
//! - Define the wire shape stored under each key (`Value` / `CreatedAt`)
//! - Build the greeting text from the fixed emoji set
//! - Stamp creation time in the configured zone

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Greeting prefix shared by every record.
pub const GREETING: &str = "Hi! Kubernetes Novice";

/// The fixed set of glyphs a greeting may end with.
pub const EMOJIS: [&str; 10] = ["😀", "😃", "😄", "😁", "😆", "😅", "😂", "🤣", "😊", "😇"];

/// A single persisted record.
///
/// Write-once, read-once: the recorder never updates or deletes a record
/// after the read-back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Greeting text, `GREETING` plus one glyph from `EMOJIS`.
    #[serde(rename = "Value")]
    pub value: String,

    /// Creation instant, carried with the zone's UTC offset.
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<FixedOffset>,
}

impl Record {
    /// Build a fresh record: random glyph, current instant in `zone`.
    pub fn greeting<R: Rng>(rng: &mut R, zone: Tz) -> Record {
        let emoji = pick_emoji(rng);
        Record {
            value: format!("{} {}", GREETING, emoji),
            created_at: Utc::now().with_timezone(&zone).fixed_offset(),
        }
    }
}

/// Pick one glyph uniformly at random from the fixed set.
pub fn pick_emoji<R: Rng>(rng: &mut R) -> &'static str {
    EMOJIS[rng.gen_range(0..EMOJIS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_emoji_stays_in_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(EMOJIS.contains(&pick_emoji(&mut rng)));
        }
    }

    #[test]
    fn test_greeting_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let record = Record::greeting(&mut rng, chrono_tz::Asia::Tokyo);
        let suffix = record.value.strip_prefix("Hi! Kubernetes Novice ").unwrap();
        assert!(EMOJIS.contains(&suffix));
        // Tokyo has no DST; the offset is always +09:00.
        assert_eq!(record.created_at.offset().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_wire_field_names() {
        let mut rng = StdRng::seed_from_u64(2);
        let record = Record::greeting(&mut rng, chrono_tz::Asia::Tokyo);
        let json: serde_json::Value = serde_json::from_str(
            &serde_json::to_string(&record).unwrap(),
        )
        .unwrap();
        assert!(json.get("Value").is_some());
        assert!(json.get("CreatedAt").is_some());
    }

    #[test]
    fn test_json_round_trip_preserves_record() {
        let mut rng = StdRng::seed_from_u64(3);
        let record = Record::greeting(&mut rng, chrono_tz::Asia::Tokyo);
        let back: Record =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(back, record);
    }
}
