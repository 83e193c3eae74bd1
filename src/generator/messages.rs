use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::timestamps::random_recent_timestamp;
use crate::config::GenerationConfig;
use crate::models::{ChatSnapshot, Message};

/// Generate a snapshot of synthetic messages.
///
/// For each source platform in enumeration order, produces exactly the configured
/// number of messages with sender and content sampled from the pools and a timestamp
/// from the last week. Ids run from 1 across the whole generation. The result is
/// sorted newest first; equal timestamps keep generation order.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use mock_inbox::config::GenerationConfig;
/// use mock_inbox::generator::generate;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let snapshot = generate(&GenerationConfig::default(), &mut rng, Utc::now());
/// assert_eq!(snapshot.len(), 170);
/// ```
pub fn generate<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> ChatSnapshot {
    generate_with(config, rng, |rng| random_recent_timestamp(rng, now))
}

/// Generate using the configured seed, or OS entropy when none is set.
pub fn generate_seeded(config: &GenerationConfig, now: DateTime<Utc>) -> ChatSnapshot {
    let mut rng = match config.seed {
        Some(seed) => {
            debug!("seeding generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    generate(config, &mut rng, now)
}

/// Generation with a caller-supplied timestamp source.
pub(crate) fn generate_with<R, F>(config: &GenerationConfig, rng: &mut R, mut timestamp: F) -> ChatSnapshot
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> DateTime<Utc>,
{
    let capacity = usize::try_from(config.counts.total()).unwrap_or(0);
    let mut messages = Vec::with_capacity(capacity);
    let mut next_id: u32 = 1;

    for (platform, count) in config.counts.iter() {
        let display = config.display.display_of(platform);
        for _ in 0..count {
            let sender = config.pools.sample_sender(rng).to_string();
            let content = config.pools.sample_content(rng).to_string();
            messages.push(Message {
                id: next_id,
                source: platform,
                display,
                sender,
                content,
                timestamp: timestamp(rng),
                unread: true,
            });
            next_id += 1;
        }
        debug!("generated {} {} messages", count, platform);
    }

    sort_newest_first(&mut messages);
    info!("generated {} messages", messages.len());

    ChatSnapshot::from_messages(messages)
}

/// Stable sort by timestamp, newest first.
pub fn sort_newest_first(messages: &mut [Message]) {
    messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
