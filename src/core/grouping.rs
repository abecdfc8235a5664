use crate::domain::model::{FeedKey, StagingPost};
use std::collections::BTreeMap;

/// Partitions posts by queue in one pass.
///
/// Each group keeps the relative input order of its posts. Groups iterate
/// in ascending key order, with unattributed posts (`None`) first.
pub fn group_by_feed(posts: &[StagingPost]) -> BTreeMap<FeedKey, Vec<&StagingPost>> {
    let mut groups: BTreeMap<FeedKey, Vec<&StagingPost>> = BTreeMap::new();
    for post in posts {
        groups.entry(post.queue_id).or_default().push(post);
    }
    groups
}
