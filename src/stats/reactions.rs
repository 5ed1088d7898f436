//! Reaction statistics: totals per receiving sender and the detailed
//! user-by-sender matrix.
//!
//! Crediting walks every (message, reaction, user) triple: each user entry
//! on each reaction counts one "reaction received" for the message's sender
//! and one matrix cell increment `[reacting user][sender]`. Duplicate user
//! entries within one reaction each count.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::message::Message;

/// Accumulated reaction counts, returned by [`reaction_stats`].
///
/// `totals` maps each receiving sender to the number of reaction credits on
/// their messages. `matrix` maps reacting user → receiving sender → count;
/// absent pairs are zero (filled in when the table is written).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReactionStats {
    pub totals: BTreeMap<String, u64>,
    pub matrix: BTreeMap<String, BTreeMap<String, u64>>,
}

impl ReactionStats {
    /// Sum of all credits across senders. Equals the number of
    /// (message, reaction, user) triples in the table.
    pub fn total_credits(&self) -> u64 {
        self.totals.values().sum()
    }

    /// The senders that received at least one reaction, sorted. These are
    /// the columns of the detailed matrix.
    pub fn receiving_senders(&self) -> Vec<&str> {
        self.totals.keys().map(String::as_str).collect()
    }
}

/// Tallies reaction credits over the whole table.
pub fn reaction_stats(messages: &[Message]) -> ReactionStats {
    let mut stats = ReactionStats::default();

    for msg in messages {
        for reaction in &msg.reactions {
            for user in &reaction.users {
                *stats.totals.entry(msg.sender.clone()).or_default() += 1;
                *stats
                    .matrix
                    .entry(user.clone())
                    .or_default()
                    .entry(msg.sender.clone())
                    .or_default() += 1;
            }
        }
    }

    stats
}

/// Writes the totals table: `sender,total_reactions_received`, one row per
/// receiving sender in name order.
pub fn write_reaction_totals(stats: &ReactionStats, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["sender", "total_reactions_received"])?;

    for (sender, count) in &stats.totals {
        let count = count.to_string();
        writer.write_record([sender.as_str(), count.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the detailed matrix: one row per reacting user, one column per
/// receiving sender, zero-filled for absent pairs.
pub fn write_detailed_matrix(stats: &ReactionStats, path: &Path) -> Result<()> {
    let senders = stats.receiving_senders();

    let mut writer = csv::Writer::from_path(path)?;
    let mut header = vec!["user"];
    header.extend(senders.iter().copied());
    writer.write_record(&header)?;

    for (user, row) in &stats.matrix {
        let mut record = vec![user.clone()];
        for sender in &senders {
            record.push(row.get(*sender).copied().unwrap_or(0).to_string());
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Reaction;

    #[test]
    fn test_credit_per_user_per_reaction() {
        // A message by A with 👍 from B and C: A += 2, [B][A] = 1, [C][A] = 1
        let messages = vec![Message::new("A", "hi")
            .with_reaction(Reaction::new(Some("👍"), vec!["B".into(), "C".into()]))];

        let stats = reaction_stats(&messages);
        assert_eq!(stats.totals["A"], 2);
        assert_eq!(stats.matrix["B"]["A"], 1);
        assert_eq!(stats.matrix["C"]["A"], 1);
    }

    #[test]
    fn test_duplicate_users_each_count() {
        let messages = vec![Message::new("A", "hi")
            .with_reaction(Reaction::new(Some("👍"), vec!["B".into(), "B".into()]))];

        let stats = reaction_stats(&messages);
        assert_eq!(stats.totals["A"], 2);
        assert_eq!(stats.matrix["B"]["A"], 2);
    }

    #[test]
    fn test_null_emoji_still_credits() {
        let messages = vec![
            Message::new("A", "hi").with_reaction(Reaction::new(None::<String>, vec!["B".into()])),
        ];
        assert_eq!(reaction_stats(&messages).totals["A"], 1);
    }

    #[test]
    fn test_totals_equal_triple_count() {
        let messages = vec![
            Message::new("A", "x")
                .with_reaction(Reaction::new(Some("👍"), vec!["B".into(), "C".into()]))
                .with_reaction(Reaction::new(Some("🔥"), vec!["B".into()])),
            Message::new("B", "y").with_reaction(Reaction::new(Some("👍"), vec!["A".into()])),
            Message::new("C", "z"),
        ];
        let triple_count: usize = messages.iter().map(Message::reaction_credits).sum();
        let stats = reaction_stats(&messages);
        assert_eq!(stats.total_credits(), triple_count as u64);
    }

    #[test]
    fn test_write_detailed_matrix_zero_filled() {
        use tempfile::tempdir;

        let messages = vec![
            Message::new("A", "x").with_reaction(Reaction::new(Some("👍"), vec!["B".into()])),
            Message::new("C", "y").with_reaction(Reaction::new(Some("👍"), vec!["D".into()])),
        ];
        let stats = reaction_stats(&messages);

        let dir = tempdir().unwrap();
        let path = dir.path().join("detailed_reactions.csv");
        write_detailed_matrix(&stats, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "user,A,C");
        assert_eq!(lines[1], "B,1,0");
        assert_eq!(lines[2], "D,0,1");
    }

    #[test]
    fn test_write_reaction_totals() {
        use tempfile::tempdir;

        let messages = vec![Message::new("A", "x")
            .with_reaction(Reaction::new(Some("👍"), vec!["B".into(), "C".into()]))];
        let stats = reaction_stats(&messages);

        let dir = tempdir().unwrap();
        let path = dir.path().join("reaction_stats.csv");
        write_reaction_totals(&stats, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("sender,total_reactions_received"));
        assert!(content.contains("A,2"));
    }
}
