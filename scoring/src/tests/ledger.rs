use alloc::vec;

use super::*;
use crate::error::ScoringError;
use crate::ledger::ScoringLedger;
use crate::rules::ScoringRules;

#[test]
fn test_gameweek_scored_once() {
    let mut ledger = ScoringLedger::new();
    let rules = ScoringRules::default();
    let entries = [entry(1, vec![monster(1, Position::Forward, "RARE", 0)])];
    let stats = [points_line(1, 6)];

    let outcome = ledger.score(GW, &stats, &[], &entries, &rules).unwrap();
    assert_eq!(outcome.total_for(UserId(1)), Some(6));
    assert!(ledger.is_scored(GW));

    assert_eq!(
        ledger.score(GW, &stats, &[], &entries, &rules),
        Err(ScoringError::AlreadyScored { gameweek: GW })
    );
    assert!(ledger.score(GameweekId(8), &stats, &[], &entries, &rules).is_ok());
    assert_eq!(ledger.scored_gameweeks().collect::<Vec<_>>(), vec![GW, GameweekId(8)]);
}

#[test]
fn test_failed_run_is_not_recorded() {
    let mut ledger = ScoringLedger::new();
    let record = monster(1, Position::Forward, "RARE", 0);
    let entries = [entry(1, vec![record.clone()]), entry(2, vec![record])];

    assert!(ledger
        .score(GW, &[], &[], &entries, &ScoringRules::default())
        .is_err());
    assert!(!ledger.is_scored(GW));
}

#[test]
fn test_ledger_round_trips() {
    use parity_scale_codec::{Decode, Encode};

    let mut ledger = ScoringLedger::new();
    ledger
        .score(GW, &[], &[], &[], &ScoringRules::default())
        .unwrap();
    let bytes = ledger.encode();
    let decoded = ScoringLedger::decode(&mut &bytes[..]).unwrap();
    assert_eq!(decoded, ledger);
    assert!(decoded.is_scored(GW));
}
