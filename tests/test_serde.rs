#![cfg(feature = "serde")]

use cfg_ll1::prediction::{FirstSets, FollowSets, NullableSet};
use cfg_ll1::{Analysis, ConflictPolicy, Grammar, ParseOutcome, PredictionTable};

mod grammars;

fn round_trip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let json = serde_json::to_string(value).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_frozen_results_round_trip() {
    for policy in [ConflictPolicy::LastWins, ConflictPolicy::FirstWins] {
        let analysis = Analysis::new(grammars::statements(), policy);

        let grammar: Grammar = round_trip(analysis.grammar());
        assert_eq!(&grammar, analysis.grammar());
        let nullable: NullableSet = round_trip(analysis.nullable());
        assert_eq!(&nullable, analysis.nullable());
        let first: FirstSets = round_trip(analysis.first());
        assert_eq!(&first, analysis.first());
        let follow: FollowSets = round_trip(analysis.follow());
        assert_eq!(&follow, analysis.follow());

        let table: PredictionTable = round_trip(analysis.table());
        assert_eq!(&table, analysis.table());
        assert_eq!(table.conflicts(), analysis.table().conflicts());
        assert_eq!(table.policy(), policy);
    }
}

#[test]
fn test_table_cells_are_a_sequence() {
    let mut builder = Grammar::builder();
    builder.rule("S").rhs(["a"]);
    let analysis = Analysis::new(builder.finalize("S").unwrap(), ConflictPolicy::default());

    let value = serde_json::to_value(analysis.table()).unwrap();
    let cells = value["map"].as_array().unwrap();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].as_array().unwrap().len(), 3);
}

#[test]
fn test_parse_outcome_round_trip() {
    let analysis = Analysis::new(grammars::expression(), ConflictPolicy::default());
    let parser = analysis.parser();
    for input in ["i+i*i", "i+", "(i"] {
        let outcome = parser.parse_chars(input).unwrap();
        let restored: ParseOutcome = round_trip(&outcome);
        assert_eq!(restored, outcome);
    }
}
