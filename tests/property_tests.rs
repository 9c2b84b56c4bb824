//! Property tests for dominance resolution and score bookkeeping.
//!
//! Catalogs are generated as random tournaments, and sessions are driven
//! by random event sequences that include unknown card ids.

use card_duel::{
    CardCatalog, CardDefinition, CardId, DuelConfig, DuelOutcome, DuelResolver, NullFeedback,
    RoundController, RoundPhase, Score, ScriptedPicker, Selection,
};
use proptest::prelude::*;

/// Build a consistent catalog from a pairwise relation: for i < j,
/// 1 means i beats j, -1 means j beats i, 0 means neither.
fn tournament(size: usize, relation: &[i8]) -> CardCatalog {
    let mut cards: Vec<CardDefinition> = (0..size as u32)
        .map(|i| CardDefinition::new(CardId::new(i), format!("Card {i}"), "Test"))
        .collect();

    let mut k = 0;
    for i in 0..size {
        for j in (i + 1)..size {
            let (a, b) = (CardId::new(i as u32), CardId::new(j as u32));
            match relation[k] {
                1 => {
                    cards[i].beats.push(b);
                    cards[j].loses_to.push(a);
                }
                -1 => {
                    cards[j].beats.push(a);
                    cards[i].loses_to.push(b);
                }
                _ => {}
            }
            k += 1;
        }
    }

    CardCatalog::new(cards).expect("generated tournament is consistent")
}

fn tournament_strategy() -> impl Strategy<Value = (usize, Vec<i8>)> {
    (1usize..8).prop_flat_map(|size| {
        let pairs = size * (size - 1) / 2;
        (Just(size), prop::collection::vec(-1i8..=1, pairs))
    })
}

#[derive(Clone, Debug)]
enum Op {
    Start,
    Select(u32),
    Acknowledge,
    PromptRestart,
    Hover(u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Start),
        4 => (0u32..5).prop_map(Op::Select),
        3 => Just(Op::Acknowledge),
        1 => Just(Op::PromptRestart),
        1 => (0u32..5).prop_map(Op::Hover),
    ]
}

#[test]
fn test_standard_catalog_is_a_tournament() {
    let catalog = CardCatalog::standard().unwrap();

    for a in catalog.all() {
        for b in catalog.all() {
            let forward = a.beats(b.id);
            let backward = b.beats(a.id);
            assert!(!(forward && backward), "{} and {} beat each other", a.name, b.name);
            assert_eq!(forward, b.loses_to(a.id));
        }
    }
}

proptest! {
    /// Property: every pair of cards in a valid catalog resolves antisymmetrically.
    #[test]
    fn prop_resolve_is_antisymmetric((size, relation) in tournament_strategy()) {
        let catalog = tournament(size, &relation);
        let resolver = DuelResolver::new(&catalog);

        for a in catalog.ids() {
            for b in catalog.ids() {
                let forward = resolver.resolve(a, b).unwrap();
                let backward = resolver.resolve(b, a).unwrap();
                prop_assert_eq!(backward, forward.reversed());
            }
            prop_assert_eq!(resolver.resolve(a, a).unwrap(), DuelOutcome::Draw);
        }
    }

    /// Property: dropping the inverse of any dominance edge breaks the catalog.
    #[test]
    fn prop_one_sided_relation_rejected((size, relation) in tournament_strategy(), pick in any::<prop::sample::Index>()) {
        let catalog = tournament(size, &relation);
        let edges: Vec<(CardId, CardId)> = catalog
            .all()
            .flat_map(|c| c.beats.iter().map(move |&loser| (c.id, loser)))
            .collect();
        prop_assume!(!edges.is_empty());

        let (winner, loser) = edges[pick.index(edges.len())];
        let mut cards: Vec<CardDefinition> = catalog.all().cloned().collect();
        cards[loser.raw() as usize].loses_to.retain(|id| *id != winner);

        prop_assert!(CardCatalog::new(cards).is_err());
    }

    /// Property: the score never goes down, only resolved rounds count,
    /// and ignored or dropped selections leave the score untouched.
    #[test]
    fn prop_score_bookkeeping(
        script in prop::collection::vec(0u32..4, 1..16),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut ctl = RoundController::new(
            CardCatalog::standard().unwrap(),
            ScriptedPicker::new(script.into_iter().map(CardId::new)),
            NullFeedback,
            DuelConfig::default(),
        )
        .unwrap();
        let mut resolved = 0u32;
        let mut expected = Score::default();

        for op in ops {
            let before = ctl.score();
            let state_before = ctl.state().clone();

            match op {
                Op::Start => { ctl.start_round(); }
                Op::Select(id) => match ctl.select_card(CardId::new(id)) {
                    Selection::Resolved(result) => {
                        resolved += 1;
                        match result.outcome {
                            DuelOutcome::Win => expected.wins += 1,
                            DuelOutcome::Lose => expected.losses += 1,
                            DuelOutcome::Draw => {}
                        }
                    }
                    Selection::Dropped(_) => {
                        prop_assert_eq!(ctl.score(), before);
                        prop_assert_eq!(ctl.phase(), RoundPhase::Idle);
                    }
                    Selection::Ignored => {
                        prop_assert_eq!(ctl.score(), before);
                        prop_assert_eq!(ctl.state(), &state_before);
                    }
                },
                Op::Acknowledge => { ctl.acknowledge(); }
                Op::PromptRestart => { ctl.prompt_restart(); }
                Op::Hover(id) => { ctl.inspect_card(CardId::new(id)); }
            }

            let after = ctl.score();
            prop_assert!(after.wins >= before.wins);
            prop_assert!(after.losses >= before.losses);
            prop_assert_eq!(after, expected);
            prop_assert_eq!(ctl.tracker().rounds_recorded(), resolved);
            prop_assert_eq!(after.wins + after.losses + ctl.tracker().draws(), resolved);
        }
    }
}
