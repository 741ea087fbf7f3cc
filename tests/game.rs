//! Game integration tests.

use acers::{
    Card, DealError, Decision, Event, Game, GameOptions, GameState, InvalidDecision, JoinError,
    PendingTurn, PlayerId, Rank, StepError, Suit, build_deck,
};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank).unwrap()
}

fn scripted_game(hands: Vec<Vec<Card>>) -> (Game, Vec<PlayerId>) {
    let game = Game::new(GameOptions::default().with_shuffle(false), 0);
    let ids = (0..hands.len())
        .map(|seat| game.join(format!("P{seat}")).unwrap())
        .collect();
    game.deal_hands(hands).unwrap();
    (game, ids)
}

fn pending(game: &Game) -> PendingTurn {
    game.pending_turn().expect("a turn should be pending")
}

fn sorted_ids(cards: &[Card]) -> Vec<u8> {
    let mut ids: Vec<u8> = cards.iter().map(|card| card.id()).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn two_player_game_ends_with_trick_winner_losing() {
    let (game, ids) = scripted_game(vec![
        vec![card(Suit::Spades, Rank::Two), Card::ACE_OF_SPADES],
        vec![card(Suit::Spades, Rank::Three), card(Suit::Spades, Rank::Four)],
    ]);
    let (a, b) = (ids[0], ids[1]);

    let turn = pending(&game);
    assert_eq!(turn.player, a);
    assert_eq!(
        turn.legal,
        vec![
            Decision::Play(Card::ACE_OF_SPADES),
            Decision::Play(card(Suit::Spades, Rank::Two)),
        ]
    );
    assert!(game.step(Decision::Play(Card::ACE_OF_SPADES)).unwrap().is_empty());
    assert_eq!(game.led_suit(), Some(Suit::Spades));

    let turn = pending(&game);
    assert_eq!(turn.player, b);
    assert_eq!(
        turn.legal,
        vec![
            Decision::Play(card(Suit::Spades, Rank::Four)),
            Decision::Play(card(Suit::Spades, Rank::Three)),
        ]
    );
    let events = game
        .step(Decision::Play(card(Suit::Spades, Rank::Four)))
        .unwrap();
    assert!(events.is_empty());

    // The Ace held the trick, so A leads again and the pile is discarded.
    assert_eq!(game.active_players(), vec![a, b]);
    assert_eq!(game.discard_len(), 2);
    assert!(game.pile().is_empty());
    assert_eq!(game.led_suit(), None);

    assert!(
        game.step(Decision::Play(card(Suit::Spades, Rank::Two)))
            .unwrap()
            .is_empty()
    );
    let events = game
        .step(Decision::Play(card(Suit::Spades, Rank::Three)))
        .unwrap();
    assert_eq!(events, vec![Event::Winners(vec![a]), Event::Loser(b)]);

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.loser(), Some(b));
    assert_eq!(game.winners(), vec![a]);
    assert!(game.pending_turn().is_none());
    assert_eq!(
        game.step(Decision::Play(Card::ACE_OF_SPADES)).unwrap_err(),
        StepError::InvalidState
    );
}

#[test]
fn run_delivers_events_in_order() {
    let (game, ids) = scripted_game(vec![
        vec![card(Suit::Spades, Rank::Two), Card::ACE_OF_SPADES],
        vec![card(Suit::Spades, Rank::Three), card(Suit::Spades, Rank::Four)],
    ]);

    let mut events: Vec<Event> = Vec::new();
    let mut first_legal = |_: &Game, turn: &PendingTurn| turn.legal[0];
    let loser = game.run(&mut first_legal, &mut events).unwrap();

    assert_eq!(loser, ids[1]);
    assert_eq!(
        events,
        vec![Event::Winners(vec![ids[0]]), Event::Loser(ids[1])]
    );
}

#[test]
fn run_before_deal_is_an_error() {
    let game = Game::new(GameOptions::default(), 1);
    game.join("A").unwrap();
    game.join("B").unwrap();

    let mut events: Vec<Event> = Vec::new();
    let mut first_legal = |_: &Game, turn: &PendingTurn| turn.legal[0];
    assert_eq!(
        game.run(&mut first_legal, &mut events).unwrap_err(),
        StepError::InvalidState
    );
    assert_eq!(
        game.step(Decision::Play(Card::ACE_OF_SPADES)).unwrap_err(),
        StepError::InvalidState
    );
}

#[test]
fn accepted_offer_transfers_hand_and_keeps_turn() {
    let (game, ids) = scripted_game(vec![
        vec![Card::ACE_OF_SPADES, card(Suit::Hearts, Rank::Five)],
        vec![card(Suit::Spades, Rank::King), card(Suit::Diamonds, Rank::Two)],
        vec![card(Suit::Clubs, Rank::Three), card(Suit::Clubs, Rank::Four)],
    ]);
    let (a, b, c) = (ids[0], ids[1], ids[2]);

    game.step(Decision::Play(Card::ACE_OF_SPADES)).unwrap();
    assert_eq!(pending(&game).player, b);

    assert!(game.step(Decision::Offer(c)).unwrap().is_empty());
    assert_eq!(
        pending(&game).legal,
        vec![
            Decision::Play(card(Suit::Spades, Rank::King)),
            Decision::Accept(c),
        ]
    );

    let events = game.step(Decision::Accept(c)).unwrap();
    assert_eq!(events, vec![Event::Winners(vec![c])]);
    assert_eq!(game.active_players(), vec![a, b]);
    assert!(game.hand(c).unwrap().is_empty());
    assert_eq!(game.hand(b).unwrap().len(), 4);
    assert_eq!(game.winners(), vec![c]);

    // Still B's turn, and the accepted offer is gone.
    let turn = pending(&game);
    assert_eq!(turn.player, b);
    assert_eq!(
        turn.legal,
        vec![Decision::Play(card(Suit::Spades, Rank::King))]
    );

    // C is out, so the trick ends after B.
    let events = game
        .step(Decision::Play(card(Suit::Spades, Rank::King)))
        .unwrap();
    assert!(events.is_empty());
    assert_eq!(game.active_players(), vec![a, b]);
    assert_eq!(pending(&game).player, a);
    assert_eq!(game.discard_len(), 2);
}

#[test]
fn accepted_hand_keeps_the_turns_plays_and_cuts() {
    let (game, ids) = scripted_game(vec![
        vec![Card::ACE_OF_SPADES, card(Suit::Hearts, Rank::Five)],
        vec![card(Suit::Diamonds, Rank::Two), card(Suit::Diamonds, Rank::Three)],
        vec![card(Suit::Spades, Rank::Four), card(Suit::Clubs, Rank::Four)],
    ]);
    let (a, b, c) = (ids[0], ids[1], ids[2]);

    game.step(Decision::Play(Card::ACE_OF_SPADES)).unwrap();
    let cuts = vec![
        Decision::Cut(card(Suit::Diamonds, Rank::Three)),
        Decision::Cut(card(Suit::Diamonds, Rank::Two)),
    ];
    assert_eq!(pending(&game).legal, cuts);

    game.step(Decision::Offer(c)).unwrap();
    game.step(Decision::Accept(c)).unwrap();

    // B now holds a spade, but the turn's choices were fixed when it began.
    let turn = pending(&game);
    assert_eq!(turn.player, b);
    assert_eq!(turn.legal, cuts);
    assert_eq!(
        game.step(Decision::Play(card(Suit::Spades, Rank::Four)))
            .unwrap(),
        vec![Event::Invalid(InvalidDecision::NotLegal)]
    );

    let events = game
        .step(Decision::Cut(card(Suit::Diamonds, Rank::Two)))
        .unwrap();
    assert!(events.is_empty());

    let a_hand = game.hand(a).unwrap();
    assert_eq!(a_hand.len(), 3);
    assert!(a_hand.contains(card(Suit::Diamonds, Rank::Two)));
    assert!(a_hand.contains(Card::ACE_OF_SPADES));
    assert_eq!(game.hand(b).unwrap().len(), 3);
    assert_eq!(game.active_players(), vec![a, b]);
    assert_eq!(pending(&game).player, a);
}

#[test]
fn taker_inherits_best_play_of_accepted_offerer() {
    let (game, ids) = scripted_game(vec![
        vec![Card::ACE_OF_SPADES, card(Suit::Hearts, Rank::Seven)],
        vec![card(Suit::Spades, Rank::Two), card(Suit::Hearts, Rank::Three)],
        vec![card(Suit::Diamonds, Rank::Nine), card(Suit::Diamonds, Rank::Eight)],
    ]);
    let (a, b, c) = (ids[0], ids[1], ids[2]);

    game.step(Decision::Play(Card::ACE_OF_SPADES)).unwrap();
    game.step(Decision::Play(card(Suit::Spades, Rank::Two)))
        .unwrap();
    assert_eq!(pending(&game).player, c);

    game.step(Decision::Offer(a)).unwrap();
    let events = game.step(Decision::Accept(a)).unwrap();
    assert_eq!(events, vec![Event::Winners(vec![a])]);
    assert_eq!(game.best_play().unwrap().player, c);
    assert_eq!(game.best_play().unwrap().card, Card::ACE_OF_SPADES);

    // C is void in spades and cuts, picking up the pile as holder.
    let events = game
        .step(Decision::Cut(card(Suit::Hearts, Rank::Seven)))
        .unwrap();
    assert!(events.is_empty());
    assert_eq!(game.hand(c).unwrap().len(), 5);
    assert_eq!(game.active_players(), vec![c, b]);
    assert_eq!(pending(&game).player, c);
}

#[test]
fn cut_hands_pile_to_best_holder_and_ends_trick() {
    let (game, ids) = scripted_game(vec![
        vec![Card::ACE_OF_SPADES, card(Suit::Hearts, Rank::Two)],
        vec![card(Suit::Diamonds, Rank::Five), card(Suit::Diamonds, Rank::Six)],
        vec![card(Suit::Spades, Rank::Three), card(Suit::Hearts, Rank::Four)],
    ]);
    let (a, b, c) = (ids[0], ids[1], ids[2]);

    game.step(Decision::Play(Card::ACE_OF_SPADES)).unwrap();

    let turn = pending(&game);
    assert_eq!(turn.player, b);
    assert_eq!(
        turn.legal,
        vec![
            Decision::Cut(card(Suit::Diamonds, Rank::Six)),
            Decision::Cut(card(Suit::Diamonds, Rank::Five)),
        ]
    );

    let plays = game.pile().len() + 1;
    let before = game.hand(a).unwrap().len();
    let events = game
        .step(Decision::Cut(card(Suit::Diamonds, Rank::Five)))
        .unwrap();
    assert!(events.is_empty());

    // C never got a turn; A picked up both cards and leads again.
    assert_eq!(game.hand(a).unwrap().len(), before + plays);
    assert_eq!(game.hand(c).unwrap().len(), 2);
    assert_eq!(game.discard_len(), 0);
    assert_eq!(game.active_players(), vec![a, b, c]);
    assert_eq!(pending(&game).player, a);
    assert_eq!(
        game.hand(a).unwrap().cards(),
        &[
            Card::ACE_OF_SPADES,
            card(Suit::Hearts, Rank::Two),
            card(Suit::Diamonds, Rank::Five),
        ]
    );
}

#[test]
fn cutter_who_empties_their_hand_wins() {
    let (game, ids) = scripted_game(vec![
        vec![Card::ACE_OF_SPADES, card(Suit::Spades, Rank::King)],
        vec![card(Suit::Hearts, Rank::Two)],
        vec![card(Suit::Spades, Rank::Three), card(Suit::Clubs, Rank::Four)],
    ]);
    let (a, b, c) = (ids[0], ids[1], ids[2]);

    game.step(Decision::Play(Card::ACE_OF_SPADES)).unwrap();
    let events = game
        .step(Decision::Cut(card(Suit::Hearts, Rank::Two)))
        .unwrap();

    assert_eq!(events, vec![Event::Winners(vec![b])]);
    assert_eq!(game.active_players(), vec![a, c]);
    assert_eq!(game.winners(), vec![b]);
}

#[test]
fn self_and_duplicate_offers_are_rejected_without_changes() {
    let (game, ids) = scripted_game(vec![
        vec![Card::ACE_OF_SPADES, card(Suit::Hearts, Rank::Five)],
        vec![card(Suit::Spades, Rank::King), card(Suit::Diamonds, Rank::Two)],
        vec![card(Suit::Clubs, Rank::Three), card(Suit::Clubs, Rank::Four)],
    ]);
    let (a, b, c) = (ids[0], ids[1], ids[2]);
    game.step(Decision::Play(Card::ACE_OF_SPADES)).unwrap();

    let hands_before: Vec<_> = ids.iter().map(|&id| game.hand(id)).collect();

    assert_eq!(
        game.step(Decision::Offer(b)).unwrap(),
        vec![Event::Invalid(InvalidDecision::SelfOffer)]
    );
    assert!(game.step(Decision::Offer(c)).unwrap().is_empty());
    assert_eq!(
        game.step(Decision::Offer(c)).unwrap(),
        vec![Event::Invalid(InvalidDecision::DuplicateOffer)]
    );
    assert_eq!(
        game.step(Decision::Offer(42)).unwrap(),
        vec![Event::Invalid(InvalidDecision::UnknownPlayer)]
    );
    assert_eq!(
        game.step(Decision::Accept(a)).unwrap(),
        vec![Event::Invalid(InvalidDecision::NoSuchOffer)]
    );

    let hands_after: Vec<_> = ids.iter().map(|&id| game.hand(id)).collect();
    assert_eq!(hands_before, hands_after);
    assert_eq!(game.active_players(), vec![a, b, c]);
    assert_eq!(pending(&game).player, b);
    assert!(game.winners().is_empty());
}

#[test]
fn offers_expire_when_the_turn_passes() {
    let (game, ids) = scripted_game(vec![
        vec![Card::ACE_OF_SPADES, card(Suit::Hearts, Rank::Five)],
        vec![card(Suit::Spades, Rank::King), card(Suit::Diamonds, Rank::Two)],
        vec![card(Suit::Spades, Rank::Three), card(Suit::Clubs, Rank::Four)],
    ]);
    let (a, c) = (ids[0], ids[2]);
    game.step(Decision::Play(Card::ACE_OF_SPADES)).unwrap();

    game.step(Decision::Offer(c)).unwrap();
    game.step(Decision::Play(card(Suit::Spades, Rank::King)))
        .unwrap();

    assert_eq!(pending(&game).player, c);
    assert_eq!(
        game.step(Decision::Accept(c)).unwrap(),
        vec![Event::Invalid(InvalidDecision::NoSuchOffer)]
    );
    assert_eq!(
        game.step(Decision::Offer(a)).unwrap(),
        Vec::<Event>::new()
    );
    assert_eq!(
        pending(&game).legal.last(),
        Some(&Decision::Accept(a))
    );
}

#[test]
fn repeated_illegal_play_is_rejected_each_time() {
    let (game, _) = scripted_game(vec![
        vec![Card::ACE_OF_SPADES, card(Suit::Hearts, Rank::Five)],
        vec![card(Suit::Spades, Rank::King), card(Suit::Diamonds, Rank::Two)],
    ]);
    game.step(Decision::Play(Card::ACE_OF_SPADES)).unwrap();

    let turn = pending(&game);
    let hand = game.hand(turn.player);

    // B holds a spade, so neither an off-suit play nor a cut is allowed.
    for decision in [
        Decision::Play(card(Suit::Diamonds, Rank::Two)),
        Decision::Play(card(Suit::Diamonds, Rank::Two)),
        Decision::Cut(card(Suit::Diamonds, Rank::Two)),
        Decision::Play(card(Suit::Clubs, Rank::Ace)),
    ] {
        assert_eq!(
            game.step(decision).unwrap(),
            vec![Event::Invalid(InvalidDecision::NotLegal)]
        );
        assert_eq!(pending(&game), turn);
        assert_eq!(game.hand(turn.player), hand);
        assert_eq!(game.pile().len(), 1);
    }
}

#[test]
fn deal_splits_the_pack_and_starts_with_ace_of_spades() {
    let game = Game::new(GameOptions::default(), 11);
    let ids: Vec<PlayerId> = ["A", "B", "C", "D", "E"]
        .into_iter()
        .map(|name| game.join(name).unwrap())
        .collect();
    game.deal().unwrap();

    let sizes: Vec<usize> = ids
        .iter()
        .map(|&id| game.hand(id).unwrap().len())
        .collect();
    assert_eq!(sizes, vec![11, 11, 10, 10, 10]);

    let mut dealt: Vec<Card> = Vec::new();
    for &id in &ids {
        dealt.extend_from_slice(game.hand(id).unwrap().cards());
    }
    assert_eq!(sorted_ids(&dealt), sorted_ids(&build_deck()));

    let leader = pending(&game).player;
    assert!(game.hand(leader).unwrap().contains(Card::ACE_OF_SPADES));
    assert_eq!(game.active_players()[0], leader);
    assert_eq!(game.active_players().len(), ids.len());
}

#[test]
fn same_seed_deals_the_same_hands() {
    let deal = |seed| {
        let game = Game::new(GameOptions::default(), seed);
        game.join("A").unwrap();
        game.join("B").unwrap();
        game.deal().unwrap();
        (game.hand(0).unwrap(), game.hand(1).unwrap())
    };

    assert_eq!(deal(5), deal(5));
    assert_ne!(deal(5), deal(6));
}

#[test]
fn unshuffled_unsorted_deal_keeps_pack_order() {
    let options = GameOptions::default()
        .with_shuffle(false)
        .with_sort_hands(false);
    let game = Game::new(options, 0);
    game.join("A").unwrap();
    game.join("B").unwrap();
    game.deal().unwrap();

    let deck = build_deck();
    assert_eq!(game.hand(0).unwrap().cards(), &deck[..26]);
    assert_eq!(game.hand(1).unwrap().cards(), &deck[26..]);
    assert_eq!(pending(&game).player, 0);
}

#[test]
fn starting_card_option_picks_the_leader() {
    let two_of_clubs = card(Suit::Clubs, Rank::Two);
    let options = GameOptions::default()
        .with_shuffle(false)
        .with_starting_card(two_of_clubs);
    let game = Game::new(options, 0);
    game.join("A").unwrap();
    game.join("B").unwrap();
    game.deal().unwrap();

    // Clubs sit in the second half of the unshuffled pack.
    assert_eq!(pending(&game).player, 1);
    assert_eq!(game.active_players(), vec![1, 0]);
}

#[test]
fn deal_errors() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughPlayers);

    game.join("A").unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughPlayers);
    game.join("B").unwrap();

    assert_eq!(
        game.deal_hands(vec![vec![Card::ACE_OF_SPADES]]).unwrap_err(),
        DealError::HandCountMismatch
    );
    assert_eq!(
        game.deal_hands(vec![vec![Card::ACE_OF_SPADES], vec![]])
            .unwrap_err(),
        DealError::EmptyHand
    );
    assert_eq!(
        game.deal_hands(vec![
            vec![Card::ACE_OF_SPADES],
            vec![Card::ACE_OF_SPADES]
        ])
        .unwrap_err(),
        DealError::DuplicateCard
    );
    assert_eq!(
        game.deal_hands(vec![
            vec![card(Suit::Hearts, Rank::Ace)],
            vec![card(Suit::Clubs, Rank::Ace)]
        ])
        .unwrap_err(),
        DealError::NoStartingPlayer
    );
    assert_eq!(game.state(), GameState::WaitingForPlayers);

    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn seating_errors() {
    let game = Game::new(GameOptions::default().with_max_players(2), 1);
    let a = game.join("A").unwrap();
    game.join("B").unwrap();
    assert_eq!(game.join("C").unwrap_err(), JoinError::TableFull);

    game.leave(a).unwrap();
    assert_eq!(game.player_count(), 1);
    let c = game.join("C").unwrap();
    assert_eq!(game.player_name(c).as_deref(), Some("C"));
    assert_eq!(game.player_name(a), None);

    game.deal().unwrap();
    assert_eq!(game.join("D").unwrap_err(), JoinError::InvalidState);
    assert_eq!(game.leave(c).unwrap_err(), JoinError::InvalidState);
}

#[test]
fn recycled_ids_never_collide_with_seated_players() {
    let game = Game::new(GameOptions::default(), 3);
    let a = game.join("A").unwrap();
    for _ in 0..u8::MAX {
        let b = game.join("B").unwrap();
        game.leave(b).unwrap();
    }

    let c = game.join("C").unwrap();
    assert_ne!(c, a);
    assert_eq!(game.player_name(a).as_deref(), Some("A"));
    assert_eq!(game.player_name(c).as_deref(), Some("C"));

    game.deal().unwrap();
    assert_eq!(game.hand(a).unwrap().len(), 26);
    assert_eq!(game.hand(c).unwrap().len(), 26);
    assert_eq!(game.cards_in_play().len(), build_deck().len());
}

#[test]
fn reset_allows_a_new_deal() {
    let (game, ids) = scripted_game(vec![
        vec![card(Suit::Spades, Rank::Two), Card::ACE_OF_SPADES],
        vec![card(Suit::Spades, Rank::Three), card(Suit::Spades, Rank::Four)],
    ]);
    let mut events: Vec<Event> = Vec::new();
    let mut first_legal = |_: &Game, turn: &PendingTurn| turn.legal[0];
    game.run(&mut first_legal, &mut events).unwrap();

    game.reset();
    assert_eq!(game.state(), GameState::WaitingForPlayers);
    assert_eq!(game.loser(), None);
    assert!(game.winners().is_empty());
    assert!(game.hand(ids[0]).is_none());

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.cards_in_play().len(), 52);
}

/// Plays random legal moves, sometimes offering and accepting hands.
struct RandomController {
    rng: ChaCha8Rng,
}

impl acers::Controller for RandomController {
    fn decide(&mut self, game: &Game, turn: &PendingTurn) -> Decision {
        let others: Vec<PlayerId> = game
            .active_players()
            .into_iter()
            .filter(|&id| id != turn.player)
            .collect();

        if self.rng.random_bool(0.02) {
            if let Some(&from) = others.choose(&mut self.rng) {
                return Decision::Offer(from);
            }
        }

        *turn
            .legal
            .choose(&mut self.rng)
            .expect("a pending turn always has a legal decision")
    }
}

#[test]
fn random_games_conserve_cards_and_find_one_loser() {
    let deck = sorted_ids(&build_deck());

    for seed in 0..20_u64 {
        let game = Game::new(GameOptions::default(), seed);
        let players = 2 + (seed % 5) as usize;
        for seat in 0..players {
            game.join(format!("P{seat}")).unwrap();
        }
        game.deal().unwrap();

        let mut controller = RandomController {
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        let mut events: Vec<Event> = Vec::new();
        let mut steps = 0;

        while game.loser().is_none() {
            steps += 1;
            assert!(steps < 1_000_000, "game {seed} did not finish");

            let turn = pending(&game);
            assert!(!turn.legal.is_empty());
            let decision = acers::Controller::decide(&mut controller, &game, &turn);
            let produced = game.step(decision).unwrap();
            events.extend(produced);

            assert_eq!(sorted_ids(&game.cards_in_play()), deck);
        }

        let loser = game.loser().unwrap();
        assert_eq!(events.last(), Some(&Event::Loser(loser)));
        assert_eq!(
            events
                .iter()
                .filter(|event| matches!(event, Event::Loser(_)))
                .count(),
            1
        );

        let mut finished = game.winners();
        assert!(!finished.contains(&loser));
        finished.push(loser);
        finished.sort_unstable();
        let seated: Vec<PlayerId> = game.players().iter().map(|player| player.id).collect();
        assert_eq!(finished, seated);
    }
}
