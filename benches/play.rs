use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memory_match::cards::Deck;
use memory_match::core::{classic_faces, GameConfig, GameRng};
use memory_match::session::GameSession;

fn bench_shuffle(c: &mut Criterion) {
    let deck = Deck::build(&classic_faces()).unwrap();
    let mut rng = GameRng::new(42);
    c.bench_function("shuffle_classic_deck", |b| {
        b.iter(|| black_box(deck.shuffled(&mut rng)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut rng = GameRng::new(7);
    c.bench_function("play_full_session", |b| {
        b.iter(|| {
            let mut session = GameSession::open(config.clone(), &mut rng).unwrap();
            let faces = session.state().deck.faces();
            for (i, face) in faces.iter().enumerate() {
                if session.state().is_face_up(i) {
                    continue;
                }
                let partner = (i + 1..faces.len()).find(|&j| faces[j] == *face).unwrap();
                session.on_card_click(i);
                session.on_card_click(partner);
                session.advance(Duration::from_secs(1));
            }
            black_box(session.summary())
        })
    });
}

criterion_group!(benches, bench_shuffle, bench_full_game);
criterion_main!(benches);
