criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_animal_window,
        evaluating_fruit_window,
        drawing_through_deck,
        revealing_running_session,
        parsing_asset_catalog,
}

const ASSET: &str = include_str!("../asset.json");

fn evaluating_animal_window(c: &mut criterion::Criterion) {
    let rule = Rule::default();
    let history = (0..64)
        .map(|i| Card::fruit("f", [(i % 4, 1)]))
        .chain(std::iter::once(Card::animal("a", 7)))
        .collect::<Vec<_>>();
    c.bench_function("evaluate a window holding an Animal", |b| {
        b.iter(|| Verdict::evaluate(&history, &rule))
    });
}

fn evaluating_fruit_window(c: &mut criterion::Criterion) {
    let rule = Rule::default();
    let history = (0..64)
        .map(|i| Card::fruit("f", [(i % 4, 1), ((i + 1) % 4, 2)]))
        .collect::<Vec<_>>();
    c.bench_function("evaluate a window of Fruit cards", |b| {
        b.iter(|| Verdict::evaluate(&history, &rule))
    });
}

fn drawing_through_deck(c: &mut criterion::Criterion) {
    let catalog = Catalog::try_from(ASSET).unwrap();
    let mut deck = Deck::new(catalog.templates());
    c.bench_function("draw a full Deck with reshuffle", |b| {
        b.iter(|| (0..deck.len() + 1).map(|_| deck.draw()).count())
    });
}

fn revealing_running_session(c: &mut criterion::Criterion) {
    let rule = Rule::default();
    let catalog = Catalog::try_from(ASSET).unwrap();
    c.bench_function("start a Session and reveal 32 cards", |b| {
        b.iter(|| {
            let mut session = Session::new(Deck::new(catalog.templates()));
            session.apply(Signal::from(Action::Initiate), &rule, &catalog);
            session.apply(Signal::from(Action::Start), &rule, &catalog);
            let reveals = (0..32)
                .map(|_| session.apply(Signal::Tick(session.timer().epoch()), &rule, &catalog))
                .filter(|effects| !effects.is_empty())
                .count();
            assert_eq!(session.revealed().len(), 33);
            criterion::black_box(reveals)
        })
    });
}

fn parsing_asset_catalog(c: &mut criterion::Criterion) {
    c.bench_function("parse the asset Catalog", |b| {
        b.iter(|| Catalog::try_from(ASSET).unwrap())
    });
}

use halligalli::cards::*;
use halligalli::gameroom::*;
