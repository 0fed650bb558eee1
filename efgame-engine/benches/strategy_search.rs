use criterion::{black_box, criterion_group, criterion_main, Criterion};

use efgame_engine::algorithms::game_strategy::find_duplicator_strategy;
use efgame_engine::game_structure::{Graph, RawGraph};

fn teaching_graphs() -> (Graph, Graph) {
    let g1 = Graph::symmetric_closure(
        &RawGraph::new()
            .declare(1, vec![2, 3])
            .declare(2, vec![3, 4, 5])
            .declare(3, vec![4, 5])
            .declare(4, vec![5]),
    );
    let g2 = Graph::symmetric_closure(
        &RawGraph::new()
            .declare("a", vec!["b", "c"])
            .declare("b", vec!["c", "d", "e"])
            .declare("c", Vec::<&str>::new())
            .declare("d", vec!["e"]),
    );
    (g1, g2)
}

fn criterion_benchmark(c: &mut Criterion) {
    let (g1, g2) = teaching_graphs();

    c.bench_function("teaching-graphs-2-rounds", |b| {
        b.iter(|| find_duplicator_strategy(black_box(2), &g1, &g2, &[]))
    });

    // The losing instance; the search exhausts every branch before giving up
    c.bench_function("teaching-graphs-3-rounds", |b| {
        b.iter(|| find_duplicator_strategy(black_box(3), &g1, &g2, &[]))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
