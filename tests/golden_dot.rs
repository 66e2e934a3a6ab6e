#[path = "common/mod.rs"]
mod common;
use castgraph::build_graph;
use castgraph::dot::render_dot;
use common::{assert_snapshot, small_cast};

#[test]
fn render_dot_matches_golden() {
    let (actors, mut movies) = small_cast();
    build_graph(&actors, &mut movies);

    let actual = render_dot(&movies).expect("DOT rendering should succeed");
    assert_snapshot("graphs/small.dot", &actual);
}
