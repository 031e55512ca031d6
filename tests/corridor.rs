//! End-to-end searches over small corridor worlds.
//!
//! States are integer positions; actions step left/right and refuse to leave
//! the corridor (the caller's action logic is what keeps the state space
//! finite). Keying uses the serialized `position` field unless a test says
//! otherwise.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use serde_json::json;

use pathwise::{solve_blocking, Action, ActionError, SearchConfig, SearchError, Strategy};

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Pos {
    position: i64,
}

fn at(position: i64) -> Pos {
    Pos { position }
}

/// Step right, refusing to pass `hi`.
fn right(hi: i64) -> Action<Pos> {
    Action::new("right", move |s: &Pos| {
        if s.position + 1 > hi {
            None
        } else {
            Some(at(s.position + 1))
        }
    })
}

/// Step left, refusing to pass `lo`.
fn left(lo: i64) -> Action<Pos> {
    Action::new("left", move |s: &Pos| {
        if s.position - 1 < lo {
            None
        } else {
            Some(at(s.position - 1))
        }
    })
}

fn positions(solution: &pathwise::Solution<Pos>) -> Vec<i64> {
    solution.path.iter().map(|step| step.data.position).collect()
}

#[test]
fn bfs_walks_the_corridor_to_the_goal() {
    let solution = solve_blocking(
        SearchConfig::new()
            .initial(at(1))
            .goal(at(4))
            .key_field("position")
            .action(right(4))
            .action(left(1))
            .strategy(Strategy::BreadthFirst),
    )
    .unwrap();

    assert_eq!(positions(&solution), vec![1, 2, 3, 4]);
    assert_eq!(solution.path[0].action, None, "root step carries no action");
    assert!(solution.path[1..]
        .iter()
        .all(|step| step.action.as_deref() == Some("right")));
    assert_eq!(solution.stats.depth, 3);
    assert!((solution.stats.cost - 3.0).abs() < f64::EPSILON);
    assert_eq!(solution.stats.nodes, 3, "closed 1, 2 and 3; the goal is excluded");
}

#[test]
fn bfs_path_is_minimal_depth_even_with_detours_available() {
    let solution = solve_blocking(
        SearchConfig::new()
            .initial(at(1))
            .goal(at(4))
            .key_field("position")
            .action(right(4))
            .action(left(0))
            .strategy(Strategy::BreadthFirst),
    )
    .unwrap();

    assert_eq!(positions(&solution), vec![1, 2, 3, 4]);
    assert_eq!(solution.stats.depth, 3, "no shorter path exists");
}

#[test]
fn equal_depth_goals_are_won_by_the_later_enqueued_sibling() {
    // Both goals sit two steps from the initial state. The right-hand one is
    // enqueued after the left-hand one at equal priority, so it is dequeued
    // first under the frontier's tie-break.
    let solution = solve_blocking(
        SearchConfig::new()
            .initial(at(2))
            .goal(at(0))
            .goal(at(4))
            .key_field("position")
            .action(right(4))
            .action(left(0))
            .strategy(Strategy::BreadthFirst),
    )
    .unwrap();

    assert_eq!(positions(&solution).last(), Some(&4));
    assert_eq!(solution.stats.nodes, 3);
}

#[test]
fn uniform_cost_selects_the_cheaper_of_two_goals() {
    let solution = solve_blocking(
        SearchConfig::new()
            .initial(at(0))
            .goal(at(2))
            .goal(at(4))
            .key_field("position")
            .action(right(4))
            .action(left(0))
            .strategy(Strategy::UniformCost),
    )
    .unwrap();

    assert_eq!(positions(&solution).last(), Some(&2), "lower-cost goal wins");
    assert!((solution.stats.cost - 2.0).abs() < f64::EPSILON);
}

#[test]
fn uniform_cost_prefers_cheap_actions_over_long_jumps() {
    let walk = Action::new("walk", |s: &Pos| {
        if s.position < 4 {
            Some(at(s.position + 1))
        } else {
            None
        }
    });
    let jump = Action::new("jump", |s: &Pos| {
        if s.position + 2 <= 4 {
            Some(at(s.position + 2))
        } else {
            None
        }
    })
    .with_cost(5.0);

    let solution = solve_blocking(
        SearchConfig::new()
            .initial(at(0))
            .goal(at(4))
            .key_field("position")
            .action(walk)
            .action(jump)
            .strategy(Strategy::UniformCost),
    )
    .unwrap();

    assert!((solution.stats.cost - 4.0).abs() < f64::EPSILON);
    assert!(solution.path[1..]
        .iter()
        .all(|step| step.action.as_deref() == Some("walk")));
}

#[test]
fn astar_with_admissible_heuristic_finds_the_minimal_cost_path() {
    let solution = solve_blocking(
        SearchConfig::new()
            .initial(at(1))
            .goal(at(4))
            .key_field("position")
            .action(right(4))
            .action(left(0))
            .strategy(Strategy::AStar)
            .heuristic(|s: &Pos| (4 - s.position) as f64),
    )
    .unwrap();

    assert_eq!(positions(&solution), vec![1, 2, 3, 4]);
    assert!((solution.stats.cost - 3.0).abs() < f64::EPSILON);
    assert_eq!(
        solution.stats.nodes, 3,
        "the heuristic keeps the left detour unexpanded"
    );
}

/// Two goals, heuristic aimed at the farther one: weight 0 must reproduce
/// uniform-cost, a huge weight must reproduce greedy best-first.
fn two_goal_config(strategy: Strategy) -> SearchConfig<Pos> {
    SearchConfig::new()
        .initial(at(3))
        .goal(at(2))
        .goal(at(6))
        .key_field("position")
        .action(right(8))
        .action(left(0))
        .strategy(strategy)
        .heuristic(|s: &Pos| (6 - s.position).abs() as f64)
}

#[test]
fn weighted_astar_with_weight_zero_matches_uniform_cost() {
    let uniform = solve_blocking(two_goal_config(Strategy::UniformCost)).unwrap();
    let weighted = solve_blocking(two_goal_config(Strategy::WeightedAStar).weight(0.0)).unwrap();

    assert_eq!(positions(&uniform), positions(&weighted));
    assert_eq!(uniform.stats.nodes, weighted.stats.nodes);
    assert!((uniform.stats.cost - weighted.stats.cost).abs() < f64::EPSILON);
    assert_eq!(positions(&uniform).last(), Some(&2), "nearest goal by cost");
}

#[test]
fn weighted_astar_with_huge_weight_matches_greedy_goal_choice() {
    let greedy = solve_blocking(two_goal_config(Strategy::GreedyBestFirst)).unwrap();
    let weighted = solve_blocking(two_goal_config(Strategy::WeightedAStar).weight(1e6)).unwrap();

    assert_eq!(positions(&greedy).last(), Some(&6), "heuristic pulls to 6");
    assert_eq!(positions(&greedy).last(), positions(&weighted).last());
}

#[test]
fn dfs_reaches_the_goal_without_optimality_guarantees() {
    let solution = solve_blocking(
        SearchConfig::new()
            .initial(at(1))
            .goal(at(4))
            .key_field("position")
            .action(right(4))
            .action(left(0))
            .strategy(Strategy::DepthFirst),
    )
    .unwrap();

    let found = positions(&solution);
    assert_eq!(found.first(), Some(&1));
    assert_eq!(found.last(), Some(&4));
    for pair in found.windows(2) {
        assert_eq!((pair[1] - pair[0]).abs(), 1, "consecutive corridor steps");
    }
}

#[test]
fn random_search_terminates_on_a_finite_corridor() {
    let solution = solve_blocking(
        SearchConfig::new()
            .initial(at(1))
            .goal(at(4))
            .key_field("position")
            .action(right(4))
            .action(left(1))
            .strategy(Strategy::Random),
    )
    .unwrap();

    let found = positions(&solution);
    assert_eq!(found.first(), Some(&1));
    assert_eq!(found.last(), Some(&4));
}

#[test]
fn actions_may_return_several_states_at_once() {
    let both = Action::new("roam", |s: &Pos| {
        [s.position - 1, s.position + 1]
            .into_iter()
            .filter(|p| (0..=4).contains(p))
            .map(at)
            .collect::<Vec<_>>()
    });

    let solution = solve_blocking(
        SearchConfig::new()
            .initial(at(0))
            .goal(at(4))
            .key_field("position")
            .action(both)
            .strategy(Strategy::BreadthFirst),
    )
    .unwrap();

    assert_eq!(positions(&solution), vec![0, 1, 2, 3, 4]);
    assert_eq!(solution.stats.nodes, 4);
}

#[test]
fn pending_computations_feed_the_search() {
    let crawl = Action::new_async("", |s: Pos| async move {
        Ok::<_, ActionError>(if s.position < 3 {
            Some(at(s.position + 1))
        } else {
            None
        })
    });

    let solution = solve_blocking(
        SearchConfig::new()
            .initial(at(0))
            .goal(at(3))
            .key_field("position")
            .action(crawl)
            .strategy(Strategy::BreadthFirst),
    )
    .unwrap();

    assert_eq!(positions(&solution), vec![0, 1, 2, 3]);
    assert_eq!(
        solution.path.last().unwrap().action.as_deref(),
        Some("expand"),
        "unnamed actions get the default name"
    );
    assert_eq!(solution.stats.nodes, 3);
}

#[test]
fn generated_state_missing_the_key_field_fails_the_search() {
    let config = SearchConfig::new()
        .initial(json!({ "position": 0 }))
        .goal(json!({ "position": 9 }))
        .key_field("position")
        .action(Action::new("drift", |_: &serde_json::Value| {
            json!({ "notPosition": 3 })
        }))
        .strategy(Strategy::BreadthFirst);

    let err = solve_blocking(config).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("position"));
}

#[test]
fn weighted_astar_without_weight_fails_before_any_expansion() {
    let invocations = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&invocations);
    let config = SearchConfig::new()
        .initial(at(0))
        .goal(at(4))
        .key_field("position")
        .action(Action::new("count", move |s: &Pos| {
            counter.set(counter.get() + 1);
            Some(at(s.position + 1))
        }))
        .strategy(Strategy::WeightedAStar)
        .heuristic(|s: &Pos| (4 - s.position) as f64);

    let err = solve_blocking(config).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("weight"));
    assert_eq!(invocations.get(), 0);
}

#[test]
fn weighted_astar_rejects_a_non_numeric_weight() {
    let config = two_goal_config(Strategy::WeightedAStar).weight(f64::NAN);
    let err = solve_blocking(config).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("number"));
}

#[test]
fn unreachable_goal_is_reported_as_such() {
    let outcome = solve_blocking(
        SearchConfig::new()
            .initial(at(0))
            .goal(at(10))
            .key_field("position")
            .action(right(4))
            .strategy(Strategy::UniformCost),
    );
    assert!(matches!(outcome, Err(SearchError::GoalUnreachable)));
}
