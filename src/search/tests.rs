use rand::{Rng, SeedableRng, rngs::StdRng};

use super::*;
use crate::{
    mock::{MockNetworkParams, populate, user_name},
    network::SocialNetwork,
    sets::visited::VisitedSet,
};

fn setup_chain_with_isolated() -> SocialNetwork<&'static str> {
    let mut network = SocialNetwork::new();
    for user in ["A", "B", "C", "D", "E"] {
        network.add_user(user);
    }
    network.add_friendship(&"A", &"B");
    network.add_friendship(&"B", &"C");
    network.add_friendship(&"C", &"D");
    network
}

fn assert_valid_walk(network: &SocialNetwork<String>, path: &[String]) {
    for pair in path.windows(2) {
        assert!(
            network.neighbors_of(&pair[0]).contains(&pair[1]),
            "{} and {} are not friends",
            pair[0],
            pair[1]
        );
    }
    let distinct: VisitedSet<&String> = path.iter().collect();
    assert_eq!(distinct.len(), path.len(), "path repeats a user: {path:?}");
}

#[test]
fn test_chain_scenario() {
    let network = setup_chain_with_isolated();

    assert_eq!(
        bfs_shortest_path(&network, &"A", &"D").path,
        Some(vec!["A", "B", "C", "D"])
    );
    assert_eq!(dfs_explore(&network, &"A"), vec!["A", "B", "C", "D"]);
    assert!(!depth_limited_search(&network, &"A", &"D", 2).is_found());

    let deepening = IterativeDeepening::new().run(&network, &"A", &"D");
    assert_eq!(deepening.outcome.path, Some(vec!["A", "B", "C", "D"]));
    assert_eq!(deepening.depth, 3);
}

#[test]
fn test_isolated_user_scenario() {
    let network = setup_chain_with_isolated();

    assert!(!bfs_shortest_path(&network, &"A", &"E").is_found());
    assert_eq!(dfs_explore(&network, &"E"), vec!["E"]);
    assert!(
        !IterativeDeepening::bounded(8)
            .run(&network, &"A", &"E")
            .outcome
            .is_found()
    );
}

#[test]
fn test_zero_depth_succeeds_iff_start_is_target() {
    let network = populate(&MockNetworkParams::new(40, 80, Some(11)));
    for start in 0..40 {
        for target in 0..40 {
            let found =
                depth_limited_search(&network, &user_name(start), &user_name(target), 0).is_found();
            assert_eq!(found, start == target);
        }
    }
}

#[test]
fn test_bfs_and_deepening_agree_on_distance() {
    for seed in 0..8 {
        let network = populate(&MockNetworkParams::new(60, 90, Some(seed)));
        let mut rng = StdRng::seed_from_u64(seed + 100);

        for _ in 0..15 {
            let start = user_name(rng.random_range(0..60));
            let target = user_name(rng.random_range(0..60));

            let bfs = bfs_shortest_path(&network, &start, &target);
            let ids = IterativeDeepening::bounded(60).run(&network, &start, &target);

            assert_eq!(bfs.hops(), ids.outcome.hops(), "{start} -> {target}");
            if let Some(path) = &bfs.path {
                assert_valid_walk(&network, path);
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&target));
                assert_eq!(ids.depth, path.len() - 1);
            }
            if let Some(path) = &ids.outcome.path {
                assert_valid_walk(&network, path);
                assert_eq!(ids.outcome.steps, path.len());
            }
        }
    }
}

#[test]
fn test_bfs_is_never_longer_than_depth_limited() {
    for seed in 0..5 {
        let network = populate(&MockNetworkParams::new(50, 100, Some(seed)));
        for target in 1..50 {
            let (start, target) = (user_name(0), user_name(target));
            let bfs = bfs_shortest_path(&network, &start, &target);
            let dls = depth_limited_search(&network, &start, &target, 50);

            if let Some(hops) = dls.hops() {
                assert!(bfs.hops().is_some_and(|shortest| shortest <= hops));
            }
        }
    }
}

#[test]
fn test_dfs_covers_exactly_the_component() {
    let network = populate(&MockNetworkParams::new(80, 60, Some(5)));

    for start in 0..80 {
        let start = user_name(start);
        let reached = dfs_explore(&network, &start);
        let members: VisitedSet<&String> = reached.iter().collect();

        assert_eq!(reached.first(), Some(&start));
        assert_eq!(members.len(), reached.len(), "dfs reported a user twice");

        for other in 0..80 {
            let other = user_name(other);
            let connected = bfs_shortest_path(&network, &start, &other).is_found();
            assert_eq!(members.iter().any(|&m| *m == other), connected);
        }
    }
}

#[test]
fn test_searches_leave_the_network_untouched() {
    let network = populate(&MockNetworkParams::new(30, 60, Some(9)));
    let before = network.clone();

    let (start, target) = (user_name(0), user_name(29));
    bfs_shortest_path(&network, &start, &target);
    dfs_explore(&network, &start);
    depth_limited_search(&network, &start, &target, 4);
    IterativeDeepening::bounded(30).run(&network, &start, &target);

    for index in 0..30 {
        let user = user_name(index);
        assert_eq!(network.neighbors_of(&user), before.neighbors_of(&user));
    }
}

#[test]
fn test_concurrent_searches_share_one_network() {
    let network = populate(&MockNetworkParams::new(200, 600, Some(21)));
    let expected = bfs_shortest_path(&network, &user_name(0), &user_name(150));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| bfs_shortest_path(&network, &user_name(0), &user_name(150))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
