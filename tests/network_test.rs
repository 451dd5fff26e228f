use collabnet::network::*;
use collabnet::types::CreditedTrack;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// S1 (A, B), S2 (B, C) and a solo S3 by A
fn chain_tracks() -> Vec<CreditedTrack> {
    vec![
        CreditedTrack::new("S1", &["A", "B"]),
        CreditedTrack::new("S2", &["B", "C"]),
        CreditedTrack::new("S3", &["A"]),
    ]
}

fn scored<'a>(ranking: &'a [collabnet::types::RankedArtist], artist: &str) -> &'a collabnet::types::RankedArtist {
    ranking
        .iter()
        .find(|r| r.artist == artist)
        .expect("artist should be ranked")
}

#[test]
fn test_chain_edges_and_song_counts() {
    let graph = CollabGraph::from_tracks(&chain_tracks());

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);

    let ab = graph.collaboration("A", "B").unwrap();
    assert_eq!(ab.weight, 1);
    assert_eq!(ab.songs, vec!["S1"]);

    let bc = graph.collaboration("B", "C").unwrap();
    assert_eq!(bc.weight, 1);
    assert_eq!(bc.songs, vec!["S2"]);

    assert!(graph.collaboration("A", "C").is_none());

    assert_eq!(graph.song_count("A"), 2);
    assert_eq!(graph.song_count("B"), 2);
    assert_eq!(graph.song_count("C"), 1);
}

#[test]
fn test_chain_centrality() {
    let graph = CollabGraph::from_tracks(&chain_tracks());
    let ranking = rank(&graph, WeightMode::default());

    let b = scored(&ranking, "B");
    assert!(approx(b.degree_centrality, 1.0));
    assert!(approx(b.betweenness_centrality, 1.0));
    assert_eq!(b.number_of_collaborators, 2);

    for leaf in ["A", "C"] {
        let r = scored(&ranking, leaf);
        assert!(approx(r.degree_centrality, 0.5));
        assert!(approx(r.betweenness_centrality, 0.0));
        assert_eq!(r.number_of_collaborators, 1);
    }

    // The bridge comes first, the leaves keep their node order
    let order: Vec<&str> = ranking.iter().map(|r| r.artist.as_str()).collect();
    assert_eq!(order, vec!["B", "A", "C"]);
}

#[test]
fn test_weight_counts_shared_tracks() {
    let graph = CollabGraph::from_tracks(&[
        CreditedTrack::new("One", &["A", "B"]),
        CreditedTrack::new("Two", &["B", "A", "C"]),
        CreditedTrack::new("Three", &["A", "B"]),
    ]);

    let ab = graph.collaboration("A", "B").unwrap();
    assert_eq!(ab.weight, 3);
    assert_eq!(ab.songs, vec!["One", "Two", "Three"]);

    assert_eq!(graph.collaboration("A", "C").unwrap().weight, 1);
    assert_eq!(graph.collaboration("B", "C").unwrap().weight, 1);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_solo_and_empty_tracks_add_no_edges() {
    let graph = CollabGraph::from_tracks(&[
        CreditedTrack::new("Solo", &["A"]),
        CreditedTrack::new("Nobody", &[]),
        CreditedTrack::new("Solo again", &["A"]),
    ]);

    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.song_count("A"), 2);
    assert!(rank(&graph, WeightMode::Distance).is_empty());
}

#[test]
fn test_star_hub_bridges_every_pair() {
    let graph = CollabGraph::from_tracks(&[
        CreditedTrack::new("1", &["Hub", "X"]),
        CreditedTrack::new("2", &["Hub", "Y"]),
        CreditedTrack::new("3", &["Hub", "Z"]),
    ]);
    let ranking = rank(&graph, WeightMode::Distance);

    assert_eq!(ranking[0].artist, "Hub");
    assert!(approx(ranking[0].betweenness_centrality, 1.0));
    assert!(approx(ranking[0].degree_centrality, 1.0));
    assert_eq!(ranking[0].song_count, 3);

    for leaf in &ranking[1..] {
        assert!(approx(leaf.betweenness_centrality, 0.0));
        assert!(approx(leaf.degree_centrality, 1.0 / 3.0));
    }
}

#[test]
fn test_weight_mode_picks_route() {
    // A-B-D costs 1 + 1 under distance. A-C-D has heavy edges, which only
    // strength mode treats as short.
    let mut tracks = vec![
        CreditedTrack::new("ab", &["A", "B"]),
        CreditedTrack::new("bd", &["B", "D"]),
    ];
    for i in 0..4 {
        tracks.push(CreditedTrack::new(&format!("ac{i}"), &["A", "C"]));
        tracks.push(CreditedTrack::new(&format!("cd{i}"), &["C", "D"]));
    }
    let graph = CollabGraph::from_tracks(&tracks);

    let distance = rank(&graph, WeightMode::Distance);
    assert_eq!(distance[0].artist, "B");
    assert!(approx(scored(&distance, "C").betweenness_centrality, 0.0));

    let strength = rank(&graph, WeightMode::Strength);
    assert_eq!(strength[0].artist, "C");
    assert!(approx(scored(&strength, "B").betweenness_centrality, 0.0));
}

#[test]
fn test_ranking_is_sorted_and_deterministic() {
    let tracks = vec![
        CreditedTrack::new("t1", &["A", "B", "C"]),
        CreditedTrack::new("t2", &["C", "D"]),
        CreditedTrack::new("t3", &["D", "E"]),
        CreditedTrack::new("t4", &["E", "F", "A"]),
        CreditedTrack::new("t5", &["G", "H"]),
    ];
    let graph = CollabGraph::from_tracks(&tracks);
    let first = rank(&graph, WeightMode::Distance);
    let second = rank(&CollabGraph::from_tracks(&tracks), WeightMode::Distance);

    assert_eq!(first, second);
    assert_eq!(first.len(), graph.node_count());
    assert!(
        first
            .windows(2)
            .all(|w| w[0].betweenness_centrality >= w[1].betweenness_centrality)
    );

    let n = graph.node_count() as f64;
    for r in &first {
        assert!((0.0..=1.0).contains(&r.betweenness_centrality));
        assert!(approx(
            r.degree_centrality,
            r.number_of_collaborators as f64 / (n - 1.0)
        ));
        assert!(r.song_count >= 1);
    }
}

#[test]
fn test_top_by_degree() {
    let graph = CollabGraph::from_tracks(&[
        CreditedTrack::new("1", &["Hub", "X"]),
        CreditedTrack::new("2", &["Hub", "Y"]),
        CreditedTrack::new("3", &["Y", "Z"]),
    ]);
    let ranking = rank(&graph, WeightMode::Distance);
    let top = top_by_degree(&ranking, 2);

    assert_eq!(top.len(), 2);
    assert!(top[0].degree_centrality >= top[1].degree_centrality);
    assert!(top.iter().all(|r| r.artist != "X" && r.artist != "Z"));
}

#[test]
fn test_layout_covers_every_node() {
    let graph = CollabGraph::from_tracks(&chain_tracks());
    let config = LayoutConfig {
        iterations: 50,
        ..LayoutConfig::default()
    };
    let positions = spring_layout(&graph, &config);

    assert_eq!(positions.len(), graph.node_count());
    assert!(
        positions
            .iter()
            .all(|(x, y)| x.is_finite() && y.is_finite() && x.abs() <= 1.0 + 1e-9 && y.abs() <= 1.0 + 1e-9)
    );
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_repeated_credit_in_one_track_counts_once() {
    let mut graph = CollabGraph::new();
    graph.add_track("Echo", &names(&["A", "B", "A"]));

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.collaboration("A", "B").unwrap().weight, 1);
    assert_eq!(graph.song_count("A"), 1);
    assert!(graph.collaboration("A", "A").is_none());
}

#[test]
fn test_edge_lookup_is_symmetric() {
    let mut graph = CollabGraph::new();
    graph.add_track("One", &names(&["A", "B"]));
    graph.add_track("Two", &names(&["B", "A"]));

    let ab = graph.collaboration("A", "B").unwrap();
    assert_eq!(ab, graph.collaboration("B", "A").unwrap());
    assert_eq!(ab.weight, 2);
    assert_eq!(ab.songs, vec!["One", "Two"]);
    assert_eq!(graph.degree(graph.node_index("A").unwrap()), 1);
}

#[test]
fn test_nodes_keep_first_seen_order() {
    let graph = CollabGraph::from_tracks(&[
        CreditedTrack::new("1", &["Zed", "Amy"]),
        CreditedTrack::new("2", &["Amy", "Bob"]),
    ]);

    let artists: Vec<&str> = graph.artists().collect();
    assert_eq!(artists, vec!["Zed", "Amy", "Bob"]);

    let amy = graph.node_index("Amy").unwrap();
    let mut neighbours: Vec<usize> = graph.neighbors(amy).map(|(n, _)| n).collect();
    neighbours.sort();
    assert_eq!(neighbours, vec![0, 2]);

    let edges: Vec<(usize, usize, u32)> = graph.edges().map(|(a, b, c)| (a, b, c.weight)).collect();
    assert_eq!(edges, vec![(0, 1, 1), (1, 2, 1)]);
}

#[test]
fn test_betweenness_path_center() {
    let graph = CollabGraph::from_tracks(&[
        CreditedTrack::new("S1", &["A", "B"]),
        CreditedTrack::new("S2", &["B", "C"]),
    ]);
    let bc = betweenness(&graph, WeightMode::Distance);

    assert!(approx(bc[0], 0.0));
    assert!(approx(bc[1], 1.0));
    assert!(approx(bc[2], 0.0));
}

#[test]
fn test_equal_paths_split_credit() {
    // square A-B-D-C-A: each node bridges half of one pair
    let graph = CollabGraph::from_tracks(&[
        CreditedTrack::new("1", &["A", "B"]),
        CreditedTrack::new("2", &["B", "D"]),
        CreditedTrack::new("3", &["D", "C"]),
        CreditedTrack::new("4", &["C", "A"]),
    ]);

    for value in betweenness(&graph, WeightMode::Distance) {
        assert!(approx(value, 1.0 / 6.0));
    }
}

#[test]
fn test_heavy_direct_edge_loses_to_light_detour() {
    // A-B shares 3 tracks; under distance costs A-C-B (cost 2) is shorter
    let mut tracks = vec![
        CreditedTrack::new("x", &["A", "C"]),
        CreditedTrack::new("y", &["C", "B"]),
    ];
    for name in ["p", "q", "r"] {
        tracks.push(CreditedTrack::new(name, &["A", "B"]));
    }
    let graph = CollabGraph::from_tracks(&tracks);
    let c = graph.node_index("C").unwrap();

    assert!(approx(betweenness(&graph, WeightMode::Distance)[c], 1.0));
    assert!(approx(betweenness(&graph, WeightMode::Strength)[c], 0.0));
}

#[test]
fn test_tiny_graphs() {
    let graph = CollabGraph::from_tracks(&[CreditedTrack::new("S", &["A", "B"])]);

    assert_eq!(betweenness(&graph, WeightMode::Distance), vec![0.0, 0.0]);
    assert_eq!(degree_centrality(&graph), vec![1.0, 1.0]);
    assert!(degree_centrality(&CollabGraph::new()).is_empty());
    assert!(betweenness(&CollabGraph::new(), WeightMode::Distance).is_empty());
}

#[test]
fn test_same_seed_same_layout() {
    let graph = CollabGraph::from_tracks(&[
        CreditedTrack::new("1", &["A", "B", "C"]),
        CreditedTrack::new("2", &["C", "D"]),
    ]);
    let config = LayoutConfig {
        iterations: 30,
        ..LayoutConfig::default()
    };

    assert_eq!(spring_layout(&graph, &config), spring_layout(&graph, &config));
    assert_eq!(
        spring_layout(&CollabGraph::new(), &config),
        Vec::<(f64, f64)>::new()
    );
}
