//! Both coordinate backings must answer the same questions the same way.

use corelib::{Coordinate, CoordinateCache, CoordinateSource, NodeId, StaticTopology};
use std::sync::Arc;
use std::thread;

fn coord(x: f64) -> Option<Coordinate> {
    Some(Coordinate::from_vec(vec![x, 0.0]))
}

fn seed() -> (StaticTopology, CoordinateCache) {
    let entries = [
        ("dc1", "node1", coord(0.010)),
        ("dc1", "node2", coord(0.002)),
        ("dc1", "node3", None),
        ("dc2", "node4", coord(0.008)),
    ];

    let mut topology = StaticTopology::new("dc1", "node1");
    let cache = CoordinateCache::new("dc1");
    for (dc, node, c) in entries {
        topology.insert(dc, node, c.clone());
        cache.update(dc, node.into(), c);
    }
    cache.set_own_coordinate(Coordinate::from_vec(vec![0.010, 0.0]));
    (topology, cache)
}

fn describe<S: CoordinateSource + ?Sized>(source: &S) -> Vec<String> {
    let mut out = vec![source.datacenter().to_string()];
    out.push(format!("{:?}", source.own_coordinate().unwrap().map(|c| c.vec)));
    for dc in ["dc1", "dc2", "dc3"] {
        let mut members = source.datacenter_members(dc).unwrap();
        members.sort();
        for node in members {
            let known = source.cached_coordinate(&node).unwrap().map(|c| c.vec);
            out.push(format!("{}/{}={:?}", dc, node, known));
        }
    }
    out
}

#[test]
fn test_backings_agree() {
    let (topology, cache) = seed();
    assert_eq!(describe(&topology), describe(&cache));
}

#[test]
fn test_backings_as_trait_objects() {
    let (topology, cache) = seed();
    let sources: Vec<Box<dyn CoordinateSource>> = vec![Box::new(topology), Box::new(cache)];
    for source in &sources {
        assert_eq!(source.datacenter(), "dc1");
        assert_eq!(source.datacenter_members("dc2").unwrap(), vec![NodeId::from("node4")]);
        assert!(source.datacenter_members("nowhere").unwrap().is_empty());
    }
}

#[test]
fn test_cache_shared_between_reader_and_writer() {
    let (_, cache) = seed();
    let cache = Arc::new(cache);

    let writer = {
        let cache = Arc::clone(&cache);
        thread::spawn(move || {
            for i in 0..100 {
                cache.update("dc1", "node2".into(), coord(i as f64 / 1000.0));
            }
        })
    };
    for _ in 0..100 {
        let seen = cache.cached_coordinate(&"node2".into()).unwrap();
        assert!(seen.map(|c| c.validate().is_ok()).unwrap_or(false));
    }
    writer.join().unwrap();

    assert_eq!(
        cache.cached_coordinate(&"node2".into()).unwrap(),
        coord(0.099)
    );
}
