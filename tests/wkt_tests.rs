mod test_utils;

use quadtree_index::from_wkt::{envelopes_from_wkt, segment_envelopes_from_wkt};
use quadtree_index::{IndexError, IndexedContainer, Rect};
use test_utils::{find_brute_overlaps, get_random_queries, init_tracing};

const SHAPES: &str = "POLYGON ((2.5 1.5, 9.25 3.5, 11.75 8.25, 7.5 12.5, 1.25 9.75, 2.5 1.5), (4.5 5.5, 6.75 6.25, 5.25 8.5, 4.5 5.5))

MULTILINESTRING ((14.5 2.5, 17.25 6.75, 21.5 4.25), (15.75 11.5, 19.25 14.75))

LINESTRING (3.5 15.5, 8.25 18.75, 12.5 16.25, 16.75 19.5, 22.25 17.5)

MULTIPOLYGON (((24.5 3.5, 28.25 5.5, 26.5 9.75, 24.5 3.5)), ((25.5 13.5, 29.75 15.25, 27.25 19.5, 25.5 13.5)))";

#[test]
fn test_geometry_envelopes() {
    let envelopes = envelopes_from_wkt(SHAPES).unwrap();
    assert_eq!(envelopes.len(), 4);
    assert_eq!(
        envelopes[0],
        Rect::from_corners((1.25, 1.5).into(), (11.75, 12.5).into())
    );
    assert_eq!(
        envelopes[3],
        Rect::from_corners((24.5, 3.5).into(), (29.75, 19.5).into())
    );

    let mut container = IndexedContainer::new(Rect::of(&envelopes).unwrap());
    for (i, envelope) in envelopes.iter().enumerate() {
        container.insert(i, *envelope);
    }
    // Only the polygon and the line string reach into the bottom-left corner.
    let query = Rect::new((0.3, 12.1).into(), (4.1, 4.3).into());
    let mut found: Vec<usize> = container.search_items(&query).into_iter().copied().collect();
    found.sort_unstable();
    assert_eq!(found, vec![0, 2]);
}

#[test]
fn test_segment_queries_match_brute_force() {
    init_tracing();
    let segments = segment_envelopes_from_wkt(SHAPES).unwrap();
    // 5 + 3 polygon ring segments, 2 + 1 + 4 line segments, 3 + 3 multipolygon.
    assert_eq!(segments.len(), 21);

    let universe = Rect::of(&segments).unwrap();
    let mut container = IndexedContainer::new(universe);
    container.extend(segments.iter().copied().enumerate());

    for query in &get_random_queries(universe, 100, 192) {
        let mut found: Vec<usize> = container.search(query).iter().map(|k| k.index()).collect();
        found.sort_unstable();
        assert_eq!(found, find_brute_overlaps(query, &segments), "query {:?}", query);
    }
}

#[test]
fn test_bad_input_is_rejected() {
    assert!(matches!(
        segment_envelopes_from_wkt("LINESTRING (1 2, 3"),
        Err(IndexError::Wkt(_))
    ));
    assert!(matches!(
        envelopes_from_wkt("POINT (1 2)\n\nCIRCLE (1 2, 3)"),
        Err(IndexError::Wkt(_))
    ));
}
