use crate::track::store::TrackStore;
use crate::track::LineSide;
use crate::utils::bbox::BoundingBox;

fn bb(x: i32, y: i32) -> BoundingBox {
    BoundingBox::new(x, y, x + 20, y + 20)
}

#[test]
fn add_tracks() {
    let mut store = TrackStore::new();
    assert!(store.is_empty());

    let t1 = store.add_track(bb(0, 0), 0.0);
    let t2 = store.add_track(bb(100, 0), 0.5);
    assert_ne!(t1, t2);
    assert_eq!(store.len(), 2);

    let ids = store.iter().map(|t| t.get_track_id()).collect::<Vec<_>>();
    assert_eq!(ids, vec![t1, t2]);
    assert_eq!(store.get(t2).unwrap().get_first_seen(), 0.5);
    assert!(store.get(1000).is_none());
}

#[test]
fn ids_are_not_reused() {
    let mut store = TrackStore::new();
    let t1 = store.add_track(bb(0, 0), 0.0);
    store.fetch_tracks(&[t1]);
    let t2 = store.add_track(bb(0, 0), 1.0);
    assert!(t2 > t1);
}

#[test]
fn find_in_store_order() {
    let mut store = TrackStore::new();
    let t1 = store.add_track(bb(0, 0), 0.0);
    let t2 = store.add_track(bb(0, 100), 0.0);
    let t3 = store.add_track(bb(0, 200), 0.0);

    assert_eq!(store.find(|t| t.get_bbox().y1() >= 100), vec![t2, t3]);
    assert_eq!(store.find_first(|t| t.get_bbox().y1() >= 100), Some(t2));
    assert_eq!(store.find_first(|t| t.get_bbox().y1() >= 1000), None);
    assert_eq!(store.find_first(|_| true), Some(t1));
}

#[test]
fn fetch_keeps_order() {
    let mut store = TrackStore::new();
    let ids = (0..5)
        .map(|i| store.add_track(bb(i * 50, 0), 0.0))
        .collect::<Vec<_>>();

    let fetched = store.fetch_tracks(&[ids[1], ids[3], 777]);
    assert_eq!(fetched.len(), 2);
    assert_eq!(store.len(), 3);

    let rest = store.iter().map(|t| t.get_track_id()).collect::<Vec<_>>();
    assert_eq!(rest, vec![ids[0], ids[2], ids[4]]);

    assert!(store.fetch_tracks(&[]).is_empty());
    assert_eq!(store.len(), 3);
}

#[test]
fn update_through_store() {
    let mut store = TrackStore::new();
    let t = store.add_track(bb(0, 0), 0.0);
    store.get_mut(t).unwrap().update(bb(5, 5), 0.2);
    store.get_mut(t).unwrap().mark_counted(1).unwrap();

    let track = store.get(t).unwrap();
    assert_eq!(track.get_bbox(), &bb(5, 5));
    assert_eq!(track.get_label(), Some(1));
}

#[test]
fn views() {
    let mut store = TrackStore::new();
    store.add_track(bb(0, 0), 0.0);
    store.add_track(bb(0, 290), 0.0);

    let views = store.views(300);
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].side, LineSide::Above);
    assert_eq!(views[1].side, LineSide::AtOrBelow);
    assert!(views.iter().all(|v| v.label.is_none()));

    store.clear();
    assert!(store.views(300).is_empty());
}
