#![cfg(not(target_arch = "wasm32"))]

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use formella_page::content::PAGE;
use formella_page::reveal::{IntersectionEntry, IntersectionFacility, VisibilityController};
use formella_page::{PageError, RevealConfig};

/// Stand-in for the browser observer: remembers which sections it watches.
#[derive(Default)]
struct FakeObserver {
    watched: Rc<RefCell<HashSet<String>>>,
}

impl IntersectionFacility for FakeObserver {
    type Handle = String;

    fn observe(&mut self, handle: &String) {
        self.watched.borrow_mut().insert(handle.clone());
    }
    fn unobserve(&mut self, handle: &String) {
        self.watched.borrow_mut().remove(handle);
    }
    fn disconnect(&mut self) {
        self.watched.borrow_mut().clear();
    }
}

fn connected() -> (VisibilityController<FakeObserver>, Rc<RefCell<HashSet<String>>>) {
    let watched = Rc::new(RefCell::new(HashSet::new()));
    let shared = Rc::clone(&watched);
    let controller = VisibilityController::connect(RevealConfig::default(), move |_, _| {
        Ok(FakeObserver { watched: shared })
    });
    (controller, watched)
}

fn hit(id: &str) -> IntersectionEntry {
    IntersectionEntry::new(id, true)
}

fn miss(id: &str) -> IntersectionEntry {
    IntersectionEntry::new(id, false)
}

#[test]
fn only_intersected_section_reveals() {
    let (c, _) = connected();
    let _regs: Vec<_> = ["hero", "introduzione", "opera"]
        .into_iter()
        .map(|id| c.register_section(id, format!("#{id}")))
        .collect();

    c.deliver([hit("introduzione")]);
    assert!(!c.is_revealed("hero"));
    assert!(c.is_revealed("introduzione"));
    assert!(!c.is_revealed("opera"));

    c.deliver([miss("introduzione")]);
    assert!(c.is_revealed("introduzione"));
}

#[test]
fn unknown_id_is_not_revealed() {
    let (c, _) = connected();
    assert!(!c.is_revealed("nonexistent"));
}

#[test]
fn never_intersecting_sections_stay_hidden() {
    let (c, _) = connected();
    let _regs: Vec<_> = PAGE.section_ids().map(|id| c.register_section(id, id.to_string())).collect();
    c.deliver(PAGE.section_ids().map(miss));
    for id in PAGE.section_ids() {
        assert!(!c.is_revealed(id), "{id}");
    }
}

#[test]
fn repeated_hits_are_idempotent() {
    let (c, _) = connected();
    let _reg = c.register_section("opera", "opera".into());
    let revealed = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&revealed);
    let _sub = c.subscribe(move |id| log.borrow_mut().push(id.to_string()));

    c.deliver([hit("opera"), hit("opera")]);
    c.deliver([hit("opera")]);
    assert_eq!(c.revealed_count(), 1);
    assert_eq!(revealed.borrow().len(), 1);
}

#[test]
fn batch_order_does_not_matter() {
    let (a, _) = connected();
    let (b, _) = connected();
    let _ra: Vec<_> = PAGE.section_ids().map(|id| a.register_section(id, id.into())).collect();
    let _rb: Vec<_> = PAGE.section_ids().map(|id| b.register_section(id, id.into())).collect();

    a.deliver([hit("analisi"), miss("hero"), hit("confronto")]);
    b.deliver([hit("confronto"), hit("analisi"), miss("hero")]);

    let mut ia = a.revealed_ids();
    let mut ib = b.revealed_ids();
    ia.sort();
    ib.sort();
    assert_eq!(ia, ib);
}

#[test]
fn missing_facility_reveals_everything_registered() {
    let c: VisibilityController<FakeObserver> = VisibilityController::connect(
        RevealConfig::default(),
        |_, _| Err(PageError::FacilityUnavailable("absent".into())),
    );
    let _regs: Vec<_> = PAGE.section_ids().map(|id| c.register_section(id, id.into())).collect();
    assert!(c.is_degraded());
    for id in PAGE.section_ids() {
        assert!(c.is_revealed(id), "{id}");
    }
    assert!(!c.is_revealed("nonexistent"));
}

#[test]
fn unmount_releases_every_region() {
    let (c, watched) = connected();
    let regs: Vec<_> = PAGE.section_ids().map(|id| c.register_section(id, id.into())).collect();
    assert_eq!(watched.borrow().len(), PAGE.sections.len());

    c.deliver([hit("hero")]);
    drop(regs);
    assert!(watched.borrow().is_empty());
    assert_eq!(c.registered_count(), 0);
    assert!(c.is_revealed("hero"));
}

#[test]
fn teardown_disconnects() {
    let (c, watched) = connected();
    let _regs: Vec<_> = PAGE.section_ids().map(|id| c.register_section(id, id.into())).collect();
    c.teardown();
    assert!(watched.borrow().is_empty());
    assert_eq!(c.registered_count(), 0);
}

#[test]
fn remount_after_unmount_keeps_latch() {
    let (c, watched) = connected();
    let first = c.register_section("opera", "old".into());
    c.deliver([hit("opera")]);
    drop(first);

    let _again = c.register_section("opera", "new".into());
    assert!(c.is_revealed("opera"));
    // Already revealed sections are not watched again
    assert!(watched.borrow().is_empty());
}

mod props {
    use super::*;
    use proptest::prelude::*;

    fn ids() -> impl Strategy<Value = Vec<(usize, bool)>> {
        prop::collection::vec((0usize..6, any::<bool>()), 0..64)
    }

    proptest! {
        #[test]
        fn revealed_set_only_grows(events in ids()) {
            let (c, _) = connected();
            let sections: Vec<&str> = PAGE.section_ids().collect();
            let _regs: Vec<_> = sections.iter().map(|id| c.register_section(id, id.to_string())).collect();

            let mut prev = 0;
            let mut ever_hit = HashSet::new();
            for (idx, intersecting) in events {
                let id = sections[idx];
                c.deliver([IntersectionEntry::new(id, intersecting)]);
                if intersecting {
                    ever_hit.insert(id);
                }
                let now = c.revealed_count();
                prop_assert!(now >= prev);
                prev = now;
            }
            for id in &sections {
                prop_assert_eq!(c.is_revealed(id), ever_hit.contains(id));
            }
        }
    }
}
