//! Demo data sanity checks.

use puphaven_core::{portrait, Roster};

#[test]
fn test_demo_roster_contents() {
    let roster = Roster::demo().unwrap();
    assert_eq!(roster.len(), 10);
    for puppy in roster.puppies() {
        assert!(!puppy.name.is_empty());
        assert!(!puppy.breed.is_empty());
        assert!(!puppy.location.is_empty());
        assert!(!puppy.age.is_empty());
        assert!(!puppy.coat.is_empty());
        assert!(!puppy.story.is_empty());
        assert!(!puppy.primary_image().is_empty());
    }
}

#[test]
fn test_roster_order_is_stable() {
    let first = Roster::demo().unwrap();
    let second = Roster::demo().unwrap();
    let ids: Vec<_> = first.puppies().iter().map(|p| p.id).collect();
    let again: Vec<_> = second.puppies().iter().map(|p| p.id).collect();
    assert_eq!(ids, again);
}

#[test]
fn test_every_roster_portrait_renders_with_variety() {
    let roster = Roster::demo().unwrap();
    for puppy in roster.puppies() {
        for id in &puppy.images {
            let img = portrait::render(id, 64, 64);
            let first = *img.get_pixel(0, 0);
            assert!(
                img.pixels().any(|p| *p != first),
                "portrait {id} renders a uniform image"
            );
        }
    }
}
