use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn dark_state() -> ThemeState {
    ThemeState { is_dark: true, has_user_preference: true }
}

#[test]
fn publish_reaches_every_subscriber() {
    let broadcast = ThemeBroadcast::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let a = Rc::clone(&seen);
    broadcast.subscribe(move |s| a.borrow_mut().push(("a", s.is_dark)));
    let b = Rc::clone(&seen);
    broadcast.subscribe(move |s| b.borrow_mut().push(("b", s.is_dark)));

    broadcast.publish(dark_state());
    assert_eq!(*seen.borrow(), vec![("a", true), ("b", true)]);
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let broadcast = ThemeBroadcast::new();
    let count = Rc::new(RefCell::new(0));
    let c = Rc::clone(&count);
    let id = broadcast.subscribe(move |_| *c.borrow_mut() += 1);

    broadcast.publish(dark_state());
    assert!(broadcast.unsubscribe(id));
    broadcast.publish(dark_state());

    assert_eq!(*count.borrow(), 1);
    assert!(broadcast.is_empty());
}

#[test]
fn unsubscribe_unknown_id_returns_false() {
    let broadcast = ThemeBroadcast::new();
    let id = broadcast.subscribe(|_| {});
    assert!(broadcast.unsubscribe(id));
    assert!(!broadcast.unsubscribe(id));
}

#[test]
fn subscription_ids_are_unique() {
    let broadcast = ThemeBroadcast::new();
    let first = broadcast.subscribe(|_| {});
    let second = broadcast.subscribe(|_| {});
    assert_ne!(first, second);
    assert_eq!(broadcast.len(), 2);
}

#[test]
fn listener_may_unsubscribe_itself_during_publish() {
    let broadcast = Rc::new(ThemeBroadcast::new());
    let own_id = Rc::new(RefCell::new(None));
    let calls = Rc::new(RefCell::new(0));

    let bc = Rc::clone(&broadcast);
    let id_slot = Rc::clone(&own_id);
    let c = Rc::clone(&calls);
    let id = broadcast.subscribe(move |_| {
        *c.borrow_mut() += 1;
        if let Some(id) = *id_slot.borrow() {
            bc.unsubscribe(id);
        }
    });
    *own_id.borrow_mut() = Some(id);

    broadcast.publish(dark_state());
    broadcast.publish(dark_state());
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn clear_drops_all_listeners() {
    let broadcast = ThemeBroadcast::new();
    broadcast.subscribe(|_| {});
    broadcast.subscribe(|_| {});
    broadcast.clear();
    assert!(broadcast.is_empty());
}
