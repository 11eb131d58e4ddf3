// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presence lifecycle with an exit animation.
//!
//! Opens a panel with an enter animation, closes it with an exit animation,
//! and shows the controller holding the panel until the animation ends.
//! A stray `animationend` from a child is dropped along the way.
//!
//! Run:
//! - `cargo run -p understory_demos --example presence_exit_animation`

use understory_demos::SimHost;
use understory_presence::machine::PresenceState;
use understory_presence::presence::Presence;

const PANEL: u32 = 1;
const ICON: u32 = 2;

fn pump(presence: &mut Presence<u32>, host: &mut SimHost) {
    for event in host.take_events() {
        presence.on_animation_event(&event, host);
    }
    for callback in host.take_callbacks() {
        presence.on_callback(callback, host);
    }
}

fn main() {
    let mut host = SimHost::new();
    let mut presence = Presence::new(false);

    println!("== Open ==");
    presence.set_present(true, &mut host);
    // The owner renders the panel now that it is present.
    presence.set_node(Some(PANEL), &mut host);
    host.start_animation(PANEL, "fade-in");
    pump(&mut presence, &mut host);
    host.finish_animation(PANEL);
    pump(&mut presence, &mut host);
    assert_eq!(presence.state(), PresenceState::Mounted);

    println!("== Close ==");
    // Closed styles switch the panel to its exit animation.
    host.set_animation(PANEL, "fade-out");
    presence.set_present(false, &mut host);
    assert_eq!(presence.state(), PresenceState::UnmountSuspended);
    host.start_animation(PANEL, "fade-out");
    pump(&mut presence, &mut host);

    println!("== Child animation ends ==");
    host.finish_animation_on(ICON, "fade-out");
    pump(&mut presence, &mut host);
    assert!(presence.is_present());

    println!("== Panel animation ends ==");
    host.finish_animation(PANEL);
    for event in host.take_events() {
        presence.on_animation_event(&event, &mut host);
    }
    assert!(!presence.is_present());
    println!("  fill-mode held: {:?}", host.node_fill_mode(PANEL));
    pump(&mut presence, &mut host);
    println!("  fill-mode after restore: {:?}", host.node_fill_mode(PANEL));

    // The owner stops rendering the panel.
    presence.set_node(None, &mut host);
    assert!(!host.is_observed(PANEL));
    println!("final state: {:?}", presence.state());
}
