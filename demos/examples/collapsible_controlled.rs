// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A controlled collapsible whose owner approves open requests, plus content measurement.
//!
//! Run:
//! - `cargo run -p understory_demos --example collapsible_controlled`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Size;
use understory_demos::SimHost;
use understory_disclosure::collapsible::Collapsible;

const CONTENT: u32 = 10;

fn main() {
    let mut host = SimHost::new();
    let requests = Rc::new(RefCell::new(Vec::new()));
    let sink = requests.clone();

    let mut details: Collapsible<u32> = Collapsible::new(Some(false), false)
        .with_content_id("eligibility-details")
        .with_on_open_change(move |open: &bool| sink.borrow_mut().push(*open));

    println!("== Trigger clicked ==");
    details.toggle(&mut host);
    println!("  requested: {:?}", requests.borrow());
    println!("  open={} rendered={}", details.is_open(), details.should_render_content());

    println!("== Owner approves ==");
    let approved = requests.borrow_mut().pop().unwrap_or(false);
    details.set_open_prop(Some(approved), &mut host);
    assert!(details.should_render_content());

    details.presence_mut().set_node(Some(CONTENT), &mut host);
    host.set_size(CONTENT, Size::new(320.0, 148.0));
    let size = details.measure_content(&CONTENT, &mut host);
    println!("  measured {size:?}");
    for (name, value) in details.metrics().css_variables() {
        println!("  {name}: {}", value.unwrap_or_default());
    }

    println!("== Owner closes ==");
    details.set_open_prop(Some(false), &mut host);
    println!(
        "  open={} rendered={} data-state={}",
        details.is_open(),
        details.should_render_content(),
        details.data_state().as_str()
    );
}
