// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-open, collapsible accordion driven by clicks and arrow keys.
//!
//! Run:
//! - `cargo run -p understory_demos --example accordion_faq`

use understory_demos::SimHost;
use understory_disclosure::accordion::{Accordion, AccordionKind};
use understory_disclosure::nav::NavKey;

const QUESTIONS: [&str; 4] = ["who-can-donate", "how-often", "before-donating", "after-donating"];

fn print_state(faq: &Accordion<u32>) {
    for item in faq.items() {
        println!(
            "  {:<16} data-state={:<6} rendered={} trigger={} content={}",
            item.value(),
            item.data_state().as_str(),
            item.collapsible().should_render_content(),
            item.trigger_id(),
            item.content_id(),
        );
    }
}

fn main() {
    let mut host = SimHost::new();
    let mut faq: Accordion<u32> = Accordion::new(AccordionKind::Single { collapsible: true });
    for q in QUESTIONS {
        faq.add_item(q);
    }
    if let Some(item) = faq.item_mut("after-donating") {
        item.set_disabled(true);
    }

    println!("== Click how-often ==");
    faq.toggle("how-often", &mut host);
    print_state(&faq);
    assert!(faq.is_open("how-often"));

    println!("== Click before-donating ==");
    faq.toggle("before-donating", &mut host);
    print_state(&faq);
    assert_eq!(faq.open_values(), ["before-donating"]);

    println!("== Keyboard ==");
    let mut focused = "who-can-donate";
    for key in ["ArrowDown", "ArrowDown", "ArrowDown", "Home", "ArrowUp"] {
        let Some(nav) = NavKey::from_key(key) else {
            continue;
        };
        if let Some(next) = faq.focus_target(focused, nav) {
            println!("  {key:<10} {focused} -> {next}");
            focused = next;
        }
    }
    // The disabled item is skipped, so ArrowUp from the first wraps to the third.
    assert_eq!(focused, "before-donating");

    println!("== Click disabled item ==");
    assert!(!faq.toggle("after-donating", &mut host));
    print_state(&faq);
}
