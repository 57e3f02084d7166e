// Host-side tests for the page lifecycle across back/forward navigation.
// The web crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::PageState;

#[test]
fn persisted_pagehide_keeps_session_alive() {
    let state = PageState::Live.on_pagehide(true);
    assert_eq!(state, PageState::Cached);
    assert!(!state.is_closed());
    assert_eq!(state.on_pageshow(), PageState::Live);
}

#[test]
fn unload_closes_for_good() {
    let state = PageState::Live.on_pagehide(false);
    assert!(state.is_closed());
    assert_eq!(state.on_pageshow(), PageState::Closed);
    assert_eq!(state.on_pagehide(true), PageState::Closed);
}

#[test]
fn cached_page_can_still_be_unloaded() {
    let state = PageState::Live.on_pagehide(true).on_pagehide(false);
    assert_eq!(state, PageState::Closed);
}

#[test]
fn repeated_cache_round_trips_stay_live() {
    let mut state = PageState::Live;
    for _ in 0..3 {
        state = state.on_pagehide(true).on_pageshow();
    }
    assert_eq!(state, PageState::Live);
}
