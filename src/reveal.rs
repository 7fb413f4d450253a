//! Fire-once entry animations: an element fades in the first time it
//! scrolls into view and stays put afterwards.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

/// How long the CSS reveal transition runs, in milliseconds. Keep in sync
/// with the `.reveal` rule in the page stylesheet.
const REVEAL_MS: u32 = 600;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Reveal {
    Unseen,
    Animating,
    Settled,
}

impl Reveal {
    /// First viewport intersection starts the animation. Later
    /// intersections change nothing.
    pub fn on_intersect(self) -> Self {
        match self {
            Reveal::Unseen => Reveal::Animating,
            settled => settled,
        }
    }

    pub fn on_animation_done(self) -> Self {
        match self {
            Reveal::Animating => Reveal::Settled,
            other => other,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Reveal::Unseen => "reveal",
            Reveal::Animating | Reveal::Settled => "reveal visible",
        }
    }
}

/// Watches `node` with an IntersectionObserver and reports its reveal state.
/// The observer disconnects on the first hit, so the animation can never
/// replay, and again on unmount in case the element was never seen.
#[hook]
pub fn use_reveal(node: NodeRef) -> Reveal {
    let state = use_state(|| Reveal::Unseen);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut watcher = None;

                if let Some(element) = node.cast::<web_sys::Element>() {
                    let callback = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            let seen = entries.iter().any(|entry| {
                                entry
                                    .unchecked_into::<IntersectionObserverEntry>()
                                    .is_intersecting()
                            });
                            if seen {
                                observer.disconnect();
                                state.set(state.on_intersect());
                                let state = state.clone();
                                Timeout::new(REVEAL_MS, move || {
                                    state.set(Reveal::Animating.on_animation_done());
                                })
                                .forget();
                            }
                        },
                    )
                        as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let observer =
                        IntersectionObserver::new(callback.as_ref().unchecked_ref()).unwrap();
                    observer.observe(&element);
                    watcher = Some((observer, callback));
                }

                move || {
                    if let Some((observer, _callback)) = watcher {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_starts_the_animation() {
        assert_eq!(Reveal::Unseen.on_intersect(), Reveal::Animating);
    }

    #[test]
    fn animation_settles_and_never_replays() {
        let settled = Reveal::Unseen.on_intersect().on_animation_done();
        assert_eq!(settled, Reveal::Settled);
        assert_eq!(settled.on_intersect(), Reveal::Settled);
        assert_eq!(settled.on_animation_done(), Reveal::Settled);
    }

    #[test]
    fn repeat_intersections_while_animating_are_ignored() {
        assert_eq!(Reveal::Animating.on_intersect(), Reveal::Animating);
    }

    #[test]
    fn only_unseen_elements_hide() {
        assert_eq!(Reveal::Unseen.class(), "reveal");
        assert_eq!(Reveal::Animating.class(), "reveal visible");
        assert_eq!(Reveal::Settled.class(), "reveal visible");
    }
}
