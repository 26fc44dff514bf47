use dioxus::prelude::*;

use crate::utils::pseudo_random;

/// Number of decorative dots behind the landing hero.
const PARTICLE_COUNT: u32 = 24;

#[component]
pub fn ParticleField() -> Element {
    rsx! {
        div { class: "particles", aria_hidden: "true",
            for seed in 0..PARTICLE_COUNT {
                Particle { seed }
            }
        }
    }
}

/// Position and timing all derive from the seed, never from a live RNG,
/// so every render of the field produces identical markup.
#[component]
fn Particle(seed: u32) -> Element {
    let left = pseudo_random(seed) * 100.0;
    let top = pseudo_random(seed + PARTICLE_COUNT) * 100.0;
    let delay = pseudo_random(seed + 2 * PARTICLE_COUNT) * 6.0;
    let duration = 6.0 + pseudo_random(seed + 3 * PARTICLE_COUNT) * 6.0;
    rsx! {
        span {
            class: "particle",
            style: "left: {left}%; top: {top}%; animation-delay: {delay}s; animation-duration: {duration}s;",
        }
    }
}
