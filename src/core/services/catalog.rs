//! Static catalogue: rules, remark pools, trivia and seeded facts
//!
//! Every table here is `'static` data; nothing is rebuilt per request.

use super::super::models::{Condition, Fact, FactCategory, Rule, Verdict};
use super::super::ports::{RandomSource, choose};

// =============================================================================
// RULES
// =============================================================================

/// Classification rules, highest priority first
pub static RULES: &[Rule] = &[
    Rule {
        condition: Condition::AllOf(&["flat earth"]),
        verdict: Verdict::Debunked,
        explanation: "Earth's spherical shape has been confirmed by countless observations, \
                      satellite imagery, and the fact that ships disappear bottom-first over the \
                      horizon.",
    },
    Rule {
        condition: Condition::AllOf(&["moon landing", "fake"]),
        verdict: Verdict::Debunked,
        explanation: "The Apollo moon landings are verified by independent sources worldwide, \
                      including reflectors left on the lunar surface that scientists still use \
                      today.",
    },
    Rule {
        condition: Condition::AllOf(&["black hole", "dangerous"]),
        verdict: Verdict::CosmicMystery,
        explanation: "While black holes are extreme objects, the nearest one is 1,500 light-years \
                      away. They only pose danger if you get very, very close.",
    },
    Rule {
        condition: Condition::AllOf(&["sun", "yellow"]),
        verdict: Verdict::Debunked,
        explanation: "The Sun is actually white when viewed from space. It appears yellow through \
                      Earth's atmosphere due to light scattering.",
    },
    Rule {
        condition: Condition::AllOf(&["speed of light"]),
        verdict: Verdict::Verified,
        explanation: "The speed of light in vacuum is approximately 299,792,458 meters per second, \
                      a fundamental constant of the universe.",
    },
    Rule {
        condition: Condition::AllOf(&["galaxy", "andromeda"]),
        verdict: Verdict::Verified,
        explanation: "The Andromeda Galaxy is indeed on a collision course with the Milky Way, \
                      expected in about 4.5 billion years.",
    },
    Rule {
        condition: Condition::AnyOf(&["dark matter", "dark energy"]),
        verdict: Verdict::CosmicMystery,
        explanation: "Dark matter and dark energy make up about 95% of the universe, yet we still \
                      don't know exactly what they are. This is one of cosmology's greatest \
                      mysteries.",
    },
];

/// Explanation attached when no rule matched and `verdict` was drawn at random
#[must_use]
pub const fn fallback_explanation(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Verified => {
            "Based on current scientific consensus, this claim appears to hold up to scrutiny."
        },
        Verdict::Debunked => "This claim conflicts with established scientific understanding.",
        Verdict::CosmicMystery => {
            "The scientific community hasn't reached a definitive conclusion on this topic."
        },
    }
}

// =============================================================================
// REMARKS & BONUS TRIVIA
// =============================================================================

const VERIFIED_REMARKS: &[&str] = &[
    "The cosmos confirms: you've stumbled upon truth!",
    "Even black holes can't swallow this fact.",
    "Newton would nod approvingly.",
    "The universe says: yes, this checks out!",
    "Verified by the laws of physics themselves.",
];

const DEBUNKED_REMARKS: &[&str] = &[
    "Houston, we have a problem with this claim.",
    "This theory has been sucked into the misinformation black hole.",
    "The stars have aligned against this one.",
    "Even a flat-earther would raise an eyebrow.",
    "This claim has less mass than a neutrino's credibility.",
];

const MYSTERY_REMARKS: &[&str] = &[
    "This remains one of the universe's great unknowns.",
    "Not even Hawking could settle this one definitively.",
    "The jury of galaxies is still out.",
    "Some questions make even dark matter look transparent.",
    "This is quantum-level uncertain.",
];

/// Trivia attached to every claim regardless of verdict
pub static BONUS_FACTS: &[&str] = &[
    "A teaspoon of neutron star material weighs about 6 billion tons.",
    "Black holes don't actually 'suck'; they pull with gravity like any other mass.",
    "There are more stars in the universe than grains of sand on Earth.",
    "Light from the Sun takes 8 minutes to reach Earth.",
    "The observable universe is 93 billion light-years in diameter.",
    "Venus rotates backwards compared to most planets.",
    "A year on Mercury is just 88 Earth days.",
    "The largest known star, UY Scuti, could fit 5 billion Suns inside it.",
];

/// Remark pool for a verdict
#[must_use]
pub const fn remarks(verdict: Verdict) -> &'static [&'static str] {
    match verdict {
        Verdict::Verified => VERIFIED_REMARKS,
        Verdict::Debunked => DEBUNKED_REMARKS,
        Verdict::CosmicMystery => MYSTERY_REMARKS,
    }
}

/// Draw a witty remark matching the verdict
pub fn remark_for(verdict: Verdict, rng: &mut dyn RandomSource) -> &'static str {
    choose(rng, remarks(verdict)).copied().unwrap_or_default()
}

/// Draw a bonus trivia line
pub fn bonus_fact(rng: &mut dyn RandomSource) -> &'static str {
    choose(rng, BONUS_FACTS).copied().unwrap_or_default()
}

// =============================================================================
// SEEDED FACTS
// =============================================================================

const fn seed(title: &'static str, body: &'static str, category: FactCategory) -> Fact {
    Fact {
        title,
        body,
        category,
        source: None,
    }
}

static FACTS: &[Fact] = &[
    seed(
        "Spaghettification",
        "If you fell into a black hole, you'd be stretched into a long thin strand like \
         spaghetti due to tidal forces.",
        FactCategory::BlackHoles,
    ),
    seed(
        "Event Horizon",
        "The event horizon is the boundary around a black hole beyond which nothing, not even \
         light, can escape.",
        FactCategory::BlackHoles,
    ),
    seed(
        "Hawking Radiation",
        "Black holes slowly evaporate over time through a process called Hawking radiation, \
         eventually disappearing completely.",
        FactCategory::BlackHoles,
    ),
    seed(
        "Stellar Nurseries",
        "Stars are born in giant clouds of gas and dust called nebulae, where gravity pulls \
         matter together.",
        FactCategory::Stars,
    ),
    seed(
        "Neutron Stars",
        "A neutron star is so dense that a sugar-cube-sized piece of it would weigh about a \
         billion tons.",
        FactCategory::Stars,
    ),
    seed(
        "Galactic Cannibalism",
        "Large galaxies grow by absorbing smaller galaxies; our Milky Way is currently consuming \
         several dwarf galaxies.",
        FactCategory::Galaxies,
    ),
    seed(
        "Cosmic Web",
        "Galaxies are connected by filaments of dark matter forming a vast cosmic web spanning \
         the observable universe.",
        FactCategory::Galaxies,
    ),
    seed(
        "Time Dilation",
        "Near a massive object like a black hole, time moves slower relative to distant \
         observers, as predicted by Einstein's relativity.",
        FactCategory::Physics,
    ),
    seed(
        "Quantum Entanglement",
        "Two entangled particles remain connected regardless of distance; Einstein called this \
         'spooky action at a distance'.",
        FactCategory::Physics,
    ),
    seed(
        "The Great Attractor",
        "A mysterious gravitational anomaly is pulling our entire galaxy cluster toward it at \
         600 km/s, but we can't see what it is.",
        FactCategory::Mysteries,
    ),
    seed(
        "Fast Radio Bursts",
        "Mysterious millisecond-long radio signals from billions of light-years away have been \
         detected, and their origin remains unknown.",
        FactCategory::Mysteries,
    ),
    seed(
        "Dark Flow",
        "Some galaxy clusters appear to be moving in a direction that can't be explained by any \
         visible matter.",
        FactCategory::Mysteries,
    ),
];

/// All seeded facts in seed order
#[must_use]
pub const fn all_facts() -> &'static [Fact] {
    FACTS
}

/// Facts in one category, in seed order
#[must_use]
pub fn facts_in(category: FactCategory) -> Vec<Fact> {
    FACTS.iter().filter(|f| f.category == category).copied().collect()
}

/// Draw one fact uniformly
pub fn random_fact(rng: &mut dyn RandomSource) -> Option<Fact> {
    choose(rng, FACTS).copied()
}

// =============================================================================
// EXAMPLES
// =============================================================================

static EXAMPLE_CLAIMS: &[&str] = &[
    "The Earth is flat",
    "Black holes can destroy entire galaxies",
    "The speed of light is constant",
    "Dark matter makes up most of the universe",
    "The Moon landing was faked",
];

/// Sample claims offered to clients as prompts
#[must_use]
pub const fn example_claims() -> &'static [&'static str] {
    EXAMPLE_CLAIMS
}
