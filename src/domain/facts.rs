// SPDX-License-Identifier: MPL-2.0
//! Space facts shown in the "Did you know?" panel.

use rand::Rng;
use std::fmt;

/// Facts bundled with the application.
pub const SPACE_FACTS: [&str; 15] = [
    "One day on Venus is longer than its year! Venus takes 243 Earth days to rotate once but only 225 Earth days to orbit the Sun!",
    "A teaspoon of neutron star material would weigh about 6 billion tons on Earth!",
    "Jupiter has 79 known moons, including four large moons discovered by Galileo in 1610!",
    "The Sun contains 99.86% of all the mass in our solar system!",
    "Saturn's moon Titan has lakes and rivers of liquid methane and ethane!",
    "The Great Red Spot on Jupiter is a storm that has been raging for over 400 years!",
    "Space is completely silent because sound waves need a medium to travel through!",
    "The footprints left by astronauts on the Moon will remain there for millions of years because there's no wind or water to erode them!",
    "One million Earths could fit inside the Sun!",
    "The Milky Way galaxy is spinning at 168 miles per second!",
    "A year on Mercury is just 88 Earth days long, but a day on Mercury lasts 176 Earth days!",
    "The coldest place in the universe is the Boomerang Nebula at -458°F (-272°C)!",
    "Olympus Mons on Mars is the largest volcano in the solar system, standing 13.6 miles high!",
    "The International Space Station travels at a speed of 17,500 mph and orbits Earth every 90 minutes!",
    "There are more stars in the universe than grains of sand on all the beaches on Earth!",
];

/// Returned when a fact pool is built from an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPoolError;

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fact pool must contain at least one fact")
    }
}

impl std::error::Error for EmptyPoolError {}

/// A non-empty list of facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactPool(&'static [&'static str]);

impl FactPool {
    /// Wraps `facts`, refusing an empty list.
    pub fn new(facts: &'static [&'static str]) -> Result<Self, EmptyPoolError> {
        if facts.is_empty() {
            Err(EmptyPoolError)
        } else {
            Ok(Self(facts))
        }
    }

    /// The facts bundled with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self(&SPACE_FACTS)
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Draws an index uniformly from `0..len()`.
    pub fn pick_index<R: Rng + ?Sized>(self, rng: &mut R) -> usize {
        rng.gen_range(0..self.0.len())
    }
}

/// Picks one fact uniformly at random.
pub fn show_random_fact<R: Rng + ?Sized>(pool: FactPool, rng: &mut R) -> &'static str {
    let index = pool.pick_index(rng);
    pool.0[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    static SINGLE: [&str; 1] = ["Only fact"];
    static NONE: [&str; 0] = [];

    #[test]
    fn empty_pool_is_rejected() {
        assert_eq!(FactPool::new(&NONE), Err(EmptyPoolError));
    }

    #[test]
    fn single_fact_pool_always_yields_it() {
        let pool = FactPool::new(&SINGLE).expect("non-empty pool");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(show_random_fact(pool, &mut rng), "Only fact");
        }
    }

    #[test]
    fn builtin_pool_has_fifteen_facts() {
        assert_eq!(FactPool::builtin().len(), 15);
    }

    #[test]
    fn draws_visit_every_fact() {
        let pool = FactPool::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 15];
        for _ in 0..10_000 {
            seen[pool.pick_index(&mut rng)] = true;
        }
        assert!(seen.iter().all(|visited| *visited));
    }

    #[test]
    fn picked_fact_belongs_to_pool() {
        let pool = FactPool::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let fact = show_random_fact(pool, &mut rng);
        assert!(SPACE_FACTS.contains(&fact));
    }
}
