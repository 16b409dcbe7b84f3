//! The fixed species catalog and food-chain rules.

use rand::Rng;
use shoal_data::{Diet, Species, SpeciesId, SPECIES_COUNT};

/// Every species in the aquarium, indexed by `SpeciesId`.
pub static CATALOG: [Species; SPECIES_COUNT] = [
    Species {
        name: "Clownfish",
        color: "#FF6B6B",
        base_size: 20.0,
        base_speed: 1.1,
        diet: Diet::Herbivore,
        trophic_level: 1,
        edible_levels: &[],
    },
    Species {
        name: "Blue Tang",
        color: "#4ECDC4",
        base_size: 24.0,
        base_speed: 1.0,
        diet: Diet::Omnivore,
        trophic_level: 2,
        edible_levels: &[1],
    },
    Species {
        name: "Golden Tang",
        color: "#FFD166",
        base_size: 28.0,
        base_speed: 0.9,
        diet: Diet::Carnivore,
        trophic_level: 3,
        edible_levels: &[1, 2],
    },
    Species {
        name: "Violet",
        color: "#9D4EDD",
        base_size: 22.0,
        base_speed: 1.2,
        diet: Diet::Apex,
        trophic_level: 4,
        edible_levels: &[1, 2, 3],
    },
];

pub const CLOWNFISH: SpeciesId = SpeciesId(0);
pub const BLUE_TANG: SpeciesId = SpeciesId(1);
pub const GOLDEN_TANG: SpeciesId = SpeciesId(2);
pub const VIOLET: SpeciesId = SpeciesId(3);

/// Looks up a species record.
///
/// Ids are only minted by this module, so an out-of-range id is a bug and
/// falls back to the first entry rather than panicking mid-tick.
#[must_use]
pub fn species(id: SpeciesId) -> &'static Species {
    CATALOG.get(id.index()).unwrap_or(&CATALOG[0])
}

pub fn all() -> impl Iterator<Item = (SpeciesId, &'static Species)> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(i, s)| (SpeciesId(i as u8), s))
}

/// Uniform draw over the catalog.
pub fn pick_random_species<R: Rng + ?Sized>(rng: &mut R) -> SpeciesId {
    SpeciesId(rng.gen_range(0..CATALOG.len()) as u8)
}

/// True iff `prey`'s trophic level is listed in `predator`'s edible set.
#[must_use]
pub fn can_prey(predator: SpeciesId, prey: SpeciesId) -> bool {
    species(predator).can_eat_level(species(prey).trophic_level)
}
