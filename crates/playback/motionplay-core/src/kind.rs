//! Motion kinds and the slug lookup used by the request layer.

use serde::{Deserialize, Serialize};

/// Which physical scenario produced a result. Selects the descriptor in `catalog`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionKind {
    UniformLinear,
    AcceleratedLinear,
    FreeFall,
    Projectile,
    InclinedPlane,
    UniformCircular,
    SimpleHarmonic,
    SimplePendulum,
    ElasticCollision1d,
    ElasticCollision2d,
    ElasticCollision3d,
    InelasticCollision1d,
    InelasticCollision2d,
    InelasticCollision3d,
    NewtonForces,
    WorkEnergy,
    EnergyConservation,
    GravitationalPotential,
    ElasticPotential,
    TransverseWave,
    LongitudinalWave,
    RcCircuit,
    RlCircuit,
    /// Fallback for identifiers with no catalog entry: position against time.
    Generic,
}

/// Slug → kind. The first entry for a kind is its canonical slug; later ones are aliases.
const SLUGS: &[(&str, MotionKind)] = &[
    ("mru", MotionKind::UniformLinear),
    ("uniform-linear", MotionKind::UniformLinear),
    ("mruv", MotionKind::AcceleratedLinear),
    ("accelerated-linear", MotionKind::AcceleratedLinear),
    ("caida-libre", MotionKind::FreeFall),
    ("free-fall", MotionKind::FreeFall),
    ("tiro-parabolico", MotionKind::Projectile),
    ("projectile", MotionKind::Projectile),
    ("plano-inclinado", MotionKind::InclinedPlane),
    ("inclined-plane", MotionKind::InclinedPlane),
    ("movimiento-circular-uniforme", MotionKind::UniformCircular),
    ("uniform-circular", MotionKind::UniformCircular),
    ("movimiento-armonico-simple", MotionKind::SimpleHarmonic),
    ("simple-harmonic", MotionKind::SimpleHarmonic),
    ("pendulo-simple", MotionKind::SimplePendulum),
    ("simple-pendulum", MotionKind::SimplePendulum),
    ("colision-elastica-1d", MotionKind::ElasticCollision1d),
    ("colision-elastica-2d", MotionKind::ElasticCollision2d),
    ("colision-elastica-3d", MotionKind::ElasticCollision3d),
    ("colision-inelastica-1d", MotionKind::InelasticCollision1d),
    ("colision-perfectamente-inelastica-1d", MotionKind::InelasticCollision1d),
    ("colision-inelastica-2d", MotionKind::InelasticCollision2d),
    ("colision-perfectamente-inelastica-2d", MotionKind::InelasticCollision2d),
    ("colision-inelastica-3d", MotionKind::InelasticCollision3d),
    ("fuerzas-leyes-newton", MotionKind::NewtonForces),
    ("newton-forces", MotionKind::NewtonForces),
    ("trabajo-energia", MotionKind::WorkEnergy),
    ("work-energy", MotionKind::WorkEnergy),
    ("energia-potencial-conservacion", MotionKind::EnergyConservation),
    ("energy-conservation", MotionKind::EnergyConservation),
    ("energia-potencial-gravitatoria", MotionKind::GravitationalPotential),
    ("energia-potencial-elastica", MotionKind::ElasticPotential),
    ("elastic-potential", MotionKind::ElasticPotential),
    ("ondas-transversales", MotionKind::TransverseWave),
    ("ondas-longitudinales", MotionKind::LongitudinalWave),
    ("circuitos-rc", MotionKind::RcCircuit),
    ("circuitos-rl", MotionKind::RlCircuit),
];

impl MotionKind {
    /// Look up a slug. Case, surrounding whitespace and `_` vs `-` are ignored.
    pub fn from_slug(slug: &str) -> Option<MotionKind> {
        let wanted = slug.trim().to_ascii_lowercase().replace('_', "-");
        SLUGS
            .iter()
            .find_map(|(s, k)| if *s == wanted { Some(*k) } else { None })
    }

    /// Like `from_slug`, but unknown identifiers degrade to `Generic`.
    pub fn from_slug_or_generic(slug: &str) -> MotionKind {
        match Self::from_slug(slug) {
            Some(kind) => kind,
            None => {
                log::warn!("unknown motion kind '{slug}', falling back to generic position plot");
                MotionKind::Generic
            }
        }
    }

    /// Canonical slug; `Generic` has none.
    pub fn slug(&self) -> Option<&'static str> {
        SLUGS
            .iter()
            .find_map(|(s, k)| if k == self { Some(*s) } else { None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_and_aliases_resolve() {
        assert_eq!(MotionKind::from_slug("caida-libre"), Some(MotionKind::FreeFall));
        assert_eq!(MotionKind::from_slug(" Free_Fall "), Some(MotionKind::FreeFall));
        assert_eq!(MotionKind::from_slug("tiro-parabolico"), Some(MotionKind::Projectile));
        assert_eq!(MotionKind::from_slug("ley-ohm"), None);
    }

    #[test]
    fn unknown_slug_degrades_to_generic() {
        assert_eq!(
            MotionKind::from_slug_or_generic("something-new"),
            MotionKind::Generic
        );
    }

    #[test]
    fn canonical_slug_round_trips() {
        for (_, kind) in SLUGS {
            let slug = kind.slug().expect("catalogued kind has a slug");
            assert_eq!(MotionKind::from_slug(slug), Some(*kind));
        }
        assert_eq!(MotionKind::Generic.slug(), None);
        assert_eq!(MotionKind::FreeFall.slug(), Some("caida-libre"));
    }
}
