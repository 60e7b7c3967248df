//! Motion descriptor table.
//!
//! One record per [`MotionKind`] holding everything the other modules need to know about a
//! kind: which frame fields are plotted on X/Y, which fields appear in the readout, how
//! parallel arrays and positional state rows map onto frame fields. Normalizer, transform and
//! readout all consult this table; none of them branches on the kind directly.
//!
//! Also holds the legacy name table: the computation service historically answered with
//! Spanish keys (`tiempos`, `alturas`, `posicion_x`, ...). Those are canonicalized on ingest.

use serde::{Deserialize, Serialize};

use crate::kind::MotionKind;

/// Canonical frame field holding the timestamp.
pub const TIME_FIELD: &str = "time";
/// Canonical parallel array holding the timestamps.
pub const TIMES_ARRAY: &str = "times";

/// How a kind is laid out on the viewport.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisLayout {
    /// One physical axis drawn left to right; Y pinned to the center.
    Horizontal,
    /// One physical axis drawn bottom to top; X pinned to the center.
    Vertical,
    /// Both axes plotted.
    Planar,
    /// Chartable only; no marker is animated.
    None,
}

/// Parallel-array binding: frame field `field` is read from the first array in `arrays`
/// that the payload carries.
#[derive(Clone, Copy, Debug)]
pub struct ArrayBinding {
    pub field: &'static str,
    pub arrays: &'static [&'static str],
}

const fn bind(field: &'static str, arrays: &'static [&'static str]) -> ArrayBinding {
    ArrayBinding { field, arrays }
}

#[derive(Clone, Copy, Debug)]
pub struct MotionDescriptor {
    pub kind: MotionKind,
    pub label: &'static str,
    pub layout: AxisLayout,
    /// Frame field plotted on the horizontal axis (Horizontal/Planar layouts).
    pub x_field: Option<&'static str>,
    /// Frame field plotted on the vertical axis (Vertical/Planar layouts).
    pub y_field: Option<&'static str>,
    /// Extend both ranges to include the physical origin (keeps the ground line in view).
    pub anchor_origin: bool,
    /// Offered to the static chart.
    pub chartable: bool,
    /// Readout lines after time, in display order; absent fields are skipped.
    pub readout: &'static [&'static str],
    pub arrays: &'static [ArrayBinding],
    /// Field names for columns 1.. of positional state rows (column 0 is time).
    pub state_columns: &'static [&'static str],
}

impl MotionDescriptor {
    #[inline]
    pub fn is_animated(&self) -> bool {
        !matches!(self.layout, AxisLayout::None)
    }

    /// Field actually plotted on X, taking the layout into account.
    #[inline]
    pub fn plotted_x(&self) -> Option<&'static str> {
        match self.layout {
            AxisLayout::Horizontal | AxisLayout::Planar => self.x_field,
            AxisLayout::Vertical | AxisLayout::None => None,
        }
    }

    /// Field actually plotted on Y, taking the layout into account.
    #[inline]
    pub fn plotted_y(&self) -> Option<&'static str> {
        match self.layout {
            AxisLayout::Vertical | AxisLayout::Planar => self.y_field,
            AxisLayout::Horizontal | AxisLayout::None => None,
        }
    }
}

const KINEMATIC_READOUT: &[&str] = &[
    "position",
    "height",
    "position_x",
    "position_y",
    "angle",
    "angular_position",
    "velocity",
    "velocity_x",
    "velocity_y",
    "angular_velocity",
    "acceleration",
    "acceleration_x",
    "acceleration_y",
    "angular_acceleration",
];

const DYNAMICS_READOUT: &[&str] = &[
    "position",
    "position_x",
    "position_y",
    "velocity",
    "velocity_x",
    "velocity_y",
    "acceleration",
    "acceleration_x",
    "acceleration_y",
    "force",
];

const ENERGY_READOUT: &[&str] = &[
    "position",
    "height",
    "velocity",
    "force",
    "kinetic_energy",
    "potential_energy",
    "elastic_potential_energy",
    "total_energy",
];

const WAVE_READOUT: &[&str] = &["position_x", "position_y", "amplitude", "displacement"];

const CIRCUIT_READOUT: &[&str] = &["capacitor_voltage", "inductor_voltage", "current"];

const PLANAR_ARRAYS: &[ArrayBinding] = &[
    bind("position_x", &["positions_x"]),
    bind("position_y", &["positions_y"]),
    bind("velocity_x", &["velocities_x"]),
    bind("velocity_y", &["velocities_y"]),
    bind("acceleration_x", &["accelerations_x"]),
    bind("acceleration_y", &["accelerations_y"]),
];

const GENERIC: MotionDescriptor = MotionDescriptor {
    kind: MotionKind::Generic,
    label: "Generic motion",
    layout: AxisLayout::Horizontal,
    x_field: Some("position"),
    y_field: None,
    anchor_origin: false,
    chartable: true,
    readout: KINEMATIC_READOUT,
    arrays: &[bind("position", &["positions"])],
    state_columns: &["position"],
};

static CATALOG: &[MotionDescriptor] = &[
    MotionDescriptor {
        kind: MotionKind::UniformLinear,
        label: "Uniform linear motion",
        layout: AxisLayout::Horizontal,
        x_field: Some("position"),
        y_field: None,
        anchor_origin: false,
        chartable: true,
        readout: KINEMATIC_READOUT,
        arrays: &[
            bind("position", &["positions"]),
            bind("velocity", &["velocities"]),
        ],
        state_columns: &["position", "velocity"],
    },
    MotionDescriptor {
        kind: MotionKind::AcceleratedLinear,
        label: "Uniformly accelerated linear motion",
        layout: AxisLayout::Horizontal,
        x_field: Some("position"),
        y_field: None,
        anchor_origin: false,
        chartable: true,
        readout: KINEMATIC_READOUT,
        arrays: &[
            bind("position", &["positions"]),
            bind("velocity", &["velocities"]),
            bind("acceleration", &["accelerations"]),
        ],
        state_columns: &["position", "velocity", "acceleration"],
    },
    MotionDescriptor {
        kind: MotionKind::FreeFall,
        label: "Free fall",
        layout: AxisLayout::Vertical,
        x_field: None,
        y_field: Some("height"),
        anchor_origin: false,
        chartable: true,
        readout: KINEMATIC_READOUT,
        arrays: &[
            bind("height", &["heights", "positions"]),
            bind("velocity", &["velocities"]),
            bind("acceleration", &["accelerations"]),
        ],
        state_columns: &["height", "velocity"],
    },
    MotionDescriptor {
        kind: MotionKind::Projectile,
        label: "Projectile motion",
        layout: AxisLayout::Planar,
        x_field: Some("position_x"),
        y_field: Some("position_y"),
        anchor_origin: true,
        chartable: true,
        readout: KINEMATIC_READOUT,
        arrays: PLANAR_ARRAYS,
        state_columns: &["position_x", "position_y"],
    },
    MotionDescriptor {
        kind: MotionKind::InclinedPlane,
        label: "Inclined plane",
        layout: AxisLayout::Planar,
        x_field: Some("position_x"),
        y_field: Some("position_y"),
        anchor_origin: false,
        chartable: true,
        readout: DYNAMICS_READOUT,
        arrays: &[
            bind("position_x", &["positions_x"]),
            bind("position_y", &["positions_y"]),
            bind("velocity_x", &["velocities_x"]),
            bind("velocity_y", &["velocities_y"]),
            bind("acceleration_x", &["accelerations_x"]),
            bind("acceleration_y", &["accelerations_y"]),
            bind("force", &["forces"]),
        ],
        state_columns: &["position_x", "position_y"],
    },
    MotionDescriptor {
        kind: MotionKind::UniformCircular,
        label: "Uniform circular motion",
        layout: AxisLayout::Planar,
        x_field: Some("position_x"),
        y_field: Some("position_y"),
        anchor_origin: false,
        chartable: true,
        readout: KINEMATIC_READOUT,
        arrays: &[
            bind("position_x", &["positions_x"]),
            bind("position_y", &["positions_y"]),
            bind("angle", &["angles"]),
        ],
        state_columns: &["angle", "position_x", "position_y"],
    },
    MotionDescriptor {
        kind: MotionKind::SimpleHarmonic,
        label: "Simple harmonic motion",
        layout: AxisLayout::Horizontal,
        x_field: Some("position"),
        y_field: None,
        anchor_origin: false,
        chartable: true,
        readout: KINEMATIC_READOUT,
        arrays: &[
            bind("position", &["positions"]),
            bind("velocity", &["velocities"]),
            bind("acceleration", &["accelerations"]),
        ],
        state_columns: &["position", "velocity", "acceleration"],
    },
    MotionDescriptor {
        kind: MotionKind::SimplePendulum,
        label: "Simple pendulum",
        layout: AxisLayout::Planar,
        x_field: Some("position_x"),
        y_field: Some("position_y"),
        anchor_origin: false,
        chartable: true,
        readout: KINEMATIC_READOUT,
        arrays: &[
            bind("angular_position", &["angular_positions", "angles"]),
            bind("angular_velocity", &["angular_velocities"]),
            bind("angular_acceleration", &["angular_accelerations"]),
            bind("position_x", &["positions_x", "cartesian_positions_x"]),
            bind("position_y", &["positions_y", "cartesian_positions_y"]),
        ],
        state_columns: &[
            "angular_position",
            "angular_velocity",
            "angular_acceleration",
            "position_x",
            "position_y",
        ],
    },
    MotionDescriptor {
        kind: MotionKind::ElasticCollision1d,
        label: "Elastic collision (1D)",
        layout: AxisLayout::Horizontal,
        x_field: Some("position"),
        y_field: None,
        anchor_origin: false,
        chartable: false,
        readout: KINEMATIC_READOUT,
        arrays: &[
            bind("position", &["positions"]),
            bind("velocity", &["velocities"]),
        ],
        state_columns: &["position", "velocity"],
    },
    MotionDescriptor {
        kind: MotionKind::ElasticCollision2d,
        label: "Elastic collision (2D)",
        layout: AxisLayout::Planar,
        x_field: Some("position_x"),
        y_field: Some("position_y"),
        anchor_origin: false,
        chartable: false,
        readout: KINEMATIC_READOUT,
        arrays: PLANAR_ARRAYS,
        state_columns: &["position_x", "position_y"],
    },
    MotionDescriptor {
        kind: MotionKind::ElasticCollision3d,
        label: "Elastic collision (3D, XY projection)",
        layout: AxisLayout::Planar,
        x_field: Some("position_x"),
        y_field: Some("position_y"),
        anchor_origin: false,
        chartable: false,
        readout: KINEMATIC_READOUT,
        arrays: PLANAR_ARRAYS,
        state_columns: &["position_x", "position_y"],
    },
    MotionDescriptor {
        kind: MotionKind::InelasticCollision1d,
        label: "Perfectly inelastic collision (1D)",
        layout: AxisLayout::Horizontal,
        x_field: Some("position"),
        y_field: None,
        anchor_origin: false,
        chartable: false,
        readout: KINEMATIC_READOUT,
        arrays: &[
            bind("position", &["positions"]),
            bind("velocity", &["velocities"]),
        ],
        state_columns: &["position", "velocity"],
    },
    MotionDescriptor {
        kind: MotionKind::InelasticCollision2d,
        label: "Perfectly inelastic collision (2D)",
        layout: AxisLayout::Planar,
        x_field: Some("position_x"),
        y_field: Some("position_y"),
        anchor_origin: false,
        chartable: false,
        readout: KINEMATIC_READOUT,
        arrays: PLANAR_ARRAYS,
        state_columns: &["position_x", "position_y"],
    },
    MotionDescriptor {
        kind: MotionKind::InelasticCollision3d,
        label: "Perfectly inelastic collision (3D, XY projection)",
        layout: AxisLayout::Planar,
        x_field: Some("position_x"),
        y_field: Some("position_y"),
        anchor_origin: false,
        chartable: false,
        readout: KINEMATIC_READOUT,
        arrays: PLANAR_ARRAYS,
        state_columns: &["position_x", "position_y"],
    },
    MotionDescriptor {
        kind: MotionKind::NewtonForces,
        label: "Newton's laws",
        layout: AxisLayout::Horizontal,
        x_field: Some("position"),
        y_field: None,
        anchor_origin: false,
        chartable: true,
        readout: DYNAMICS_READOUT,
        arrays: &[
            bind("position", &["positions"]),
            bind("velocity", &["velocities"]),
            bind("acceleration", &["accelerations"]),
            bind("force", &["forces"]),
        ],
        state_columns: &["position", "velocity", "acceleration"],
    },
    MotionDescriptor {
        kind: MotionKind::WorkEnergy,
        label: "Work and energy",
        layout: AxisLayout::Horizontal,
        x_field: Some("position"),
        y_field: None,
        anchor_origin: false,
        chartable: false,
        readout: ENERGY_READOUT,
        arrays: &[
            bind("position", &["positions"]),
            bind("velocity", &["velocities"]),
            bind("force", &["forces"]),
            bind("kinetic_energy", &["kinetic_energies"]),
        ],
        state_columns: &["position", "velocity"],
    },
    MotionDescriptor {
        kind: MotionKind::EnergyConservation,
        label: "Conservation of mechanical energy",
        layout: AxisLayout::Vertical,
        x_field: None,
        y_field: Some("height"),
        anchor_origin: false,
        chartable: true,
        readout: ENERGY_READOUT,
        arrays: &[
            bind("height", &["heights", "positions"]),
            bind("velocity", &["velocities"]),
            bind("potential_energy", &["potential_energies"]),
            bind("kinetic_energy", &["kinetic_energies"]),
            bind("total_energy", &["total_energies"]),
        ],
        state_columns: &["height", "velocity"],
    },
    MotionDescriptor {
        kind: MotionKind::GravitationalPotential,
        label: "Gravitational potential energy",
        layout: AxisLayout::Vertical,
        x_field: None,
        y_field: Some("height"),
        anchor_origin: false,
        chartable: false,
        readout: ENERGY_READOUT,
        arrays: &[
            bind("height", &["heights", "positions"]),
            bind("potential_energy", &["potential_energies"]),
        ],
        state_columns: &["height"],
    },
    MotionDescriptor {
        kind: MotionKind::ElasticPotential,
        label: "Elastic potential energy",
        layout: AxisLayout::Horizontal,
        x_field: Some("position"),
        y_field: None,
        anchor_origin: false,
        chartable: true,
        readout: ENERGY_READOUT,
        arrays: &[
            bind("position", &["positions"]),
            bind("velocity", &["velocities"]),
            bind("force", &["forces"]),
            bind(
                "elastic_potential_energy",
                &["elastic_potential_energies"],
            ),
            bind("potential_energy", &["potential_energies"]),
            bind("kinetic_energy", &["kinetic_energies"]),
            bind("total_energy", &["total_energies"]),
        ],
        state_columns: &["position", "velocity"],
    },
    MotionDescriptor {
        kind: MotionKind::TransverseWave,
        label: "Transverse waves",
        layout: AxisLayout::None,
        x_field: None,
        y_field: None,
        anchor_origin: false,
        chartable: true,
        readout: WAVE_READOUT,
        arrays: &[
            bind("position_x", &["positions_x"]),
            bind("position_y", &["positions_y"]),
            bind("amplitude", &["amplitudes"]),
        ],
        state_columns: &[],
    },
    MotionDescriptor {
        kind: MotionKind::LongitudinalWave,
        label: "Longitudinal waves",
        layout: AxisLayout::None,
        x_field: None,
        y_field: None,
        anchor_origin: false,
        chartable: true,
        readout: WAVE_READOUT,
        arrays: &[
            bind("position_x", &["positions_x"]),
            bind("position_y", &["positions_y"]),
            bind("displacement", &["displacements"]),
        ],
        state_columns: &[],
    },
    MotionDescriptor {
        kind: MotionKind::RcCircuit,
        label: "RC circuit",
        layout: AxisLayout::None,
        x_field: None,
        y_field: None,
        anchor_origin: false,
        chartable: true,
        readout: CIRCUIT_READOUT,
        arrays: &[
            bind("capacitor_voltage", &["capacitor_voltages"]),
            bind("current", &["currents"]),
        ],
        state_columns: &[],
    },
    MotionDescriptor {
        kind: MotionKind::RlCircuit,
        label: "RL circuit",
        layout: AxisLayout::None,
        x_field: None,
        y_field: None,
        anchor_origin: false,
        chartable: true,
        readout: CIRCUIT_READOUT,
        arrays: &[
            bind("inductor_voltage", &["inductor_voltages"]),
            bind("current", &["currents"]),
        ],
        state_columns: &[],
    },
];

/// Descriptor for a kind. `Generic` (and any kind missing from the table) gets the
/// position-vs-time fallback.
pub fn descriptor(kind: MotionKind) -> &'static MotionDescriptor {
    CATALOG.iter().find(|d| d.kind == kind).unwrap_or(&GENERIC)
}

/// Legacy frame field names → canonical.
const FIELD_ALIASES: &[(&str, &str)] = &[
    ("tiempo", TIME_FIELD),
    ("t", TIME_FIELD),
    ("posicion", "position"),
    ("altura", "height"),
    ("posicion_x", "position_x"),
    ("posicion_y", "position_y"),
    ("velocidad", "velocity"),
    ("velocidad_x", "velocity_x"),
    ("velocidad_y", "velocity_y"),
    ("aceleracion", "acceleration"),
    ("aceleracion_x", "acceleration_x"),
    ("aceleracion_y", "acceleration_y"),
    ("angulo", "angle"),
    ("posicion_angular", "angular_position"),
    ("velocidad_angular", "angular_velocity"),
    ("aceleracion_angular", "angular_acceleration"),
    ("posicion_x_cartesiana", "position_x"),
    ("posicion_y_cartesiana", "position_y"),
    ("fuerza", "force"),
    ("energia_potencial", "potential_energy"),
    ("energia_cinetica", "kinetic_energy"),
    ("energia_total", "total_energy"),
    ("energia_potencial_elastica", "elastic_potential_energy"),
    ("amplitud", "amplitude"),
    ("desplazamiento", "displacement"),
    ("voltaje_capacitor", "capacitor_voltage"),
    ("voltaje_inductor", "inductor_voltage"),
    ("corriente", "current"),
];

/// Legacy parallel array names → canonical.
const ARRAY_ALIASES: &[(&str, &str)] = &[
    ("tiempos", TIMES_ARRAY),
    ("posiciones", "positions"),
    ("alturas", "heights"),
    ("velocidades", "velocities"),
    ("aceleraciones", "accelerations"),
    ("posiciones_x", "positions_x"),
    ("posiciones_y", "positions_y"),
    ("velocidades_x", "velocities_x"),
    ("velocidades_y", "velocities_y"),
    ("aceleraciones_x", "accelerations_x"),
    ("aceleraciones_y", "accelerations_y"),
    ("angulos", "angles"),
    ("posiciones_angular", "angular_positions"),
    ("velocidades_angular", "angular_velocities"),
    ("aceleraciones_angular", "angular_accelerations"),
    ("posiciones_x_cartesianas", "cartesian_positions_x"),
    ("posiciones_y_cartesianas", "cartesian_positions_y"),
    ("fuerzas", "forces"),
    ("energias_potenciales", "potential_energies"),
    ("energias_cineticas", "kinetic_energies"),
    ("energias_totales", "total_energies"),
    ("energias_potenciales_elasticas", "elastic_potential_energies"),
    ("desplazamientos", "displacements"),
    ("voltajes_capacitor", "capacitor_voltages"),
    ("voltajes_inductor", "inductor_voltages"),
    ("corrientes", "currents"),
];

fn lookup_alias<'a>(table: &[(&str, &'static str)], name: &'a str) -> &'a str {
    table
        .iter()
        .find_map(|(legacy, canonical)| if *legacy == name { Some(*canonical) } else { None })
        .unwrap_or(name)
}

/// Canonical name for a frame field; unknown names pass through.
pub fn canonical_field(name: &str) -> &str {
    lookup_alias(FIELD_ALIASES, name)
}

/// Canonical name for a parallel array; unknown names pass through.
pub fn canonical_array(name: &str) -> &str {
    lookup_alias(ARRAY_ALIASES, name)
}
