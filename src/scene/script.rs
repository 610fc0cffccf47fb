//! The room, as data.
//!
//! Every part of the scene is a [`Placement`]: which mesh to draw and the pose
//! to compose for it. Furniture that repeats (table sets, stools, glasses,
//! floor grid lines) is a group of placements stamped out by [`Instances`] at
//! evenly spaced offsets. The only entries that change between frames are the
//! fan blades, which follow the fan angle.

use glam::{Mat4, Vec3};

use super::transform::{compose, Pose};
use crate::model::{MeshData, Rgb};

const CYLINDER_SEGMENTS: u32 = 10;
pub const FAN_BLADES: u32 = 3;

const BROWN: Rgb = [0.5686, 0.3529, 0.2039];
const ASH: Rgb = [0.58, 0.573, 0.576];
const RUST: Rgb = [0.639, 0.34, 0.2745];
const MAROON: Rgb = [0.643, 0.2039, 0.243];
const WHITE: Rgb = [1.0, 1.0, 1.0];
const PINK: Rgb = [1.0, 0.72, 0.8];
const PEACH: Rgb = [0.99, 0.84, 0.70];
const CHARCOAL: Rgb = [0.137, 0.1176, 0.1098];
const BLACK: Rgb = [0.0, 0.0, 0.0];
const PURPLE: Rgb = [0.635, 0.396, 0.588];
const SILVER: Rgb = [0.6588, 0.6588, 0.6588];
const WOOD: Rgb = [0.42, 0.32, 0.26];
const SAND: Rgb = [0.78, 0.66, 0.443];
const ICE: Rgb = [0.892, 0.945, 0.9686];
const TAN: Rgb = [0.722, 0.6, 0.443];
const CYAN: Rgb = [0.145, 0.9755, 0.96];

/// One entry per vertex buffer. Several parts share a kind; the kind only
/// fixes geometry and colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    TableTop,
    TableLeg,
    ChairSide,
    ChairBack,
    Floor,
    SideWall,
    FrontBackWall,
    BarCounter,
    Valance,
    Cabinet,
    Ceiling,
    FanCup,
    FanRod,
    FanBlade,
    GridLine,
    Cylinder,
}

impl MeshKind {
    pub const ALL: [MeshKind; 16] = [
        MeshKind::TableTop,
        MeshKind::TableLeg,
        MeshKind::ChairSide,
        MeshKind::ChairBack,
        MeshKind::Floor,
        MeshKind::SideWall,
        MeshKind::FrontBackWall,
        MeshKind::BarCounter,
        MeshKind::Valance,
        MeshKind::Cabinet,
        MeshKind::Ceiling,
        MeshKind::FanCup,
        MeshKind::FanRod,
        MeshKind::FanBlade,
        MeshKind::GridLine,
        MeshKind::Cylinder,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            MeshKind::TableTop => "Table Top",
            MeshKind::TableLeg => "Table Leg",
            MeshKind::ChairSide => "Chair Side",
            MeshKind::ChairBack => "Chair Back",
            MeshKind::Floor => "Floor",
            MeshKind::SideWall => "Side Wall",
            MeshKind::FrontBackWall => "Front Back Wall",
            MeshKind::BarCounter => "Bar Counter",
            MeshKind::Valance => "Valance",
            MeshKind::Cabinet => "Cabinet",
            MeshKind::Ceiling => "Ceiling",
            MeshKind::FanCup => "Fan Cup",
            MeshKind::FanRod => "Fan Rod",
            MeshKind::FanBlade => "Fan Blade",
            MeshKind::GridLine => "Grid Line",
            MeshKind::Cylinder => "Cylinder",
        }
    }

    pub fn mesh_data(self) -> MeshData {
        match self {
            MeshKind::TableTop => MeshData::solid_cube(BROWN),
            MeshKind::TableLeg => MeshData::solid_cube(ASH),
            MeshKind::ChairSide => MeshData::solid_cube(RUST),
            MeshKind::ChairBack => MeshData::solid_cube(MAROON),
            MeshKind::Floor => MeshData::solid_cube(WHITE),
            MeshKind::SideWall => MeshData::solid_cube(PINK),
            MeshKind::FrontBackWall => MeshData::solid_cube(PEACH),
            // back, right, front, left, top, bottom
            MeshKind::BarCounter => MeshData::cube([CHARCOAL, BLACK, BLACK, BLACK, CHARCOAL, BLACK]),
            MeshKind::Valance => MeshData::cube([PURPLE, PURPLE, PURPLE, PURPLE, SILVER, BLACK]),
            MeshKind::Cabinet => MeshData::cube([WOOD, WOOD, WOOD, WOOD, SAND, SAND]),
            MeshKind::Ceiling => MeshData::solid_cube(ICE),
            MeshKind::FanCup => MeshData::solid_cube(WHITE),
            MeshKind::FanRod => MeshData::solid_cube(WOOD),
            MeshKind::FanBlade => MeshData::solid_cube(TAN),
            MeshKind::GridLine => MeshData::solid_cube(BLACK),
            MeshKind::Cylinder => MeshData::cylinder(CYLINDER_SEGMENTS, CYAN, ASH),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub mesh: MeshKind,
    pub pose: Pose,
}

const fn part(mesh: MeshKind, pose: Pose) -> Placement {
    Placement { mesh, pose }
}

const fn boxed(mesh: MeshKind, t: [f32; 3], s: [f32; 3]) -> Placement {
    part(mesh, Pose::placed(t[0], t[1], t[2], s[0], s[1], s[2]))
}

/// A table with a bench on either long side.
pub const TABLE_SET: &[Placement] = &[
    boxed(MeshKind::Cabinet, [0.0, 0.0, 0.2], [5.5, 0.2, 1.75]),
    boxed(MeshKind::TableLeg, [0.0, 0.0, 0.57], [5.5, -1.0, 0.2]),
    boxed(MeshKind::TableTop, [0.0, -0.75, 0.52], [5.5, 0.5, 0.4]),
    // outer bench
    boxed(MeshKind::ChairBack, [0.25, -0.35, 0.8], [4.5, 0.1, 1.0]),
    boxed(MeshKind::ChairSide, [0.25, -0.35, 0.8], [0.1, -0.8, 1.0]),
    boxed(MeshKind::ChairSide, [2.45, -0.35, 0.8], [0.1, -0.8, 1.0]),
    boxed(MeshKind::ChairBack, [0.25, -0.3, 0.8], [0.1, 0.3, 1.0]),
    boxed(MeshKind::ChairBack, [2.45, -0.3, 0.8], [0.1, 0.3, 1.0]),
    boxed(MeshKind::ChairBack, [0.25, 0.15, 1.2], [4.42, -1.0, 0.2]),
    // inner bench
    boxed(MeshKind::ChairBack, [0.25, -0.35, -0.075], [4.5, 0.1, 1.0]),
    boxed(MeshKind::ChairSide, [2.45, -0.35, -0.075], [0.1, -0.8, 1.0]),
    boxed(MeshKind::ChairSide, [0.25, -0.35, -0.075], [0.1, -0.8, 1.0]),
    boxed(MeshKind::ChairBack, [0.25, -0.3, -0.075], [0.1, 0.3, 1.0]),
    boxed(MeshKind::ChairBack, [2.45, -0.3, -0.075], [0.1, 0.3, 1.0]),
    boxed(MeshKind::ChairBack, [0.25, 0.15, -0.075], [4.42, -1.0, 0.2]),
];

pub const BAR_STOOL: &[Placement] = &[
    boxed(MeshKind::Cylinder, [0.625, -0.15, 0.8], [0.5, 0.1, 0.5]),
    part(MeshKind::Cylinder, Pose::new(0.625, -0.05, 0.8, 0.0, 0.0, 180.0, 0.5, 0.01, 0.5)),
    boxed(MeshKind::TableLeg, [0.425, -0.2, 0.5], [0.1, -1.1, 0.1]),
    boxed(MeshKind::TableLeg, [0.875, -0.2, 0.5], [0.1, -1.1, 0.1]),
    boxed(MeshKind::TableLeg, [0.875, -0.2, 1.035], [0.1, -1.1, 0.1]),
    boxed(MeshKind::TableLeg, [0.425, -0.2, 1.035], [0.1, -1.1, 0.1]),
];

pub const GLASS: &[Placement] = &[boxed(MeshKind::Cylinder, [0.25, 1.678, 0.8], [0.1, 0.2, 0.1])];

const GRID_LINE_ALONG_Z: &[Placement] = &[boxed(MeshKind::GridLine, [-0.4, -0.75, -9.0], [0.01, 0.01, 24.0])];

const GRID_LINE_ALONG_X: &[Placement] = &[boxed(MeshKind::GridLine, [-2.4, -0.75, -7.0], [24.0, 0.01, 0.01])];

/// Floor, walls and the wall rack the glasses stand on.
pub const ROOM: &[Placement] = &[
    boxed(MeshKind::Floor, [-2.5, -0.8, -9.0], [20.0, 0.1, 24.0]),
    boxed(MeshKind::FrontBackWall, [-2.5, -0.75, -9.0], [20.0, 7.0, 0.2]),
    boxed(MeshKind::FrontBackWall, [-2.5, -0.75, 3.0], [20.0, 7.0, 0.2]),
    boxed(MeshKind::SideWall, [-2.5, -0.75, -9.0], [0.2, 7.0, 24.0]),
    boxed(MeshKind::SideWall, [7.5, -0.75, -9.0], [0.2, 7.0, 24.0]),
    // wall rack: back panel, end panels, three shelves
    boxed(MeshKind::Cabinet, [-2.35, -0.75, -7.0], [0.2, 5.0, 17.0]),
    boxed(MeshKind::Cabinet, [-2.35, -0.75, -7.0], [2.0, 5.0, 0.2]),
    boxed(MeshKind::Cabinet, [-2.35, -0.75, 1.4], [2.0, 5.0, 0.2]),
    boxed(MeshKind::Cabinet, [-2.35, -0.625, -7.0], [2.0, 0.2, 17.0]),
    boxed(MeshKind::Cabinet, [-2.35, 0.375, -7.0], [2.0, 0.2, 17.0]),
    boxed(MeshKind::Cabinet, [-2.35, 1.375, -7.0], [2.0, 0.2, 17.0]),
];

/// Bar counter, window, ceiling and the fan mount.
pub const FIXTURES: &[Placement] = &[
    boxed(MeshKind::BarCounter, [-0.75, -0.75, -7.0], [1.5, 2.0, 17.0]),
    // window: valance, frame, two panes
    boxed(MeshKind::Valance, [0.65, 1.4, -9.0], [8.4, 1.0, 0.75]),
    boxed(MeshKind::BarCounter, [1.0, -0.6, -9.0], [7.0, 4.0, 0.5]),
    boxed(MeshKind::Floor, [1.15, -0.35, -9.0], [3.05, 3.5, 0.51]),
    boxed(MeshKind::Floor, [2.825, -0.35, -9.0], [3.05, 3.5, 0.51]),
    boxed(MeshKind::Ceiling, [-2.5, 2.75, -9.0], [20.0, 0.1, 24.0]),
    // fan mount
    boxed(MeshKind::FanCup, [2.0, 2.75, -6.0], [1.0, -0.25, 1.0]),
    boxed(MeshKind::FanRod, [2.125, 2.35, -5.875], [0.5, 0.5, 0.5]),
];

/// Lower and upper disc of the hub the blades hang from.
pub const FAN_HUB: &[Placement] = &[
    boxed(MeshKind::Cylinder, [2.25, 2.35, -5.75], [0.35, 0.1, 0.35]),
    part(MeshKind::Cylinder, Pose::new(2.25, 2.45, -5.75, 0.0, 0.0, 180.0, 0.35, 0.01, 0.35)),
];

/// Blade at rest; each blade turns about the hub's vertical axis.
pub const FAN_BLADE: Placement = boxed(MeshKind::FanBlade, [2.25, 2.38, -5.75], [3.0, 0.05, 0.5]);

/// `count` copies of `parts`, the i-th offset by `origin + step * i`.
#[derive(Debug, Clone, Copy)]
pub struct Instances {
    pub parts: &'static [Placement],
    pub origin: Vec3,
    pub step: Vec3,
    pub count: u32,
}

impl Instances {
    pub const fn single(parts: &'static [Placement]) -> Self {
        Self {
            parts,
            origin: Vec3::ZERO,
            step: Vec3::ZERO,
            count: 1,
        }
    }

    pub fn offsets(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.count).map(move |i| self.origin + self.step * i as f32)
    }

    pub fn draw_count(&self) -> usize {
        self.parts.len() * self.count as usize
    }
}

pub const LAYOUT: &[Instances] = &[
    Instances {
        parts: TABLE_SET,
        origin: Vec3::new(4.0, 0.0, 0.0),
        step: Vec3::new(0.0, 0.0, -2.0),
        count: 4,
    },
    Instances {
        parts: BAR_STOOL,
        origin: Vec3::new(-0.1, 0.0, 0.0),
        step: Vec3::new(0.0, 0.0, -2.0),
        count: 5,
    },
    Instances::single(ROOM),
    Instances {
        parts: GLASS,
        origin: Vec3::new(-2.0, 0.0, 0.0),
        step: Vec3::new(0.0, 0.0, -1.5),
        count: 5,
    },
    Instances::single(FIXTURES),
    Instances {
        parts: GRID_LINE_ALONG_Z,
        origin: Vec3::ZERO,
        step: Vec3::new(2.0, 0.0, 0.0),
        count: 4,
    },
    Instances {
        parts: GRID_LINE_ALONG_X,
        origin: Vec3::ZERO,
        step: Vec3::new(0.0, 0.0, 2.0),
        count: 5,
    },
    Instances::single(FAN_HUB),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub mesh: MeshKind,
    pub model: Mat4,
}

/// Number of draws per frame; fixed for the lifetime of the program.
pub fn draw_count() -> usize {
    LAYOUT.iter().map(Instances::draw_count).sum::<usize>() + FAN_BLADES as usize
}

/// Expands [`LAYOUT`] and the fan blades into this frame's draws.
pub fn draw_list(fan_angle: f32) -> Vec<DrawCall> {
    let mut draws = Vec::with_capacity(draw_count());

    for instances in LAYOUT {
        for offset in instances.offsets() {
            draws.extend(instances.parts.iter().map(|placement| DrawCall {
                mesh: placement.mesh,
                model: compose(&placement.pose, offset),
            }));
        }
    }

    let spacing = 360.0 / FAN_BLADES as f32;
    draws.extend((0..FAN_BLADES).map(|blade| {
        let pose = FAN_BLADE.pose.with_rotation_y(fan_angle + spacing * blade as f32);
        DrawCall {
            mesh: FAN_BLADE.mesh,
            model: pose.to_matrix(),
        }
    }));

    draws
}
