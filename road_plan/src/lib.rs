//! Compose road segments (straights, arcs, clothoid transitions) into a
//! continuous centerline and export it as an OpenDRIVE planView plus an SVG
//! plot.
//!
//! The input is an ordered table of `(length, start curvature, end curvature)`
//! rows; [`compose_path`] folds it into geometry records and plot samples,
//! [`xodr::write_xodr`] and [`plot::write_svg`] handle the two outputs.

pub mod compose;
pub mod error;
pub mod integrate;
pub mod plot;
pub mod segment;
pub mod xodr;

pub use compose::{
    advance, compose_path, ComposedPath, ComposerConfig, GeometryRecord, Pose, SamplePoint,
};
pub use error::{Error, Result};
pub use plot::write_svg;
pub use segment::{demo_road, GeometryKind, SegmentSpec};
pub use xodr::{write_xodr, xodr_string, RoadMeta};
