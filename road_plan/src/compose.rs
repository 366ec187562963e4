//! Path composer: folds an ordered sequence of [`SegmentSpec`]s into a
//! continuous 2D centerline.
//!
//! Every segment is evaluated in the local frame of its entry heading and the
//! resulting displacement is rotated into the global frame, so position and
//! heading are continuous at every boundary by construction: the exit pose of
//! segment `i` is exactly the entry pose of segment `i + 1`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::integrate::integrate;
use crate::segment::{GeometryKind, SegmentSpec};

/// Position, heading and cumulative arc-length at a point along the road.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// cumulative arc-length from the road start
    pub s: f64,
    pub x: f64,
    pub y: f64,
    /// heading angle in radians, 0 along global +x
    pub heading: f64,
}

/// One planView entry: the pose the segment starts at, how long it runs and
/// what kind of geometry it is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryRecord {
    pub start_pose: Pose,
    pub length: f64,
    pub kind: GeometryKind,
}

/// Plot sample on the centerline; visualization only, never serialized into
/// the road description.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

/// Knobs of the composer, passed in explicitly instead of living in globals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComposerConfig {
    /// length of the leading straight approach run, 0 disables it
    pub s_init: f64,
    /// arc-length sampling step for curved segments
    pub plot_step: f64,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            s_init: 1.0,
            plot_step: 1.0,
        }
    }
}

/// Everything the composer produces for one road.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedPath {
    pub records: Vec<GeometryRecord>,
    pub samples: Vec<SamplePoint>,
    /// sum of all segment lengths including the approach run
    pub total_length: f64,
}

/// Rotate a local-frame displacement into the global frame.
pub fn rotate_into_global(dx: f64, dy: f64, heading: f64) -> (f64, f64) {
    (
        dx * heading.cos() - dy * heading.sin(),
        dx * heading.sin() + dy * heading.cos(),
    )
}

/// Inverse rotation with the y-component negated, used only by the
/// curvature-leaving spiral which is traversed from its high-curvature end
/// back toward zero. The extra sign flip is preserved from the reference
/// geometry as observed.
pub fn rotate_from_global(dx: f64, dy: f64, heading: f64) -> (f64, f64) {
    let x1 = dx * heading.cos() + dy * heading.sin();
    let y1 = -dx * heading.sin() + dy * heading.cos();
    (x1, -y1)
}

// local displacement on a circle of radius r after sweeping theta
fn arc_offset(r: f64, theta: f64) -> (f64, f64) {
    (r * theta.sin(), r * (1.0 - theta.cos()))
}

/// Advance one segment from `pose`: returns the exit pose, the geometry
/// record for the segment and its plot samples.
///
/// Pure step function; [`compose_path`] threads it through the whole table.
pub fn advance(
    pose: Pose,
    spec: &SegmentSpec,
    config: &ComposerConfig,
) -> Result<(Pose, GeometryRecord, Vec<SamplePoint>)> {
    if spec.length <= 0.0 {
        return Err(Error::InvalidSegment {
            length: spec.length,
        });
    }
    // a zero or negative step would never advance the sampling loops
    if config.plot_step <= 0.0 || config.plot_step.is_nan() {
        return Err(Error::InvalidConfig {
            plot_step: config.plot_step,
        });
    }

    let kind = spec.classify();
    let record = GeometryRecord {
        start_pose: pose,
        length: spec.length,
        kind,
    };

    let mut samples = Vec::new();
    let push = |samples: &mut Vec<SamplePoint>, gx: f64, gy: f64| {
        samples.push(SamplePoint {
            x: pose.x + gx,
            y: pose.y + gy,
        });
    };

    let (end_dx, end_dy, d_heading) = match kind {
        GeometryKind::Straight => {
            let (gx, gy) = rotate_into_global(spec.length, 0.0, pose.heading);
            push(&mut samples, gx, gy);
            (gx, gy, 0.0)
        }
        GeometryKind::Arc { curvature } => {
            let r = 1.0 / curvature;
            let theta = spec.length * curvature;

            let mut ss = 0.0;
            while ss < spec.length {
                let (dx, dy) = arc_offset(r, ss * curvature);
                let (gx, gy) = rotate_into_global(dx, dy, pose.heading);
                push(&mut samples, gx, gy);
                ss += config.plot_step;
            }
            let (dx, dy) = arc_offset(r, theta);
            let (gx, gy) = rotate_into_global(dx, dy, pose.heading);
            push(&mut samples, gx, gy);
            (gx, gy, theta)
        }
        GeometryKind::Spiral {
            curv_start,
            curv_end,
        } if curv_end != 0.0 => {
            // spiral entering curvature: A = sqrt(l / |endC|)
            let gamma = curv_end.signum();
            let a2 = spec.length / curv_end.abs();
            let theta = gamma * spec.length * spec.length / (2.0 * a2);

            let offset = |s: f64| -> Result<(f64, f64)> {
                let dx = integrate(&|t: f64| (curv_start + gamma * t * t / (2.0 * a2)).cos(), s)?;
                let dy = integrate(&|t: f64| (curv_start + gamma * t * t / (2.0 * a2)).sin(), s)?;
                Ok((dx, dy))
            };

            let mut ss = 0.0;
            while ss < spec.length {
                let (dx, dy) = offset(ss)?;
                let (gx, gy) = rotate_into_global(dx, dy, pose.heading);
                push(&mut samples, gx, gy);
                ss += config.plot_step;
            }
            let (dx, dy) = offset(spec.length)?;
            let (gx, gy) = rotate_into_global(dx, dy, pose.heading);
            push(&mut samples, gx, gy);
            (gx, gy, theta)
        }
        GeometryKind::Spiral { curv_start, .. } => {
            // spiral leaving curvature back to zero, traversed mirrored:
            // A = sqrt(l / |startC|), reverse-rotated at heading + theta(s)
            let gamma = curv_start.signum();
            let a2 = spec.length / curv_start.abs();

            let offset = |s: f64| -> Result<(f64, f64)> {
                let dx = integrate(&|t: f64| (gamma * t * t / (2.0 * a2)).cos(), s)?;
                let dy = integrate(&|t: f64| (gamma * t * t / (2.0 * a2)).sin(), s)?;
                Ok((dx, dy))
            };

            let mut ss = 0.0;
            while ss < spec.length {
                let theta_s = gamma * ss * ss / (2.0 * a2);
                let (dx, dy) = offset(ss)?;
                let (gx, gy) = rotate_from_global(dx, dy, pose.heading + theta_s);
                push(&mut samples, gx, gy);
                ss += config.plot_step;
            }
            let theta = gamma * spec.length * spec.length / (2.0 * a2);
            let (dx, dy) = offset(spec.length)?;
            let (gx, gy) = rotate_from_global(dx, dy, pose.heading + theta);
            push(&mut samples, gx, gy);
            (gx, gy, theta)
        }
    };

    let exit = Pose {
        s: pose.s + spec.length,
        x: pose.x + end_dx,
        y: pose.y + end_dy,
        heading: pose.heading + d_heading,
    };
    Ok((exit, record, samples))
}

/// Compose the whole table into geometry records and a sample polyline.
///
/// Starts at the origin with heading 0. When `config.s_init > 0` a straight
/// approach run of that length leads the road; it gets a geometry record but
/// no samples beyond the origin point, matching the reference output.
pub fn compose_path(specs: &[SegmentSpec], config: &ComposerConfig) -> Result<ComposedPath> {
    // reject up front so a straight-only table fails the same way
    if config.plot_step <= 0.0 || config.plot_step.is_nan() {
        return Err(Error::InvalidConfig {
            plot_step: config.plot_step,
        });
    }

    let mut records = Vec::with_capacity(specs.len() + 1);
    let mut samples = vec![SamplePoint::default()];
    let mut pose = Pose::default();

    if config.s_init > 0.0 {
        records.push(GeometryRecord {
            start_pose: pose,
            length: config.s_init,
            kind: GeometryKind::Straight,
        });
        pose = Pose {
            s: config.s_init,
            x: config.s_init,
            y: 0.0,
            heading: 0.0,
        };
    }

    for (index, spec) in specs.iter().enumerate() {
        let (exit, record, points) = advance(pose, spec, config).map_err(|err| {
            log::error!("segment {index} aborted the path: {err}");
            err
        })?;
        log::debug!(
            "segment {index}: {:?} length {:.3}, exit s {:.3} xy ({:.3}, {:.3}) heading {:.4}",
            record.kind,
            record.length,
            exit.s,
            exit.x,
            exit.y,
            exit.heading,
        );
        records.push(record);
        samples.extend(points);
        pose = exit;
    }

    Ok(ComposedPath {
        records,
        samples,
        total_length: pose.s,
    })
}
