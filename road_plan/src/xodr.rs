//! OpenDRIVE planView serializer.
//!
//! Emits exactly one road with one lane section, assembled from string
//! templates the same way the original generator wrote its files. The header
//! bounds, elevation profile and lane section are fixed; only the planView
//! geometry entries, the road length and the header name/date vary.

use std::path::Path;

use crate::compose::{ComposedPath, GeometryRecord};
use crate::error::Result;
use crate::segment::GeometryKind;

/// Opaque header metadata, passed through uninterpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadMeta {
    pub name: String,
    pub date: String,
}

impl RoadMeta {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
        }
    }

    /// Metadata stamped with the current local time.
    pub fn now(name: impl Into<String>) -> Self {
        let date = chrono::Local::now().format("%y-%m-%d-%H-%M").to_string();
        Self::new(name, date)
    }
}

const ELEVATION_AND_LANES: &str = r#"        </planView>
        <elevationProfile>
            <elevation s="0.0000000000000000e+00" a="9.5000000000000000e+00" b="0.0000000000000000e+00" c="0.0000000000000000e+00" d="0.0000000000000000e+00"/>
        </elevationProfile>
        <lateralProfile>
        </lateralProfile>
        <lanes>
            <laneSection s="0.0000000000000000e+00">
                <left>
                    <lane id="2" type="border" level="false">
                        <link>
                            <predecessor id="2"/>
                            <successor id="2"/>
                        </link>
                        <width sOffset="0.0000000000000000e+00" a="1.5000000000000000e+00" b="0.0000000000000000e+00" c="0.0000000000000000e+00" d="0.0000000000000000e+00"/>
                        <roadMark sOffset="0.0000000000000000e+00" type="none" weight="standard" color="standard" width="1.3000000000000000e-01"/>
                    </lane>
                    <lane id="1" type="driving" level="false">
                        <link>
                            <predecessor id="1"/>
                            <successor id="1"/>
                        </link>
                        <width sOffset="0.0000000000000000e+00" a="3.0" b="0.0000000000000000e+00" c="0.0000000000000000e+00" d="0.0000000000000000e+00"/>
                        <roadMark sOffset="0.0000000000000000e+00" type="solid" weight="standard" color="standard" width="1.3000000000000000e-01"/>
                        <speed sOffset="0.0000000000000000e+00" max="70.0" unit="km/h"/>
                    </lane>
                </left>
                <center>
                    <lane id="0" type="driving" level="false">
                        <link>
                        </link>
                        <roadMark sOffset="0.0000000000000000e+00" type="broken" weight="standard" color="standard" width="1.3000000000000000e-01"/>
                    </lane>
                </center>
                <right>
                    <lane id="-1" type="driving" level="false">
                        <link>
                            <predecessor id="-1"/>
                            <successor id="-1"/>
                        </link>
                        <width sOffset="0.0000000000000000e+00" a="3.0" b="0.0000000000000000e+00" c="0.0000000000000000e+00" d="0.0000000000000000e+00"/>
                        <roadMark sOffset="0.0000000000000000e+00" type="solid" weight="standard" color="standard" width="1.3000000000000000e-01"/>
                        <speed sOffset="0.0000000000000000e+00" max="70.0" unit="km/h"/>
                    </lane>
                    <lane id="-2" type="border" level="false">
                        <link>
                            <predecessor id="-2"/>
                            <successor id="-2"/>
                        </link>
                        <width sOffset="0.0000000000000000e+00" a="1.5000000000000000e+00" b="0.0000000000000000e+00" c="0.0000000000000000e+00" d="0.0000000000000000e+00"/>
                        <roadMark sOffset="0.0000000000000000e+00" type="none" weight="standard" color="standard" width="1.3000000000000000e-01"/>
                    </lane>
                </right>
            </laneSection>
        </lanes>
        <objects>
        </objects>
        <signals>
        </signals>
    </road>

</OpenDRIVE>
"#;

fn push_geometry(out: &mut String, record: &GeometryRecord) {
    let p = record.start_pose;
    out.push_str(&format!(
        "            <geometry s=\"{:.6}\" x=\"{:.6}\" y=\"{:.6}\" hdg=\"{:.6}\" length=\"{:.6}\">\n",
        p.s, p.x, p.y, p.heading, record.length
    ));
    match record.kind {
        GeometryKind::Straight => out.push_str("                <line/>\n"),
        GeometryKind::Arc { curvature } => out.push_str(&format!(
            "                <arc curvature=\"{curvature:.6}\"/>\n"
        )),
        GeometryKind::Spiral {
            curv_start,
            curv_end,
        } => out.push_str(&format!(
            "                <spiral curvStart=\"{curv_start:.6}\" curvEnd=\"{curv_end:.6}\"/>\n"
        )),
    }
    out.push_str("            </geometry>\n");
}

/// Render the whole OpenDRIVE document as a string.
pub fn xodr_string(path: &ComposedPath, meta: &RoadMeta) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" standalone=\"yes\"?>\n<OpenDRIVE>\n");
    out.push_str(&format!(
        "    <header revMajor=\"1\" revMinor=\"1\" name=\"{}\" version=\"1.00\" date=\"{}\" north=\"1.9000000000000000e+03\" south=\"-1.1500000000000000e+03\" east=\"3.3000000000000000e+03\" west=\"-4.8000000000000000e+02\">\n    </header>\n",
        meta.name, meta.date
    ));
    out.push_str(&format!(
        "    <road name=\"s000\" length=\"{:.6}\" id=\"1\" junction=\"-1\">\n        <link>\n        </link>\n        <planView>\n",
        path.total_length
    ));
    for record in &path.records {
        push_geometry(&mut out, record);
    }
    out.push_str(ELEVATION_AND_LANES);
    out
}

/// Write the OpenDRIVE document to `file`.
pub fn write_xodr(path: &ComposedPath, meta: &RoadMeta, file: impl AsRef<Path>) -> Result<()> {
    let file = file.as_ref();
    std::fs::write(file, xodr_string(path, meta))?;
    log::info!("wrote road description to {}", file.display());
    Ok(())
}
