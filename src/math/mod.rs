use binrw::binread;
use cgmath::Vector3;
use serde::Serialize;

#[binread]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[br(little)]
pub struct MdlVector3(
    #[br(map = |raw: [f32; 3]| Vector3::new(raw[0], raw[1], raw[2]))] pub Vector3<f32>,
);

impl MdlVector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn to_slice(&self) -> [f32; 3] {
        let v = &self.0;
        [v.x, v.y, v.z]
    }
}
