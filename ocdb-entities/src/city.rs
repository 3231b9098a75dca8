use crate::{geo::MapPoint, id::Id};

/// Read-mostly reference data: a municipality issues are reported in.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id     : Id,
    pub name   : String,
    pub center : MapPoint,
    pub zoom   : u8,
}
