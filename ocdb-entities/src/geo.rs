use std::fmt;

/// Geographical latitude in degrees, validated to [-90.0, 90.0].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    pub const DEG_MIN: f64 = -90.0;
    pub const DEG_MAX: f64 = 90.0;

    pub fn from_deg(deg: f64) -> Self {
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg(deg: f64) -> Option<Self> {
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographical longitude in degrees, validated to [-180.0, 180.0].
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    pub const DEG_MIN: f64 = -180.0;
    pub const DEG_MAX: f64 = 180.0;

    pub fn from_deg(deg: f64) -> Self {
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg(deg: f64) -> Option<Self> {
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical point.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub lat: LatCoord,
    pub lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let lat = LatCoord::try_from_deg(lat)?;
        let lng = LngCoord::try_from_deg(lng)?;
        Some(Self::new(lat, lng))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// A rectangular map area defined by its south-west and north-east corners.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapBbox {
    pub southwest: MapPoint,
    pub northeast: MapPoint,
}

impl MapBbox {
    pub const fn new(southwest: MapPoint, northeast: MapPoint) -> Self {
        Self {
            southwest,
            northeast,
        }
    }

    /// Degenerate boxes with zero width or height are not considered valid.
    pub fn is_valid(&self) -> bool {
        self.southwest.lat < self.northeast.lat && self.southwest.lng < self.northeast.lng
    }

    /// Strict containment. Points on the boundary are excluded.
    pub fn contains_point_exclusive(&self, pt: MapPoint) -> bool {
        self.southwest.lat < pt.lat
            && pt.lat < self.northeast.lat
            && self.southwest.lng < pt.lng
            && pt.lng < self.northeast.lng
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.southwest, self.northeast)
    }
}
