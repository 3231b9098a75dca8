use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewCity {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Map zoom level used when centering on this city.
    pub zoom: u8,
}

pub fn create_city<R: CityRepo>(repo: &R, new_city: NewCity) -> Result<City> {
    let NewCity {
        name,
        lat,
        lng,
        zoom,
    } = new_city;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::CityName);
    }
    let center = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::Position)?;
    let city = City {
        id: Id::new(),
        name,
        center,
        zoom,
    };
    log::info!("Creating new city '{}'", city.name);
    repo.create_city(&city)?;
    Ok(city)
}
