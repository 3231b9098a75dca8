use super::prelude::*;

/// Country-wide fallback for users without a home city.
#[derive(Debug, Clone, Copy)]
pub struct MapDefaults {
    pub center: MapPoint,
    pub zoom: u8,
}

/// The initial map viewport for a user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: MapPoint,
    pub zoom: u8,
}

/// Users with a home city start zoomed in on it; everybody else gets
/// the configured country-wide view.
pub fn user_map_view<R>(repo: &R, user_id: &Id, defaults: &MapDefaults) -> Result<MapView>
where
    R: UserRepo + CityRepo,
{
    let user = repo.get_user(user_id)?;
    match &user.city_id {
        Some(city_id) => {
            let city = repo.get_city(city_id)?;
            Ok(MapView {
                center: city.center,
                zoom: city.zoom,
            })
        }
        None => Ok(MapView {
            center: defaults.center,
            zoom: defaults.zoom,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use ocdb_entities::builders::*;

    fn defaults() -> MapDefaults {
        MapDefaults {
            center: MapPoint::from_lat_lng_deg(43.855078, 18.395748),
            zoom: 10,
        }
    }

    #[test]
    fn fall_back_to_country_view() {
        let db = MockDb::default();
        let user = db.register_active_user("ana");
        let view = user_map_view(&db, &user.id, &defaults()).unwrap();
        assert_eq!(defaults().center, view.center);
        assert_eq!(10, view.zoom);
    }

    #[test]
    fn home_city_takes_precedence() {
        let db = MockDb::default();
        let city = City {
            id: Id::new(),
            name: "Sarajevo".into(),
            center: MapPoint::from_lat_lng_deg(43.8563, 18.4131),
            zoom: 13,
        };
        db.create_city(&city).unwrap();
        let user = User::build()
            .username("ana")
            .city_id(city.id.as_str())
            .finish();
        db.create_user(&user).unwrap();

        let view = user_map_view(&db, &user.id, &defaults()).unwrap();
        assert_eq!(city.center, view.center);
        assert_eq!(13, view.zoom);
    }
}
