use super::*;

impl CityRepo for DbReadOnly<'_> {
    fn create_city(&self, _city: &City) -> Result<()> {
        unreachable!();
    }

    fn get_city(&self, id: &Id) -> Result<City> {
        get_city(&mut self.conn.borrow_mut(), id)
    }
    fn all_cities(&self) -> Result<Vec<City>> {
        all_cities(&mut self.conn.borrow_mut())
    }
}

impl CityRepo for DbReadWrite<'_> {
    fn create_city(&self, city: &City) -> Result<()> {
        create_city(&mut self.conn.borrow_mut(), city)
    }

    fn get_city(&self, id: &Id) -> Result<City> {
        get_city(&mut self.conn.borrow_mut(), id)
    }
    fn all_cities(&self) -> Result<Vec<City>> {
        all_cities(&mut self.conn.borrow_mut())
    }
}

impl CityRepo for DbConnection<'_> {
    fn create_city(&self, city: &City) -> Result<()> {
        create_city(&mut self.conn.borrow_mut(), city)
    }

    fn get_city(&self, id: &Id) -> Result<City> {
        get_city(&mut self.conn.borrow_mut(), id)
    }
    fn all_cities(&self) -> Result<Vec<City>> {
        all_cities(&mut self.conn.borrow_mut())
    }
}

fn create_city(conn: &mut SqliteConnection, city: &City) -> Result<()> {
    let model = models::NewCity::from(city);
    diesel::insert_into(schema::cities::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_city(conn: &mut SqliteConnection, id: &Id) -> Result<City> {
    use schema::cities::dsl;
    Ok(dsl::cities
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::CityEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_cities(conn: &mut SqliteConnection) -> Result<Vec<City>> {
    use schema::cities::dsl;
    Ok(dsl::cities
        .load::<models::CityEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
