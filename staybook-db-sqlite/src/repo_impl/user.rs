use super::*;

impl UserRepo for DbReadOnly<'_> {
    fn create_user(&self, _user: NewUser) -> Result<User> {
        unreachable!();
    }

    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_users(&self, ids: &[Id]) -> Result<Vec<User>> {
        get_users(&mut self.conn.borrow_mut(), ids)
    }
}

impl UserRepo for DbReadWrite<'_> {
    fn create_user(&self, user: NewUser) -> Result<User> {
        create_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_users(&self, ids: &[Id]) -> Result<Vec<User>> {
        get_users(&mut self.conn.borrow_mut(), ids)
    }
}

impl UserRepo for DbConnection<'_> {
    fn create_user(&self, user: NewUser) -> Result<User> {
        create_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_users(&self, ids: &[Id]) -> Result<Vec<User>> {
        get_users(&mut self.conn.borrow_mut(), ids)
    }
}

fn create_user(conn: &mut SqliteConnection, u: NewUser) -> Result<User> {
    let new_user = models::NewUser {
        email: &u.email,
        username: &u.username,
        first_name: &u.first_name,
        last_name: &u.last_name,
        created_at: u.created_at.as_millis(),
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = last_insert_id(conn)?;
    let NewUser {
        email,
        username,
        first_name,
        last_name,
        created_at,
    } = u;
    Ok(User {
        id,
        email,
        username,
        first_name,
        last_name,
        created_at,
    })
}

fn get_user(conn: &mut SqliteConnection, id: Id) -> Result<User> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::id.eq(id.as_i64()))
        .first::<models::UserEntity>(conn)
        .map(load_user)
        .map_err(from_diesel_err)
}

fn get_users(conn: &mut SqliteConnection, ids: &[Id]) -> Result<Vec<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::id.eq_any(to_i64s(ids)))
        .order_by(dsl::id)
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_user)
        .collect())
}
