use super::*;

impl PasswordResetRepo for DbReadOnly<'_> {
    fn replace_password_reset(&self, _reset: PasswordReset) -> Result<EmailNonce> {
        unreachable!();
    }
    fn consume_password_reset(&self, _email_nonce: &EmailNonce) -> Result<PasswordReset> {
        unreachable!();
    }
}

impl PasswordResetRepo for DbReadWrite<'_> {
    fn replace_password_reset(&self, reset: PasswordReset) -> Result<EmailNonce> {
        replace_password_reset(&mut self.conn.borrow_mut(), reset)
    }
    fn consume_password_reset(&self, email_nonce: &EmailNonce) -> Result<PasswordReset> {
        consume_password_reset(&mut self.conn.borrow_mut(), email_nonce)
    }
}

impl PasswordResetRepo for DbConnection<'_> {
    fn replace_password_reset(&self, reset: PasswordReset) -> Result<EmailNonce> {
        replace_password_reset(&mut self.conn.borrow_mut(), reset)
    }
    fn consume_password_reset(&self, email_nonce: &EmailNonce) -> Result<PasswordReset> {
        consume_password_reset(&mut self.conn.borrow_mut(), email_nonce)
    }
}

fn replace_password_reset(
    conn: &mut SqliteConnection,
    reset: PasswordReset,
) -> Result<EmailNonce> {
    use schema::password_resets::dsl;
    let user_id = resolve_user_id_by_email(conn, &reset.email_nonce.email)?;
    // Any previous reset of the account is superseded
    diesel::delete(dsl::password_resets.filter(dsl::user_id.eq(&user_id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let model = models::NewPasswordReset {
        user_id: &user_id,
        nonce: reset.email_nonce.nonce.to_string(),
        requested_at: reset.requested_at.as_millis(),
    };
    diesel::insert_into(schema::password_resets::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(reset.email_nonce)
}

fn consume_password_reset(
    conn: &mut SqliteConnection,
    email_nonce: &EmailNonce,
) -> Result<PasswordReset> {
    use schema::{password_resets::dsl as r_dsl, users::dsl as u_dsl};
    let reset = get_password_reset_by_email(conn, &email_nonce.email)?;
    let user_id_subselect = u_dsl::users
        .select(u_dsl::id)
        .filter(u_dsl::email.eq(email_nonce.email.as_str()));
    let target = r_dsl::password_resets
        .filter(r_dsl::nonce.eq(email_nonce.nonce.to_string()))
        .filter(r_dsl::user_id.eq_any(user_id_subselect));
    if diesel::delete(target)
        .execute(conn)
        .map_err(from_diesel_err)?
        == 0
    {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(email_nonce, &reset.email_nonce);
    Ok(reset)
}

fn get_password_reset_by_email(conn: &mut SqliteConnection, email: &str) -> Result<PasswordReset> {
    use schema::{password_resets::dsl as r_dsl, users::dsl as u_dsl};
    let entity = r_dsl::password_resets
        .inner_join(u_dsl::users)
        .select((r_dsl::nonce, r_dsl::requested_at, u_dsl::email))
        .filter(u_dsl::email.eq(email))
        .first::<models::PasswordResetEntity>(conn)
        .map_err(from_diesel_err)?;
    load_password_reset(entity)
}
