// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = categories)]
#[diesel(treat_none_as_null = true)]
pub struct NewCategory<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub color: &'a str,
    pub icon: &'a str,
    pub parent_id: Option<&'a str>,
    pub created_at: i64,
    pub deleted: bool,
}

#[derive(Queryable)]
pub struct CategoryEntity {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: String,
    pub parent_id: Option<String>,
    pub created_at: i64,
    pub deleted: bool,
}

#[derive(Insertable)]
#[diesel(table_name = cities)]
pub struct NewCity<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: i16,
}

#[derive(Queryable)]
pub struct CityEntity {
    pub id: String,
    pub name: String,
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: i16,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password: Option<&'a str>,
    pub provider_user_id: Option<&'a str>,
    pub access_token: Option<&'a str>,
    pub role: i16,
    pub active: bool,
    pub city_id: Option<&'a str>,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub website: Option<&'a str>,
    pub about: Option<&'a str>,
    pub locale: &'a str,
    pub image_id: Option<&'a str>,
    pub activation_nonce: String,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: Option<String>,
    pub provider_user_id: Option<String>,
    pub access_token: Option<String>,
    pub role: i16,
    pub active: bool,
    pub city_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub website: Option<String>,
    pub about: Option<String>,
    pub locale: String,
    pub image_id: Option<String>,
    pub activation_nonce: String,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = issues)]
pub struct NewIssue<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub status: i16,
    pub view_count: i64,
    pub session_view_count: i64,
    pub vote_count: i64,
    pub comment_count: i64,
    pub share_count: i64,
    pub user_id: &'a str,
    pub category_id: &'a str,
    pub city_id: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct IssueEntity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub status: i16,
    pub view_count: i64,
    pub session_view_count: i64,
    pub vote_count: i64,
    pub comment_count: i64,
    pub share_count: i64,
    pub user_id: String,
    pub category_id: String,
    pub city_id: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = images)]
pub struct NewImage<'a> {
    pub id: &'a str,
    pub issue_id: Option<&'a str>,
    pub file_name: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct ImageEntity {
    pub id: String,
    pub issue_id: Option<String>,
    pub file_name: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub id: &'a str,
    pub issue_id: &'a str,
    pub user_id: &'a str,
    pub text: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct CommentEntity {
    pub id: String,
    pub issue_id: String,
    pub user_id: String,
    pub text: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = votes)]
pub struct NewVote<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub issue_id: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct VoteEntity {
    pub id: String,
    pub user_id: String,
    pub issue_id: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = issue_follows)]
pub struct NewIssueFollow<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub issue_id: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct IssueFollowEntity {
    pub id: String,
    pub user_id: String,
    pub issue_id: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = user_follows)]
pub struct NewUserFollow<'a> {
    pub id: &'a str,
    pub follower_id: &'a str,
    pub followed_id: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserFollowEntity {
    pub id: String,
    pub follower_id: String,
    pub followed_id: String,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = unique_views)]
pub struct NewUniqueView<'a> {
    pub id: &'a str,
    pub issue_id: &'a str,
    pub session: &'a str,
    pub viewed_at: i64,
}

#[derive(Queryable)]
pub struct UniqueViewEntity {
    pub id: String,
    pub issue_id: String,
    pub session: String,
    pub viewed_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = password_resets)]
pub struct NewPasswordReset<'a> {
    pub user_id: &'a str,
    pub nonce: String,
    pub requested_at: i64,
}

#[derive(Queryable)]
pub struct PasswordResetEntity {
    pub nonce: String,
    pub requested_at: i64,
    // Joined columns
    pub user_email: String,
}
