///////////////////////////////////////////////////////////////////////
// Categories
///////////////////////////////////////////////////////////////////////

table! {
    categories (id) {
        id -> Text,
        name -> Text,
        description -> Nullable<Text>,
        color -> Text,
        icon -> Text,
        // Always a top-level category, the hierarchy has two levels
        parent_id -> Nullable<Text>,
        created_at -> BigInt,
        deleted -> Bool,
    }
}

///////////////////////////////////////////////////////////////////////
// Cities
///////////////////////////////////////////////////////////////////////

table! {
    cities (id) {
        id -> Text,
        name -> Text,
        center_lat -> Double,
        center_lng -> Double,
        zoom -> SmallInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> Text,
        username -> Text,
        email -> Text,
        // NULL for federated accounts
        password -> Nullable<Text>,
        provider_user_id -> Nullable<Text>,
        access_token -> Nullable<Text>,
        role -> SmallInt,
        active -> Bool,
        city_id -> Nullable<Text>,
        first_name -> Nullable<Text>,
        last_name -> Nullable<Text>,
        website -> Nullable<Text>,
        about -> Nullable<Text>,
        locale -> Text,
        image_id -> Nullable<Text>,
        activation_nonce -> Text,
        created_at -> BigInt,
    }
}

joinable!(users -> cities (city_id));

///////////////////////////////////////////////////////////////////////
// Issues
///////////////////////////////////////////////////////////////////////

table! {
    issues (id) {
        id -> Text,
        title -> Text,
        description -> Text,
        lat -> Double,
        lng -> Double,
        status -> SmallInt,
        view_count -> BigInt,
        session_view_count -> BigInt,
        vote_count -> BigInt,
        comment_count -> BigInt,
        share_count -> BigInt,
        user_id -> Text,
        category_id -> Text,
        city_id -> Text,
        created_at -> BigInt,
    }
}

joinable!(issues -> users (user_id));
joinable!(issues -> categories (category_id));
joinable!(issues -> cities (city_id));

table! {
    images (id) {
        id -> Text,
        // NULL until the image is attached to an issue
        issue_id -> Nullable<Text>,
        file_name -> Text,
        created_at -> BigInt,
    }
}

joinable!(images -> issues (issue_id));

table! {
    comments (id) {
        id -> Text,
        issue_id -> Text,
        user_id -> Text,
        text -> Text,
        created_at -> BigInt,
    }
}

joinable!(comments -> issues (issue_id));
joinable!(comments -> users (user_id));

table! {
    votes (id) {
        id -> Text,
        user_id -> Text,
        issue_id -> Text,
        created_at -> BigInt,
    }
}

joinable!(votes -> issues (issue_id));
joinable!(votes -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Follows
///////////////////////////////////////////////////////////////////////

table! {
    issue_follows (id) {
        id -> Text,
        user_id -> Text,
        issue_id -> Text,
        created_at -> BigInt,
    }
}

joinable!(issue_follows -> issues (issue_id));
joinable!(issue_follows -> users (user_id));

// No joinable! declaration: both columns reference the users table.
table! {
    user_follows (id) {
        id -> Text,
        follower_id -> Text,
        followed_id -> Text,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Views
///////////////////////////////////////////////////////////////////////

table! {
    unique_views (id) {
        id -> Text,
        issue_id -> Text,
        session -> Text,
        viewed_at -> BigInt,
    }
}

joinable!(unique_views -> issues (issue_id));

///////////////////////////////////////////////////////////////////////
// Password resets
///////////////////////////////////////////////////////////////////////

table! {
    password_resets (user_id) {
        user_id -> Text,
        nonce -> Text,
        requested_at -> BigInt,
    }
}

joinable!(password_resets -> users (user_id));

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    categories,
    cities,
    comments,
    images,
    issues,
    issue_follows,
    password_resets,
    unique_views,
    users,
    user_follows,
    votes,
);
